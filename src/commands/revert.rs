use anyhow::Result;
use std::path::Path;

use crate::barrel::{revert_index, RevertOutcome, INDEX_FILE};
use crate::output::{self, Level};

/// Restore index.ts from its backup; a missing backup is reported, not fatal
pub fn run(dir: &Path) -> Result<()> {
    let outcome = revert_index(dir)?;
    report(&outcome);
    Ok(())
}

pub fn report(outcome: &RevertOutcome) {
    match outcome {
        RevertOutcome::NoBackup => output::log(Level::Error, "No backup found to revert!"),
        RevertOutcome::Restored { index, backup } => {
            tracing::debug!("Restored {} from {}", index.display(), backup.display());
            output::log(
                Level::Success,
                &format!("Reverted {} from backup!", INDEX_FILE),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barrel::BACKUP_FILE;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_without_backup_is_ok() {
        let temp = TempDir::new().unwrap();
        run(temp.path()).unwrap();
        assert!(!temp.path().join(INDEX_FILE).exists());
    }

    #[test]
    fn test_run_restores_backup() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(INDEX_FILE), "new\n").unwrap();
        fs::write(temp.path().join(BACKUP_FILE), "old\n").unwrap();

        run(temp.path()).unwrap();
        assert_eq!(
            fs::read_to_string(temp.path().join(INDEX_FILE)).unwrap(),
            "old\n"
        );
        assert!(temp.path().join(BACKUP_FILE).exists());
    }
}
