use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::INDEX_FILE;
use crate::safety::{create_backup, restore_backup};

/// What a write request did
#[derive(Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Dry run: nothing touched, this is what would have been written
    Preview(String),
    /// Index written; `backup` is set when an existing index was saved first
    Written {
        index: PathBuf,
        backup: Option<PathBuf>,
    },
}

/// What a revert request did
#[derive(Debug, PartialEq, Eq)]
pub enum RevertOutcome {
    NoBackup,
    Restored { index: PathBuf, backup: PathBuf },
}

/// Location of the barrel file inside a directory
pub fn index_path(dir: &Path) -> PathBuf {
    dir.join(INDEX_FILE)
}

/// Join export lines into the barrel file content
pub fn render_index(lines: &[String]) -> String {
    let mut content = lines.join("\n");
    content.push('\n');
    content
}

/// Write the barrel file, backing up any existing one first
pub fn write_index(dir: &Path, lines: &[String], dry_run: bool) -> Result<WriteOutcome> {
    let content = render_index(lines);

    if dry_run {
        return Ok(WriteOutcome::Preview(content));
    }

    let index = index_path(dir);
    let backup = if index.exists() {
        let backup = create_backup(&index)?;
        tracing::debug!("Backed up {} to {}", index.display(), backup.display());
        Some(backup)
    } else {
        None
    };

    fs::write(&index, content).with_context(|| format!("Failed to write {}", index.display()))?;

    Ok(WriteOutcome::Written { index, backup })
}

/// Restore the barrel file from its single backup generation
pub fn revert_index(dir: &Path) -> Result<RevertOutcome> {
    let index = index_path(dir);

    match restore_backup(&index)? {
        Some(backup) => Ok(RevertOutcome::Restored { index, backup }),
        None => Ok(RevertOutcome::NoBackup),
    }
}
