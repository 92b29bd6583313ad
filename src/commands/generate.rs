use anyhow::Result;
use std::path::Path;

use crate::barrel::{scan_exports, write_index, WriteOutcome, BACKUP_FILE, INDEX_FILE};
use crate::output::{self, Level};

/// Run a non-interactive generate (or dry run) for one directory
pub fn run(dir: &Path, dry_run: bool) -> Result<()> {
    output::log(
        Level::Info,
        &format!("Generating barrel file for {}", dir.display()),
    );

    let lines = scan_exports(dir)?;
    if lines.is_empty() {
        warn_nothing_to_export();
        return Ok(());
    }

    write(dir, &lines, dry_run)
}

/// Write (or preview) the barrel file and report what happened
pub fn write(dir: &Path, lines: &[String], dry_run: bool) -> Result<()> {
    match write_index(dir, lines, dry_run)? {
        WriteOutcome::Preview(content) => {
            output::log(Level::Info, "Dry run enabled. Would write:");
            output::preview(&content);
        }
        WriteOutcome::Written { index, backup } => {
            tracing::debug!("Wrote {}", index.display());
            if backup.is_some() {
                output::log(
                    Level::Info,
                    &format!("Backed up existing {} to {}", INDEX_FILE, BACKUP_FILE),
                );
            }
            output::log(Level::Success, &format!("{} written!", INDEX_FILE));
        }
    }

    Ok(())
}

pub fn warn_nothing_to_export() {
    output::log(Level::Warn, "No .ts files found to export!");
}
