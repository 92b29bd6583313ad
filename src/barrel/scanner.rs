use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::{DECLARATION_SUFFIX, INDEX_FILE, SOURCE_SUFFIX};

/// Scan a directory (non-recursively) and build one export line per eligible file
///
/// Lines follow directory listing order. An empty result means there is
/// nothing to export, which callers report as a warning rather than an error.
pub fn scan_exports(dir: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {:?}", dir))?;

    let mut lines = Vec::new();

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {:?}", dir))?;
        let path = entry.path();

        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            tracing::debug!("Skipping non UTF-8 file name: {:?}", path);
            continue;
        };

        if !path.is_file() {
            continue;
        }

        if let Some(line) = export_line(&name) {
            lines.push(line);
        }
    }

    Ok(lines)
}

/// Check whether a file name qualifies for the barrel
pub fn is_eligible(file_name: &str) -> bool {
    file_name.ends_with(SOURCE_SUFFIX)
        && !file_name.ends_with(DECLARATION_SUFFIX)
        && file_name != INDEX_FILE
        && file_name.len() > SOURCE_SUFFIX.len()
}

/// Build the export statement for an eligible file name
pub fn export_line(file_name: &str) -> Option<String> {
    if !is_eligible(file_name) {
        return None;
    }

    let stem = file_name.strip_suffix(SOURCE_SUFFIX)?;
    Some(format!("export * from './{}';", stem))
}
