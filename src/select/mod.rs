//! Interactive choice of the target directory

pub mod external;
pub mod prompt;

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

pub use external::ExternalFinder;
pub use prompt::PromptSelector;

use crate::error::BarrelError;
use crate::output::{self, Level};
use crate::prompt::Prompter;

/// Something that picks one entry out of a list of directory paths
pub trait PathSelector {
    /// Returns `Ok(None)` when nothing was chosen
    fn select(&self, options: &[String], prompter: &dyn Prompter) -> Result<Option<String>>;
}

/// Prefers the external finder, falling back silently to the built-in prompt
///
/// Availability of the external finder is checked once, at construction.
pub struct FallbackSelector {
    external: Option<ExternalFinder>,
    fallback: PromptSelector,
}

impl FallbackSelector {
    /// Probe the configured finder command and keep it only if it runs
    pub fn detect(finder: Option<&str>) -> Self {
        let external = finder.map(ExternalFinder::new).filter(|f| {
            let available = f.probe();
            tracing::debug!("External finder {:?} available: {}", f.command(), available);
            available
        });

        Self {
            external,
            fallback: PromptSelector,
        }
    }
}

#[cfg(test)]
impl FallbackSelector {
    /// Selector that never launches an external process
    pub fn prompt_only() -> Self {
        Self {
            external: None,
            fallback: PromptSelector,
        }
    }

    pub fn has_external(&self) -> bool {
        self.external.is_some()
    }
}

impl PathSelector for FallbackSelector {
    fn select(&self, options: &[String], prompter: &dyn Prompter) -> Result<Option<String>> {
        if let Some(external) = &self.external {
            match external.select(options, prompter) {
                Ok(Some(selected)) => return Ok(Some(selected)),
                Ok(None) => tracing::debug!("{} returned no selection", external.command()),
                Err(e) => tracing::debug!("{} failed: {:#}", external.command(), e),
            }
        }

        self.fallback.select(options, prompter)
    }
}

/// List every directory below `root`, relative to it, skipping excluded names
pub fn list_directories(root: &Path, exclude: &[String]) -> Vec<String> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            !(is_directory(e)
                && exclude
                    .iter()
                    .any(|name| e.file_name().to_string_lossy() == name.as_str()))
        })
        .filter_map(|e| e.ok())
        .filter(is_directory)
        .filter_map(|e| {
            e.path()
                .strip_prefix(root)
                .ok()
                .map(|p| p.to_string_lossy().to_string())
        })
        .collect()
}

/// Directories and symlinks to directories; links are listed but not descended into
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

/// Ask the user for a target directory below `root`
pub fn prompt_directory(
    selector: &dyn PathSelector,
    prompter: &dyn Prompter,
    root: &Path,
    exclude: &[String],
) -> Result<PathBuf> {
    output::log(Level::Prompt, "Fuzzy search for the target directory:");

    let options = list_directories(root, exclude);
    if options.is_empty() {
        return Err(BarrelError::NoDirectories(root.to_path_buf()).into());
    }

    let Some(selected) = selector.select(&options, prompter)? else {
        return Err(BarrelError::NoSelection.into());
    };

    output::log(Level::Dir, &format!("Selected directory: {}", selected));
    Ok(root.join(selected))
}
