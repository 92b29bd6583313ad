use std::path::PathBuf;
use thiserror::Error;

/// Errors reported to the user that end the current operation
#[derive(Debug, Error)]
pub enum BarrelError {
    #[error("You must specify --dir for non-interactive mode.")]
    MissingDirArgument,

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("No directories found under {}", .0.display())]
    NoDirectories(PathBuf),

    /// A selector finished without choosing; the built-in prompt never does this
    #[error("No directory selected")]
    NoSelection,

    #[error("Invalid choice '{0}'. Please enter 1, 2, 3, or 4.")]
    InvalidChoice(String),
}
