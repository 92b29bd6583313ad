pub mod scanner;
pub mod writer;

pub use scanner::scan_exports;
pub use writer::{revert_index, write_index, RevertOutcome, WriteOutcome};

/// Generated barrel file name
pub const INDEX_FILE: &str = "index.ts";

/// Backup of the previous barrel file
pub const BACKUP_FILE: &str = "index.ts.bak";

/// Source files picked up by the scanner
pub const SOURCE_SUFFIX: &str = ".ts";

/// Type declaration files, excluded even though they end in `.ts`
pub const DECLARATION_SUFFIX: &str = ".d.ts";
