pub mod backup;

pub use backup::{create_backup, restore_backup};
