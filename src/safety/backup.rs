use anyhow::{Context, Result};
use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};

/// Create a backup of a file before overwriting it, replacing any older backup
pub fn create_backup(file_path: &Path) -> Result<PathBuf> {
    let backup_path = backup_path_for(file_path);

    copy_preserving_times(file_path, &backup_path).with_context(|| {
        format!(
            "Failed to create backup: {} -> {}",
            file_path.display(),
            backup_path.display()
        )
    })?;

    Ok(backup_path)
}

/// Restore a file from its backup, leaving the backup in place
///
/// Returns `Ok(None)` when there is no backup to restore from.
pub fn restore_backup(file_path: &Path) -> Result<Option<PathBuf>> {
    let backup_path = backup_path_for(file_path);

    if !backup_path.is_file() {
        return Ok(None);
    }

    copy_preserving_times(&backup_path, file_path).with_context(|| {
        format!(
            "Failed to restore backup: {} -> {}",
            backup_path.display(),
            file_path.display()
        )
    })?;

    Ok(Some(backup_path))
}

/// Get the backup path for a file
pub fn backup_path_for(file_path: &Path) -> PathBuf {
    let mut backup = file_path.to_path_buf();
    let mut name = backup.file_name().unwrap_or_default().to_os_string();
    name.push(".bak");
    backup.set_file_name(name);
    backup
}

/// Copy contents and permissions, then carry over access/modification times
fn copy_preserving_times(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to)?;

    let metadata = fs::metadata(from)?;
    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }

    // Not every platform lets us set times; the content copy already succeeded.
    if let Err(e) = File::options()
        .write(true)
        .open(to)
        .and_then(|f| f.set_times(times))
    {
        tracing::debug!("Could not preserve timestamps on {}: {}", to.display(), e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    #[test]
    fn test_backup_path_for() {
        let path = Path::new("/home/user/pkg/index.ts");
        let backup = backup_path_for(path);
        assert_eq!(backup, PathBuf::from("/home/user/pkg/index.ts.bak"));
    }

    #[test]
    fn test_create_backup_overwrites_previous() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("index.ts");
        fs::write(&file, "first\n").unwrap();
        create_backup(&file).unwrap();

        fs::write(&file, "second\n").unwrap();
        let backup = create_backup(&file).unwrap();

        assert_eq!(fs::read_to_string(backup).unwrap(), "second\n");
    }

    #[test]
    fn test_create_backup_preserves_mtime() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("index.ts");
        fs::write(&file, "content\n").unwrap();

        let old = SystemTime::now() - Duration::from_secs(3600);
        File::options()
            .write(true)
            .open(&file)
            .unwrap()
            .set_modified(old)
            .unwrap();

        let backup = create_backup(&file).unwrap();
        let original_mtime = fs::metadata(&file).unwrap().modified().unwrap();
        let backup_mtime = fs::metadata(&backup).unwrap().modified().unwrap();
        assert_eq!(original_mtime, backup_mtime);
    }

    #[test]
    fn test_restore_backup_preserves_mtime() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("index.ts");
        fs::write(&file, "old\n").unwrap();
        let backup = create_backup(&file).unwrap();
        fs::write(&file, "new\n").unwrap();

        let old = SystemTime::now() - Duration::from_secs(7200);
        File::options()
            .write(true)
            .open(&backup)
            .unwrap()
            .set_modified(old)
            .unwrap();

        restore_backup(&file).unwrap();
        let backup_mtime = fs::metadata(&backup).unwrap().modified().unwrap();
        let restored_mtime = fs::metadata(&file).unwrap().modified().unwrap();
        assert_eq!(restored_mtime, backup_mtime);
        assert_eq!(fs::read_to_string(&file).unwrap(), "old\n");
    }

    #[test]
    fn test_restore_without_backup() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("index.ts");
        fs::write(&file, "current\n").unwrap();

        assert!(restore_backup(&file).unwrap().is_none());
        assert_eq!(fs::read_to_string(&file).unwrap(), "current\n");
        assert!(!backup_path_for(&file).exists());
    }

    #[test]
    fn test_restore_keeps_backup() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("index.ts");
        fs::write(&file, "old\n").unwrap();
        create_backup(&file).unwrap();
        fs::write(&file, "new\n").unwrap();

        restore_backup(&file).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "old\n");
        assert!(backup_path_for(&file).exists());
    }
}
