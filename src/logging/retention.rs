//! Startup cleanup of the log output directory
//!
//! Removes regular files directly inside the directory. Subdirectories,
//! symlinks, and anything outside the directory are never touched.

use std::fs;
use std::path::Path;

use crate::error::{LoggerError, Result};

/// Delete every regular file directly inside `logs_dir`
///
/// Returns the number of files deleted. A directory that does not exist
/// yet counts as already clean. Failing to list the directory is an error;
/// an unreadable entry or a file that cannot be deleted is logged and
/// skipped.
pub fn clean_log_dir(logs_dir: &Path) -> Result<usize> {
    if !logs_dir.exists() {
        return Ok(0);
    }

    let entries = fs::read_dir(logs_dir).map_err(|source| LoggerError::DirectoryCleanup {
        path: logs_dir.to_path_buf(),
        source,
    })?;

    let mut deleted_count = 0;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Could not read entry in {}: {}", logs_dir.display(), e);
                continue;
            }
        };
        let path = entry.path();

        // file_type() does not follow symlinks
        match entry.file_type() {
            Ok(file_type) if file_type.is_file() => {}
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!("Could not inspect {}: {}", path.display(), e);
                continue;
            }
        }

        match fs::remove_file(&path) {
            Ok(()) => deleted_count += 1,
            Err(e) => tracing::warn!("Failed to remove stale log {}: {}", path.display(), e),
        }
    }

    Ok(deleted_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_clean_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let count = clean_log_dir(temp_dir.path()).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_clean_nonexistent_dir() {
        let path = Path::new("/nonexistent/path/for/testing");
        let count = clean_log_dir(path).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_clean_plain_file_is_cleanup_error() {
        let temp_dir = TempDir::new().unwrap();
        let not_a_dir = temp_dir.path().join("log-outputs");
        File::create(&not_a_dir)
            .unwrap()
            .write_all(b"occupied")
            .unwrap();

        let err = clean_log_dir(&not_a_dir).unwrap_err();
        assert!(matches!(err, LoggerError::DirectoryCleanup { ref path, .. } if *path == not_a_dir));
        assert_eq!(fs::read(&not_a_dir).unwrap(), b"occupied");
    }

    #[test]
    fn test_clean_removes_files_keeps_subdirs() {
        let temp_dir = TempDir::new().unwrap();

        for name in ["log0.txt", "log1.txt", "notes.md"] {
            File::create(temp_dir.path().join(name))
                .unwrap()
                .write_all(b"stale")
                .unwrap();
        }

        let subdir = temp_dir.path().join("archive");
        fs::create_dir(&subdir).unwrap();
        let nested = subdir.join("log0.txt");
        File::create(&nested).unwrap().write_all(b"keep").unwrap();

        let count = clean_log_dir(temp_dir.path()).unwrap();
        assert_eq!(count, 3);

        assert!(!temp_dir.path().join("log0.txt").exists());
        assert!(subdir.exists());
        assert!(nested.exists());
    }

    #[test]
    fn test_clean_does_not_touch_parent() {
        let temp_dir = TempDir::new().unwrap();
        let sibling = temp_dir.path().join("sibling.txt");
        File::create(&sibling).unwrap().write_all(b"keep").unwrap();

        let logs_dir = temp_dir.path().join("logs");
        fs::create_dir(&logs_dir).unwrap();
        File::create(logs_dir.join("log0.txt")).unwrap();

        assert_eq!(clean_log_dir(&logs_dir).unwrap(), 1);
        assert!(sibling.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_clean_skips_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.txt");
        File::create(&target).unwrap().write_all(b"keep").unwrap();

        let logs_dir = temp_dir.path().join("logs");
        fs::create_dir(&logs_dir).unwrap();
        std::os::unix::fs::symlink(&target, logs_dir.join("link.txt")).unwrap();

        assert_eq!(clean_log_dir(&logs_dir).unwrap(), 0);
        assert!(target.exists());
    }
}
