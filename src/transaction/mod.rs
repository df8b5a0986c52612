//! Transaction support for installs
//!
//! An install touches more than one file (the secret file, then possibly a
//! shared host config). Files are snapshotted before they are written; if the
//! transaction is dropped without [`Transaction::commit`], every snapshot is
//! put back so a failed install leaves the previous state behind.
//!
//! ```ignore
//! let mut transaction = Transaction::new();
//! transaction.backup(&secret_path)?;
//! store.save(id, &env)?;
//! transaction.backup(&shared_config)?;
//! merge_servers(&shared_config, &entries)?;
//! transaction.commit();
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};

/// State of a file before the transaction touched it
#[derive(Debug, Clone)]
struct FileBackup {
    path: PathBuf,
    /// `None` if the file did not exist
    content: Option<Vec<u8>>,
}

/// Snapshot-and-restore guard around a group of file writes
#[derive(Debug, Default)]
pub struct Transaction {
    backups: Vec<FileBackup>,
    committed: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `path` before it is written. Later calls for the same path
    /// keep the first snapshot.
    pub fn backup(&mut self, path: &Path) -> Result<()> {
        if self.backups.iter().any(|b| b.path == path) {
            return Ok(());
        }
        let content = match fs::read(path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(fs_error::read_failed(path, &e)),
        };
        self.backups.push(FileBackup {
            path: path.to_path_buf(),
            content,
        });
        Ok(())
    }

    /// Number of files snapshotted so far
    #[allow(dead_code)] // Used in tests
    pub fn len(&self) -> usize {
        self.backups.len()
    }

    #[allow(dead_code)] // Used in tests
    pub fn is_empty(&self) -> bool {
        self.backups.is_empty()
    }

    /// Keep every write made under this transaction
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Put every snapshotted file back, newest first
    pub fn rollback(&mut self) {
        if self.committed {
            return;
        }
        for backup in self.backups.drain(..).rev() {
            let restored = match &backup.content {
                Some(content) => fs::write(&backup.path, content),
                None => match fs::remove_file(&backup.path) {
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                    other => other,
                },
            };
            match restored {
                Ok(()) => tracing::debug!(path = %backup.path.display(), "rolled back"),
                Err(e) => tracing::warn!(
                    path = %backup.path.display(),
                    error = %e,
                    "failed to roll back file"
                ),
            }
        }
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            self.rollback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::create_temp_dir;

    #[test]
    fn test_commit_keeps_changes() {
        let temp = create_temp_dir();
        let path = temp.path().join(".env.gitlab");
        fs::write(&path, "OLD=1\n").unwrap();

        let mut transaction = Transaction::new();
        transaction.backup(&path).unwrap();
        fs::write(&path, "NEW=1\n").unwrap();
        transaction.commit();

        assert_eq!(fs::read_to_string(&path).unwrap(), "NEW=1\n");
    }

    #[test]
    fn test_drop_restores_modified_file() {
        let temp = create_temp_dir();
        let path = temp.path().join("mcp.json");
        fs::write(&path, "{\"otherKey\":42}").unwrap();

        {
            let mut transaction = Transaction::new();
            transaction.backup(&path).unwrap();
            fs::write(&path, "{}").unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"otherKey\":42}");
    }

    #[test]
    fn test_drop_removes_created_file() {
        let temp = create_temp_dir();
        let path = temp.path().join(".env.jira");

        {
            let mut transaction = Transaction::new();
            transaction.backup(&path).unwrap();
            fs::write(&path, "JIRA_TOKEN=x\n").unwrap();
        }

        assert!(!path.exists());
    }

    #[test]
    fn test_first_snapshot_wins() {
        let temp = create_temp_dir();
        let path = temp.path().join("file");
        fs::write(&path, "original").unwrap();

        {
            let mut transaction = Transaction::new();
            transaction.backup(&path).unwrap();
            fs::write(&path, "first write").unwrap();
            transaction.backup(&path).unwrap();
            fs::write(&path, "second write").unwrap();
            assert_eq!(transaction.len(), 1);
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_rollback_of_unwritten_missing_file() {
        let temp = create_temp_dir();
        let path = temp.path().join("never-written");

        let mut transaction = Transaction::new();
        transaction.backup(&path).unwrap();
        transaction.rollback();

        assert!(transaction.is_empty());
        assert!(!path.exists());
    }
}
