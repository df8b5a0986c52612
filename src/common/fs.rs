//! Common file system operations with unified error handling

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, fs as fs_error};

/// Permissions for a file written by [`write_atomic`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// Owner read/write only (secret files)
    Private,
    /// Keep the existing file's permissions, `0644` for new files
    Shared,
}

/// Write `contents` to `path` in one step.
///
/// The data goes to a temporary file in the same directory which is then
/// renamed over `path`, so readers see either the old or the new content.
/// Missing parent directories are created.
pub fn write_atomic(path: &Path, contents: &[u8], mode: FileMode) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| fs_error::write_failed(parent, &e))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| fs_error::write_failed(path, &e))?;
    temp.write_all(contents)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| fs_error::write_failed(path, &e))?;

    apply_mode(temp.path(), path, mode)?;

    temp.persist(path)
        .map_err(|e| fs_error::write_failed(path, &e.error))?;
    Ok(())
}

#[cfg(unix)]
fn apply_mode(temp: &Path, target: &Path, mode: FileMode) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match mode {
        // NamedTempFile is already created with 0600
        FileMode::Private => return Ok(()),
        FileMode::Shared => fs::metadata(target)
            .map(|meta| meta.permissions())
            .unwrap_or_else(|_| fs::Permissions::from_mode(0o644)),
    };
    fs::set_permissions(temp, permissions).map_err(|e| fs_error::write_failed(target, &e))
}

#[cfg(not(unix))]
fn apply_mode(_temp: &Path, _target: &Path, _mode: FileMode) -> Result<()> {
    Ok(())
}
