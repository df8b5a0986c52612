//! File system errors

use std::path::Path;

use super::JetsongError;

/// Creates a file read error for `path`
pub fn read_failed(path: &Path, err: &std::io::Error) -> JetsongError {
    JetsongError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write error for `path`
pub fn write_failed(path: &Path, err: &std::io::Error) -> JetsongError {
    JetsongError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
