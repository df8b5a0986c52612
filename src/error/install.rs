//! Installation target errors

use super::JetsongError;

/// Creates a missing source document error
pub fn source_not_found(path: impl Into<String>) -> JetsongError {
    JetsongError::SourceNotFound { path: path.into() }
}

/// Creates an already installed error
pub fn already_exists(path: impl Into<String>) -> JetsongError {
    JetsongError::AlreadyExists { path: path.into() }
}

/// Creates an unsupported host error
pub fn unsupported_target(host: impl Into<String>) -> JetsongError {
    JetsongError::UnsupportedTarget { host: host.into() }
}

/// Creates an invalid input error
pub fn invalid_input(message: impl Into<String>) -> JetsongError {
    JetsongError::InvalidInput {
        message: message.into(),
    }
}
