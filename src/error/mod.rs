//! Error types and handling for Jetsong
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors for the most common variants live in sub-modules by domain:
//! - [`registry`]: catalog and package lookup errors
//! - [`install`]: installation target errors
//! - [`fs`]: file system errors

pub mod fs;
pub mod install;
pub mod registry;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Jetsong operations
#[derive(Error, Diagnostic, Debug)]
pub enum JetsongError {
    // Registry errors
    #[error("Package '{id}' not found")]
    #[diagnostic(
        code(jetsong::registry::package_not_found),
        help("Run 'jetsong list' to see available packages")
    )]
    PackageNotFound { id: String },

    #[error("Catalog not found: {path}")]
    #[diagnostic(
        code(jetsong::registry::catalog_not_found),
        help("Point --root (or JETSONG_ROOT) at a directory containing registry.json")
    )]
    CatalogNotFound { path: String },

    #[error("Failed to parse catalog: {path}: {reason}")]
    #[diagnostic(code(jetsong::registry::parse_failed))]
    CatalogParseFailed { path: String, reason: String },

    // Install errors
    #[error("Source document not found: {path}")]
    #[diagnostic(code(jetsong::install::source_not_found))]
    SourceNotFound { path: String },

    #[error("Already installed: {path}")]
    #[diagnostic(
        code(jetsong::install::already_exists),
        help("Remove the existing link first to reinstall")
    )]
    AlreadyExists { path: String },

    #[error("Unsupported tool: {host}")]
    #[diagnostic(
        code(jetsong::install::unsupported_target),
        help("Supported tools: claude-code, cursor, codex")
    )]
    UnsupportedTarget { host: String },

    #[error("Invalid input: {message}")]
    #[diagnostic(code(jetsong::input::invalid))]
    InvalidInput { message: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(jetsong::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(jetsong::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(jetsong::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(jetsong::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for JetsongError {
    fn from(err: std::io::Error) -> Self {
        JetsongError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for JetsongError {
    fn from(err: inquire::InquireError) -> Self {
        JetsongError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, JetsongError>;
