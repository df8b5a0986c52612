//! Catalog and package lookup errors

use super::JetsongError;

/// Creates a package not found error
pub fn package_not_found(id: impl Into<String>) -> JetsongError {
    JetsongError::PackageNotFound { id: id.into() }
}

/// Creates a catalog not found error
pub fn catalog_not_found(path: impl Into<String>) -> JetsongError {
    JetsongError::CatalogNotFound { path: path.into() }
}

/// Creates a catalog parse error
pub fn catalog_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> JetsongError {
    JetsongError::CatalogParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
