//! Registry store
//!
//! Loads the static package catalog (`registry.json`) produced by the offline
//! generation step and answers lookups against it. The store is built once per
//! invocation and passed to whatever needs it.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, fs as fs_error, registry};

pub mod package;

pub use package::{EnvFieldSpec, PackageDescriptor, PackageKind};

/// Catalog file name under the registry root
pub const CATALOG_FILE: &str = "registry.json";

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    generated: String,
    packages: Vec<PackageDescriptor>,
}

/// In-memory view of the package catalog
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
    generated: String,
    packages: Vec<PackageDescriptor>,
}

impl Registry {
    /// Load the catalog from `path`
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(registry::catalog_not_found(path.display().to_string()));
            }
            Err(e) => return Err(fs_error::read_failed(path, &e)),
        };

        let registry = Self::from_json(&content, path)?;
        tracing::debug!(
            path = %path.display(),
            packages = registry.packages.len(),
            "loaded catalog"
        );
        Ok(registry)
    }

    /// Load `registry.json` from a registry root directory
    pub fn load_from_root(root: &Path) -> Result<Self> {
        Self::load(&root.join(CATALOG_FILE))
    }

    /// Parse catalog content; `path` is only used in error messages
    pub fn from_json(content: &str, path: &Path) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content).map_err(|e| {
            registry::catalog_parse_failed(path.display().to_string(), e.to_string())
        })?;

        validate(&file.packages)
            .map_err(|reason| registry::catalog_parse_failed(path.display().to_string(), reason))?;

        Ok(Self {
            path: path.to_path_buf(),
            generated: file.generated,
            packages: file.packages,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Timestamp of the generation run that produced the catalog
    pub fn generated(&self) -> &str {
        &self.generated
    }

    pub fn find_by_id(&self, id: &str) -> Option<&PackageDescriptor> {
        self.packages.iter().find(|pkg| pkg.id == id)
    }

    /// Like [`Registry::find_by_id`] but unknown ids are an error
    pub fn get(&self, id: &str) -> Result<&PackageDescriptor> {
        self.find_by_id(id)
            .ok_or_else(|| registry::package_not_found(id))
    }

    /// Filter by exact kind and a case-insensitive query over name,
    /// description and tags. Catalog order is kept.
    pub fn filter(&self, kind: Option<PackageKind>, query: Option<&str>) -> Vec<&PackageDescriptor> {
        let needle = query.map(str::to_lowercase);
        self.packages
            .iter()
            .filter(|pkg| kind.is_none_or(|k| pkg.kind == k))
            .filter(|pkg| needle.as_deref().is_none_or(|q| pkg.matches_query(q)))
            .collect()
    }
}

/// Catalog-level invariants: unique package ids, unique env keys per package
fn validate(packages: &[PackageDescriptor]) -> std::result::Result<(), String> {
    let mut ids = HashSet::new();
    for pkg in packages {
        if !ids.insert(pkg.id.as_str()) {
            return Err(format!("duplicate package id '{}'", pkg.id));
        }

        let mut keys = HashSet::new();
        for field in &pkg.env_fields {
            if !keys.insert(field.key.as_str()) {
                return Err(format!(
                    "duplicate env field '{}' in package '{}'",
                    field.key, pkg.id
                ));
            }
        }
    }
    Ok(())
}
