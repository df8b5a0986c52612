//! Per-package secret files
//!
//! Each bridge's effective environment is stored as `KEY=value` lines in
//! `<dir>/.env.<package id>`. A save replaces the whole file.

use std::path::PathBuf;

use crate::common::fs::{FileMode, write_atomic};
use crate::error::Result;

use super::EffectiveEnvironment;

/// Directory holding one secret file per package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretStore {
    dir: PathBuf,
}

impl SecretStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Secret file for `package_id`
    pub fn path_for(&self, package_id: &str) -> PathBuf {
        self.dir.join(format!(".env.{package_id}"))
    }

    /// Overwrite the secret file for `package_id` with `env`
    pub fn save(&self, package_id: &str, env: &EffectiveEnvironment) -> Result<PathBuf> {
        let path = self.path_for(package_id);
        write_atomic(&path, env.to_dotenv().as_bytes(), FileMode::Private)?;
        tracing::info!(
            package = package_id,
            path = %path.display(),
            keys = env.len(),
            "saved secrets"
        );
        Ok(path)
    }
}
