//! Settings for a Jetsong invocation
//!
//! Values are layered, highest first:
//! 1. `--root` flag (or `JETSONG_ROOT`, handled by clap)
//! 2. environment variables (`JETSONG_CONFIG_DIR`)
//! 3. the settings file `<config dir>/config.yaml`
//! 4. built-in defaults
//!
//! ```yaml
//! # ~/.config/jetsong-mcp/config.yaml
//! root: /srv/jetsong
//! runtime: node
//! namespace_prefix: jetsong-
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{JetsongError, Result, fs as fs_error};
use crate::generator::{DEFAULT_NAMESPACE_PREFIX, DEFAULT_RUNTIME};

/// Overrides the per-user configuration directory
pub const CONFIG_DIR_ENV: &str = "JETSONG_CONFIG_DIR";

/// Per-user configuration directory under the home directory
const CONFIG_DIR: &str = ".config/jetsong-mcp";

/// Settings file name inside the configuration directory
pub const SETTINGS_FILE: &str = "config.yaml";

/// Contents of `config.yaml`; every key is optional
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub root: Option<PathBuf>,
    pub runtime: Option<String>,
    pub namespace_prefix: Option<String>,
}

impl SettingsFile {
    /// Parse settings from YAML. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| JetsongError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Read `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content, path),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(fs_error::read_failed(path, &e)),
        }
    }
}

/// Effective settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Registry root: `registry.json`, `mcp/`, `skills/`
    pub root: PathBuf,
    /// Per-user directory holding secret files and `config.yaml`
    pub config_dir: PathBuf,
    /// Home directory that shared host config paths are relative to
    pub home_dir: PathBuf,
    /// Command that runs bridge entrypoints
    pub runtime: String,
    /// Prefix of generated server names
    pub namespace_prefix: String,
}

impl Settings {
    /// Resolve settings from the process environment
    pub fn load(root_flag: Option<PathBuf>) -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| JetsongError::IoError {
            message: "Could not determine home directory".to_string(),
        })?;
        let config_dir = std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from);
        let cwd = std::env::current_dir().map_err(|e| JetsongError::IoError {
            message: format!("Failed to get current directory: {e}"),
        })?;
        Self::from_parts(root_flag, config_dir, home_dir, &cwd)
    }

    /// Resolve settings from explicit inputs
    pub fn from_parts(
        root_flag: Option<PathBuf>,
        config_dir: Option<PathBuf>,
        home_dir: PathBuf,
        cwd: &Path,
    ) -> Result<Self> {
        let config_dir = config_dir.unwrap_or_else(|| home_dir.join(CONFIG_DIR));
        let file = SettingsFile::load(&config_dir.join(SETTINGS_FILE))?;

        let root = root_flag
            .or(file.root)
            .unwrap_or_else(|| cwd.to_path_buf());

        let settings = Self {
            root: absolutize(&root, cwd),
            config_dir,
            home_dir,
            runtime: file.runtime.unwrap_or_else(|| DEFAULT_RUNTIME.to_string()),
            namespace_prefix: file
                .namespace_prefix
                .unwrap_or_else(|| DEFAULT_NAMESPACE_PREFIX.to_string()),
        };
        tracing::debug!(
            root = %settings.root.display(),
            config_dir = %settings.config_dir.display(),
            "resolved settings"
        );
        Ok(settings)
    }
}

/// Make `path` absolute against `cwd`, resolving symlinks when it exists
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    dunce::canonicalize(&joined).unwrap_or(joined)
}
