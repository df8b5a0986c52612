//! Common test utilities for Jetsong integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated home, config directory and registry root for one test
#[allow(dead_code)]
pub struct TestEnv {
    pub temp: TempDir,
    /// Fake home directory (`~/.cursor/mcp.json` lives here)
    pub home: PathBuf,
    /// Per-user config directory holding secret files
    pub config_dir: PathBuf,
    /// Registry root holding `registry.json`
    pub root: PathBuf,
    /// Working directory for commands
    pub project: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an environment with the fixture registry copied in
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let home = temp.path().join("home");
        let config_dir = home.join(".config/jetsong-mcp");
        let root = temp.path().join("registry");
        let project = temp.path().join("project");

        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        std::fs::create_dir_all(&project).expect("Failed to create project directory");
        copy_dir_recursive(&fixture_path("registry"), &root).expect("Failed to copy registry");

        Self {
            temp,
            home,
            config_dir,
            root,
            project,
        }
    }

    /// `jetsong` command bound to this environment
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(jetsong_bin());
        cmd.current_dir(&self.project)
            .env("HOME", &self.home)
            .env("JETSONG_CONFIG_DIR", &self.config_dir)
            .env("JETSONG_ROOT", &self.root)
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Write a file relative to the temp directory
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.temp.path().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the temp directory
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.temp.path().join(path)).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.temp.path().join(path).exists()
    }

    /// Secret file for a package
    pub fn secret_file(&self, id: &str) -> PathBuf {
        self.config_dir.join(format!(".env.{id}"))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Path to the jetsong binary
pub fn jetsong_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_jetsong"))
}

/// Path of a fixture under `tests/common/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join(name)
}

/// Recursively copy a directory
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    if !dst.exists() {
        std::fs::create_dir_all(dst)?;
    }

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}
