//! Installation of packages into hosts
//!
//! Two paths, chosen by package kind:
//! - skills are linked into a project's `.claude/commands/` directory
//! - MCP servers get their secrets saved, their configuration rendered and,
//!   for hosts with a shared config file, merged into that file
//!
//! Bridge installs run inside a [`Transaction`] so a failed merge does not
//! leave a half-written secret file behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::env::{self, EnvInput, SecretStore};
use crate::error::{Result, fs as fs_error, install};
use crate::generator::{self, Generator};
use crate::host::{HostId, HostTarget, MergeStrategy};
use crate::registry::{PackageDescriptor, PackageKind, Registry};
use crate::transaction::Transaction;

pub mod merge;

pub use merge::merge_servers;

/// Directory under the registry root holding skills
pub const SKILLS_DIR: &str = "skills";

/// Document every skill directory must contain
pub const SKILL_DOCUMENT: &str = "SKILL.md";

/// Command directory inside a project, relative to the project root
pub const COMMANDS_DIR: &str = ".claude/commands";

/// Outcome of installing an MCP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedConfig {
    pub host: HostId,
    /// Rendered configuration in the host's format
    pub text: String,
    /// Shared config file the entry was merged into, if any
    pub written: Option<PathBuf>,
    /// Secret file holding the effective environment
    pub secrets: PathBuf,
}

/// Installs packages from one registry
#[derive(Debug)]
pub struct Installer<'a> {
    registry: &'a Registry,
    settings: &'a Settings,
}

impl<'a> Installer<'a> {
    pub fn new(registry: &'a Registry, settings: &'a Settings) -> Self {
        Self { registry, settings }
    }

    /// Generator configured from settings
    pub fn generator(&self) -> Generator<'a> {
        Generator::new(self.registry, &self.settings.root)
            .with_runtime(&self.settings.runtime)
            .with_namespace_prefix(&self.settings.namespace_prefix)
    }

    pub fn secret_store(&self) -> SecretStore {
        SecretStore::new(&self.settings.config_dir)
    }

    /// Source document of a skill
    pub fn skill_source(&self, package_id: &str) -> PathBuf {
        self.settings
            .root
            .join(SKILLS_DIR)
            .join(package_id)
            .join(SKILL_DOCUMENT)
    }

    /// Link a skill into `project`. Returns the created link.
    pub fn install_skill(&self, package_id: &str, project: &Path) -> Result<PathBuf> {
        let package = self.registry.get(package_id)?;
        if package.kind != PackageKind::Skill {
            return Err(install::invalid_input(format!(
                "'{package_id}' is an {}, not a skill",
                package.kind.label()
            )));
        }
        log_if_incompatible(package, HostId::ClaudeCode);

        let source = self.skill_source(package_id);
        if !source.is_file() {
            return Err(install::source_not_found(source.display().to_string()));
        }

        let commands_dir = project.join(COMMANDS_DIR);
        fs::create_dir_all(&commands_dir)
            .map_err(|e| fs_error::write_failed(&commands_dir, &e))?;

        let link = commands_dir.join(format!("{package_id}.md"));
        link_skill(&source, &link)?;
        tracing::info!(
            package = package_id,
            link = %link.display(),
            source = %source.display(),
            "linked skill"
        );
        Ok(link)
    }

    /// Install an MCP server for `host`
    pub fn install_bridge(
        &self,
        package_id: &str,
        host: HostId,
        input: &EnvInput,
    ) -> Result<GeneratedConfig> {
        let target = HostTarget::for_host(host)?;
        let package = generator::bridge(self.registry, package_id)?;
        log_if_incompatible(package, host);

        let env = env::resolve(&package.env_fields, input);
        let store = self.secret_store();
        let generator = self.generator();

        let mut transaction = Transaction::new();
        transaction.backup(&store.path_for(package_id))?;
        let secrets = store.save(package_id, &env)?;

        let entries = [generator.entry(package, env, &target)];
        let text = generator::render(target.format, &entries);

        let written = match (target.merge, target.shared_file_path(&self.settings.home_dir)) {
            (MergeStrategy::MergeSharedFile, Some(path)) => {
                transaction.backup(&path)?;
                merge_servers(&path, &entries)?;
                Some(path)
            }
            _ => None,
        };

        transaction.commit();
        Ok(GeneratedConfig {
            host,
            text,
            written,
            secrets,
        })
    }
}

fn log_if_incompatible(package: &PackageDescriptor, host: HostId) {
    if !package.compatibility.supports(host) {
        tracing::debug!(
            package = %package.id,
            host = %host,
            "package is not marked compatible with this tool"
        );
    }
}

/// Create `link` pointing at `source`. Any existing entry at `link`,
/// including a dangling link, is reported as already installed.
fn link_skill(source: &Path, link: &Path) -> Result<()> {
    symlink_file(source, link).map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            install::already_exists(link.display().to_string())
        } else {
            fs_error::write_failed(link, &e)
        }
    })
}

#[cfg(unix)]
fn symlink_file(source: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(source, link)
}

#[cfg(windows)]
fn symlink_file(source: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(source, link)
}

#[cfg(test)]
mod tests;
