//! Configuration generation for service bridges
//!
//! Every bridge becomes one [`ServerEntry`] (command, args, env). The entry is
//! host-agnostic; [`render`] turns a list of entries into the text format a
//! host reads:
//!
//! - [`ConfigFormat::TreeJson`]: `{"mcpServers": {"jetsong-<id>": {...}}}`
//! - [`ConfigFormat::SectionToml`]: `[mcp_servers.jetsong-<id>]` tables
//!
//! The entrypoint path is fixed by the bridge build layout:
//! `<root>/mcp/<id>-mcp/dist/<id>-mcp/src/index.js`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::env::{self, EffectiveEnvironment, EnvInput};
use crate::error::{Result, install};
use crate::host::{ConfigFormat, HostTarget};
use crate::registry::{PackageDescriptor, PackageKind, Registry};

pub mod section;
pub mod tree;

/// Directory under the registry root holding bridge programs
pub const BRIDGE_DIR: &str = "mcp";

/// Top-level key of tree-json documents
pub const SERVERS_KEY: &str = "mcpServers";

/// Table prefix of section-toml documents
pub const TOML_SECTION: &str = "mcp_servers";

/// Prefix of every server name this tool writes
pub const DEFAULT_NAMESPACE_PREFIX: &str = "jetsong-";

/// Runtime that executes bridge entrypoints
pub const DEFAULT_RUNTIME: &str = "node";

/// Entrypoint script of a bridge under `root`
pub fn entrypoint(root: &Path, package_id: &str) -> PathBuf {
    let bridge = format!("{package_id}-mcp");
    root.join(BRIDGE_DIR)
        .join(&bridge)
        .join("dist")
        .join(&bridge)
        .join("src")
        .join("index.js")
}

/// Command a host runs to start a bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launcher {
    /// Looked up on the host's `PATH` when it starts the bridge
    Command(String),
    /// Resolved at generation time
    Absolute(PathBuf),
}

impl Launcher {
    /// Build the launcher for `runtime`.
    ///
    /// With `absolute`, the runtime is resolved on the current `PATH`, since
    /// the host may start the bridge with a different one. Falls back to the
    /// bare command when the lookup fails.
    pub fn resolve(runtime: &str, absolute: bool) -> Self {
        if !absolute {
            return Launcher::Command(runtime.to_string());
        }
        if Path::new(runtime).is_absolute() {
            return Launcher::Absolute(PathBuf::from(runtime));
        }
        match which::which(runtime) {
            Ok(path) => Launcher::Absolute(path),
            Err(e) => {
                tracing::warn!(runtime, error = %e, "could not resolve runtime, using bare command");
                Launcher::Command(runtime.to_string())
            }
        }
    }

    pub fn as_command(&self) -> String {
        match self {
            Launcher::Command(cmd) => cmd.clone(),
            Launcher::Absolute(path) => path.display().to_string(),
        }
    }
}

/// Host-agnostic configuration of one bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEntry {
    /// Server name, `<prefix><package id>`
    pub name: String,
    pub command: String,
    pub args: Vec<String>,
    pub env: EffectiveEnvironment,
}

/// Render `entries` in `format`
pub fn render(format: ConfigFormat, entries: &[ServerEntry]) -> String {
    match format {
        ConfigFormat::TreeJson => tree::render(entries),
        ConfigFormat::SectionToml => section::render(entries),
    }
}

/// `{name: entry}` map in entry order
pub fn servers_map(entries: &[ServerEntry]) -> Map<String, Value> {
    entries
        .iter()
        .map(|entry| (entry.name.clone(), tree::entry_value(entry)))
        .collect()
}

/// Builds server entries for packages of a registry
#[derive(Debug)]
pub struct Generator<'a> {
    registry: &'a Registry,
    root: PathBuf,
    runtime: String,
    namespace_prefix: String,
}

impl<'a> Generator<'a> {
    /// `root` is where bridges live (`<root>/mcp/...`)
    pub fn new(registry: &'a Registry, root: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            root: root.into(),
            runtime: DEFAULT_RUNTIME.to_string(),
            namespace_prefix: DEFAULT_NAMESPACE_PREFIX.to_string(),
        }
    }

    #[must_use]
    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    #[must_use]
    pub fn with_namespace_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.namespace_prefix = prefix.into();
        self
    }

    /// Server name for a package id
    pub fn server_name(&self, package_id: &str) -> String {
        format!("{}{package_id}", self.namespace_prefix)
    }

    /// Entry for an already resolved environment
    pub fn entry(
        &self,
        package: &PackageDescriptor,
        env: EffectiveEnvironment,
        host: &HostTarget,
    ) -> ServerEntry {
        let launcher = Launcher::resolve(&self.runtime, host.absolute_launcher);
        ServerEntry {
            name: self.server_name(&package.id),
            command: launcher.as_command(),
            args: vec![entrypoint(&self.root, &package.id).display().to_string()],
            env,
        }
    }

    /// Entries for several bridges, resolving each one's environment from
    /// `input`. Order follows `ids`; a repeated id keeps its first position.
    pub fn entries_for(
        &self,
        ids: &[String],
        input: &EnvInput,
        host: &HostTarget,
    ) -> Result<Vec<ServerEntry>> {
        let mut seen = HashSet::new();
        ids.iter()
            .filter(|id| seen.insert(*id))
            .map(|id| {
                let package = bridge(self.registry, id)?;
                let env = env::resolve(&package.env_fields, input);
                Ok(self.entry(package, env, host))
            })
            .collect()
    }
}

/// Look up a package that must be a service bridge
pub fn bridge<'r>(registry: &'r Registry, id: &str) -> Result<&'r PackageDescriptor> {
    let package = registry.get(id)?;
    if package.kind != PackageKind::Mcp {
        return Err(install::invalid_input(format!(
            "'{id}' is a {}, not an MCP server",
            package.kind
        )));
    }
    Ok(package)
}
