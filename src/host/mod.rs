//! Host definitions
//!
//! This module handles:
//! - The closed set of host tools a package can target (`HostId`)
//! - Per-host install behavior: config format, merge strategy, launcher style
//! - Lookup of install targets by identifier

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{JetsongError, Result, install};

/// Identifier of a known host tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HostId {
    #[serde(rename = "claude-code")]
    ClaudeCode,
    #[serde(rename = "cursor")]
    Cursor,
    #[serde(rename = "codex")]
    Codex,
    #[serde(rename = "opencode")]
    Opencode,
    #[serde(rename = "antigravity")]
    Antigravity,
}

impl HostId {
    /// All known hosts, in display order
    pub const ALL: [HostId; 5] = [
        HostId::ClaudeCode,
        HostId::Cursor,
        HostId::Codex,
        HostId::Opencode,
        HostId::Antigravity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HostId::ClaudeCode => "claude-code",
            HostId::Cursor => "cursor",
            HostId::Codex => "codex",
            HostId::Opencode => "opencode",
            HostId::Antigravity => "antigravity",
        }
    }

    /// Human readable name
    pub fn display_name(self) -> &'static str {
        match self {
            HostId::ClaudeCode => "Claude Code",
            HostId::Cursor => "Cursor",
            HostId::Codex => "Codex",
            HostId::Opencode => "OpenCode",
            HostId::Antigravity => "Antigravity",
        }
    }

    /// Two-letter column label used in package tables
    pub fn short_label(self) -> &'static str {
        match self {
            HostId::ClaudeCode => "CC",
            HostId::Cursor => "Cu",
            HostId::Codex => "Cx",
            HostId::Opencode => "OC",
            HostId::Antigravity => "AG",
        }
    }
}

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostId {
    type Err = JetsongError;

    fn from_str(s: &str) -> Result<Self> {
        HostId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| install::unsupported_target(s))
    }
}

/// Structural format of the configuration text a host consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `{"mcpServers": {...}}` JSON document
    TreeJson,
    /// `[mcp_servers.<name>]` TOML tables
    SectionToml,
}

/// How generated configuration reaches the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Text is printed for the operator to paste
    ManualPaste,
    /// Entries are merged into a shared per-user file
    MergeSharedFile,
}

/// An installable host and how configuration is produced for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostTarget {
    pub id: HostId,
    pub format: ConfigFormat,
    pub merge: MergeStrategy,

    /// Whether the host needs an absolute path to the bridge runtime
    pub absolute_launcher: bool,

    /// Shared config file, relative to the user's home directory
    pub shared_file: Option<&'static str>,
}

impl HostTarget {
    /// Look up the install target for a host.
    ///
    /// Hosts that are only known for compatibility display are rejected.
    pub fn for_host(id: HostId) -> Result<Self> {
        let target = match id {
            HostId::ClaudeCode => HostTarget {
                id,
                format: ConfigFormat::TreeJson,
                merge: MergeStrategy::ManualPaste,
                absolute_launcher: false,
                shared_file: None,
            },
            HostId::Cursor => HostTarget {
                id,
                format: ConfigFormat::TreeJson,
                merge: MergeStrategy::MergeSharedFile,
                absolute_launcher: true,
                shared_file: Some(".cursor/mcp.json"),
            },
            HostId::Codex => HostTarget {
                id,
                format: ConfigFormat::SectionToml,
                merge: MergeStrategy::ManualPaste,
                absolute_launcher: true,
                shared_file: None,
            },
            HostId::Opencode | HostId::Antigravity => {
                return Err(install::unsupported_target(id.as_str()));
            }
        };
        Ok(target)
    }

    /// Parse a host identifier and look up its install target
    pub fn parse(s: &str) -> Result<Self> {
        Self::for_host(s.parse()?)
    }

    /// All hosts that can be installed to
    pub fn installable() -> Vec<HostTarget> {
        HostId::ALL
            .into_iter()
            .filter_map(|id| Self::for_host(id).ok())
            .collect()
    }

    /// Absolute path of the shared config file under `home`
    pub fn shared_file_path(&self, home: &Path) -> Option<PathBuf> {
        self.shared_file.map(|rel| home.join(rel))
    }
}
