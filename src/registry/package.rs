//! Catalog data model
//!
//! Descriptors are produced by the offline registry generation step and are
//! read-only at runtime. Field names follow the catalog's camelCase JSON.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{JetsongError, Result, install};
use crate::host::HostId;

/// Kind of package in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    /// Service bridge program configured into a host
    Mcp,
    /// Instruction document linked into a project
    Skill,
}

impl PackageKind {
    pub fn label(self) -> &'static str {
        match self {
            PackageKind::Mcp => "MCP",
            PackageKind::Skill => "Skill",
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageKind::Mcp => f.write_str("mcp"),
            PackageKind::Skill => f.write_str("skill"),
        }
    }
}

impl FromStr for PackageKind {
    type Err = JetsongError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mcp" => Ok(PackageKind::Mcp),
            "skill" => Ok(PackageKind::Skill),
            other => Err(install::invalid_input(format!(
                "unknown package type '{other}' (expected mcp or skill)"
            ))),
        }
    }
}

/// One environment variable a service bridge expects
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnvFieldSpec {
    pub key: String,

    #[serde(default)]
    pub default: Option<String>,

    /// Example value shown when prompting
    #[serde(default)]
    pub placeholder: Option<String>,

    /// Masked while collecting, never echoed or logged
    #[serde(default)]
    pub sensitive: bool,

    /// `false` pins the value to `default`
    #[serde(default = "default_editable")]
    pub editable: bool,
}

fn default_editable() -> bool {
    true
}

impl EnvFieldSpec {
    #[allow(dead_code)] // Used in tests
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default: None,
            placeholder: None,
            sensitive: false,
            editable: true,
        }
    }

    #[allow(dead_code)] // Used in tests
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    #[allow(dead_code)] // Used in tests
    pub fn with_placeholder(mut self, value: impl Into<String>) -> Self {
        self.placeholder = Some(value.into());
        self
    }

    #[allow(dead_code)] // Used in tests
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    #[allow(dead_code)] // Used in tests
    pub fn fixed(mut self) -> Self {
        self.editable = false;
        self
    }

    /// Whether the value is pinned and never asked for
    pub fn is_pinned(&self) -> bool {
        !self.editable && self.default.is_some()
    }
}

/// Host compatibility flags. A host missing from the map is unsupported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Compatibility(BTreeMap<String, bool>);

impl Compatibility {
    pub fn supports(&self, host: HostId) -> bool {
        self.0.get(host.as_str()).copied().unwrap_or(false)
    }

    /// Mark `hosts` as supported
    #[allow(dead_code)] // Used in tests
    pub fn with(hosts: &[HostId]) -> Self {
        Self(
            HostId::ALL
                .into_iter()
                .map(|id| (id.as_str().to_string(), hosts.contains(&id)))
                .collect(),
        )
    }
}

/// Read-only popularity counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PackageStats {
    pub installs: u64,
    pub stars: u64,
}

/// Whether a bridge token is shared by a team or issued per person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Shared,
    Personal,
}

/// One released version from a package's changelog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangelogEntry {
    pub version: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub changes: Vec<String>,
}

/// A package as listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: PackageKind,

    #[serde(rename = "name")]
    pub display_name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub icon: String,

    pub version: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub compatibility: Compatibility,

    #[serde(default)]
    pub env_fields: Vec<EnvFieldSpec>,

    #[serde(default)]
    pub token_type: Option<TokenType>,

    #[serde(default)]
    pub token_guide: Option<String>,

    #[serde(default)]
    pub stats: PackageStats,

    #[serde(default)]
    pub changelog: Vec<ChangelogEntry>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,

    /// Source path relative to the registry root
    #[serde(default)]
    pub path: String,
}

impl PackageDescriptor {
    /// Case-insensitive substring match on name, description or any tag.
    /// `needle` must already be lowercase.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.display_name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Name with the icon prefix when the catalog provides one
    pub fn title(&self) -> String {
        if self.icon.is_empty() {
            self.display_name.clone()
        } else {
            format!("{} {}", self.icon, self.display_name)
        }
    }
}
