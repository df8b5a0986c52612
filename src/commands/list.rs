//! List command implementation
//!
//! Lists catalog packages, optionally filtered by type and sorted by
//! install count, stars or name.

use std::cmp::Reverse;
use std::path::PathBuf;
use std::str::FromStr;

use console::Style;

use crate::cli::ListArgs;
use crate::commands::helpers::{load_registry, parse_kind, print_packages};
use crate::error::{JetsongError, Result, install};
use crate::registry::PackageDescriptor;

/// Ordering for package tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Most installed first
    Installs,
    /// Most starred first
    Stars,
    /// Alphabetical by display name
    Name,
}

impl SortOrder {
    pub fn sort(self, packages: &mut [&PackageDescriptor]) {
        match self {
            SortOrder::Installs => packages.sort_by_key(|p| Reverse(p.stats.installs)),
            SortOrder::Stars => packages.sort_by_key(|p| Reverse(p.stats.stars)),
            SortOrder::Name => packages.sort_by_key(|p| p.display_name.to_lowercase()),
        }
    }
}

impl FromStr for SortOrder {
    type Err = JetsongError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "installs" => Ok(SortOrder::Installs),
            "stars" => Ok(SortOrder::Stars),
            "name" => Ok(SortOrder::Name),
            other => Err(install::invalid_input(format!(
                "unknown sort order '{other}' (expected installs, stars or name)"
            ))),
        }
    }
}

/// Run list command
pub fn run(root: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let kind = parse_kind(args.kind.as_deref())?;
    let sort = args.sort.as_deref().map(SortOrder::from_str).transpose()?;
    let (_settings, registry) = load_registry(root)?;

    let mut packages = registry.filter(kind, None);
    if let Some(sort) = sort {
        sort.sort(&mut packages);
    }

    if packages.is_empty() {
        println!("No packages found.");
        return Ok(());
    }

    println!("Packages ({}):", packages.len());
    println!();
    print_packages(&packages);

    println!();
    let source = if registry.generated().is_empty() {
        registry.path().display().to_string()
    } else {
        format!("{} (generated {})", registry.path().display(), registry.generated())
    };
    println!("{}", Style::new().dim().apply_to(format!("Catalog: {source}")));
    Ok(())
}
