//! Search command implementation

use std::path::PathBuf;

use crate::cli::SearchArgs;
use crate::commands::helpers::{load_registry, parse_kind, print_packages};
use crate::error::Result;

/// Run search command
pub fn run(root: Option<PathBuf>, args: SearchArgs) -> Result<()> {
    let kind = parse_kind(args.kind.as_deref())?;
    let (_settings, registry) = load_registry(root)?;

    let packages = registry.filter(kind, Some(&args.query));
    if packages.is_empty() {
        println!("No packages match '{}'.", args.query);
        return Ok(());
    }

    println!("Found {} package(s) matching '{}':", packages.len(), args.query);
    println!();
    print_packages(&packages);
    Ok(())
}
