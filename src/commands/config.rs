//! Config command implementation
//!
//! Renders one combined configuration for several MCP servers and prints it
//! to stdout. Nothing is written to disk.

use std::path::PathBuf;

use crate::cli::ConfigArgs;
use crate::commands::helpers::load_registry;
use crate::config::Settings;
use crate::env::EnvInput;
use crate::error::Result;
use crate::generator::{self, Generator};
use crate::host::HostTarget;
use crate::registry::Registry;

/// Stand-in for the registry root in shareable snippets
pub const PLACEHOLDER_ROOT: &str = "<root>";

/// Run config command
pub fn run(root: Option<PathBuf>, args: ConfigArgs) -> Result<()> {
    let (settings, registry) = load_registry(root)?;
    println!("{}", render(&registry, &settings, &args)?);
    Ok(())
}

/// Render the configuration for `args.ids`
pub fn render(registry: &Registry, settings: &Settings, args: &ConfigArgs) -> Result<String> {
    let target = HostTarget::parse(&args.tool)?;
    let input = EnvInput::parse_pairs(&args.env)?;

    let root = if args.placeholder_root {
        PathBuf::from(PLACEHOLDER_ROOT)
    } else {
        settings.root.clone()
    };
    let generator = Generator::new(registry, root)
        .with_runtime(&settings.runtime)
        .with_namespace_prefix(&settings.namespace_prefix);

    let entries = generator.entries_for(&args.ids, &input, &target)?;
    Ok(generator::render(target.format, &entries))
}
