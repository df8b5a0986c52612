//! Info command implementation
//!
//! Shows everything the catalog knows about one package: metadata, per-tool
//! compatibility, env fields, token guide and changelog.

use std::path::PathBuf;

use console::Style;

use crate::cli::InfoArgs;
use crate::commands::helpers::load_registry;
use crate::error::Result;
use crate::host::HostId;
use crate::registry::package::TokenType;
use crate::registry::{EnvFieldSpec, PackageDescriptor, PackageKind};

/// Run info command
pub fn run(root: Option<PathBuf>, args: InfoArgs) -> Result<()> {
    let (_settings, registry) = load_registry(root)?;
    let package = registry.get(&args.id)?;
    display_package(package);
    Ok(())
}

fn display_package(package: &PackageDescriptor) {
    let bold = Style::new().bold();
    let dim = Style::new().dim();

    println!(
        "{} {} {}",
        Style::new().bold().yellow().apply_to(package.title()),
        dim.apply_to(format!("({})", package.id)),
        Style::new().cyan().apply_to(format!("v{}", package.version))
    );
    if !package.description.is_empty() {
        println!("  {}", package.description);
    }
    println!();

    println!("  {} {}", bold.apply_to("Type:"), package.kind.label());
    if !package.author.is_empty() {
        println!("  {} {}", bold.apply_to("Author:"), package.author);
    }
    if !package.tags.is_empty() {
        println!("  {} {}", bold.apply_to("Tags:"), package.tags.join(", "));
    }
    println!(
        "  {} {} installs, {} stars",
        bold.apply_to("Stats:"),
        package.stats.installs,
        package.stats.stars
    );
    if let Some(updated) = package.updated_at.as_deref().or(package.created_at.as_deref()) {
        println!("  {} {}", bold.apply_to("Updated:"), updated);
    }

    println!();
    println!("  {}", bold.apply_to("Compatibility:"));
    for host in HostId::ALL {
        if package.compatibility.supports(host) {
            println!("    {} {}", Style::new().green().apply_to("✓"), host.display_name());
        } else {
            println!("    {} {}", Style::new().red().apply_to("✗"), dim.apply_to(host.display_name()));
        }
    }

    if !package.env_fields.is_empty() {
        println!();
        println!("  {}", bold.apply_to("Environment:"));
        for field in &package.env_fields {
            println!("    {}", describe_field(field));
        }
    }

    if package.token_type.is_some() || package.token_guide.is_some() {
        println!();
        let kind = match package.token_type {
            Some(TokenType::Personal) => "personal token",
            Some(TokenType::Shared) => "shared token",
            None => "token",
        };
        println!("  {} {kind}", bold.apply_to("Token:"));
        if let Some(guide) = &package.token_guide {
            println!("    {} {guide}", dim.apply_to("How to get one:"));
        }
    }

    if !package.changelog.is_empty() {
        println!();
        println!("  {}", bold.apply_to("Changelog:"));
        for entry in &package.changelog {
            if entry.date.is_empty() {
                println!("    {}", Style::new().cyan().apply_to(&entry.version));
            } else {
                println!(
                    "    {} {}",
                    Style::new().cyan().apply_to(&entry.version),
                    dim.apply_to(format!("({})", entry.date))
                );
            }
            for change in &entry.changes {
                println!("      - {change}");
            }
        }
    }

    println!();
    match package.kind {
        PackageKind::Mcp => println!(
            "  {} jetsong install {} --tool <claude-code|cursor|codex>",
            bold.apply_to("Install:"),
            package.id
        ),
        PackageKind::Skill => println!(
            "  {} jetsong install {} --project <dir>",
            bold.apply_to("Install:"),
            package.id
        ),
    }
}

/// Shown in place of a sensitive default
const MASK: &str = "****";

/// One env field line, e.g. `GITLAB_TOKEN (glpat-xxxx) [sensitive]`.
/// Sensitive defaults are never printed.
fn describe_field(field: &EnvFieldSpec) -> String {
    let mut line = field.key.clone();
    match (&field.default, &field.placeholder) {
        (Some(_), Some(placeholder)) if field.sensitive => {
            line.push_str(&format!(" ({placeholder})"));
        }
        (Some(_), None) if field.sensitive => line.push_str(&format!(" = {MASK}")),
        (Some(default), _) => line.push_str(&format!(" = {default}")),
        (None, Some(placeholder)) => line.push_str(&format!(" ({placeholder})")),
        (None, None) => {}
    }
    if field.sensitive {
        line.push_str(" [sensitive]");
    }
    if field.is_pinned() {
        line.push_str(" [fixed]");
    }
    line
}
