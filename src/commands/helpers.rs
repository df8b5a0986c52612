//! Command helper utilities

use std::path::PathBuf;

use console::Style;

use crate::config::Settings;
use crate::error::Result;
use crate::host::HostId;
use crate::registry::{PackageDescriptor, PackageKind, Registry};

/// Resolve settings and load the catalog they point at
pub fn load_registry(root: Option<PathBuf>) -> Result<(Settings, Registry)> {
    let settings = Settings::load(root)?;
    let registry = Registry::load_from_root(&settings.root)?;
    Ok((settings, registry))
}

/// Parse an optional `--type` value
pub fn parse_kind(kind: Option<&str>) -> Result<Option<PackageKind>> {
    kind.map(str::parse).transpose()
}

/// Compatibility labels, e.g. `CC Cu Cx`, supported hosts only
pub fn compat_labels(package: &PackageDescriptor) -> String {
    HostId::ALL
        .into_iter()
        .filter(|host| package.compatibility.supports(*host))
        .map(HostId::short_label)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print packages as an aligned table
pub fn print_packages(packages: &[&PackageDescriptor]) {
    let name_width = packages
        .iter()
        .map(|p| console::measure_text_width(&p.title()))
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let header = Style::new().bold();
    println!(
        "{}",
        header.apply_to(format!(
            "{:<6} {} {:<8} {:>5} {:>5}  {}",
            "Type",
            console::pad_str("Name", name_width, console::Alignment::Left, None),
            "Version",
            "DL",
            "Star",
            "Tools"
        ))
    );

    let kind_style = Style::new().cyan();
    let dim = Style::new().dim();
    for package in packages {
        println!(
            "{} {} {:<8} {:>5} {:>5}  {}",
            kind_style.apply_to(format!("{:<6}", package.kind.label())),
            Style::new().bold().yellow().apply_to(console::pad_str(
                &package.title(),
                name_width,
                console::Alignment::Left,
                None
            )),
            package.version,
            package.stats.installs,
            package.stats.stars,
            Style::new().green().apply_to(compat_labels(package))
        );
        println!(
            "       {} {}",
            dim.apply_to(format!("{}:", package.id)),
            dim.apply_to(&package.description)
        );
    }
}
