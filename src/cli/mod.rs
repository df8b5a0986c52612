//! CLI definitions using clap derive API
//!
//! One submodule per command's argument types:
//! - list: List command arguments
//! - search: Search command arguments
//! - info: Info command arguments
//! - install: Install command arguments
//! - config: Config command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub mod config;
pub mod info;
pub mod install;
pub mod list;
pub mod search;

pub use config::ConfigArgs;
pub use info::InfoArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use search::SearchArgs;

/// Jetsong - internal MCP server and skill registry
///
/// Browse the package catalog and install packages into AI coding tools.
#[derive(Parser, Debug)]
#[command(
    name = "jetsong",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Browse and install MCP servers and skills for AI coding tools",
    long_about = "Jetsong installs packages from an internal registry: MCP servers are \
                  configured for Claude Code, Cursor or Codex, skills are linked into a \
                  project's Claude Code commands.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  jetsong list --type mcp                  \x1b[90m# List MCP servers\x1b[0m\n   \
                  jetsong search gitlab                    \x1b[90m# Search the catalog\x1b[0m\n   \
                  jetsong info jira                        \x1b[90m# Show package details\x1b[0m\n   \
                  jetsong install gitlab --tool cursor     \x1b[90m# Configure Cursor\x1b[0m\n   \
                  jetsong config gitlab jira --tool codex  \x1b[90m# Print combined config\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Registry root holding registry.json (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "JETSONG_ROOT")]
    pub root: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List packages in the catalog
    List(ListArgs),

    /// Search packages by name, description or tag
    Search(SearchArgs),

    /// Show package details
    Info(InfoArgs),

    /// Install a package into a tool
    Install(InstallArgs),

    /// Print configuration for several MCP servers without installing
    Config(ConfigArgs),
}
