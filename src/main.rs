//! Jetsong - internal MCP server and skill registry
//!
//! Browses a static package catalog and installs its packages into AI coding
//! tools: MCP servers are configured for Claude Code, Cursor or Codex, skills
//! are linked into a project's Claude Code commands.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod commands;
mod common;
mod config;
mod env;
mod error;
mod generator;
mod host;
mod installer;
mod progress;
mod registry;
mod transaction;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::List(args) => commands::list::run(cli.root, args),
        Commands::Search(args) => commands::search::run(cli.root, args),
        Commands::Info(args) => commands::info::run(cli.root, args),
        Commands::Install(args) => commands::install::run(cli.root, args),
        Commands::Config(args) => commands::config::run(cli.root, args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log filter for a `-v` count; `RUST_LOG` takes precedence
fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,jetsong=debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
