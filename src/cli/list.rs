use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all packages:\n    jetsong list\n\n\
                  List only MCP servers:\n    jetsong list --type mcp\n\n\
                  Most starred first:\n    jetsong list --sort stars")]
pub struct ListArgs {
    /// Only show packages of this type (mcp or skill)
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub kind: Option<String>,

    /// Sort order: installs, stars or name (default: catalog order)
    #[arg(long, short = 's', value_name = "ORDER")]
    pub sort: Option<String>,
}
