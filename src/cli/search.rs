use clap::Parser;

/// Arguments for the search command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Search everything:\n    jetsong search review\n\n\
                  Search MCP servers only:\n    jetsong search lab --type mcp")]
pub struct SearchArgs {
    /// Case-insensitive text matched against name, description and tags
    pub query: String,

    /// Only show packages of this type (mcp or skill)
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub kind: Option<String>,
}
