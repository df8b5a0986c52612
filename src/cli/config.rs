use clap::Parser;

/// Arguments for the config command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Combined Claude Code config:\n    jetsong config gitlab jira --tool claude-code\n\n\
                   Codex config with values:\n    jetsong config loki jira --tool codex --env JIRA_TOKEN=xxx\n\n\
                   Shareable snippet:\n    jetsong config gitlab --tool cursor --placeholder-root")]
pub struct ConfigArgs {
    /// MCP server ids, rendered in the given order
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,

    /// Tool to render configuration for (claude-code, cursor, codex)
    #[arg(long, short = 't', value_name = "TOOL")]
    pub tool: String,

    /// Environment value for the servers (repeatable)
    #[arg(long = "env", short = 'e', value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Write `<root>` instead of the registry root in entrypoint paths
    #[arg(long)]
    pub placeholder_root: bool,
}
