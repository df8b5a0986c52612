use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install interactively:\n    jetsong install gitlab\n\n\
                   Merge into Cursor's config:\n    jetsong install gitlab --tool cursor\n\n\
                   Without prompts:\n    jetsong install jira --tool codex --env JIRA_TOKEN=xxx --no-input\n\n\
                   Link a skill into a project:\n    jetsong install code-review --project ./my-app")]
pub struct InstallArgs {
    /// Package id
    pub id: String,

    /// Tool to configure an MCP server for (claude-code, cursor, codex)
    #[arg(long, short = 't', value_name = "TOOL")]
    pub tool: Option<String>,

    /// Project to link a skill into (defaults to current directory)
    #[arg(long, short = 'p', value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Environment value for the server (repeatable)
    #[arg(long = "env", short = 'e', value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Never prompt; unset fields use their defaults
    #[arg(long)]
    pub no_input: bool,
}
