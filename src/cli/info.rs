use clap::Parser;

/// Arguments for the info command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show package details:\n    jetsong info gitlab")]
pub struct InfoArgs {
    /// Package id
    pub id: String,
}
