use clap::{Parser, Subcommand};

/// CLI arguments parser using `clap`
#[derive(Parser, Debug)]
#[command(name = "gitwc", version, about)]
pub struct Cli {
    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand chosen to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Toggles work-commit mode, driving one interactive commit workflow
    Toggle,
    /// Adds an identity alias without the interactive workflow
    Add {
        /// Alias name, the key recorded under [alias]
        name: String,
        /// Git username the alias commits under
        user_name: String,
        /// Git email the alias commits under
        user_email: String,
    },
    /// Lists identity aliases recorded in the Git config file
    List,
    /// Shows the work-commit mode indicator
    Status,
    /// Creates a work commit under the current identity, no alias involved
    Commit {
        /// Commit message; falls back to the configured default
        #[arg(short, long)]
        message: Option<String>,
    },
}
