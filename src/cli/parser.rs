use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "Lifecycle supervisor for a single background daemon")]
#[command(
    version,
    long_about = "Starts, stops and restarts one configured daemon, tracking it through a PID file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the daemon detached and record its PID
    Start,
    /// Signal the daemon to shut down and kill leftover workers
    Stop,
    /// Stop the daemon, wait out the grace period, start it again
    Restart,
    /// Report whether the daemon is running
    Status,
    /// Inspect or reset the configuration
    Config(ConfigArgs),
    /// Generate shell completion script
    Completion(CompletionArgs),
    /// Unrecognized commands print usage and exit cleanly
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print configuration file path
    Path,
    /// Reset configuration to defaults
    Reset,
}

#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completion for
    pub shell: Shell,
}
