pub mod commands;
pub mod parser;


pub use parser::{Cli, Commands};

use crate::config::ConfigManager;
use crate::utils::{Result, VigilError};

pub fn execute_command(cli: Cli) -> Result<()> {
    execute_command_with_config(cli, None)
}

pub fn execute_command_with_config(
    cli: Cli,
    test_config: Option<crate::config::Config>,
) -> Result<()> {
    let config = match cli.command {
        Some(Commands::Config(_))
        | Some(Commands::Completion(_))
        | Some(Commands::Unknown(_))
        | None => None,
        _ => match test_config {
            Some(cfg) => Some(cfg),
            None => Some(ConfigManager::load_or_create().map_err(|e| {
                VigilError::config_error(format!("Failed to load config: {}", e))
            })?),
        },
    };

    match cli.command {
        Some(Commands::Start) => commands::start::execute(config.unwrap()),
        Some(Commands::Stop) => commands::stop::execute(config.unwrap()),
        Some(Commands::Restart) => commands::restart::execute(config.unwrap()),
        Some(Commands::Status) => commands::status::execute(config.unwrap()),
        Some(Commands::Config(args)) => commands::config::execute(args),
        Some(Commands::Completion(args)) => commands::completion::execute(args),
        Some(Commands::Unknown(args)) => commands::usage::execute(args),
        None => commands::usage::execute(vec![]),
    }
}
