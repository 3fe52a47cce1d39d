//! Config command implementation

use crate::cli::parser::{ConfigArgs, ConfigCommands};
use crate::config::{defaults, ConfigManager};
use crate::utils::{Result, VigilError};

pub fn execute(args: ConfigArgs) -> Result<()> {
    match args.command {
        Some(ConfigCommands::Show) | None => show_config(),
        Some(ConfigCommands::Path) => show_path(),
        Some(ConfigCommands::Reset) => reset_config(),
    }
}

fn show_config() -> Result<()> {
    let config = ConfigManager::load_or_create()
        .map_err(|e| VigilError::config_error(format!("Failed to load config: {}", e)))?;
    let json = serde_json::to_string_pretty(&config)?;
    println!("{}", json);
    Ok(())
}

fn show_path() -> Result<()> {
    let path = ConfigManager::get_config_path()
        .map_err(|e| VigilError::config_error(format!("Failed to resolve config path: {}", e)))?;
    println!("{}", path);
    Ok(())
}

fn reset_config() -> Result<()> {
    let config = defaults::default_config();
    ConfigManager::save(&config)
        .map_err(|e| VigilError::config_error(format!("Failed to save config: {}", e)))?;
    println!("✅ configuration reset to defaults");
    Ok(())
}
