// Configuration operations

use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils;
use crate::utils::error::{AppResult, FlowResult, handle_flow};
use std::path::Path;

pub fn handle_config_command(
    config: Config,
    command: Option<ConfigCommands>,
    config_path: &Path,
) -> AppResult<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config),
        Some(ConfigCommands::Path) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(ConfigCommands::Reset) => handle_reset_command(config_path),
        None => handle_config_help(config_path),
    }
}

fn handle_show_command(config: &Config) -> AppResult<()> {
    println!("⚙️  proddb Configuration");
    println!("=======================");

    println!("General:");
    println!("  Data file: {}", config.general.data_file.display());
    println!("  Storage: {:?}", config.general.storage);
    println!("  Color: {}", config.general.color);
    println!("  List format: {:?}", config.general.list_format);

    Ok(())
}

fn handle_config_help(config_path: &Path) -> AppResult<()> {
    println!("⚙️  Configuration Management");
    println!("==========================");
    println!("Available configuration commands:");
    println!("  proddb config show    - Show current configuration");
    println!("  proddb config path    - Print configuration file location");
    println!("  proddb config reset   - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", config_path.display());
    Ok(())
}

fn handle_reset_command(config_path: &Path) -> AppResult<()> {
    if utils::prompt_yes_no(
        "Reset configuration to defaults? This overwrites your current settings.",
    )? {
        Config::default().save_to(config_path)?;
        handle_flow(FlowResult::Success("Configuration reset to defaults".to_string()));
    } else {
        handle_flow(FlowResult::Cancelled("Reset cancelled".to_string()));
    }
    Ok(())
}
