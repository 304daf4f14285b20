use anyhow::Result;
use clap::Parser;

use proddb::cli::Cli;
use proddb::config::Config;
use proddb::telemetry;
use proddb::utils::error::{AppError, report_error};

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_logging(cli.debug);

    let config_path = cli.config.clone().unwrap_or_else(Config::config_file_path);

    // Missing config files are created with defaults
    let mut config = Config::load_custom(&config_path)?;

    if let Some(data_file) = cli.data_file {
        config.general.data_file = data_file;
    }
    if !config.general.color {
        colored::control::set_override(false);
    }

    if let Err(e) = cli.command.execute(config, &config_path) {
        if let Some(app_error) = e.downcast_ref::<AppError>() {
            report_error(app_error);
            std::process::exit(1);
        }
        return Err(e);
    }

    Ok(())
}
