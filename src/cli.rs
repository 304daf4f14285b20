use crate::config::{Config, ListFormat};
use crate::manager::{config as config_cmd, crud, query, serve};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "proddb")]
#[command(about = "Manage products and their processing times")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Data file to use instead of the configured one")]
    pub data_file: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self, config: Config, config_path: &Path) -> Result<()> {
        match self {
            Commands::List(args) => query::handle_list_command(config, &args)?,
            Commands::Search(args) => query::handle_search_command(config, &args)?,
            Commands::Add(args) => crud::handle_add_command(config, &args)?,
            Commands::Edit(args) => crud::handle_edit_command(config, &args)?,
            Commands::Delete(args) => crud::handle_delete_command(config, &args)?,
            Commands::Show(args) => crud::handle_show_command(config, &args)?,
            Commands::Calc(args) => query::handle_calc_command(&args),
            Commands::Serve => serve::handle_serve_command(config)?,
            Commands::Config(args) => {
                config_cmd::handle_config_command(config, args.command, config_path)?
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all products
    List(ListArgs),

    /// Search products by name
    Search(SearchArgs),

    /// Add a new product
    Add(AddArgs),

    /// Edit an existing product
    Edit(EditArgs),

    /// Delete one or more products
    Delete(DeleteArgs),

    /// Show product details
    Show(ShowArgs),

    /// Evaluate a time formula without saving anything
    Calc(CalcArgs),

    /// Answer JSON requests on stdin, one per line
    Serve,

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(short, long)]
    pub format: Option<ListFormat>,
}

#[derive(Args)]
pub struct SearchArgs {
    #[arg(help = "Part of the product name, case-insensitive")]
    pub query: String,

    #[arg(short, long)]
    pub format: Option<ListFormat>,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(short = 'c', long = "calc", help = "Time formula, e.g. \"1.5+2\"")]
    pub time_calculation: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    #[arg(help = "Product ID")]
    pub id: u64,

    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(short = 'c', long = "calc", help = "Time formula, e.g. \"1.5+2\"")]
    pub time_calculation: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    #[arg(required = true, num_args = 1.., help = "Product IDs")]
    pub ids: Vec<u64>,

    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "Product ID")]
    pub id: u64,
}

#[derive(Args)]
pub struct CalcArgs {
    #[arg(help = "Time formula, e.g. \"1.5+2\"")]
    pub formula: String,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,
}
