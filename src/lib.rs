//! caltrack library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod calendar;
pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Collect { .. } => cli::commands::collect::handle(&cli.command, cfg),
        Commands::Chart { .. } => cli::commands::chart::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // CSV override from the command line wins over the config file.
    if let Some(custom_csv) = &cli.csv {
        cfg.csv_file = custom_csv.clone();
    }

    dispatch(&cli, &cfg)
}
