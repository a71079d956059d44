//! rTimetable library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Shell => cli::commands::shell::handle(cfg),
        Commands::Ping => cli::commands::ping::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once; CLI overrides are applied on top.
    let mut cfg = Config::load();

    if let Some(api) = &cli.api {
        cfg.api_url = api.clone();
    }
    if let Some(secs) = cli.timeout {
        cfg.timeout_secs = secs;
    }

    dispatch(&cli, &cfg)
}
