//! wcgen - registry, type and bundle generation for web components.

mod bundle;
mod cli;
mod component;
mod config;
mod logger;
mod pipeline;
mod render;
mod scaffold;
mod utils;
mod watch;

use std::sync::Arc;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::WcgenConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = Arc::new(WcgenConfig::load(&cli)?);

    match &cli.command {
        Commands::List => cli::build::list_components(&config),
        Commands::Build { .. } => cli::build::build(config),
        Commands::Watch { .. } => cli::watch::watch(config),
        Commands::Scaffold { dry } => cli::init::scaffold(&config, *dry),
        Commands::Init => cli::init::init(config),
    }
}
