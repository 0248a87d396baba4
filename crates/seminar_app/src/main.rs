mod cli;
mod commands;
mod config;
mod error;
mod persistence;
mod source;

use std::io;

use anyhow::Context;
use clap::Parser;

use crate::cli::Cli;
use crate::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    cli.apply_overrides(&mut config);

    engine_logging::initialize(
        config.log_level.into(),
        config.log_destination.into(),
        &config.log_file,
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &config, &mut out)?;
    Ok(())
}
