use clap::Parser;
use eyre::{Context, Result};
use log::{info, warn};
use std::fs;

mod action;
mod bot;
mod cli;
mod commands;
mod config;

use cli::{Cli, Commands, OutputFormat};
use config::{Config, LogLevel};

fn setup_logging(log_level: LogLevel, config: &Config) -> Result<()> {
    // Stdout carries the duel protocol, so logs only ever go to a file
    let log_dir = config.log_dir();

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("duelbot.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG env var takes precedence, otherwise use config log_level
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(log_level.to_level_filter());
    }

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    info!(
        "Log level: {} (from {})",
        log_level.as_filter(),
        if std::env::var("RUST_LOG").is_ok() { "RUST_LOG env" } else { "config" }
    );
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        None => commands::play::run(None, None, &config),
        Some(Commands::Play { seed, turns }) => commands::play::run(seed, turns, &config),
        Some(Commands::Codes { format }) => commands::codes::run(OutputFormat::resolve(format)),
        Some(Commands::Config { action }) => commands::config::run(action, &config),
        Some(Commands::Completions { shell }) => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config loads before the logger exists; its warnings are replayed below
    let loaded = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let config = loaded.config;

    // A missing or read-only log location must not keep the bot from playing
    let log_level = if cli.verbose { config.log_level.verbose() } else { config.log_level };
    if let Err(e) = setup_logging(log_level, &config) {
        eprintln!("duelbot: logging disabled: {:#}", e);
    }

    for warning in &loaded.warnings {
        warn!("{}", warning);
    }
    match &loaded.source {
        Some(path) => info!("Loaded config from: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    run(cli, config).context("Command failed")?;

    Ok(())
}
