use colored::*;
use eyre::Result;

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::Config;

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "duelbot configuration".bold());
            println!();

            println!("log_level: {}", config.log_level.as_filter());
            println!("log_dir: {}", config.log_dir().display());
            println!();

            println!("{}:", "bot".cyan());
            println!("  seed: {}", optional(config.bot.seed));
            println!("  max_turns: {}", optional(config.bot.max_turns));
        }
    }

    Ok(())
}

fn optional(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "(none)".to_string())
}
