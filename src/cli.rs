use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "duelbot",
    about = "Example future-duel bot: writes one-byte actions to stdout",
    version = env!("GIT_DESCRIBE"),
    after_help = "Runs `play` when no subcommand is given.\n\nLogs go to duelbot/logs/duelbot.log under the platform data dir, or to `log_dir` if set in the config."
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to duelbot.yaml config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true, help = "Log at debug level or finer")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a duel over stdout
    Play {
        /// RNG seed (overrides bot.seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many turns (overrides bot.max_turns)
        #[arg(long)]
        turns: Option<u64>,
    },

    /// Show the action code table
    Codes {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["duelbot"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_play_overrides() {
        let cli = Cli::try_parse_from(["duelbot", "-v", "play", "--seed", "5", "--turns", "30"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Play { seed, turns }) => {
                assert_eq!(seed, Some(5));
                assert_eq!(turns, Some(30));
            }
            _ => panic!("expected play"),
        }
    }

    #[test]
    fn test_codes_format() {
        let cli = Cli::try_parse_from(["duelbot", "codes", "-o", "yaml"]).unwrap();
        match cli.command {
            Some(Commands::Codes { format }) => assert_eq!(format, Some(OutputFormat::Yaml)),
            _ => panic!("expected codes"),
        }
    }

    #[test]
    fn test_help_names_log_dir_override() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("`log_dir`"));
        assert!(!help.contains("~/.local/share"));
    }

    #[test]
    fn test_explicit_format_wins() {
        assert_eq!(OutputFormat::resolve(Some(OutputFormat::Text)), OutputFormat::Text);
    }
}
