use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main duelbot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    /// Override for the log directory (supports ~ and env vars)
    pub log_dir: Option<PathBuf>,
    pub bot: BotConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BotConfig {
    /// Fixed RNG seed; seeded from OS entropy when absent
    pub seed: Option<u64>,
    /// Stop after this many turns; run until killed when absent
    pub max_turns: Option<u64>,
}

/// Log verbosity
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }

    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }

    /// At least as verbose as debug
    pub fn verbose(self) -> Self {
        match self {
            LogLevel::Trace => LogLevel::Trace,
            _ => LogLevel::Debug,
        }
    }
}

/// Result of walking the config fallback chain
#[derive(Debug)]
pub struct Loaded {
    pub config: Config,
    /// File the config came from; `None` means defaults
    pub source: Option<PathBuf>,
    /// Candidates that existed but failed to load, in lookup order
    pub warnings: Vec<String>,
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// Runs before logging is set up, so skipped candidates are returned as
    /// warnings for the caller to log.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Loaded> {
        // An explicit path must load or fail
        if let Some(path) = config_path {
            let config =
                Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()))?;
            return Ok(Loaded {
                config,
                source: Some(path.clone()),
                warnings: Vec::new(),
            });
        }

        let mut candidates = Vec::new();
        if let Ok(env_path) = std::env::var("DUELBOT_CONFIG") {
            candidates.push(("DUELBOT_CONFIG".to_string(), PathBuf::from(env_path)));
        }
        if let Ok(dir) = std::env::var("DUELBOT_DIR") {
            candidates.push(("DUELBOT_DIR".to_string(), PathBuf::from(dir).join("duelbot.yaml")));
        }
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("duelbot").join("duelbot.yaml");
            candidates.push((path.display().to_string(), path));
        }
        // ./duelbot.yaml (for development)
        candidates.push(("local config".to_string(), PathBuf::from("duelbot.yaml")));

        Ok(Self::load_first(candidates))
    }

    fn load_first(candidates: Vec<(String, PathBuf)>) -> Loaded {
        let mut warnings = Vec::new();

        for (label, path) in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => {
                    return Loaded {
                        config,
                        source: Some(path),
                        warnings,
                    };
                }
                Err(e) => warnings.push(format!("Failed to load config from {}: {:#}", label, e)),
            }
        }

        Loaded {
            config: Self::default(),
            source: None,
            warnings,
        }
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Directory the log file is written to
    pub fn log_dir(&self) -> PathBuf {
        match &self.log_dir {
            Some(dir) => Self::expand_path(dir),
            None => dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("duelbot")
                .join("logs"),
        }
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }
}
