use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{EngineOptions, LoadOptions};

pub const DEFAULT_LOG_FILE: &str = "sokoban.log";

/// Settings for the terminal game. Read from a JSON file, then overridden from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Level to play. The built-in level is used when unset.
    pub level_path: Option<PathBuf>,
    pub pad_ragged_rows: bool,
    pub require_closed_perimeter: bool,
    pub lock_after_win: bool,
    pub log_file: PathBuf,
    /// Default filter when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            level_path: None,
            pad_ragged_rows: false,
            require_closed_perimeter: false,
            lock_after_win: true,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: "info".to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error("argument {0} expects a value")]
    MissingValue(String),
}

impl GameConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Builds the config from program arguments (without the program name).
    /// `--config PATH` is read first wherever it appears; the other flags override it.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cli = CliArgs::parse(args)?;

        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => GameConfig::default(),
        };

        if cli.level_path.is_some() {
            config.level_path = cli.level_path;
        }
        config.pad_ragged_rows |= cli.pad_ragged_rows;
        config.require_closed_perimeter |= cli.require_closed_perimeter;
        if cli.no_lock {
            config.lock_after_win = false;
        }
        if let Some(log_file) = cli.log_file {
            config.log_file = log_file;
        }
        if let Some(log_level) = cli.log_level {
            config.log_level = log_level;
        }

        Ok(config)
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            load: LoadOptions {
                pad_ragged_rows: self.pad_ragged_rows,
                require_closed_perimeter: self.require_closed_perimeter,
            },
            lock_after_win: self.lock_after_win,
        }
    }
}

/// Flags as given on the command line, before they are laid over a config file.
#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    level_path: Option<PathBuf>,
    pad_ragged_rows: bool,
    require_closed_perimeter: bool,
    no_lock: bool,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
}

impl CliArgs {
    fn parse<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cli = CliArgs::default();
        let mut args = args.into_iter().map(Into::<String>::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    cli.config = Some(PathBuf::from(value));
                }
                "--pad-ragged" => cli.pad_ragged_rows = true,
                "--closed" => cli.require_closed_perimeter = true,
                "--no-lock" => cli.no_lock = true,
                "--log-file" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    cli.log_file = Some(PathBuf::from(value));
                }
                "--log-level" => {
                    cli.log_level = Some(
                        args.next()
                            .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?,
                    );
                }
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownArgument(flag.to_string()));
                }
                path => cli.level_path = Some(PathBuf::from(path)),
            }
        }
        Ok(cli)
    }
}
