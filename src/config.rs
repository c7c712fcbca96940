//! Runtime configuration from the environment and logger setup.
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file by the binary. Command line flags override them.

use clap::ValueEnum;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable selecting the default output format.
pub const ENV_OUTPUT: &str = "SUBNET_MASK_CALC_OUTPUT";
/// Environment variable pointing at the log4rs YAML file.
pub const ENV_LOG_CONFIG: &str = "SUBNET_MASK_CALC_LOG_CONFIG";
/// Log config used when [`ENV_LOG_CONFIG`] is unset.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How reports are written to stdout.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-layout text report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output: OutputFormat,
    pub log_config: PathBuf,
    /// Environment values that were ignored, logged once the logger is up.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputFormat::default(),
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unknown values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(value) = lookup(ENV_OUTPUT) {
            match value.parse() {
                Ok(output) => config.output = output,
                Err(e) => config.warnings.push(format!("Ignoring {ENV_OUTPUT}: {e}")),
            }
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(path);
        }
        config
    }
}

/// Initialise log4rs from `config.log_config`, or a stderr console logger
/// when the file does not exist.
///
/// `verbose` skips the file and logs at Debug to stderr. Any
/// [`Config::warnings`] are logged once the logger is installed.
pub fn init_logging(config: &Config, verbose: bool) -> Result<(), Box<dyn Error>> {
    if config.log_config.exists() && !verbose {
        log4rs::init_file(&config.log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {:?}: {e}", config.log_config))?;
    } else {
        let level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        log4rs::init_config(console_config(level)?)?;
    }
    log::debug!("Logging initialised, config={:?}", config);
    for warning in &config.warnings {
        log::warn!("{warning}");
    }
    Ok(())
}

fn console_config(level: LevelFilter) -> Result<LogConfig, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
