use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default verbosity when neither the config nor `RUST_LOG` sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// How the CLI prints its results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for the `nurl` command
///
/// Read from `nurl.toml` (or the file given with `--config`) and then from
/// `NURL_*` environment variables, which take precedence.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NurlConfig {
    /// Directory for log files; logs go to stderr when unset
    pub log_dir: Option<PathBuf>,

    /// Filter used when `RUST_LOG` is not set
    pub log_level: String,

    pub output: OutputFormat,
}

impl Default for NurlConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl NurlConfig {
    /// Loads the configuration; a missing default file is not an error but
    /// an explicitly named one is
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("nurl").required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("NURL"))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}
