use crate::time::{local_timezone, resolve_timezone, TimeUnit};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "UNIXTIME_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "unixtime.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Zone used when no --tz is given; the system zone when unset
    #[serde(default)]
    pub default_timezone: Option<String>,

    // Forces a unit instead of detection when set
    #[serde(default)]
    pub default_unit: Option<TimeUnit>,

    // Default tracing filter, overridden by RUST_LOG and -v
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.timezone()?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            default_timezone: None,
            default_unit: None,
            log_level: default_log_level(),
        }
    }

    /// Explicit path, then `$UNIXTIME_CONFIG`, then `./unixtime.toml`, then defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load_from_file(PathBuf::from(path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load_from_file(local);
        }
        Ok(Self::empty())
    }

    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        match &self.default_timezone {
            Some(name) => {
                resolve_timezone(name).map_err(|e| ConfigError::Invalid(e.to_string()))
            }
            None => Ok(local_timezone()),
        }
    }
}
