//! Configuration file support for gymcheck.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/gymcheck/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub roster: RosterConfig,
}

/// Data file locations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Relative paths resolve against `data_dir`
    #[serde(default = "default_roster_file")]
    pub roster_file: PathBuf,

    #[serde(default = "default_workout_log_file")]
    pub workout_log_file: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            roster_file: default_roster_file(),
            workout_log_file: default_workout_log_file(),
        }
    }
}

impl DataConfig {
    pub fn roster_path(&self) -> PathBuf {
        self.data_dir.join(&self.roster_file)
    }

    pub fn workout_log_path(&self) -> PathBuf {
        self.data_dir.join(&self.workout_log_file)
    }
}

/// Startup roster policy
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct RosterConfig {
    /// Abort instead of continuing with an empty roster when the roster
    /// file is missing or malformed
    #[serde(default)]
    pub require_roster: bool,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gymcheck")
}

fn default_roster_file() -> PathBuf {
    PathBuf::from("paying_customers.txt")
}

fn default_workout_log_file() -> PathBuf {
    PathBuf::from("workout_sheet.txt")
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            other => {
                tracing::info!("No config file found at {:?}, using defaults", other);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("gymcheck").join("config.toml"))
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("roster_file", &self.data.roster_file),
            ("workout_log_file", &self.data.workout_log_file),
        ] {
            if value.as_os_str().is_empty() {
                return Err(Error::Config(format!("data.{} must not be empty", key)));
            }
        }
        Ok(())
    }
}
