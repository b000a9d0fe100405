//! Configuration file handling: day bounds for free-time queries.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use crate::utils::time::parse_clock;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_day_start")]
    pub day_start: String,

    #[serde(default = "default_day_end")]
    pub day_end: String,
}

fn default_day_start() -> String {
    "00:00".to_string()
}

fn default_day_end() -> String {
    "23:59".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            day_start: default_day_start(),
            day_end: default_day_end(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rdayplan")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rdayplan")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdayplan.conf")
    }

    /// Load configuration from file, or return defaults if absent or
    /// unreadable.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists()
            && let Ok(content) = fs::read_to_string(&path)
            && let Ok(cfg) = serde_yaml::from_str(&content)
        {
            return cfg;
        }

        Config::default()
    }

    /// Write the configuration file, creating the directory if needed.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        Ok(())
    }

    /// Day bounds for free-time queries; unparsable values fall back to the
    /// whole day.
    pub fn day_bounds(&self) -> (ClockTime, ClockTime) {
        let start = parse_clock(&self.day_start).unwrap_or(ClockTime::DAY_START);
        let end = parse_clock(&self.day_end).unwrap_or(ClockTime::DAY_END);

        (start, end)
    }
}
