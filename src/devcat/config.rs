use crate::error::{DevcatError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "devices.txt";
const DEFAULT_SAVE_FILE: &str = "devices_saved.txt";
const DEFAULT_SCREEN_THRESHOLD: f64 = 15.0;

/// Configuration for devcat, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DevcatConfig {
    /// Catalog file loaded at startup
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// File mutating commands write to
    #[serde(default = "default_save_file")]
    pub save_file: String,

    /// Screen size (inches) above which a laptop counts as large in reports
    #[serde(default = "default_screen_threshold")]
    pub screen_threshold: f64,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_save_file() -> String {
    DEFAULT_SAVE_FILE.to_string()
}

fn default_screen_threshold() -> f64 {
    DEFAULT_SCREEN_THRESHOLD
}

impl Default for DevcatConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            save_file: default_save_file(),
            screen_threshold: DEFAULT_SCREEN_THRESHOLD,
        }
    }
}

/// The keys accepted by `set`/`get`.
pub const CONFIG_KEYS: [&str; 3] = ["data-file", "save-file", "screen-threshold"];

impl DevcatConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DevcatError::Io)?;
        let config: DevcatConfig =
            serde_json::from_str(&content).map_err(DevcatError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DevcatError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DevcatError::Serialization)?;
        fs::write(config_path, content).map_err(DevcatError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data-file" => Ok(self.data_file.clone()),
            "save-file" => Ok(self.save_file.clone()),
            "screen-threshold" => Ok(self.screen_threshold.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => self.data_file = non_empty(key, value)?,
            "save-file" => self.save_file = non_empty(key, value)?,
            "screen-threshold" => {
                self.screen_threshold = value.trim().parse().map_err(|_| {
                    DevcatError::Config(format!("screen-threshold must be a number, got '{}'", value))
                })?
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(DevcatError::Config(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}

fn unknown_key(key: &str) -> DevcatError {
    DevcatError::Config(format!(
        "Unknown config key: {} (expected one of {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
