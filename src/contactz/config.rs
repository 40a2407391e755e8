use crate::error::{ContactzError, Result};
use crate::store::fs::DEFAULT_CONTACTS_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

pub const KEY_CONTACTS_FILE: &str = "contacts-file";
pub const KEY_LOG_LEVEL: &str = "log-level";

/// Configuration for contactz, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactzConfig {
    /// Where the address book lives. Relative paths resolve against the working directory.
    #[serde(default = "default_contacts_file")]
    pub contacts_file: PathBuf,

    /// Log level used when `--verbose` is not given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_contacts_file() -> PathBuf {
    PathBuf::from(DEFAULT_CONTACTS_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ContactzConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            log_level: default_log_level(),
        }
    }
}

impl ContactzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ContactzError::Io)?;
        let config: ContactzConfig =
            serde_json::from_str(&content).map_err(ContactzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ContactzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ContactzError::Serialization)?;
        fs::write(config_path, content).map_err(ContactzError::Io)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_CONTACTS_FILE, KEY_LOG_LEVEL]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_CONTACTS_FILE => Some(self.contacts_file.display().to_string()),
            KEY_LOG_LEVEL => Some(self.log_level.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_CONTACTS_FILE => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(ContactzError::Config(
                        "contacts-file cannot be empty".to_string(),
                    ));
                }
                self.contacts_file = PathBuf::from(value);
            }
            KEY_LOG_LEVEL => {
                let level = value.trim().to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(ContactzError::Config(format!(
                        "Invalid log level '{}' (expected one of: {})",
                        value,
                        LOG_LEVELS.join(", ")
                    )));
                }
                self.log_level = level;
            }
            _ => {
                return Err(ContactzError::Config(format!(
                    "Unknown config key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}
