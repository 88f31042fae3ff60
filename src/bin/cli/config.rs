use std::{fs, path::{Path, PathBuf}};
use serde::{Serialize, Deserialize};
use toml;
use anyhow::{self, Context};

const DEFAULT_STORE: &str = "savings.json";

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub path: PathBuf
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig { path: PathBuf::from(DEFAULT_STORE) }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: log::LevelFilter
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { level: log::LevelFilter::Warn }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig
}

impl AppConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }

    /// The config at `filepath`, or defaults when none was given.
    pub fn read_or_default(filepath: Option<&Path>) -> anyhow::Result<Self> {
        match filepath {
            Some(path) => AppConfig::read(path),
            None => Ok(AppConfig::default())
        }
    }
}
