use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{BASE_URL_ENV, CONFIG_FILE, DEFAULT_BASE_URL};
use crate::error::{TeamError, TeamResult};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub base_url: Option<String>,
    /// JSON file with the rows of the users table.
    #[serde(default)]
    pub users_file: Option<PathBuf>,
}

pub fn config_path() -> TeamResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| TeamError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config() -> TeamResult<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> TeamResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)?;
    serde_json::from_str(&config_str)
        .map_err(|e| TeamError::ConfigError(format!("{}: {}", path.display(), e)))
}

pub fn save_config(config: &Config) -> TeamResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> TeamResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

/// Base URL of the team service: environment first, then the config file, then the default.
pub fn get_base_url(config: &Config) -> String {
    if let Ok(url) = env::var(BASE_URL_ENV) {
        if !url.trim().is_empty() {
            return normalize_base_url(&url);
        }
    }

    config
        .base_url
        .as_deref()
        .map(normalize_base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
