use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.esg-riskr/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Reference dataset settings.
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// Default values offered when a score is prompted for interactively.
    #[serde(default)]
    pub defaults: InputDefaults,
}

#[derive(Debug, Deserialize)]
pub struct DatasetConfig {
    /// Path to the reference CSV, resolved relative to the working directory.
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("SP 500 ESG Risk Ratings.csv")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

/// Interactive-prompt defaults. The built-ins mirror the dataset's typical
/// mid-range company.
#[derive(Debug, Deserialize)]
pub struct InputDefaults {
    #[serde(default = "default_environment")]
    pub environment: f64,
    #[serde(default = "default_social")]
    pub social: f64,
    #[serde(default = "default_governance")]
    pub governance: f64,
    #[serde(default = "default_controversy")]
    pub controversy: f64,
}

fn default_environment() -> f64 {
    15.0
}

fn default_social() -> f64 {
    12.0
}

fn default_governance() -> f64 {
    10.0
}

fn default_controversy() -> f64 {
    1.0
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            social: default_social(),
            governance: default_governance(),
            controversy: default_controversy(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            defaults: InputDefaults::default(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.esg-riskr/config.toml`
/// 3. `~/.config/esg-riskr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let local_config = Path::new(".esg-riskr").join("config.toml");
    if local_config.exists() {
        let content = std::fs::read_to_string(&local_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("esg-riskr").join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
