use crate::validation::Limits;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the location of `config.toml`
pub const CONFIG_PATH_ENV: &str = "ACE_EVENTS_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub title_min_len: usize,
    pub description_min_len: usize,
    pub max_tags: usize,
    pub label_max_len: usize,
    pub max_price: f64,
    pub require_agreement: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let limits = Limits::default();
        Self {
            title_min_len: limits.title_min_len,
            description_min_len: limits.description_min_len,
            max_tags: limits.max_tags,
            label_max_len: limits.label_max_len,
            max_price: limits.max_price,
            require_agreement: limits.require_agreement,
        }
    }
}

impl From<&ValidationConfig> for Limits {
    fn from(config: &ValidationConfig) -> Self {
        Limits {
            title_min_len: config.title_min_len,
            description_min_len: config.description_min_len,
            max_tags: config.max_tags,
            label_max_len: config.label_max_len,
            max_price: config.max_price,
            require_agreement: config.require_agreement,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Times used by `period add` when none are given
    pub default_period_start: String,
    pub default_period_end: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            default_period_start: "09:00".to_string(),
            default_period_end: "11:00".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    pub fn limits(&self) -> Limits {
        Limits::from(&self.validation)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let proj_dirs = ProjectDirs::from("com", "ace", "ace-events")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}
