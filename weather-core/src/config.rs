use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    net::SocketAddr,
    path::{Path, PathBuf},
    time::Duration,
};

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "VISUAL_CROSSING_API_KEY";

pub const DEFAULT_BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";

/// Settings for the Visual Crossing provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub language: String,
    pub unit_group: String,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            language: "ru".to_string(),
            unit_group: "metric".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ProviderConfig {
    /// Returns the API key, treating a blank value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|key| !key.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Top-level configuration.
///
/// Example TOML:
/// ```toml
/// listen = "0.0.0.0:5000"
/// cities_path = "cities.json"
///
/// [provider]
/// api_key = "..."
/// language = "ru"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen: SocketAddr,
    pub cities_path: PathBuf,
    pub assets_path: PathBuf,
    pub provider: ProviderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 5000)),
            cities_path: PathBuf::from("cities.json"),
            assets_path: PathBuf::from("assets"),
            provider: ProviderConfig::default(),
        }
    }
}

impl Config {
    /// Load config from the platform config directory, or defaults if there is
    /// no file yet. The API key environment variable is applied on top.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let mut cfg = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };

        cfg.apply_env();
        Ok(cfg)
    }

    /// Load config from an explicit file. Unlike [`Config::load`], a missing
    /// file is an error. The environment is not consulted.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        Ok(cfg)
    }

    /// Path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Override the API key from [`API_KEY_ENV`] when it is set.
    pub fn apply_env(&mut self) {
        self.override_api_key(std::env::var(API_KEY_ENV).ok());
    }

    /// Replace the API key with `key` unless it is missing or blank.
    pub fn override_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.provider.api_key = Some(key);
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.provider.api_key().is_some()
    }
}
