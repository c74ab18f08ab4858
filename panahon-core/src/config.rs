use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// City queried on startup when the user has not configured another one.
pub const DEFAULT_CITY: &str = "Iligan City";

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "Iligan City"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeatherMap API key; `OPENWEATHER_API_KEY` takes precedence.
    pub api_key: Option<String>,

    /// City queried on startup; falls back to [`DEFAULT_CITY`].
    pub default_city: Option<String>,
}

impl Config {
    /// API key resolved from the environment first, then the stored value.
    pub fn api_key(&self) -> Option<String> {
        resolve_api_key(self.api_key.as_deref(), env::var(API_KEY_ENV).ok())
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// City to query when the session starts.
    pub fn default_city(&self) -> &str {
        self.default_city.as_deref().unwrap_or(DEFAULT_CITY)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "panahon", "panahon-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Precedence: a non-blank environment value beats the stored key.
fn resolve_api_key(stored: Option<&str>, env_value: Option<String>) -> Option<String> {
    env_value
        .filter(|key| !key.trim().is_empty())
        .or_else(|| stored.map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_city_falls_back_when_not_set() {
        let cfg = Config::default();
        assert_eq!(cfg.default_city(), "Iligan City");
    }

    #[test]
    fn default_city_prefers_configured_value() {
        let cfg = Config {
            default_city: Some("Cagayan de Oro".to_string()),
            ..Config::default()
        };
        assert_eq!(cfg.default_city(), "Cagayan de Oro");
    }

    #[test]
    fn set_api_key_stores_value() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());
        assert_eq!(cfg.api_key, Some("KEY".to_string()));
    }

    #[test]
    fn env_key_beats_stored_key() {
        let resolved = resolve_api_key(Some("stored"), Some("from-env".to_string()));
        assert_eq!(resolved, Some("from-env".to_string()));
    }

    #[test]
    fn blank_env_key_is_ignored() {
        let resolved = resolve_api_key(Some("stored"), Some("   ".to_string()));
        assert_eq!(resolved, Some("stored".to_string()));
    }

    #[test]
    fn no_key_anywhere_resolves_to_none() {
        assert_eq!(resolve_api_key(None, None), None);
    }
}
