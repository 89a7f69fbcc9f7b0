use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ui::theme::ThemePreset;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Generative language API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// API base URL (without the `/models/...` suffix)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key; falls back to GEMINI_API_KEY, then API_KEY
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds (none by default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

fn default_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

/// Environment variables consulted for the API key, in order
const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

impl ApiConfig {
    /// Resolve the API key from config or environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                API_KEY_VARS
                    .iter()
                    .find_map(|var| std::env::var(var).ok().filter(|k| !k.trim().is_empty()))
            })
    }
}

/// Appearance and language settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color theme preset
    #[serde(default)]
    pub theme: ThemePreset,
    /// UI language code ("en" or "ko")
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreset::default(),
            locale: default_locale(),
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "promptlab", "PromptLab")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let config_dir = dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::info!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Read a value by dotted key (e.g. "api.model")
    pub fn get_value(&self, key: &str) -> Result<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "model"] => Ok(self.api.model.clone()),
            ["api", "base_url"] => Ok(self.api.base_url.clone()),
            ["api", "api_key"] => Ok(match self.api.api_key {
                Some(_) => "<set>".to_string(),
                None => "<not set>".to_string(),
            }),
            ["api", "timeout_secs"] => Ok(self
                .api
                .timeout_secs
                .map(|t| t.to_string())
                .unwrap_or_else(|| "<not set>".to_string())),
            ["ui", "theme"] => Ok(self.ui.theme.key().to_string()),
            ["ui", "locale"] => Ok(self.ui.locale.clone()),
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
    }

    /// Set a value by dotted key
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "model"] => {
                self.api.model = value.to_string();
            }
            ["api", "base_url"] => {
                self.api.base_url = value.trim_end_matches('/').to_string();
            }
            ["api", "api_key"] => {
                self.api.api_key = Some(value.to_string()).filter(|v| !v.is_empty());
            }
            ["api", "timeout_secs"] => {
                self.api.timeout_secs = match value {
                    "" | "none" => None,
                    v => Some(v.parse()?),
                };
            }
            ["ui", "theme"] => {
                self.ui.theme = ThemePreset::from_key(value)
                    .ok_or_else(|| anyhow::anyhow!("Unknown theme: {}", value))?;
            }
            ["ui", "locale"] => match value {
                "en" | "ko" => self.ui.locale = value.to_string(),
                _ => anyhow::bail!("Unsupported locale: {} (expected en or ko)", value),
            },
            _ => anyhow::bail!("Unknown or read-only config key: {}", key),
        }

        Ok(())
    }
}
