//! Configuration management for Trivialist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    API_URL_ENV, CONFIG_GENERATED, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, SIDEBAR_DEFAULT_WIDTH,
    SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Trivia API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and port of the trivia backend (paths start with /api)
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (clickable page numbers)
    pub mouse_enabled: bool,
    /// Sidebar width in columns
    pub sidebar_width: u16,
    /// Icon theme: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
    /// Show answers under each question
    pub show_answers: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            icon_theme: IconTheme::default(),
            show_answers: true,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from file or return defaults, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        let mut config = if let Some(path) = config_path {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.apply_api_url_override(url)?;
        }

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Replace the API base URL (e.g. from the environment) and re-validate
    pub fn apply_api_url_override(&mut self, url: String) -> Result<()> {
        self.api.base_url = url;
        self.normalize();
        self.validate()
            .with_context(|| format!("Invalid {} override", API_URL_ENV))
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("trivialist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("trivialist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Strip surrounding whitespace from values used verbatim at runtime
    pub fn normalize(&mut self) {
        let trimmed = self.api.base_url.trim();
        if trimmed.len() != self.api.base_url.len() {
            self.api.base_url = trimmed.to_string();
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate API settings
        let base_url = self.api.base_url.as_str();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            anyhow::bail!("base_url must start with http:// or https://, got '{}'", self.api.base_url);
        }

        if self.api.timeout_secs == 0 || self.api.timeout_secs > MAX_TIMEOUT_SECS {
            anyhow::bail!(
                "timeout_secs must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECS,
                self.api.timeout_secs
            );
        }

        // Validate UI settings
        if self.ui.sidebar_width < SIDEBAR_MIN_WIDTH || self.ui.sidebar_width > SIDEBAR_MAX_WIDTH {
            anyhow::bail!(
                "sidebar_width must be between {} and {} columns, got {}",
                SIDEBAR_MIN_WIDTH,
                SIDEBAR_MAX_WIDTH,
                self.ui.sidebar_width
            );
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Trivialist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("trivialist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
