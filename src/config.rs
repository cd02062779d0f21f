//! Configuration management.
//!
//! This module handles loading, parsing, and validation of driver
//! configuration. Everything can also be built programmatically; the file
//! layer exists so applications can let users tune pacing, theme and logging
//! without recompiling.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_LOCAL, CONFIG_FILE_NAME, DEFAULT_FPS, FPS_MAX, FPS_MIN};
use crate::core::theme::Theme;

/// Main configuration structure for a driver session.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DriverConfig {
    pub frame: FrameConfig,
    pub input: InputConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

/// Frame pacing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Render cadence of the automatic timer, frames per second.
    pub fps: u16,
    /// Whether the timer drives rendering; when false the caller invokes
    /// `render` itself.
    pub auto_update: bool,
}

/// Input behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Whether escape at the outermost focus depth ends the session.
    pub exit_on_escape: bool,
}

/// Theme selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Built-in palette name: "space", "ocean" or "lavabit".
    pub name: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable the in-memory (and optional file) log sink.
    pub enabled: bool,
    /// Level threshold: "error", "warn", "info", "debug" or "trace".
    pub level: String,
    /// Optional file the log is also appended to.
    pub file: Option<PathBuf>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            auto_update: true,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { exit_on_escape: true }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "space".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl DriverConfig {
    /// Load configuration from file or return defaults.
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: DriverConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence.
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_LOCAL);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.frame.fps < FPS_MIN || self.frame.fps > FPS_MAX {
            anyhow::bail!(
                "frame.fps must be between {} and {}, got {}",
                FPS_MIN,
                FPS_MAX,
                self.frame.fps
            );
        }

        if Theme::by_name(&self.theme.name).is_err() {
            anyhow::bail!("unknown theme.name '{}'", self.theme.name);
        }

        if self.level_filter().is_none() {
            anyhow::bail!(
                "logging.level must be one of error/warn/info/debug/trace, got '{}'",
                self.logging.level
            );
        }

        Ok(())
    }

    /// Parsed logging level threshold.
    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        match self.logging.level.to_ascii_lowercase().as_str() {
            "error" => Some(log::LevelFilter::Error),
            "warn" => Some(log::LevelFilter::Warn),
            "info" => Some(log::LevelFilter::Info),
            "debug" => Some(log::LevelFilter::Debug),
            "trace" => Some(log::LevelFilter::Trace),
            _ => None,
        }
    }

    /// The built-in palette named by this configuration.
    pub fn theme(&self) -> Result<Theme> {
        Ok(Theme::by_name(&self.theme.name)?)
    }

    /// Duration of one frame at the configured cadence.
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(1000 / u64::from(self.frame.fps.max(1)))
    }

    /// Generate default configuration file.
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Velour Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get the XDG config directory path.
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path.
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
