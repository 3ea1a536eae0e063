//! Configuration management for brlfetch
//!
//! Config file location:
//! - Linux: ~/.config/brlfetch/config.toml
//! - macOS: ~/Library/Application Support/org.brlfetch.brlfetch/config.toml
//! - Windows: %APPDATA%/brlfetch/brlfetch/config/config.toml
//!
//! You can override the config location by setting `BRLFETCH_CONFIG_PATH`.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Startup version check
    #[serde(default)]
    pub update: UpdateConfig,

    /// Probe behavior
    #[serde(default)]
    pub probes: ProbeConfig,

    /// Output settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Installer/updater settings
    #[serde(default)]
    pub install: InstallConfig,
}

impl Config {
    /// Load configuration from file or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, toml)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("BRLFETCH_CONFIG_PATH") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }

        let proj_dirs = ProjectDirs::from("org", "brlfetch", "brlfetch")
            .context("Could not determine project directories")?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

/// Update check configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateConfig {
    /// Check for a newer version on startup
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Plain-text version marker
    #[serde(default = "default_version_url")]
    pub version_url: String,

    /// Network timeout in seconds
    #[serde(default = "default_update_timeout")]
    pub timeout_seconds: u64,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            version_url: default_version_url(),
            timeout_seconds: default_update_timeout(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_version_url() -> String {
    "https://raw.githubusercontent.com/brlfetch/brlfetch/main/VERSION".to_string()
}

fn default_update_timeout() -> u64 {
    10
}

/// Probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Upper bound for wmctrl/lspci/uname runs, in milliseconds
    #[serde(default = "default_command_timeout_ms")]
    pub command_timeout_ms: u64,

    /// Use sysinfo for uptime, core counts, memory and disk
    #[serde(default = "default_true")]
    pub extended_metrics: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            command_timeout_ms: default_command_timeout_ms(),
            extended_metrics: default_true(),
        }
    }
}

fn default_command_timeout_ms() -> u64 {
    2000
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Emit ANSI colors
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
        }
    }
}

/// Installer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Where `brlfetch install` downloads the payload from
    #[serde(default = "default_payload_url")]
    pub payload_url: String,

    /// Install directory; `~/.local/bin` when unset
    #[serde(default)]
    pub install_dir: Option<PathBuf>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            payload_url: default_payload_url(),
            install_dir: None,
        }
    }
}

fn default_payload_url() -> String {
    "https://github.com/brlfetch/brlfetch/releases/latest/download/brlfetch".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.update.enabled);
        assert_eq!(config.update.timeout_seconds, 10);
        assert_eq!(config.probes.command_timeout_ms, 2000);
        assert!(config.probes.extended_metrics);
        assert!(config.display.color);
        assert!(config.install.install_dir.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();

        assert!(toml.contains("[update]"));
        assert!(toml.contains("version_url"));
        assert!(toml.contains("command_timeout_ms"));
        assert!(toml.contains("payload_url"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[probes]\nextended_metrics = false\n").unwrap();
        assert!(!config.probes.extended_metrics);
        assert_eq!(config.probes.command_timeout_ms, 2000);
        assert!(config.update.enabled);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.update.timeout_seconds, 10);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.display.color = false;
        config.install.install_dir = Some(PathBuf::from("/opt/bin"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.display.color);
        assert_eq!(loaded.install.install_dir, Some(PathBuf::from("/opt/bin")));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "update = 3").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
