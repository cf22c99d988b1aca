//! Configuration management for ai-dashboard
//!
//! Loaded once at startup and shared read-only with every request.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Placeholder secret shipped in the default configuration
pub const PLACEHOLDER_SECRET: &str = "your-secret-key-here";

/// Environment variable overriding the bind host
pub const HOST_ENV: &str = "AI_DASHBOARD_HOST";

/// Environment variable overriding the bind port
pub const PORT_ENV: &str = "AI_DASHBOARD_PORT";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Site name shown in the page header and title
    pub title: String,
    /// Process-wide signing key
    pub secret_key: String,
    /// How often the dashboard polls the real-time metrics API (0 = never)
    pub refresh_interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "AI智能分析平台".to_string(),
            secret_key: PLACEHOLDER_SECRET.to_string(),
            refresh_interval_secs: 5,
        }
    }
}

impl Config {
    /// Load configuration from default location or fall back to defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("No config file at {:?}, using defaults", config_path);
            Ok(Config::default())
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "ai-dashboard") {
            Ok(proj_dirs.config_dir().join("config.toml"))
        } else {
            Ok(PathBuf::from("config.toml"))
        }
    }

    /// Apply bind overrides from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_overrides(
            std::env::var(HOST_ENV).ok(),
            std::env::var(PORT_ENV).ok(),
        )
    }

    fn apply_overrides(mut self, host: Option<String>, port: Option<String>) -> Result<Self> {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.server.host = host.trim().to_string();
        }
        if let Some(port) = port.filter(|p| !p.trim().is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", PORT_ENV, port))?;
        }
        Ok(self)
    }

    /// Whether the secret key is still the shipped placeholder
    pub fn uses_placeholder_secret(&self) -> bool {
        self.app.secret_key == PLACEHOLDER_SECRET
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert!(config.uses_placeholder_secret());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 8080\n\n[app]\nsecret_key = \"s3cret\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.app.refresh_interval_secs, 5);
        assert!(!config.uses_placeholder_secret());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = \"not a port\"").unwrap();

        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::default()
            .apply_overrides(Some("127.0.0.1".to_string()), Some(" 9000 ".to_string()))
            .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);

        let config = Config::default()
            .apply_overrides(Some(String::new()), None)
            .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");

        assert!(Config::default()
            .apply_overrides(None, Some("http".to_string()))
            .is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let parsed: Config = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
