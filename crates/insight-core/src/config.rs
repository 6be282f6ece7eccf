use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::Result;

/// Top-level configuration for the Insight server.
///
/// Loaded from `~/.insight/config.toml` by default. Every section falls back
/// to its defaults when absent, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsightConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub responder: ResponderConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl InsightConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: InsightConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }
}

/// General application settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port. The UI dev server is expected on `port + 1`.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Settings for the templated answer attached to each query.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResponderConfig {
    /// Product name interpolated into responses and session titles.
    pub product_name: String,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            product_name: "REG AI Insight".to_string(),
        }
    }
}

/// History export settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name suggested to the client in `Content-Disposition`.
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: "reg-ai-insight-export.json".to_string(),
        }
    }
}
