//! CLI argument definitions for the Insight server.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Insight: a demo search service that records questions and answers them
/// with a templated response.
#[derive(Parser, Debug)]
#[command(name = "insight", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Address to bind the HTTP server to.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > INSIGHT_CONFIG env var > ~/.insight/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("INSIGHT_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > INSIGHT_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("INSIGHT_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        config_port
    }

    /// Resolve the bind address.
    ///
    /// Priority: --host flag > config file value.
    pub fn resolve_host(&self, config_host: &str) -> String {
        self.host
            .clone()
            .unwrap_or_else(|| config_host.to_string())
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".insight").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".insight").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let args = CliArgs::parse_from([
            "insight",
            "--config",
            "/tmp/insight.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8081",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.resolve_config_path(), PathBuf::from("/tmp/insight.toml"));
        assert_eq!(args.resolve_host("127.0.0.1"), "0.0.0.0");
        assert_eq!(args.resolve_port(5000), 8081);
        assert_eq!(args.resolve_log_level("info"), "debug");
    }

    #[test]
    fn test_short_flags() {
        let args = CliArgs::parse_from(["insight", "-c", "a.toml", "-p", "9000", "-l", "warn"]);
        assert_eq!(args.config, Some(PathBuf::from("a.toml")));
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_falls_back_to_config_values() {
        let args = CliArgs::parse_from(["insight"]);
        assert_eq!(args.resolve_host("10.0.0.5"), "10.0.0.5");
        assert_eq!(args.resolve_log_level("trace"), "trace");
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(CliArgs::try_parse_from(["insight", "--port", "70000"]).is_err());
    }
}
