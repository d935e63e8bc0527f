//! Configuration management for the MCP server.
//!
//! A single [`Config`] is populated from `MCP_*` environment variables (after
//! loading `.env` through dotenvy) on top of built-in defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

use super::security::DEFAULT_HS_RISK_STOP;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Reference data file locations.
    pub reference: ReferenceConfig,

    /// Domain guard thresholds.
    pub guard: GuardConfig,

    /// HTTP health side-channel.
    pub health: HealthConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// Human-readable name used in logs and the health endpoint.
    pub display_name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Locations of the Incoterm list and HS code table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceConfig {
    pub incoterm_path: PathBuf,
    pub hs_code_path: PathBuf,
}

/// Domain guard configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// HS risk at or above which a call is stopped for manual review.
    pub hs_risk_stop: f64,
}

/// Health side-channel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthConfig {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            incoterm_path: PathBuf::from("resources/incoterm.yaml"),
            hs_code_path: PathBuf::from("resources/hs2022.csv"),
        }
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            hs_risk_stop: DEFAULT_HS_RISK_STOP,
        }
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "samsung-logistics-mcp".to_string(),
                display_name: "Samsung Logistics MCP Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            reference: ReferenceConfig::default(),
            guard: GuardConfig::default(),
            health: HealthConfig::default(),
        }
    }
}

/// Parse an environment variable, warning and returning `None` when malformed.
fn parse_env<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

fn parse_flag(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off"))
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`, except
    /// `PORT` which hosting platforms set for the health side-channel.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(path) = std::env::var("MCP_INCOTERM_PATH") {
            config.reference.incoterm_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("MCP_HS_CODE_PATH") {
            config.reference.hs_code_path = PathBuf::from(path);
        }

        if let Some(threshold) = parse_env::<f64>("MCP_HS_RISK_STOP") {
            if (0.0..=1.0).contains(&threshold) {
                config.guard.hs_risk_stop = threshold;
                info!("HS risk stop threshold set to {}", threshold);
            } else {
                warn!(
                    "MCP_HS_RISK_STOP={} is outside 0..=1, keeping {}",
                    threshold, config.guard.hs_risk_stop
                );
            }
        }

        if let Some(port) = parse_env::<u16>("PORT").or_else(|| parse_env("MCP_HEALTH_PORT")) {
            config.health.port = port;
        }
        if let Ok(host) = std::env::var("MCP_HEALTH_HOST") {
            config.health.host = host;
        }
        if let Some(enabled) = parse_flag("MCP_HEALTH_ENABLED") {
            config.health.enabled = enabled;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "MCP_SERVER_NAME",
        "MCP_HS_RISK_STOP",
        "MCP_INCOTERM_PATH",
        "PORT",
        "MCP_HEALTH_PORT",
        "MCP_HEALTH_ENABLED",
        "MCP_HEALTH_HOST",
    ];

    fn clear_vars() {
        for key in VARS {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "samsung-logistics-mcp");
        assert_eq!(config.server.display_name, "Samsung Logistics MCP Server");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.guard.hs_risk_stop, 0.8);
        assert_eq!(config.health, HealthConfig::default());
        assert_eq!(config.health.port, 3000);
        assert_eq!(
            config.reference.hs_code_path,
            PathBuf::from("resources/hs2022.csv")
        );
    }

    #[test]
    fn test_overrides_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "logi-test");
            std::env::set_var("MCP_HS_RISK_STOP", "0.5");
            std::env::set_var("MCP_INCOTERM_PATH", "/tmp/terms.yaml");
            std::env::set_var("PORT", "8081");
            std::env::set_var("MCP_HEALTH_ENABLED", "false");
        }

        let config = Config::from_env();
        assert_eq!(config.server.name, "logi-test");
        assert_eq!(config.guard.hs_risk_stop, 0.5);
        assert_eq!(
            config.reference.incoterm_path,
            PathBuf::from("/tmp/terms.yaml")
        );
        assert_eq!(config.health.port, 8081);
        assert!(!config.health.enabled);

        clear_vars();
    }

    #[test]
    fn test_port_takes_precedence_over_health_port() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("MCP_HEALTH_PORT", "9000");
        }
        assert_eq!(Config::from_env().health.port, 9000);

        unsafe {
            std::env::set_var("PORT", "9100");
        }
        assert_eq!(Config::from_env().health.port, 9100);

        clear_vars();
    }

    #[test]
    fn test_malformed_values_keep_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("MCP_HS_RISK_STOP", "high");
            std::env::set_var("PORT", "not-a-port");
        }

        let config = Config::from_env();
        assert_eq!(config.guard.hs_risk_stop, 0.8);
        assert_eq!(config.health.port, 3000);

        unsafe {
            std::env::set_var("MCP_HS_RISK_STOP", "1.5");
        }
        assert_eq!(Config::from_env().guard.hs_risk_stop, 0.8);

        clear_vars();
    }
}
