//! Telemetry configuration from environment variables.

use std::env;

use serde::{Deserialize, Serialize};

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to the startup record.
    pub service_name: String,

    /// Filter directive (`info`, `sp_03_inquiries=debug`, ...).
    pub log_level: String,

    /// Whether to write logs at all.
    pub console_output: bool,

    /// JSON lines instead of human-readable output.
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "supplier-portal".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PORTAL_SERVICE_NAME`: Service name (default: supplier-portal)
    /// - `PORTAL_LOG_LEVEL` or `RUST_LOG`: Filter directive (default: info)
    /// - `PORTAL_CONSOLE_OUTPUT`: Enable output (default: true)
    /// - `PORTAL_JSON_LOGS`: JSON output (default: true inside containers)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. `from_env` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_container =
            lookup("KUBERNETES_SERVICE_HOST").is_some() || lookup("DOCKER_CONTAINER").is_some();
        let defaults = Self::default();

        Self {
            service_name: lookup("PORTAL_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("PORTAL_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            console_output: lookup("PORTAL_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: lookup("PORTAL_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),
        }
    }

    /// Quiet configuration for tests.
    pub fn for_testing() -> Self {
        Self {
            log_level: "warn".to_string(),
            ..Default::default()
        }
    }
}
