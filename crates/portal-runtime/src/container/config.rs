//! # Portal Configuration
//!
//! Unified configuration for the gateway, the three stores and logging.
//!
//! ## Environment Variables
//!
//! | Variable | Field |
//! |----------|-------|
//! | `PORTAL_API_URL` | `gateway.base_url` |
//! | `PORTAL_AUTH_MODE` | `gateway.auth_mode` (`session` or `token`) |
//! | `PORTAL_API_NAMESPACE` | `gateway.api_namespace` |
//! | `PORTAL_TIMEOUT_SECS` | `gateway.timeout_secs` |
//! | `PORTAL_HINT_PATH` | `session.hint_path` |
//! | `PORTAL_SNAPSHOT_URL` | `reference.snapshot_url` |
//! | `PORTAL_SNAPSHOT_PATH` | `reference.snapshot_path` |
//! | `PORTAL_PAGE_SIZE` | `inquiries.default_page_size` |
//!
//! Logging variables are read by [`TelemetryConfig::from_lookup`].

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use portal_gateway::{AuthMode, GatewayConfig, GatewayError};
use portal_telemetry::TelemetryConfig;
use serde::{Deserialize, Serialize};
use sp_01_session::SessionConfig;
use sp_02_reference_cache::{ReferenceCacheConfig, SnapshotError};
use sp_03_inquiries::InquiryConfig;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment value could not be parsed.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    /// Gateway settings are unusable.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Snapshot location is unusable.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Complete client configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Backend connection.
    pub gateway: GatewayConfig,
    /// Session store (sp-01).
    pub session: SessionConfig,
    /// Reference cache store (sp-02).
    pub reference: ReferenceCacheConfig,
    /// Inquiry store (sp-03).
    pub inquiries: InquiryConfig,
    /// Log output.
    pub telemetry: TelemetryConfig,
}

impl PortalConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup, starting from defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            telemetry: TelemetryConfig::from_lookup(&lookup),
            ..Self::default()
        };

        if let Some(url) = lookup("PORTAL_API_URL") {
            config.gateway.base_url = url;
        }
        if let Some(mode) = lookup("PORTAL_AUTH_MODE") {
            config.gateway.auth_mode =
                AuthMode::from_str(&mode).map_err(|_| ConfigError::InvalidValue {
                    key: "PORTAL_AUTH_MODE",
                    value: mode,
                })?;
        }
        if let Some(namespace) = lookup("PORTAL_API_NAMESPACE") {
            config.gateway.api_namespace = namespace;
        }
        if let Some(timeout) = lookup("PORTAL_TIMEOUT_SECS") {
            config.gateway.timeout_secs = parse_number("PORTAL_TIMEOUT_SECS", timeout)?;
        }

        config.session.hint_path = lookup("PORTAL_HINT_PATH").map(PathBuf::from);
        config.reference.snapshot_url = lookup("PORTAL_SNAPSHOT_URL");
        config.reference.snapshot_path = lookup("PORTAL_SNAPSHOT_PATH").map(PathBuf::from);

        if let Some(size) = lookup("PORTAL_PAGE_SIZE") {
            config.inquiries.default_page_size = parse_number("PORTAL_PAGE_SIZE", size)?;
        }

        Ok(config)
    }

    /// Check that every section is usable before wiring.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gateway.validate()?;

        if self.session.hint_key.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "session.hint_key",
                value: String::new(),
            });
        }
        if self.inquiries.default_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "inquiries.default_page_size",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Configuration for tests against a local server.
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            gateway: GatewayConfig::for_testing(base_url),
            session: SessionConfig::for_testing(),
            reference: ReferenceCacheConfig::for_testing(),
            inquiries: InquiryConfig::for_testing(),
            telemetry: TelemetryConfig::for_testing(),
        }
    }
}

fn parse_number<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
