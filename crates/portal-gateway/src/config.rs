//! # Gateway Configuration

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// How requests are authenticated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Server session cookie.
    #[default]
    Session,
    /// `Authorization: Bearer` token from the token store.
    Token,
}

impl std::str::FromStr for AuthMode {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "session" => Ok(Self::Session),
            "token" | "jwt" => Ok(Self::Token),
            other => Err(GatewayError::Config(format!("unknown auth mode '{other}'"))),
        }
    }
}

/// Gateway configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Backend base URL, e.g. `https://portal.example.org`.
    pub base_url: String,

    /// Authentication mode.
    pub auth_mode: AuthMode,

    /// Dotted module path of the portal RPC methods.
    pub api_namespace: String,

    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,

    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Login surface announced when a session expires.
    pub login_path: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            auth_mode: AuthMode::Session,
            api_namespace: "siud.api.supplier_portal".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 5,
            login_path: "/login".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Create a config for testing against a local server.
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            connect_timeout_secs: 1,
            ..Default::default()
        }
    }

    /// Check that the base URL is usable.
    pub fn validate(&self) -> Result<(), GatewayError> {
        let url = self.parsed_base_url()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(GatewayError::Config(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }
        if self.api_namespace.is_empty() {
            return Err(GatewayError::Config("empty api namespace".to_string()));
        }
        Ok(())
    }

    /// Parse the base URL.
    pub fn parsed_base_url(&self) -> Result<Url, GatewayError> {
        Url::parse(&self.base_url)
            .map_err(|e| GatewayError::Config(format!("invalid base url '{}': {e}", self.base_url)))
    }
}
