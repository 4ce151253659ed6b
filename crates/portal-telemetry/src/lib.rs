//! # Portal Telemetry
//!
//! Structured logging for the supplier portal client.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use portal_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let _guard = init_telemetry(TelemetryConfig::from_env())?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PORTAL_LOG_LEVEL` / `RUST_LOG` | `info` | Filter directive |
//! | `PORTAL_JSON_LOGS` | `false` (`true` in containers) | JSON lines output |
//! | `PORTAL_CONSOLE_OUTPUT` | `true` | Disable to silence output |
//! | `PORTAL_SERVICE_NAME` | `supplier-portal` | Service name |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{build_filter, init_tracing, TracingGuard};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging. Hold the guard until exit.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TracingGuard, TelemetryError> {
    init_tracing(&config)
}
