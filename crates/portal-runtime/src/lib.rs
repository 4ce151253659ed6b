//! # Portal Runtime Library
//!
//! Configuration and dependency wiring for the supplier portal client.
//! The `portal-client` binary in `main.rs` is a thin shell over
//! [`PortalContainer`].

#![warn(clippy::all)]

pub mod container;

pub use container::{ConfigError, PortalConfig, PortalContainer};
