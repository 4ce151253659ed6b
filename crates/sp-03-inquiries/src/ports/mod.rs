//! # Ports Module
//!
//! Outbound dependencies come from `portal-gateway`; only the inbound API
//! is defined here.

pub mod inbound;

pub use inbound::*;
