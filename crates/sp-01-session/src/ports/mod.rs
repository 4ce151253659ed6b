//! # Ports Module
//!
//! Inbound store API and outbound hint storage.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
