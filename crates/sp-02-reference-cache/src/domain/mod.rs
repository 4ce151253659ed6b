//! # Domain Module
//!
//! Reference dataset, TTL rule and errors.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
