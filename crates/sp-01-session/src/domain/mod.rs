//! # Domain Module
//!
//! Session snapshot, lifecycle phases and errors.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
