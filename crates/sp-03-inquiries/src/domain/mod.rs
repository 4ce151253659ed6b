//! # Domain Module
//!
//! List, stats, detail and form slices plus errors.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
