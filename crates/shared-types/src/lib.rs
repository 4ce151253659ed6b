//! # Shared Types Crate
//!
//! Documents, reference records and request payloads shared by the gateway
//! and the three portal stores.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses the gateway boundary
//!   is defined here, with the backend's wire names.
//! - **Lenient decoding**: optional and collection fields default when the
//!   server omits them, so a partial payload never fails a whole call.

pub mod entities;
pub mod reference;
pub mod requests;
pub mod time;

pub use entities::*;
pub use reference::*;
pub use requests::*;
pub use time::{ManualTimeSource, SystemTimeSource, TimeSource};
