//! # SP-01 Session
//!
//! Authentication lifecycle for the supplier portal.
//!
//! **Subsystem ID:** 1
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Restoration Protocol
//!
//! | Hint | Current user | Result |
//! |------|--------------|--------|
//! | absent / false | not fetched | `Unauthenticated`, no network |
//! | true | user present | `Authenticated`, hint kept |
//! | true | absent or error | `Unauthenticated`, hint removed |
//!
//! Restoration happens once per service instance. Later `initialize()`
//! calls answer from state.
//!
//! ## Module Structure
//!
//! ```text
//! sp-01-session/
//! ├── domain/          # Session snapshot, SessionState, SessionError
//! ├── ports/           # SessionApi (inbound), SessionHintStore (outbound)
//! ├── adapters/        # FileHintStore
//! ├── application/     # SessionService
//! └── config.rs        # SessionConfig
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::FileHintStore;
pub use application::SessionService;
pub use config::{SessionConfig, DEFAULT_HINT_KEY};
pub use domain::{Session, SessionError, SessionState, LOGIN_FAILED_MSG, LOGIN_NO_USER_MSG};
pub use ports::{InMemoryHintStore, SessionApi, SessionHintStore};
