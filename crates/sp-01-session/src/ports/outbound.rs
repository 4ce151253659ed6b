//! # Outbound Ports
//!
//! Durable storage for the "was authenticated" hint.

use parking_lot::Mutex;

use crate::domain::SessionError;

/// Durable session hint - outbound port.
///
/// The flag only decides whether restoration is worth a network call; the
/// server stays the authority.
pub trait SessionHintStore: Send + Sync {
    /// Read the hint. Absent means `false`.
    fn load(&self) -> Result<bool, SessionError>;

    /// Record that a session was established.
    fn persist(&self) -> Result<(), SessionError>;

    /// Remove the hint.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Process-local hint store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct InMemoryHintStore {
    flag: Mutex<bool>,
}

impl InMemoryHintStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the hint already set.
    pub fn hinted() -> Self {
        Self {
            flag: Mutex::new(true),
        }
    }
}

impl SessionHintStore for InMemoryHintStore {
    fn load(&self) -> Result<bool, SessionError> {
        Ok(*self.flag.lock())
    }

    fn persist(&self) -> Result<(), SessionError> {
        *self.flag.lock() = true;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.flag.lock() = false;
        Ok(())
    }
}
