//! Bearer token side channel.

use parking_lot::RwLock;

/// Holds the bearer token attached to requests in token auth mode.
#[derive(Debug, Default)]
pub struct TokenStore {
    token: RwLock<Option<String>>,
}

impl TokenStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Current token, if any.
    pub fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Replace the token.
    pub fn set(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    /// Drop the token.
    pub fn clear(&self) {
        *self.token.write() = None;
    }

    /// Whether a token is held.
    pub fn is_set(&self) -> bool {
        self.token.read().is_some()
    }
}
