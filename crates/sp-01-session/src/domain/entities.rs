//! # Session Entities

use serde::{Deserialize, Serialize};
use shared_types::{CurrentUser, Supplier, UserIdentity};

/// Session lifecycle phase.
///
/// ```text
/// Unknown ──initialize()──→ Initializing ──┬──→ Authenticated
///                                          └──→ Unauthenticated
/// Authenticated ──logout() / failed check──→ Unauthenticated
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Nothing has been attempted yet.
    #[default]
    Unknown,
    /// Restoration in flight.
    Initializing,
    /// A user is installed.
    Authenticated,
    /// No user; restoration or check finished without one.
    Unauthenticated,
}

/// Session snapshot.
///
/// `user` present if and only if `state == Authenticated`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Signed-in user.
    pub user: Option<UserIdentity>,
    /// Supplier linked to the user.
    pub supplier: Option<Supplier>,
    /// Set once restoration has finished, whatever the outcome.
    pub initialized: bool,
    /// An action is in flight.
    pub loading: bool,
    /// Localized message from the last failed login.
    pub error: Option<String>,
    /// Lifecycle phase.
    pub state: SessionState,
}

impl Session {
    /// Whether a user is installed.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Supplier display name, empty when none is linked.
    pub fn supplier_name(&self) -> String {
        self.supplier
            .as_ref()
            .map(|s| s.supplier_name.clone())
            .unwrap_or_default()
    }

    /// Full name, falling back to email, else empty.
    pub fn user_name(&self) -> String {
        match &self.user {
            Some(user) if !user.full_name.is_empty() => user.full_name.clone(),
            Some(user) => user.email.clone(),
            None => String::new(),
        }
    }

    /// Install the user and supplier from a current-user payload.
    ///
    /// Returns `false` and leaves the session untouched if the payload has
    /// no user.
    pub fn install(&mut self, current: CurrentUser) -> bool {
        match current.user {
            Some(user) => {
                self.user = Some(user);
                self.supplier = current.supplier;
                self.state = SessionState::Authenticated;
                true
            }
            None => false,
        }
    }

    /// Drop user, supplier and error.
    pub fn clear_auth(&mut self) {
        self.user = None;
        self.supplier = None;
        self.error = None;
        self.state = SessionState::Unauthenticated;
    }
}
