//! # Inbound Ports
//!
//! What callers can ask of the session store.

use async_trait::async_trait;

use crate::domain::{Session, SessionState};

/// Session store API - inbound port.
///
/// Actions never fail outward: outcomes are booleans and the store's
/// error field.
#[async_trait]
pub trait SessionApi: Send + Sync {
    /// Restore the session once per process; later calls answer from state.
    async fn initialize(&self) -> bool;

    /// Exchange credentials and install the current user.
    async fn login(&self, identifier: &str, secret: &str) -> bool;

    /// End the session. Local state is cleared even if the backend fails.
    async fn logout(&self);

    /// Re-validate an authenticated session.
    async fn check_session(&self) -> bool;

    /// Clear the error field only.
    async fn clear_error(&self);

    /// Drop user, supplier, error and the durable hint.
    async fn clear_auth_state(&self);

    /// Copy of the current session.
    fn session(&self) -> Session;

    /// Lifecycle phase.
    fn state(&self) -> SessionState;

    /// Whether a user is installed.
    fn is_authenticated(&self) -> bool;
}
