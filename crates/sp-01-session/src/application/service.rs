//! # Session Service
//!
//! Owns the session snapshot and the restoration protocol.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use portal_gateway::PortalGateway;
use shared_bus::{EventPublisher, PortalEvent};
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

use crate::domain::{Session, SessionError, SessionState, LOGIN_FAILED_MSG, LOGIN_NO_USER_MSG};
use crate::ports::{SessionApi, SessionHintStore};

/// Session Service - authentication lifecycle.
///
/// State lives behind a lock that is never held across an await.
/// Restoration runs at most once per instance; concurrent callers of
/// [`SessionService::initialize`] await the same attempt.
pub struct SessionService<G: PortalGateway> {
    gateway: Arc<G>,
    hints: Arc<dyn SessionHintStore>,
    events: Arc<dyn EventPublisher>,
    session: RwLock<Session>,
    init: OnceCell<()>,
}

impl<G: PortalGateway> SessionService<G> {
    /// Create a new session service.
    pub fn new(
        gateway: Arc<G>,
        hints: Arc<dyn SessionHintStore>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            gateway,
            hints,
            events,
            session: RwLock::new(Session::default()),
            init: OnceCell::new(),
        }
    }

    /// Supplier display name, empty when none is linked.
    pub fn supplier_name(&self) -> String {
        self.session.read().supplier_name()
    }

    /// Full name, else email, else empty.
    pub fn user_name(&self) -> String {
        self.session.read().user_name()
    }

    /// Whether restoration has finished.
    pub fn is_initialized(&self) -> bool {
        self.session.read().initialized
    }

    /// Whether an action is in flight.
    pub fn is_loading(&self) -> bool {
        self.session.read().loading
    }

    /// Last login error.
    pub fn error(&self) -> Option<String> {
        self.session.read().error.clone()
    }

    async fn notify(&self) {
        let authenticated = self.is_authenticated();
        self.events
            .publish(PortalEvent::SessionChanged { authenticated })
            .await;
    }

    fn persist_hint(&self) {
        if let Err(e) = self.hints.persist() {
            warn!("[sp-01] Could not persist session hint: {}", e);
        }
    }

    fn clear_hint(&self) {
        if let Err(e) = self.hints.clear() {
            warn!("[sp-01] Could not clear session hint: {}", e);
        }
    }

    fn clear_local(&self) {
        self.session.write().clear_auth();
        self.clear_hint();
    }

    /// Fetch the current user and install it.
    async fn load_current_user(&self) -> Result<(), SessionError> {
        let current = self.gateway.fetch_current_user().await?;
        if self.session.write().install(current) {
            Ok(())
        } else {
            Err(SessionError::NoUser)
        }
    }

    async fn restore(&self) {
        {
            let mut session = self.session.write();
            session.state = SessionState::Initializing;
        }

        let hinted = self.hints.load().unwrap_or_else(|e| {
            warn!("[sp-01] Session hint unreadable, treating as absent: {}", e);
            false
        });

        if !hinted {
            debug!("[sp-01] No session hint, skipping restoration");
            let mut session = self.session.write();
            session.state = SessionState::Unauthenticated;
            session.initialized = true;
        } else {
            self.session.write().loading = true;

            match self.load_current_user().await {
                Ok(()) => {
                    self.persist_hint();
                    info!(user = %self.user_name(), "[sp-01] Session restored");
                }
                Err(e) => {
                    warn!("[sp-01] Session restoration failed: {}", e);
                    self.clear_local();
                }
            }

            let mut session = self.session.write();
            session.loading = false;
            session.initialized = true;
        }

        self.notify().await;
    }

    async fn try_login(&self, identifier: &str, secret: &str) -> Result<(), SessionError> {
        self.gateway.credential_login(identifier, secret).await?;
        self.load_current_user().await?;
        self.persist_hint();
        Ok(())
    }
}

#[async_trait]
impl<G: PortalGateway> SessionApi for SessionService<G> {
    async fn initialize(&self) -> bool {
        self.init.get_or_init(|| self.restore()).await;
        self.is_authenticated()
    }

    async fn login(&self, identifier: &str, secret: &str) -> bool {
        {
            let mut session = self.session.write();
            session.loading = true;
            session.error = None;
        }

        let authenticated = match self.try_login(identifier, secret).await {
            Ok(()) => {
                info!(user = %self.user_name(), "[sp-01] Logged in");
                true
            }
            Err(SessionError::NoUser) => {
                warn!("[sp-01] Login accepted but no user returned");
                self.clear_local();
                self.session.write().error = Some(LOGIN_NO_USER_MSG.to_string());
                false
            }
            Err(e) => {
                error!("[sp-01] Login error: {}", e);
                self.clear_local();
                self.session.write().error = Some(LOGIN_FAILED_MSG.to_string());
                false
            }
        };

        self.session.write().loading = false;
        self.notify().await;
        authenticated
    }

    async fn logout(&self) {
        if let Err(e) = self.gateway.credential_logout().await {
            warn!("[sp-01] Logout call failed, clearing local session anyway: {}", e);
        }
        self.clear_local();
        info!("[sp-01] Logged out");
        self.notify().await;
    }

    async fn check_session(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }

        let valid = match self.load_current_user().await {
            Ok(()) => true,
            Err(e) => {
                warn!("[sp-01] Session check failed: {}", e);
                self.clear_local();
                false
            }
        };

        self.notify().await;
        valid
    }

    async fn clear_error(&self) {
        self.session.write().error = None;
        self.events
            .publish(PortalEvent::SessionErrorChanged { has_error: false })
            .await;
    }

    async fn clear_auth_state(&self) {
        self.clear_local();
        self.notify().await;
    }

    fn session(&self) -> Session {
        self.session.read().clone()
    }

    fn state(&self) -> SessionState {
        self.session.read().state
    }

    fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }
}
