//! # Session Flows
//!
//! Session restore, login and logout through the runtime container with a
//! file-backed hint, observed via the shared event bus.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use portal_gateway::{GatewayError, GatewayOp, MockGateway};
    use shared_bus::{EventFilter, EventTopic, PortalEvent};
    use shared_types::{CurrentUser, LoginResponse};
    use sp_01_session::{SessionApi, SessionState, LOGIN_FAILED_MSG, LOGIN_NO_USER_MSG};

    use crate::integration::fixtures::{current_user, Harness};

    #[tokio::test]
    async fn test_concurrent_initialize_fetches_once() {
        let harness =
            Harness::with_mock(MockGateway::new().with_latency(Duration::from_millis(20)));
        harness.write_hint();
        harness.gateway().set_current_user(Ok(current_user()));

        let session = &harness.container.session;
        let (first, second) = tokio::join!(session.initialize(), session.initialize());

        assert!(first);
        assert_eq!(first, second);
        assert_eq!(harness.gateway().calls(GatewayOp::CurrentUser), 1);
        assert_eq!(session.supplier_name(), "Acme Medical");
    }

    #[tokio::test]
    async fn test_absent_hint_makes_no_calls() {
        let harness = Harness::new();

        assert!(!harness.container.session.initialize().await);
        assert_eq!(harness.container.session.state(), SessionState::Unauthenticated);
        assert!(harness.container.session.is_initialized());
        assert_eq!(harness.gateway().total_calls(), 0);
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let harness = Harness::new();
        harness.write_hint();
        harness.gateway().set_current_user(Ok(current_user()));

        assert!(harness.container.session.initialize().await);
        assert!(harness.container.session.initialize().await);
        assert_eq!(harness.gateway().calls(GatewayOp::CurrentUser), 1);
    }

    #[tokio::test]
    async fn test_failed_restore_clears_hint() {
        let harness = Harness::new();
        harness.write_hint();
        harness
            .gateway()
            .set_current_user(Err(GatewayError::Unauthorized));

        assert!(!harness.container.session.initialize().await);
        assert!(harness.container.session.is_initialized());
        assert!(!harness.hint_set());
    }

    #[tokio::test]
    async fn test_login_persists_hint_and_notifies() {
        let harness = Harness::new();
        let mut sub = harness
            .container
            .subscribe(EventFilter::topics(vec![EventTopic::Session]));
        harness.gateway().set_login(Ok(LoginResponse::default()));
        harness.gateway().set_current_user(Ok(current_user()));

        assert!(harness.container.session.login("dana@example.org", "pw").await);

        assert!(harness.hint_set());
        assert_eq!(harness.container.session.user_name(), "Dana Levi");
        assert_eq!(sub.drain(), vec![PortalEvent::SessionChanged { authenticated: true }]);
        assert_eq!(harness.gateway().logins(), vec!["dana@example.org".to_string()]);
    }

    #[tokio::test]
    async fn test_login_rejected_sets_credentials_error() {
        let harness = Harness::new();
        harness
            .gateway()
            .set_login(Err(GatewayError::Unauthorized));

        assert!(!harness.container.session.login("dana@example.org", "bad").await);
        assert_eq!(
            harness.container.session.error().as_deref(),
            Some(LOGIN_FAILED_MSG)
        );
        assert!(!harness.hint_set());
    }

    #[tokio::test]
    async fn test_login_without_user_sets_generic_error() {
        let harness = Harness::new();
        harness.gateway().set_login(Ok(LoginResponse::default()));
        harness.gateway().set_current_user(Ok(current_user()));
        assert!(harness.container.session.login("dana@example.org", "pw").await);
        assert!(harness.hint_set());

        let mut sub = harness
            .container
            .subscribe(EventFilter::topics(vec![EventTopic::Session]));
        harness.gateway().set_current_user(Ok(CurrentUser::default()));

        assert!(!harness.container.session.login("dana@example.org", "pw").await);
        assert_eq!(
            harness.container.session.error().as_deref(),
            Some(LOGIN_NO_USER_MSG)
        );
        assert!(!harness.container.session.is_authenticated());
        assert_eq!(harness.container.session.state(), SessionState::Unauthenticated);
        assert!(!harness.hint_set());
        assert_eq!(sub.drain(), vec![PortalEvent::SessionChanged { authenticated: false }]);
    }

    #[tokio::test]
    async fn test_logout_clears_state_when_gateway_fails() {
        let harness = Harness::new();
        harness.gateway().set_login(Ok(LoginResponse::default()));
        harness.gateway().set_current_user(Ok(current_user()));
        assert!(harness.container.session.login("dana@example.org", "pw").await);

        harness
            .gateway()
            .set_logout(Err(GatewayError::Connection("refused".into())));
        harness.container.session.logout().await;

        assert!(!harness.container.session.is_authenticated());
        assert_eq!(harness.container.session.supplier_name(), "");
        assert!(!harness.hint_set());
    }

    #[tokio::test]
    async fn test_check_session_failure_logs_out_locally() {
        let harness = Harness::new();
        harness.write_hint();
        harness.gateway().set_current_user(Ok(current_user()));
        assert!(harness.container.session.initialize().await);

        harness
            .gateway()
            .set_current_user(Err(GatewayError::Unauthorized));
        assert!(!harness.container.session.check_session().await);

        assert_eq!(harness.container.session.state(), SessionState::Unauthenticated);
        assert!(!harness.hint_set());
    }
}
