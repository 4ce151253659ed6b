//! # Reference Flows
//!
//! Snapshot file versus live gateway load, TTL behaviour and label lookups
//! as the container wires them.

#[cfg(test)]
mod tests {
    use portal_gateway::{GatewayError, GatewayOp};
    use shared_bus::{EventFilter, EventTopic, PortalEvent};
    use shared_types::ReferenceData;
    use sp_02_reference_cache::{
        ReferenceCacheApi, CACHE_TTL_MS, INIT_FAILED_MSG, REFRESH_FAILED_MSG,
    };

    use crate::integration::fixtures::{reference_data, Harness};

    #[tokio::test]
    async fn test_snapshot_load_skips_gateway() {
        let harness = Harness::with_snapshot(&reference_data());

        harness.container.reference.initialize().await;

        assert!(harness.container.reference.is_loaded());
        assert_eq!(harness.gateway().calls(GatewayOp::ReferenceData), 0);
    }

    #[tokio::test]
    async fn test_missing_snapshot_falls_back_to_gateway() {
        let harness = Harness::new();
        harness.gateway().set_reference(Ok(reference_data()));

        harness.container.reference.initialize().await;

        assert!(harness.container.reference.is_loaded());
        assert_eq!(harness.gateway().calls(GatewayOp::ReferenceData), 1);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_falls_back_to_gateway() {
        let harness = Harness::new();
        std::fs::write(harness.dir.path().join("reference-data.json"), b"<html>").unwrap();
        harness.gateway().set_reference(Ok(reference_data()));

        harness.container.reference.initialize().await;

        assert!(harness.container.reference.is_initialized());
        assert_eq!(harness.gateway().calls(GatewayOp::ReferenceData), 1);
    }

    #[tokio::test]
    async fn test_cache_validity_follows_clock() {
        let harness = Harness::with_snapshot(&reference_data());
        let reference = &harness.container.reference;
        assert!(!reference.is_cache_valid());

        reference.initialize().await;
        assert!(reference.is_cache_valid());

        harness.clock.advance(CACHE_TTL_MS - 1);
        assert!(reference.is_cache_valid());

        harness.clock.advance(2);
        assert!(!reference.is_cache_valid());
    }

    #[tokio::test]
    async fn test_expired_cache_reloads() {
        let harness = Harness::with_snapshot(&reference_data());
        let reference = &harness.container.reference;

        reference.initialize().await;
        let first = reference.last_fetched();

        reference.initialize().await;
        assert_eq!(reference.last_fetched(), first);

        harness.clock.advance(CACHE_TTL_MS + 1);
        reference.initialize().await;
        assert!(reference.last_fetched() > first);
    }

    #[tokio::test]
    async fn test_labels_echo_unknown_values() {
        let harness = Harness::with_snapshot(&reference_data());
        let reference = &harness.container.reference;
        reference.initialize().await;

        assert_eq!(reference.get_status_label("פתוח"), "פתוחה");
        assert_eq!(reference.get_status_label("unknown-value"), "unknown-value");
        assert_eq!(reference.get_context_label("ספק עצמו"), "ספק עצמו");
        assert!(reference.is_open_status("פתוח"));
        assert!(!reference.is_open_status("סגור"));
        assert_eq!(reference.closed_statuses(), vec!["סגור".to_string()]);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_data() {
        let harness = Harness::with_snapshot(&reference_data());
        let reference = &harness.container.reference;
        reference.initialize().await;

        harness
            .gateway()
            .set_reference(Err(GatewayError::Connection("refused".into())));
        reference.refresh().await;

        assert_eq!(reference.error().as_deref(), Some(REFRESH_FAILED_MSG));
        assert!(reference.is_loaded());
        assert!(reference.get_activity_domain("AD-001").is_some());
    }

    #[tokio::test]
    async fn test_initialize_failure_is_reported_on_bus() {
        let harness = Harness::new();
        let mut sub = harness
            .container
            .subscribe(EventFilter::topics(vec![EventTopic::Reference]));

        harness.container.reference.initialize().await;

        assert_eq!(
            harness.container.reference.error().as_deref(),
            Some(INIT_FAILED_MSG)
        );
        assert_eq!(
            sub.recv().await,
            Some(PortalEvent::ReferenceDataChanged {
                initialized: false,
                failed: true,
            })
        );
    }

    #[tokio::test]
    async fn test_empty_bundle_is_initialized_but_not_loaded() {
        let harness = Harness::with_snapshot(&ReferenceData::default());

        harness.container.reference.initialize().await;

        assert!(harness.container.reference.is_initialized());
        assert!(!harness.container.reference.is_loaded());
    }
}
