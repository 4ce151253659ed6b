//! # Reference Cache Service
//!
//! Two load paths feed one atomic replace:
//!
//! ```text
//! initialize() ──→ SnapshotSource ──Some──→ replace
//!                        │ None / Err
//!                        ▼
//!                  PortalGateway ──────────→ replace
//! refresh()   ──→  PortalGateway ──────────→ replace
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use portal_gateway::PortalGateway;
use shared_bus::{EventPublisher, PortalEvent};
use shared_types::{
    ActivityDomainCategory, ContactPersonRole, InquiryContext, InquiryStatus,
    InquiryTopicCategory, ReferenceData, StatusKind, SupplierRole, TimeSource, Timestamp,
};
use tracing::{debug, error, info, warn};

use crate::config::ReferenceCacheConfig;
use crate::domain::{
    LoadSource, ReferenceDataset, ReferenceError, INIT_FAILED_MSG, REFRESH_FAILED_MSG,
};
use crate::ports::{ReferenceCacheApi, SnapshotSource};

/// Reference Cache Service.
pub struct ReferenceCacheService<G: PortalGateway> {
    gateway: Arc<G>,
    snapshot: Arc<dyn SnapshotSource>,
    clock: Arc<dyn TimeSource>,
    events: Arc<dyn EventPublisher>,
    config: ReferenceCacheConfig,
    state: RwLock<ReferenceDataset>,
}

impl<G: PortalGateway> ReferenceCacheService<G> {
    /// Create a new reference cache service.
    pub fn new(
        gateway: Arc<G>,
        snapshot: Arc<dyn SnapshotSource>,
        clock: Arc<dyn TimeSource>,
        events: Arc<dyn EventPublisher>,
        config: ReferenceCacheConfig,
    ) -> Self {
        Self {
            gateway,
            snapshot,
            clock,
            events,
            config,
            state: RwLock::new(ReferenceDataset::default()),
        }
    }

    /// Copy of the whole store state.
    pub fn dataset(&self) -> ReferenceDataset {
        self.state.read().clone()
    }

    pub fn activity_domains(&self) -> Vec<ActivityDomainCategory> {
        self.state.read().data.activity_domains.clone()
    }

    pub fn inquiry_topics(&self) -> Vec<InquiryTopicCategory> {
        self.state.read().data.inquiry_topics.clone()
    }

    pub fn supplier_roles(&self) -> Vec<SupplierRole> {
        self.state.read().data.supplier_roles.clone()
    }

    pub fn contact_person_roles(&self) -> Vec<ContactPersonRole> {
        self.state.read().data.contact_person_roles.clone()
    }

    pub fn inquiry_statuses(&self) -> Vec<InquiryStatus> {
        self.state.read().data.inquiry_statuses.clone()
    }

    pub fn inquiry_contexts(&self) -> Vec<InquiryContext> {
        self.state.read().data.inquiry_contexts.clone()
    }

    /// Values of every open status.
    pub fn open_statuses(&self) -> Vec<String> {
        self.state.read().statuses_of(StatusKind::Open)
    }

    /// Values of every closed status.
    pub fn closed_statuses(&self) -> Vec<String> {
        self.state.read().statuses_of(StatusKind::Closed)
    }

    pub fn is_initialized(&self) -> bool {
        self.state.read().initialized
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn last_fetched(&self) -> Option<Timestamp> {
        self.state.read().last_fetched
    }

    fn begin_load(&self) {
        let mut state = self.state.write();
        state.loading = true;
        state.error = None;
    }

    fn install(&self, data: ReferenceData) {
        let now = self.clock.now();
        self.state.write().replace(data, now);
    }

    async fn fetch_live(&self) -> Result<(), ReferenceError> {
        let data = self.gateway.fetch_reference_data().await?;
        self.install(data);
        Ok(())
    }

    async fn load_initial(&self) -> Result<LoadSource, ReferenceError> {
        match self.snapshot.load().await {
            Ok(Some(data)) => {
                self.install(data);
                return Ok(LoadSource::Snapshot);
            }
            Ok(None) => {
                debug!(location = %self.snapshot.location(), "[sp-02] No static snapshot");
            }
            Err(e) => {
                warn!(
                    location = %self.snapshot.location(),
                    "[sp-02] Static snapshot unusable, falling back to gateway: {}", e
                );
            }
        }

        self.fetch_live().await?;
        Ok(LoadSource::Gateway)
    }

    async fn finish_load(&self, failure: Option<&str>) {
        let initialized = {
            let mut state = self.state.write();
            state.loading = false;
            if let Some(message) = failure {
                state.error = Some(message.to_string());
            }
            state.initialized
        };
        self.events
            .publish(PortalEvent::ReferenceDataChanged {
                initialized,
                failed: failure.is_some(),
            })
            .await;
    }
}

#[async_trait]
impl<G: PortalGateway> ReferenceCacheApi for ReferenceCacheService<G> {
    async fn initialize(&self) {
        if self.is_initialized() && self.is_cache_valid() {
            debug!("[sp-02] Reference data fresh, skipping load");
            return;
        }

        self.begin_load();
        let failure = match self.load_initial().await {
            Ok(source) => {
                let dataset = self.state.read();
                info!(
                    ?source,
                    domains = dataset.data.activity_domains.len(),
                    statuses = dataset.data.inquiry_statuses.len(),
                    "[sp-02] Reference data loaded"
                );
                None
            }
            Err(e) => {
                error!("[sp-02] Failed to initialize reference data: {}", e);
                Some(INIT_FAILED_MSG)
            }
        };
        self.finish_load(failure).await;
    }

    async fn refresh(&self) {
        self.begin_load();
        let failure = match self.fetch_live().await {
            Ok(()) => {
                info!("[sp-02] Reference data refreshed");
                None
            }
            Err(e) => {
                error!("[sp-02] Failed to refresh reference data: {}", e);
                Some(REFRESH_FAILED_MSG)
            }
        };
        self.finish_load(failure).await;
    }

    fn get_activity_domain(&self, name: &str) -> Option<ActivityDomainCategory> {
        self.state.read().activity_domain(name).cloned()
    }

    fn get_inquiry_topic(&self, name: &str) -> Option<InquiryTopicCategory> {
        self.state.read().inquiry_topic(name).cloned()
    }

    fn get_supplier_role(&self, name: &str) -> Option<SupplierRole> {
        self.state.read().supplier_role(name).cloned()
    }

    fn get_contact_person_role(&self, name: &str) -> Option<ContactPersonRole> {
        self.state.read().contact_person_role(name).cloned()
    }

    fn get_inquiry_context(&self, value: &str) -> Option<InquiryContext> {
        self.state.read().inquiry_context(value).cloned()
    }

    fn get_status_label(&self, value: &str) -> String {
        self.state.read().status_label(value)
    }

    fn get_context_label(&self, value: &str) -> String {
        self.state.read().context_label(value)
    }

    fn is_open_status(&self, value: &str) -> bool {
        self.state.read().is_open_status(value)
    }

    fn is_loaded(&self) -> bool {
        self.state.read().is_loaded()
    }

    fn is_cache_valid(&self) -> bool {
        let now = self.clock.now();
        self.state.read().is_cache_valid(now, self.config.cache_ttl_ms)
    }
}
