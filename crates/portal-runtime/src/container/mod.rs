//! # Portal Container
//!
//! Holds the single gateway, the event bus and the three stores of a client
//! process. Stores never call each other; they share only the gateway and
//! the bus.

pub mod config;

pub use config::{ConfigError, PortalConfig};

use std::sync::Arc;
use std::time::Duration;

use portal_gateway::{HttpPortalGateway, PortalGateway};
use shared_bus::{EventFilter, EventPublisher, InMemoryEventBus, Subscription};
use shared_types::{SystemTimeSource, TimeSource};
use sp_01_session::{FileHintStore, InMemoryHintStore, SessionHintStore, SessionService};
use sp_02_reference_cache::{
    FileSnapshotSource, HttpSnapshotSource, ReferenceCacheService, SnapshotSource,
};
use sp_03_inquiries::InquiryService;
use tracing::info;

/// Central container holding all store instances.
pub struct PortalContainer<G: PortalGateway = HttpPortalGateway> {
    /// Configuration the container was built from.
    pub config: PortalConfig,

    /// Shared backend gateway.
    pub gateway: Arc<G>,

    /// Change notifications from every store.
    pub events: Arc<InMemoryEventBus>,

    /// Session Store (sp-01).
    pub session: Arc<SessionService<G>>,

    /// Reference Cache Store (sp-02).
    pub reference: Arc<ReferenceCacheService<G>>,

    /// Inquiry Store (sp-03).
    pub inquiries: Arc<InquiryService<G>>,
}

impl PortalContainer<HttpPortalGateway> {
    /// Build the production wiring: reqwest gateway and system clock.
    pub fn new(config: PortalConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let gateway = Arc::new(HttpPortalGateway::new(config.gateway.clone())?);
        Self::with_gateway(config, gateway, Arc::new(SystemTimeSource))
    }
}

impl<G: PortalGateway> PortalContainer<G> {
    /// Wire the stores around an existing gateway and clock.
    pub fn with_gateway(
        config: PortalConfig,
        gateway: Arc<G>,
        clock: Arc<dyn TimeSource>,
    ) -> Result<Self, ConfigError> {
        info!(
            base_url = %config.gateway.base_url,
            auth_mode = ?config.gateway.auth_mode,
            "Creating supplier portal container"
        );

        let events = Arc::new(InMemoryEventBus::new());
        let publisher: Arc<dyn EventPublisher> = events.clone();

        let hints = hint_store(&config);
        let snapshot = snapshot_source(&config)?;

        let session = Arc::new(SessionService::new(
            gateway.clone(),
            hints,
            publisher.clone(),
        ));
        let reference = Arc::new(ReferenceCacheService::new(
            gateway.clone(),
            snapshot,
            clock.clone(),
            publisher.clone(),
            config.reference.clone(),
        ));
        let inquiries = Arc::new(InquiryService::new(
            gateway.clone(),
            clock,
            publisher,
            config.inquiries.clone(),
        ));

        Ok(Self {
            config,
            gateway,
            events,
            session,
            reference,
            inquiries,
        })
    }

    /// Subscribe to store change notifications.
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        self.events.subscribe(filter)
    }
}

fn hint_store(config: &PortalConfig) -> Arc<dyn SessionHintStore> {
    match FileHintStore::from_config(&config.session) {
        Some(store) => Arc::new(store),
        None => Arc::new(InMemoryHintStore::new()),
    }
}

/// A file path wins over a URL; with neither, the snapshot is served from the
/// portal origin.
fn snapshot_source(config: &PortalConfig) -> Result<Arc<dyn SnapshotSource>, ConfigError> {
    if let Some(path) = &config.reference.snapshot_path {
        return Ok(Arc::new(FileSnapshotSource::new(path.clone())));
    }

    let timeout = Duration::from_secs(config.reference.snapshot_timeout_secs);
    let source = match &config.reference.snapshot_url {
        Some(url) => HttpSnapshotSource::new(url, timeout)?,
        None => HttpSnapshotSource::at_origin(&config.gateway.base_url, timeout)?,
    };
    Ok(Arc::new(source))
}
