//! Shared test fixtures.

use std::sync::Arc;

use portal_gateway::MockGateway;
use portal_runtime::{PortalConfig, PortalContainer};
use shared_types::{
    ActivityDomainCategory, CurrentUser, InquiryContext, InquiryPage, InquiryStats, InquiryStatus,
    ManualTimeSource, ReferenceData, StatusKind, Supplier, SupplierInquiry, TimeSource,
    UserIdentity,
};
use tempfile::TempDir;

pub const START_MS: u64 = 1_700_000_000_000;

/// Container over a scripted gateway and a manual clock.
pub struct Harness {
    pub container: PortalContainer<MockGateway>,
    pub clock: Arc<ManualTimeSource>,
    pub dir: TempDir,
}

impl Harness {
    /// No snapshot file: reference loads fall back to the gateway.
    pub fn new() -> Self {
        Self::build(MockGateway::new(), None)
    }

    /// Snapshot file holding `data`.
    pub fn with_snapshot(data: &ReferenceData) -> Self {
        Self::build(MockGateway::new(), Some(data))
    }

    /// Custom gateway, e.g. one with latency.
    pub fn with_mock(gateway: MockGateway) -> Self {
        Self::build(gateway, None)
    }

    fn build(gateway: MockGateway, snapshot: Option<&ReferenceData>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let snapshot_path = dir.path().join("reference-data.json");
        if let Some(data) = snapshot {
            std::fs::write(&snapshot_path, serde_json::to_vec(data).unwrap()).unwrap();
        }

        let mut config = PortalConfig::for_testing("http://127.0.0.1:9");
        config.session.hint_path = Some(dir.path().join("session.json"));
        config.reference.snapshot_path = Some(snapshot_path);

        let clock = Arc::new(ManualTimeSource::new(START_MS));
        let time: Arc<dyn TimeSource> = clock.clone();
        let container =
            PortalContainer::with_gateway(config, Arc::new(gateway), time).unwrap();

        Self {
            container,
            clock,
            dir,
        }
    }

    pub fn gateway(&self) -> &MockGateway {
        &self.container.gateway
    }

    /// Path of the durable session hint.
    pub fn hint_path(&self) -> std::path::PathBuf {
        self.dir.path().join("session.json")
    }

    /// Mark the previous process as authenticated.
    pub fn write_hint(&self) {
        std::fs::write(self.hint_path(), r#"{"user_authenticated": true}"#).unwrap();
    }

    /// Whether the durable hint is currently set.
    pub fn hint_set(&self) -> bool {
        match std::fs::read_to_string(self.hint_path()) {
            Ok(raw) => {
                let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
                value["user_authenticated"] == serde_json::Value::Bool(true)
            }
            Err(_) => false,
        }
    }
}

pub fn current_user() -> CurrentUser {
    CurrentUser {
        user: Some(UserIdentity {
            name: "dana@example.org".into(),
            email: "dana@example.org".into(),
            full_name: "Dana Levi".into(),
            enabled: 1,
            ..Default::default()
        }),
        supplier: Some(Supplier {
            name: "SUP-0001".into(),
            supplier_id: "514000001".into(),
            supplier_name: "Acme Medical".into(),
            ..Default::default()
        }),
    }
}

pub fn reference_data() -> ReferenceData {
    ReferenceData {
        activity_domains: vec![ActivityDomainCategory {
            name: "AD-001".into(),
            category_code: "001".into(),
            category_name: "ציוד רפואי".into(),
            ..Default::default()
        }],
        inquiry_statuses: vec![
            InquiryStatus {
                value: "פתוח".into(),
                label: "פתוחה".into(),
                kind: StatusKind::Open,
            },
            InquiryStatus::new("סגור", StatusKind::Closed),
        ],
        inquiry_contexts: vec![
            InquiryContext::new("ספק עצמו"),
            InquiryContext::new("מבוטח"),
        ],
        ..Default::default()
    }
}

pub fn inquiry(name: &str) -> SupplierInquiry {
    SupplierInquiry {
        name: name.into(),
        supplier_link: "SUP-0001".into(),
        topic_category: "T1".into(),
        inquiry_description: "x".into(),
        inquiry_context: "ספק עצמו".into(),
        inquiry_status: Some("פתוח".into()),
        ..Default::default()
    }
}

/// Page `page` of a 45-item listing at 20 per page.
pub fn listing_page(page: u32) -> InquiryPage {
    InquiryPage {
        data: (1..=3)
            .map(|i| inquiry(&format!("INQ-{page:02}{i:02}")))
            .collect(),
        total: 45,
        page,
        page_size: 20,
        total_pages: 3,
    }
}

pub fn stats() -> InquiryStats {
    InquiryStats {
        total: 45,
        open: 30,
        closed: 15,
        ..Default::default()
    }
}
