//! # Reference Dataset
//!
//! The six lookup collections plus load bookkeeping. Collections are only
//! ever replaced together through [`ReferenceDataset::replace`].

use shared_types::{
    ActivityDomainCategory, ContactPersonRole, InquiryContext, InquiryStatus,
    InquiryTopicCategory, ReferenceData, StatusKind, SupplierRole, Timestamp,
};

/// Default time-to-live of a loaded dataset (1 hour).
pub const CACHE_TTL_MS: u64 = 60 * 60 * 1000;

/// Where a successful load came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadSource {
    /// Static snapshot resource.
    Snapshot,
    /// Live gateway call.
    Gateway,
}

/// Reference store state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceDataset {
    /// Current collections.
    pub data: ReferenceData,
    /// Set after the first successful load.
    pub initialized: bool,
    /// A load is in flight.
    pub loading: bool,
    /// Localized message from the last failed load.
    pub error: Option<String>,
    /// When the collections were last replaced (ms).
    pub last_fetched: Option<Timestamp>,
}

impl ReferenceDataset {
    /// Replace all six collections at once and stamp the load.
    pub fn replace(&mut self, data: ReferenceData, now: Timestamp) {
        self.data = data;
        self.initialized = true;
        self.last_fetched = Some(now);
    }

    /// Loaded within `ttl_ms` of `now`. Exactly `ttl_ms` old is stale.
    pub fn is_cache_valid(&self, now: Timestamp, ttl_ms: u64) -> bool {
        match self.last_fetched {
            Some(fetched) => now.saturating_sub(fetched) < ttl_ms,
            None => false,
        }
    }

    /// Initialized with at least one activity domain.
    pub fn is_loaded(&self) -> bool {
        self.initialized && !self.data.activity_domains.is_empty()
    }

    pub fn activity_domain(&self, name: &str) -> Option<&ActivityDomainCategory> {
        self.data.activity_domains.iter().find(|d| d.name == name)
    }

    pub fn inquiry_topic(&self, name: &str) -> Option<&InquiryTopicCategory> {
        self.data.inquiry_topics.iter().find(|t| t.name == name)
    }

    pub fn supplier_role(&self, name: &str) -> Option<&SupplierRole> {
        self.data.supplier_roles.iter().find(|r| r.name == name)
    }

    pub fn contact_person_role(&self, name: &str) -> Option<&ContactPersonRole> {
        self.data.contact_person_roles.iter().find(|r| r.name == name)
    }

    pub fn inquiry_status(&self, value: &str) -> Option<&InquiryStatus> {
        self.data.inquiry_statuses.iter().find(|s| s.value == value)
    }

    pub fn inquiry_context(&self, value: &str) -> Option<&InquiryContext> {
        self.data.inquiry_contexts.iter().find(|c| c.value == value)
    }

    /// Display label for a status, or the raw value.
    pub fn status_label(&self, value: &str) -> String {
        self.inquiry_status(value)
            .map(|s| s.label.as_str())
            .filter(|label| !label.is_empty())
            .unwrap_or(value)
            .to_string()
    }

    /// Display label for a context, or the raw value.
    pub fn context_label(&self, value: &str) -> String {
        self.inquiry_context(value)
            .map(|c| c.label.as_str())
            .filter(|label| !label.is_empty())
            .unwrap_or(value)
            .to_string()
    }

    /// Status values of the given kind, in dataset order.
    pub fn statuses_of(&self, kind: StatusKind) -> Vec<String> {
        self.data
            .inquiry_statuses
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| s.value.clone())
            .collect()
    }

    pub fn is_open_status(&self, value: &str) -> bool {
        self.data
            .inquiry_statuses
            .iter()
            .any(|s| s.kind == StatusKind::Open && s.value == value)
    }
}
