//! # Inbound Ports

use async_trait::async_trait;
use shared_types::{
    ActivityDomainCategory, ContactPersonRole, InquiryContext, InquiryTopicCategory, SupplierRole,
};

/// Reference cache API - inbound port.
#[async_trait]
pub trait ReferenceCacheApi: Send + Sync {
    /// Load the dataset unless it is initialized and fresh.
    ///
    /// Tries the static snapshot first, then the gateway.
    async fn initialize(&self);

    /// Reload from the gateway, ignoring freshness.
    async fn refresh(&self);

    /// Activity domain by `name`.
    fn get_activity_domain(&self, name: &str) -> Option<ActivityDomainCategory>;

    /// Inquiry topic by `name`.
    fn get_inquiry_topic(&self, name: &str) -> Option<InquiryTopicCategory>;

    /// Supplier role by `name`.
    fn get_supplier_role(&self, name: &str) -> Option<SupplierRole>;

    /// Contact person role by `name`.
    fn get_contact_person_role(&self, name: &str) -> Option<ContactPersonRole>;

    /// Inquiry context by `value`.
    fn get_inquiry_context(&self, value: &str) -> Option<InquiryContext>;

    /// Status label, echoing `value` when unknown or unlabeled.
    fn get_status_label(&self, value: &str) -> String;

    /// Context label, echoing `value` when unknown or unlabeled.
    fn get_context_label(&self, value: &str) -> String;

    /// Whether `value` is an open status.
    fn is_open_status(&self, value: &str) -> bool;

    /// Initialized with at least one activity domain.
    fn is_loaded(&self) -> bool;

    /// Loaded less than one TTL ago.
    fn is_cache_valid(&self) -> bool;
}
