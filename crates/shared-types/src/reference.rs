//! # Reference Records
//!
//! Lookup collections published by the backend and cached client-side.
//! Entity collections are keyed by `name`, enumerations by `value`.

use serde::{Deserialize, Serialize};

use crate::entities::DocMeta;

/// Activity domain category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDomainCategory {
    /// Document name.
    pub name: String,
    /// Category code.
    #[serde(default)]
    pub category_code: String,
    /// Category display name.
    #[serde(default)]
    pub category_name: String,
    /// Document bookkeeping.
    #[serde(flatten)]
    pub meta: DocMeta,
}

/// Inquiry topic category (a tree).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryTopicCategory {
    /// Document name.
    pub name: String,
    /// Category code.
    #[serde(default)]
    pub category_code: String,
    /// Category display name.
    #[serde(default)]
    pub category_name: String,
    /// Parent category name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_category: Option<String>,
    /// Whether this node groups other categories.
    #[serde(default)]
    pub is_group: u8,
    /// Nested-set left bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lft: Option<u32>,
    /// Nested-set right bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgt: Option<u32>,
    /// Document bookkeeping.
    #[serde(flatten)]
    pub meta: DocMeta,
}

/// Role an inquiry can be routed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRole {
    /// Document name.
    pub name: String,
    /// Role name.
    #[serde(default)]
    pub role_name: String,
    /// Hebrew title.
    #[serde(default)]
    pub role_title_he: String,
    /// Document bookkeeping.
    #[serde(flatten)]
    pub meta: DocMeta,
}

/// Role of a supplier's contact person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPersonRole {
    /// Document name.
    pub name: String,
    /// Role label.
    #[serde(default)]
    pub role: String,
    /// Document bookkeeping.
    #[serde(flatten)]
    pub meta: DocMeta,
}

/// Whether a status counts as open or closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// The inquiry is still being handled.
    #[default]
    Open,
    /// The inquiry is done.
    Closed,
}

/// One value of the inquiry status enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryStatus {
    /// Stored value.
    pub value: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Open/closed partition.
    #[serde(rename = "type")]
    pub kind: StatusKind,
}

impl InquiryStatus {
    /// Status whose label equals its value.
    pub fn new(value: impl Into<String>, kind: StatusKind) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            kind,
        }
    }
}

/// One value of the inquiry context enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryContext {
    /// Stored value.
    pub value: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
}

impl InquiryContext {
    /// Context whose label equals its value.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// The full reference bundle, as served by the backend and the static snapshot.
///
/// A missing collection deserializes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Activity domain categories.
    #[serde(default)]
    pub activity_domains: Vec<ActivityDomainCategory>,
    /// Inquiry topic categories.
    #[serde(default)]
    pub inquiry_topics: Vec<InquiryTopicCategory>,
    /// Supplier roles.
    #[serde(default)]
    pub supplier_roles: Vec<SupplierRole>,
    /// Contact person roles.
    #[serde(default)]
    pub contact_person_roles: Vec<ContactPersonRole>,
    /// Inquiry status enumeration.
    #[serde(default)]
    pub inquiry_statuses: Vec<InquiryStatus>,
    /// Inquiry context enumeration.
    #[serde(default)]
    pub inquiry_contexts: Vec<InquiryContext>,
}
