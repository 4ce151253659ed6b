//! # Core Domain Entities
//!
//! Documents served by the portal backend, as the stores hold them.
//!
//! ## Clusters
//!
//! - **Identity**: `UserIdentity`, `Supplier`, `CurrentUser`
//! - **Inquiries**: `SupplierInquiry`, `InquiryStats`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A document's primary key on the backend.
pub type DocName = String;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Standard bookkeeping fields carried by every backend document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMeta {
    /// Creation timestamp (server formatted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation: Option<String>,
    /// Last modified timestamp (server formatted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    /// Last modifying user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    /// Owning user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// 0 = draft, 1 = submitted, 2 = cancelled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docstatus: Option<u8>,
}

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// The logged-in portal user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// User document name (usually the login email).
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Backend user type ("Website User", "System User").
    #[serde(default)]
    pub user_type: String,
    /// 1 when the account is enabled.
    #[serde(default)]
    pub enabled: u8,
}

/// Activity domain row on a supplier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierActivityDomain {
    /// Row name.
    #[serde(default)]
    pub name: String,
    /// Linked activity domain category.
    #[serde(default)]
    pub activity_domain: String,
}

/// The supplier linked to the logged-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// Document name.
    pub name: DocName,
    /// External supplier identifier.
    #[serde(default)]
    pub supplier_id: String,
    /// Display name.
    #[serde(default)]
    pub supplier_name: String,
    /// Registered activity domains.
    #[serde(default)]
    pub activity_domains: Vec<SupplierActivityDomain>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Document bookkeeping.
    #[serde(flatten)]
    pub meta: DocMeta,
}

/// Response of the current-user call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Present when the server holds a live session for the caller.
    #[serde(default)]
    pub user: Option<UserIdentity>,
    /// Supplier linked to the user, if any.
    #[serde(default)]
    pub supplier: Option<Supplier>,
}

/// Response of the credential exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Server message ("Logged In").
    #[serde(default)]
    pub message: String,
    /// Display name of the user that logged in.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Bearer token, only issued in token auth deployments.
    #[serde(default)]
    pub token: Option<String>,
}

// =============================================================================
// CLUSTER B: INQUIRIES
// =============================================================================

/// A supplier inquiry document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierInquiry {
    /// Document name (e.g. "INQ-0001").
    pub name: DocName,
    /// Owning supplier.
    #[serde(default)]
    pub supplier_link: String,
    /// Linked inquiry topic category.
    #[serde(default)]
    pub topic_category: String,
    /// Free-text description.
    #[serde(default)]
    pub inquiry_description: String,
    /// Inquiry context value (see reference contexts).
    #[serde(default)]
    pub inquiry_context: String,
    /// Insured person's ID number, for insured-context inquiries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insured_id_number: Option<String>,
    /// Insured person's full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insured_full_name: Option<String>,
    /// Attached file URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<String>,
    /// Status value (see reference statuses).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inquiry_status: Option<String>,
    /// Role the inquiry is routed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_role: Option<String>,
    /// Employee handling the inquiry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_employee_id: Option<String>,
    /// Response text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_text: Option<String>,
    /// Response attachments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_attachments: Option<String>,
    /// Document bookkeeping.
    #[serde(flatten)]
    pub meta: DocMeta,
}

/// Aggregate inquiry counts for the current supplier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryStats {
    /// All inquiries.
    pub total: u64,
    /// Inquiries in an open status.
    pub open: u64,
    /// Inquiries in a closed status.
    pub closed: u64,
    /// Count per status value.
    #[serde(default)]
    pub by_status: BTreeMap<String, u64>,
}
