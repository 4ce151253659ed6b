//! # Request and Response Payloads
//!
//! Parameters sent to the portal API and the envelopes it answers with.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entities::SupplierInquiry;

// =============================================================================
// LISTING
// =============================================================================

/// Parameters of the inquiry list call.
///
/// `page` and `page_size` are request paging; the other fields form the
/// filter set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryQuery {
    /// 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Status value filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation date lower bound (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    /// Creation date upper bound (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    /// Ordering clause, e.g. "creation desc".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl InquiryQuery {
    /// Query with only a status filter.
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Default::default()
        }
    }

    /// Overlay this query on top of paging defaults.
    ///
    /// Fields set on `self` win; unset paging falls back to the defaults.
    pub fn over_paging(&self, page: u32, page_size: u32) -> Self {
        Self {
            page: self.page.or(Some(page)),
            page_size: self.page_size.or(Some(page_size)),
            ..self.clone()
        }
    }

    /// Same filter set with paging removed.
    pub fn without_paging(&self) -> Self {
        Self {
            page: None,
            page_size: None,
            ..self.clone()
        }
    }
}

/// One page of inquiries as returned by the portal list call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryPage {
    /// Items on this page.
    #[serde(default)]
    pub data: Vec<SupplierInquiry>,
    /// Total matching items.
    pub total: u64,
    /// Page served.
    pub page: u32,
    /// Page size served.
    pub page_size: u32,
    /// Total pages for this filter set.
    pub total_pages: u32,
}

/// Generic resource listing request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRequest {
    /// Backend document type, e.g. "Supplier Inquiry".
    pub doctype: String,
    /// Fields to return; empty means server default.
    #[serde(default)]
    pub fields: Vec<String>,
    /// Equality filters.
    #[serde(default)]
    pub filters: BTreeMap<String, serde_json::Value>,
    /// Ordering clause.
    #[serde(default)]
    pub order_by: Option<String>,
    /// Page length.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Offset of the first row.
    #[serde(default)]
    pub start: Option<u32>,
}

impl ListRequest {
    /// Request for every document of a type.
    pub fn new(doctype: impl Into<String>) -> Self {
        Self {
            doctype: doctype.into(),
            ..Default::default()
        }
    }
}

/// Generic resource listing response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceList {
    /// Raw documents.
    pub items: Vec<serde_json::Value>,
    /// Number of documents returned.
    pub total: u64,
}

// =============================================================================
// CREATION
// =============================================================================

/// Parameters of inquiry creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInquiryParams {
    /// Topic category name.
    pub topic_category: String,
    /// Description text.
    pub description: String,
    /// Context value.
    pub inquiry_context: String,
    /// Insured person's ID number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insured_id: Option<String>,
    /// Insured person's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insured_name: Option<String>,
}

/// Outcome of inquiry creation. `success == false` is a business rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInquiryResult {
    /// Whether the inquiry was created.
    pub success: bool,
    /// Name of the created inquiry.
    #[serde(default)]
    pub name: String,
    /// Server message.
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// ATTACHMENTS
// =============================================================================

/// Raw file contents to upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileUpload {
    /// File name as shown to users.
    pub file_name: String,
    /// MIME type.
    pub content_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// File with a generic binary content type.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: "application/octet-stream".to_string(),
            bytes,
        }
    }
}

/// Where an uploaded file should be attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOptions {
    /// Document type to attach to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctype: Option<String>,
    /// Document name to attach to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docname: Option<String>,
    /// Store as a private file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

/// Storage reference for an uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// URL the file is served under.
    pub file_url: String,
    /// File document name.
    #[serde(default)]
    pub name: String,
}

/// Outcome of linking an uploaded file to an inquiry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachFileResult {
    /// Whether the link was stored.
    pub success: bool,
    /// Server message.
    #[serde(default)]
    pub message: String,
}
