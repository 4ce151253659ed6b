//! # Inbound Ports

use async_trait::async_trait;
use shared_types::{CreateInquiryParams, FileUpload, InquiryQuery, SupplierInquiry};

/// Inquiry store API - inbound port.
///
/// Failures land in the owning slice's error field; nothing is returned as
/// an error.
#[async_trait]
pub trait InquiryApi: Send + Sync {
    /// Refresh stats unless present and fresh, or when forced.
    async fn fetch_stats(&self, force: bool);

    /// Fetch a page. `params` override the current page and page size and
    /// become the stored filters.
    async fn fetch_inquiries(&self, params: InquiryQuery);

    /// Advance one page with the stored filters. No-op on the last page.
    async fn load_next_page(&self);

    /// Jump to `page` with the stored filters. No-op outside `1..=total_pages`.
    async fn go_to_page(&self, page: u32);

    /// Load one inquiry into the detail slice.
    async fn fetch_inquiry(&self, name: &str) -> Option<SupplierInquiry>;

    /// Create an inquiry and return its name.
    async fn submit_inquiry(&self, params: CreateInquiryParams) -> Option<String>;

    /// Upload a file and link it to an inquiry; returns the stored file URL.
    async fn attach_file(&self, inquiry_name: &str, file: FileUpload) -> Option<String>;

    /// Empty the detail slice.
    async fn clear_current_inquiry(&self);

    /// Reset the form slice.
    async fn clear_form_state(&self);

    /// Back to page one with no filters and no items.
    async fn reset_list(&self);
}
