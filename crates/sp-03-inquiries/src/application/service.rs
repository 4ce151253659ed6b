//! # Inquiry Service
//!
//! Owns the list, stats, detail and form slices. Overlapping fetches are
//! not sequenced: whichever response lands last wins.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use portal_gateway::PortalGateway;
use shared_bus::{EventPublisher, PortalEvent};
use shared_types::{
    CreateInquiryParams, FileUpload, InquiryQuery, InquiryStats, SupplierInquiry, TimeSource,
    UploadOptions,
};
use tracing::{debug, error, info, warn};

use crate::config::InquiryConfig;
use crate::domain::{
    DetailState, FormState, InquiryError, InquiryListState, Pagination, StatsState,
    CREATE_FAILED_MSG, DETAIL_FAILED_MSG, INQUIRY_DOCTYPE, LIST_FAILED_MSG,
};
use crate::ports::InquiryApi;

/// Inquiry Service - list, stats, detail and create flows.
pub struct InquiryService<G: PortalGateway> {
    gateway: Arc<G>,
    clock: Arc<dyn TimeSource>,
    events: Arc<dyn EventPublisher>,
    config: InquiryConfig,
    stats: RwLock<StatsState>,
    list: RwLock<InquiryListState>,
    detail: RwLock<DetailState>,
    form: RwLock<FormState>,
}

impl<G: PortalGateway> InquiryService<G> {
    /// Create a new inquiry service.
    pub fn new(
        gateway: Arc<G>,
        clock: Arc<dyn TimeSource>,
        events: Arc<dyn EventPublisher>,
        config: InquiryConfig,
    ) -> Self {
        let list = InquiryListState::new(config.default_page_size);
        Self {
            gateway,
            clock,
            events,
            config,
            stats: RwLock::new(StatsState::default()),
            list: RwLock::new(list),
            detail: RwLock::new(DetailState::default()),
            form: RwLock::new(FormState::default()),
        }
    }

    // === Stats ===

    pub fn stats(&self) -> Option<InquiryStats> {
        self.stats.read().stats.clone()
    }

    pub fn stats_loading(&self) -> bool {
        self.stats.read().loading
    }

    pub fn is_stats_stale(&self) -> bool {
        let now = self.clock.now();
        self.stats.read().is_stale(now, self.config.stats_ttl_ms)
    }

    // === List ===

    pub fn inquiries(&self) -> Vec<SupplierInquiry> {
        self.list.read().items.clone()
    }

    pub fn has_inquiries(&self) -> bool {
        !self.list.read().items.is_empty()
    }

    /// The first few items of the current page.
    pub fn recent_inquiries(&self) -> Vec<SupplierInquiry> {
        self.list
            .read()
            .items
            .iter()
            .take(self.config.recent_limit)
            .cloned()
            .collect()
    }

    pub fn pagination(&self) -> Pagination {
        self.list.read().pagination
    }

    pub fn filters(&self) -> InquiryQuery {
        self.list.read().filters.clone()
    }

    pub fn list_loading(&self) -> bool {
        self.list.read().loading
    }

    pub fn list_error(&self) -> Option<String> {
        self.list.read().error.clone()
    }

    // === Detail ===

    pub fn current_inquiry(&self) -> Option<SupplierInquiry> {
        self.detail.read().current.clone()
    }

    pub fn detail_loading(&self) -> bool {
        self.detail.read().loading
    }

    pub fn detail_error(&self) -> Option<String> {
        self.detail.read().error.clone()
    }

    // === Form ===

    pub fn form_loading(&self) -> bool {
        self.form.read().loading
    }

    pub fn form_error(&self) -> Option<String> {
        self.form.read().error.clone()
    }

    async fn notify_list(&self) {
        let event = {
            let list = self.list.read();
            PortalEvent::InquiryListChanged {
                page: list.pagination.page,
                total: list.pagination.total,
                failed: list.error.is_some(),
            }
        };
        self.events.publish(event).await;
    }

    async fn notify_detail(&self) {
        let name = self.detail.read().current.as_ref().map(|i| i.name.clone());
        self.events
            .publish(PortalEvent::CurrentInquiryChanged { name })
            .await;
    }

    async fn notify_form(&self) {
        let has_error = self.form.read().error.is_some();
        self.events
            .publish(PortalEvent::FormStateChanged { has_error })
            .await;
    }

    /// Move to `page` and re-fetch with the stored filters.
    async fn fetch_page(&self, page: u32) {
        let filters = {
            let mut list = self.list.write();
            list.pagination.page = page;
            list.filters.without_paging()
        };
        self.fetch_inquiries(filters).await;
    }

    async fn upload_and_link(
        &self,
        inquiry_name: &str,
        file: &FileUpload,
    ) -> Result<String, InquiryError> {
        let options = UploadOptions {
            doctype: Some(INQUIRY_DOCTYPE.to_string()),
            docname: Some(inquiry_name.to_string()),
            is_private: None,
        };
        let uploaded = self.gateway.upload_bytes(file, &options).await?;
        let linked = self
            .gateway
            .link_attachment(inquiry_name, &uploaded.file_url)
            .await?;
        if !linked.success {
            return Err(InquiryError::AttachRejected(linked.message));
        }
        Ok(uploaded.file_url)
    }
}

#[async_trait]
impl<G: PortalGateway> InquiryApi for InquiryService<G> {
    async fn fetch_stats(&self, force: bool) {
        if !force && self.stats().is_some() && !self.is_stats_stale() {
            debug!("[sp-03] Stats fresh, skipping fetch");
            return;
        }

        self.stats.write().loading = true;

        match self.gateway.fetch_inquiry_stats().await {
            Ok(stats) => {
                let now = self.clock.now();
                debug!(total = stats.total, open = stats.open, "[sp-03] Stats fetched");
                let mut state = self.stats.write();
                state.stats = Some(stats);
                state.last_fetched = Some(now);
            }
            Err(e) => {
                error!("[sp-03] Failed to fetch inquiry stats: {}", e);
            }
        }

        self.stats.write().loading = false;
        self.events.publish(PortalEvent::InquiryStatsChanged).await;
    }

    async fn fetch_inquiries(&self, params: InquiryQuery) {
        let request = {
            let mut list = self.list.write();
            list.loading = true;
            list.error = None;
            let request = params.over_paging(list.pagination.page, list.pagination.page_size);
            list.filters = params;
            request
        };

        match self.gateway.fetch_inquiry_list(&request).await {
            Ok(page) => {
                let mut list = self.list.write();
                let fallback_size = list.pagination.page_size;
                list.pagination = Pagination::from_page(&page, fallback_size);
                list.items = page.data;
                debug!(
                    page = list.pagination.page,
                    total = list.pagination.total,
                    "[sp-03] Inquiry page loaded"
                );
            }
            Err(e) => {
                error!("[sp-03] Failed to fetch inquiries: {}", e);
                let mut list = self.list.write();
                list.items.clear();
                list.error = Some(LIST_FAILED_MSG.to_string());
            }
        }

        self.list.write().loading = false;
        self.notify_list().await;
    }

    async fn load_next_page(&self) {
        let pagination = self.pagination();
        if !pagination.has_next() {
            return;
        }
        self.fetch_page(pagination.page + 1).await;
    }

    async fn go_to_page(&self, page: u32) {
        if !self.pagination().contains(page) {
            debug!(page, "[sp-03] Page out of range, ignoring");
            return;
        }
        self.fetch_page(page).await;
    }

    async fn fetch_inquiry(&self, name: &str) -> Option<SupplierInquiry> {
        {
            let mut detail = self.detail.write();
            detail.loading = true;
            detail.error = None;
        }

        let result = match self.gateway.fetch_inquiry(name).await {
            Ok(inquiry) => {
                self.detail.write().current = Some(inquiry.clone());
                Some(inquiry)
            }
            Err(e) => {
                error!(name, "[sp-03] Failed to fetch inquiry: {}", e);
                let mut detail = self.detail.write();
                detail.current = None;
                detail.error = Some(DETAIL_FAILED_MSG.to_string());
                None
            }
        };

        self.detail.write().loading = false;
        self.notify_detail().await;
        result
    }

    async fn submit_inquiry(&self, params: CreateInquiryParams) -> Option<String> {
        {
            let mut form = self.form.write();
            form.loading = true;
            form.error = None;
        }

        let created = match self.gateway.create_inquiry(&params).await {
            Ok(result) if result.success => {
                info!(name = %result.name, "[sp-03] Inquiry created");
                self.fetch_stats(true).await;
                Some(result.name)
            }
            Ok(result) => {
                warn!(message = %result.message, "[sp-03] Inquiry rejected by server");
                let message = if result.message.is_empty() {
                    CREATE_FAILED_MSG.to_string()
                } else {
                    result.message
                };
                self.form.write().error = Some(message);
                None
            }
            Err(e) => {
                error!("[sp-03] Failed to create inquiry: {}", e);
                self.form.write().error = Some(CREATE_FAILED_MSG.to_string());
                None
            }
        };

        self.form.write().loading = false;
        self.notify_form().await;
        created
    }

    async fn attach_file(&self, inquiry_name: &str, file: FileUpload) -> Option<String> {
        match self.upload_and_link(inquiry_name, &file).await {
            Ok(file_url) => {
                info!(inquiry = inquiry_name, %file_url, "[sp-03] File attached");
                Some(file_url)
            }
            Err(e) => {
                error!(inquiry = inquiry_name, "[sp-03] Failed to attach file: {}", e);
                None
            }
        }
    }

    async fn clear_current_inquiry(&self) {
        {
            let mut detail = self.detail.write();
            detail.current = None;
            detail.error = None;
        }
        self.notify_detail().await;
    }

    async fn clear_form_state(&self) {
        *self.form.write() = FormState::default();
        self.notify_form().await;
    }

    async fn reset_list(&self) {
        {
            let mut list = self.list.write();
            list.pagination.page = 1;
            list.filters = InquiryQuery::default();
            list.items.clear();
            list.error = None;
        }
        self.notify_list().await;
    }
}
