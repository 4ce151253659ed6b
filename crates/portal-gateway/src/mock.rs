//! Scripted in-memory gateway for store tests.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{
    AttachFileResult, CreateInquiryParams, CreateInquiryResult, CurrentUser, FileUpload,
    InquiryPage, InquiryQuery, InquiryStats, ListRequest, LoginResponse, ReferenceData,
    ResourceList, SupplierInquiry, UploadOptions, UploadedFile,
};

use crate::error::GatewayError;
use crate::ports::PortalGateway;

/// Gateway operations, for call counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOp {
    Login,
    Logout,
    CurrentUser,
    List,
    Entity,
    InquiryList,
    InquiryStats,
    Inquiry,
    CreateInquiry,
    Upload,
    LinkAttachment,
    ReferenceData,
}

fn unscripted<T>() -> Result<T, GatewayError> {
    Err(GatewayError::Transport("not scripted".to_string()))
}

struct Script {
    login: Result<LoginResponse, GatewayError>,
    logout: Result<(), GatewayError>,
    current_user: Result<CurrentUser, GatewayError>,
    list: Result<ResourceList, GatewayError>,
    entity: Result<serde_json::Value, GatewayError>,
    inquiry_list: Result<InquiryPage, GatewayError>,
    stats: Result<InquiryStats, GatewayError>,
    inquiry: Result<SupplierInquiry, GatewayError>,
    create: Result<CreateInquiryResult, GatewayError>,
    upload: Result<UploadedFile, GatewayError>,
    link: Result<AttachFileResult, GatewayError>,
    reference: Result<ReferenceData, GatewayError>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            login: unscripted(),
            logout: Ok(()),
            current_user: unscripted(),
            list: unscripted(),
            entity: unscripted(),
            inquiry_list: unscripted(),
            stats: unscripted(),
            inquiry: unscripted(),
            create: unscripted(),
            upload: unscripted(),
            link: unscripted(),
            reference: unscripted(),
        }
    }
}

#[derive(Default)]
struct Recorded {
    calls: HashMap<GatewayOp, usize>,
    inquiry_queries: Vec<InquiryQuery>,
    created: Vec<CreateInquiryParams>,
    links: Vec<(String, String)>,
    logins: Vec<String>,
}

/// Mock gateway.
///
/// Every operation answers with its scripted result; unscripted operations
/// fail with a transport error, except logout which succeeds.
#[derive(Default)]
pub struct MockGateway {
    script: Mutex<Script>,
    recorded: Mutex<Recorded>,
    latency: Mutex<Option<Duration>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every call after it is counted.
    pub fn with_latency(self, latency: Duration) -> Self {
        *self.latency.lock() = Some(latency);
        self
    }

    pub fn set_login(&self, result: Result<LoginResponse, GatewayError>) {
        self.script.lock().login = result;
    }

    pub fn set_logout(&self, result: Result<(), GatewayError>) {
        self.script.lock().logout = result;
    }

    pub fn set_current_user(&self, result: Result<CurrentUser, GatewayError>) {
        self.script.lock().current_user = result;
    }

    pub fn set_list(&self, result: Result<ResourceList, GatewayError>) {
        self.script.lock().list = result;
    }

    pub fn set_entity(&self, result: Result<serde_json::Value, GatewayError>) {
        self.script.lock().entity = result;
    }

    pub fn set_inquiry_list(&self, result: Result<InquiryPage, GatewayError>) {
        self.script.lock().inquiry_list = result;
    }

    pub fn set_stats(&self, result: Result<InquiryStats, GatewayError>) {
        self.script.lock().stats = result;
    }

    pub fn set_inquiry(&self, result: Result<SupplierInquiry, GatewayError>) {
        self.script.lock().inquiry = result;
    }

    pub fn set_create(&self, result: Result<CreateInquiryResult, GatewayError>) {
        self.script.lock().create = result;
    }

    pub fn set_upload(&self, result: Result<UploadedFile, GatewayError>) {
        self.script.lock().upload = result;
    }

    pub fn set_link(&self, result: Result<AttachFileResult, GatewayError>) {
        self.script.lock().link = result;
    }

    pub fn set_reference(&self, result: Result<ReferenceData, GatewayError>) {
        self.script.lock().reference = result;
    }

    /// How many times `op` was invoked.
    pub fn calls(&self, op: GatewayOp) -> usize {
        self.recorded.lock().calls.get(&op).copied().unwrap_or(0)
    }

    /// Total invocations across all operations.
    pub fn total_calls(&self) -> usize {
        self.recorded.lock().calls.values().sum()
    }

    /// Queries passed to `fetch_inquiry_list`, in order.
    pub fn inquiry_queries(&self) -> Vec<InquiryQuery> {
        self.recorded.lock().inquiry_queries.clone()
    }

    pub fn last_inquiry_query(&self) -> Option<InquiryQuery> {
        self.recorded.lock().inquiry_queries.last().cloned()
    }

    pub fn last_create(&self) -> Option<CreateInquiryParams> {
        self.recorded.lock().created.last().cloned()
    }

    /// `(inquiry_name, file_url)` pairs passed to `link_attachment`.
    pub fn links(&self) -> Vec<(String, String)> {
        self.recorded.lock().links.clone()
    }

    /// Identifiers passed to `credential_login`.
    pub fn logins(&self) -> Vec<String> {
        self.recorded.lock().logins.clone()
    }

    async fn enter(&self, op: GatewayOp) {
        *self.recorded.lock().calls.entry(op).or_default() += 1;
        let latency = *self.latency.lock();
        if let Some(delay) = latency {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl PortalGateway for MockGateway {
    async fn credential_login(
        &self,
        identifier: &str,
        _secret: &str,
    ) -> Result<LoginResponse, GatewayError> {
        self.recorded.lock().logins.push(identifier.to_string());
        self.enter(GatewayOp::Login).await;
        self.script.lock().login.clone()
    }

    async fn credential_logout(&self) -> Result<(), GatewayError> {
        self.enter(GatewayOp::Logout).await;
        self.script.lock().logout.clone()
    }

    async fn fetch_current_user(&self) -> Result<CurrentUser, GatewayError> {
        self.enter(GatewayOp::CurrentUser).await;
        self.script.lock().current_user.clone()
    }

    async fn fetch_list(&self, _request: &ListRequest) -> Result<ResourceList, GatewayError> {
        self.enter(GatewayOp::List).await;
        self.script.lock().list.clone()
    }

    async fn fetch_entity(
        &self,
        _doctype: &str,
        _name: &str,
    ) -> Result<serde_json::Value, GatewayError> {
        self.enter(GatewayOp::Entity).await;
        self.script.lock().entity.clone()
    }

    async fn fetch_inquiry_list(&self, query: &InquiryQuery) -> Result<InquiryPage, GatewayError> {
        self.recorded.lock().inquiry_queries.push(query.clone());
        self.enter(GatewayOp::InquiryList).await;
        self.script.lock().inquiry_list.clone()
    }

    async fn fetch_inquiry_stats(&self) -> Result<InquiryStats, GatewayError> {
        self.enter(GatewayOp::InquiryStats).await;
        self.script.lock().stats.clone()
    }

    async fn fetch_inquiry(&self, _name: &str) -> Result<SupplierInquiry, GatewayError> {
        self.enter(GatewayOp::Inquiry).await;
        self.script.lock().inquiry.clone()
    }

    async fn create_inquiry(
        &self,
        params: &CreateInquiryParams,
    ) -> Result<CreateInquiryResult, GatewayError> {
        self.recorded.lock().created.push(params.clone());
        self.enter(GatewayOp::CreateInquiry).await;
        self.script.lock().create.clone()
    }

    async fn upload_bytes(
        &self,
        _file: &FileUpload,
        _options: &UploadOptions,
    ) -> Result<UploadedFile, GatewayError> {
        self.enter(GatewayOp::Upload).await;
        self.script.lock().upload.clone()
    }

    async fn link_attachment(
        &self,
        inquiry_name: &str,
        file_url: &str,
    ) -> Result<AttachFileResult, GatewayError> {
        self.recorded
            .lock()
            .links
            .push((inquiry_name.to_string(), file_url.to_string()));
        self.enter(GatewayOp::LinkAttachment).await;
        self.script.lock().link.clone()
    }

    async fn fetch_reference_data(&self) -> Result<ReferenceData, GatewayError> {
        self.enter(GatewayOp::ReferenceData).await;
        self.script.lock().reference.clone()
    }
}
