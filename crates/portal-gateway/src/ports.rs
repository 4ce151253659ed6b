//! # Outbound Port
//!
//! Every backend call the stores make goes through [`PortalGateway`].

use async_trait::async_trait;
use shared_types::{
    AttachFileResult, CreateInquiryParams, CreateInquiryResult, CurrentUser, FileUpload,
    InquiryPage, InquiryQuery, InquiryStats, ListRequest, LoginResponse, ReferenceData,
    ResourceList, SupplierInquiry, UploadOptions, UploadedFile,
};
use tracing::warn;

use crate::error::GatewayError;

/// Portal backend - outbound port.
///
/// Transport and auth failures are `Err`; business rejections are
/// `Ok` payloads with `success == false`.
#[async_trait]
pub trait PortalGateway: Send + Sync {
    /// Exchange credentials for a server session.
    async fn credential_login(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<LoginResponse, GatewayError>;

    /// End the server session and drop any bearer token.
    async fn credential_logout(&self) -> Result<(), GatewayError>;

    /// Current user and linked supplier.
    async fn fetch_current_user(&self) -> Result<CurrentUser, GatewayError>;

    /// Generic resource listing.
    async fn fetch_list(&self, request: &ListRequest) -> Result<ResourceList, GatewayError>;

    /// Generic single-document fetch.
    async fn fetch_entity(
        &self,
        doctype: &str,
        name: &str,
    ) -> Result<serde_json::Value, GatewayError>;

    /// Paginated inquiry list for the current supplier.
    async fn fetch_inquiry_list(&self, query: &InquiryQuery) -> Result<InquiryPage, GatewayError>;

    /// Aggregate inquiry counts for the current supplier.
    async fn fetch_inquiry_stats(&self) -> Result<InquiryStats, GatewayError>;

    /// One inquiry by name.
    async fn fetch_inquiry(&self, name: &str) -> Result<SupplierInquiry, GatewayError>;

    /// Create an inquiry.
    async fn create_inquiry(
        &self,
        params: &CreateInquiryParams,
    ) -> Result<CreateInquiryResult, GatewayError>;

    /// Upload raw bytes and get a storage reference back.
    async fn upload_bytes(
        &self,
        file: &FileUpload,
        options: &UploadOptions,
    ) -> Result<UploadedFile, GatewayError>;

    /// Link an uploaded file to an inquiry.
    async fn link_attachment(
        &self,
        inquiry_name: &str,
        file_url: &str,
    ) -> Result<AttachFileResult, GatewayError>;

    /// The full reference bundle (guest access).
    async fn fetch_reference_data(&self) -> Result<ReferenceData, GatewayError>;
}

/// Boundary effect fired when any call comes back 401.
pub trait UnauthorizedHandler: Send + Sync {
    /// Called after the bearer token has been cleared.
    fn on_unauthorized(&self);
}

/// Default handler: announces the redirect to the login surface.
#[derive(Debug, Clone)]
pub struct LoginRedirect {
    login_path: String,
}

impl LoginRedirect {
    /// Redirect to the given login path.
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }

    /// Target of the redirect.
    pub fn login_path(&self) -> &str {
        &self.login_path
    }
}

impl UnauthorizedHandler for LoginRedirect {
    fn on_unauthorized(&self) {
        warn!(login_path = %self.login_path, "Session rejected by server, redirecting to login");
    }
}
