//! HTTP adapter for the portal backend.
//!
//! Portal RPC methods are `POST /api/method/<namespace>.<method>` and answer
//! `{"message": T}`. Generic documents live under `/api/resource/<doctype>`
//! and answer `{"data": T}`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{multipart, Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared_types::{
    AttachFileResult, CreateInquiryParams, CreateInquiryResult, CurrentUser, FileUpload,
    InquiryPage, InquiryQuery, InquiryStats, ListRequest, LoginResponse, ReferenceData,
    ResourceList, SupplierInquiry, UploadOptions, UploadedFile,
};
use tracing::{debug, info, warn};

use crate::config::{AuthMode, GatewayConfig};
use crate::error::GatewayError;
use crate::ports::{LoginRedirect, PortalGateway, UnauthorizedHandler};
use crate::token::TokenStore;

#[derive(Deserialize)]
struct MessageEnvelope<T> {
    message: T,
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize, Default)]
struct ServerErrorBody {
    #[serde(default)]
    exc_type: Option<String>,
    #[serde(default)]
    exception: Option<String>,
}

#[derive(Serialize)]
struct NoArgs {}

#[derive(Serialize)]
struct LoginArgs<'a> {
    usr: &'a str,
    pwd: &'a str,
}

#[derive(Serialize)]
struct NameArgs<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct AttachArgs<'a> {
    inquiry_name: &'a str,
    file_url: &'a str,
}

/// reqwest-backed gateway with a cookie session and optional bearer token.
pub struct HttpPortalGateway {
    client: Client,
    config: GatewayConfig,
    base_url: Url,
    tokens: Arc<TokenStore>,
    on_unauthorized: Arc<dyn UnauthorizedHandler>,
}

impl HttpPortalGateway {
    /// Create a gateway from configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .cookie_store(true)
            .default_headers(headers)
            .build()?;

        let on_unauthorized = Arc::new(LoginRedirect::new(config.login_path.clone()));

        Ok(Self {
            client,
            config,
            base_url,
            tokens: Arc::new(TokenStore::new()),
            on_unauthorized,
        })
    }

    /// Share an existing token store.
    pub fn with_token_store(mut self, tokens: Arc<TokenStore>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Replace the 401 boundary handler.
    pub fn with_unauthorized_handler(mut self, handler: Arc<dyn UnauthorizedHandler>) -> Self {
        self.on_unauthorized = handler;
        self
    }

    /// The bearer token side channel.
    pub fn tokens(&self) -> &Arc<TokenStore> {
        &self.tokens
    }

    /// Active configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        let cannot_be_base =
            || GatewayError::Config(format!("base url '{}' cannot take a path", self.base_url));
        url.path_segments_mut()
            .map_err(|_| cannot_be_base())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn method_url(&self, method: &str) -> Result<Url, GatewayError> {
        let qualified = format!("{}.{}", self.config.api_namespace, method);
        self.endpoint(&["api", "method", &qualified])
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match (self.config.auth_mode, self.tokens.get()) {
            (AuthMode::Token, Some(token)) => builder.bearer_auth(token),
            _ => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, GatewayError> {
        let response = self.authorize(builder).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.tokens.clear();
            self.on_unauthorized.on_unauthorized();
            return Err(GatewayError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = server_message(&body).unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("request failed").to_string()
            });
            warn!(status = status.as_u16(), %message, "Portal request rejected");
            return Err(GatewayError::Http {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Call a portal RPC method and unwrap its `message`.
    async fn call<P, R>(&self, method: &str, params: &P) -> Result<R, GatewayError>
    where
        P: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.method_url(method)?;
        debug!(method, "Calling portal method");
        let response = self.send(self.client.post(url).json(params)).await?;
        let envelope: MessageEnvelope<R> = decode(response).await?;
        Ok(envelope.message)
    }
}

async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, GatewayError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn server_message(body: &str) -> Option<String> {
    let parsed: ServerErrorBody = serde_json::from_str(body).ok()?;
    parsed.exception.or(parsed.exc_type)
}

#[async_trait]
impl PortalGateway for HttpPortalGateway {
    async fn credential_login(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<LoginResponse, GatewayError> {
        let url = self.endpoint(&["api", "method", "login"])?;
        let args = LoginArgs {
            usr: identifier,
            pwd: secret,
        };
        let response = self.send(self.client.post(url).json(&args)).await?;
        let login: LoginResponse = decode(response).await?;

        if self.config.auth_mode == AuthMode::Token {
            match &login.token {
                Some(token) => self.tokens.set(token.clone()),
                None => warn!("Token auth mode but login response carried no token"),
            }
        }

        info!(message = %login.message, "Credential exchange accepted");
        Ok(login)
    }

    async fn credential_logout(&self) -> Result<(), GatewayError> {
        let url = self.endpoint(&["api", "method", "logout"])?;
        let result = self.send(self.client.post(url)).await.map(|_| ());
        self.tokens.clear();
        result
    }

    async fn fetch_current_user(&self) -> Result<CurrentUser, GatewayError> {
        self.call("get_current_user", &NoArgs {}).await
    }

    async fn fetch_list(&self, request: &ListRequest) -> Result<ResourceList, GatewayError> {
        let url = self.endpoint(&["api", "resource", &request.doctype])?;

        let mut query: Vec<(&str, String)> = Vec::new();
        if !request.fields.is_empty() {
            query.push(("fields", serde_json::to_string(&request.fields)?));
        }
        if !request.filters.is_empty() {
            query.push(("filters", serde_json::to_string(&request.filters)?));
        }
        if let Some(order_by) = &request.order_by {
            query.push(("order_by", order_by.clone()));
        }
        if let Some(limit) = request.limit {
            query.push(("limit_page_length", limit.to_string()));
        }
        if let Some(start) = request.start {
            query.push(("limit_start", start.to_string()));
        }

        let response = self.send(self.client.get(url).query(&query)).await?;
        let envelope: DataEnvelope<Vec<serde_json::Value>> = decode(response).await?;
        Ok(ResourceList {
            total: envelope.data.len() as u64,
            items: envelope.data,
        })
    }

    async fn fetch_entity(
        &self,
        doctype: &str,
        name: &str,
    ) -> Result<serde_json::Value, GatewayError> {
        let url = self.endpoint(&["api", "resource", doctype, name])?;
        let response = self.send(self.client.get(url)).await?;
        let envelope: DataEnvelope<serde_json::Value> = decode(response).await?;
        Ok(envelope.data)
    }

    async fn fetch_inquiry_list(&self, query: &InquiryQuery) -> Result<InquiryPage, GatewayError> {
        self.call("get_inquiries", query).await
    }

    async fn fetch_inquiry_stats(&self) -> Result<InquiryStats, GatewayError> {
        self.call("get_inquiry_stats", &NoArgs {}).await
    }

    async fn fetch_inquiry(&self, name: &str) -> Result<SupplierInquiry, GatewayError> {
        self.call("get_inquiry", &NameArgs { name }).await
    }

    async fn create_inquiry(
        &self,
        params: &CreateInquiryParams,
    ) -> Result<CreateInquiryResult, GatewayError> {
        self.call("create_inquiry", params).await
    }

    async fn upload_bytes(
        &self,
        file: &FileUpload,
        options: &UploadOptions,
    ) -> Result<UploadedFile, GatewayError> {
        let url = self.endpoint(&["api", "method", "upload_file"])?;

        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let mut form = multipart::Form::new().part("file", part);
        if let Some(doctype) = &options.doctype {
            form = form.text("doctype", doctype.clone());
        }
        if let Some(docname) = &options.docname {
            form = form.text("docname", docname.clone());
        }
        if let Some(is_private) = options.is_private {
            form = form.text("is_private", if is_private { "1" } else { "0" });
        }

        debug!(file = %file.file_name, size = file.bytes.len(), "Uploading file");
        let response = self.send(self.client.post(url).multipart(form)).await?;
        let envelope: MessageEnvelope<UploadedFile> = decode(response).await?;
        Ok(envelope.message)
    }

    async fn link_attachment(
        &self,
        inquiry_name: &str,
        file_url: &str,
    ) -> Result<AttachFileResult, GatewayError> {
        let args = AttachArgs {
            inquiry_name,
            file_url,
        };
        self.call("attach_file_to_inquiry", &args).await
    }

    async fn fetch_reference_data(&self) -> Result<ReferenceData, GatewayError> {
        self.call("get_reference_data", &NoArgs {}).await
    }
}
