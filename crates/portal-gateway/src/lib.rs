//! # Portal Gateway
//!
//! Transport layer between the portal stores and the backend.
//!
//! ## Surface
//!
//! | Call | Endpoint |
//! |------|----------|
//! | `credential_login` | `POST /api/method/login` |
//! | `credential_logout` | `POST /api/method/logout` |
//! | RPC methods | `POST /api/method/<namespace>.<method>` |
//! | `fetch_list` / `fetch_entity` | `GET /api/resource/<doctype>[/<name>]` |
//! | `upload_bytes` | `POST /api/method/upload_file` (multipart) |
//!
//! Any 401 clears the bearer token and fires the [`UnauthorizedHandler`].
//! Stores depend only on the [`PortalGateway`] trait; [`MockGateway`] backs
//! their tests.

pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod ports;
pub mod token;

pub use config::{AuthMode, GatewayConfig};
pub use error::GatewayError;
pub use http::HttpPortalGateway;
pub use mock::{GatewayOp, MockGateway};
pub use ports::{LoginRedirect, PortalGateway, UnauthorizedHandler};
pub use token::TokenStore;
