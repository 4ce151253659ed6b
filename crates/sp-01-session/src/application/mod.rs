//! # Application Module

pub mod service;

pub use service::SessionService;
