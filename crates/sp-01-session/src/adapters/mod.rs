//! # Adapters
//!
//! Concrete hint storage.

pub mod file_hint;

pub use file_hint::FileHintStore;
