//! Shared utilities, configuration, and error handling for Depot
//!
//! This crate provides common functionality used across the Depot registry:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Custom axum extractors (validated JSON, pagination, registry token)
//! - Content digests for content-addressed artifacts

pub mod config;
pub mod digest;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use digest::content_digest;
pub use error::{Error, Result};
pub use extractors::{Pagination, RegistryToken, ValidatedJson};
