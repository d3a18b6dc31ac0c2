//! Shared utilities, configuration, and error handling for Postboard
//!
//! This crate provides common functionality used across the Postboard application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Request extractors and validation helpers

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::{Config, StorageProvider};
pub use db::RepositoryError;
pub use error::{Error, FieldErrors, Result};
pub use extractors::{check, parse_id, ValidatedJson};
