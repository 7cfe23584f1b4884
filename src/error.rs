//! Error types for permgate
//!
//! This module defines the error hierarchy used throughout the crate.
//! We use `thiserror` for library-style errors that are part of the API;
//! the embedding server converts them to its own responses at the boundary.

use http::StatusCode;
use thiserror::Error;

/// Top-level authorization error
#[derive(Error, Debug)]
pub enum AuthzError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Metadata lookup error: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Permission denied: {0}")]
    PermissionDenied(#[from] PermissionDeniedError),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required configuration: {field}")]
    Missing { field: String },

    #[error("Invalid header name '{name}': {reason}")]
    InvalidHeaderName { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Metadata store errors
///
/// `NotFound` is a non-fatal outcome for the evaluator (the caller's own
/// not-found handling takes over); every other variant is a hard lookup
/// failure and must never be collapsed into an allow or a deny.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("No resource with id '{id}'")]
    NotFound { id: String },

    #[error("Access bits out of range for '{field}': {value} (must be 0-7)")]
    InvalidAccessBits { field: &'static str, value: u8 },

    #[error("Metadata backend unavailable: {0}")]
    Backend(String),

    #[error("Malformed metadata document: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl MetadataError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, MetadataError::NotFound { .. })
    }
}

/// Permission denial
///
/// The user-facing message is always the fixed "Permission Denied"; which
/// category triple failed is never exposed to the caller.
#[derive(Error, Debug)]
#[error("{message} (HTTP {status})")]
pub struct PermissionDeniedError {
    pub resource: String,
    pub status: StatusCode,
    pub message: String,
}

impl PermissionDeniedError {
    /// The fixed message surfaced on every denial
    pub const MESSAGE: &'static str = "Permission Denied";

    pub fn forbidden(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            status: StatusCode::FORBIDDEN,
            message: Self::MESSAGE.to_string(),
        }
    }
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, AuthzError>;
