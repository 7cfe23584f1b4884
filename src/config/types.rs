//! Configuration types for permgate
//!
//! This module defines the configuration structure that can be loaded from
//! TOML files and/or environment variables.

use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Authorization behavior
    pub authz: AuthzConfig,

    /// Identity header extraction
    pub identity: IdentityConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Authorization configuration
///
/// The two bypass flags let a single-tenant or open deployment disable
/// authorization entirely without touching the evaluator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthzConfig {
    /// Allow everything, unconditionally
    pub auth_open: bool,

    /// Evaluate per-tenant permissions; when off, every check allows
    pub multi_tenancy: bool,
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            auth_open: false,
            multi_tenancy: true,
        }
    }
}

/// Identity header configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Header carrying the gateway-asserted user identifier
    pub user_header: String,

    /// Header carrying the comma-separated role list
    pub role_header: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            user_header: "x-user".to_string(),
            role_header: "x-role".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// Structured JSON output
    Json,
}
