//! Identity resolver
//!
//! Extracts the caller identity from trust-asserted request headers. The
//! headers are injected by an upstream gateway for authenticated traffic
//! only; no authenticity validation happens here.

use crate::config::IdentityConfig;
use crate::error::ConfigError;
use crate::identity::types::Identity;
use http::header::{HeaderMap, HeaderName};
use tracing::trace;

/// Resolves a caller identity from request headers
///
/// Header names are fixed at construction from [`IdentityConfig`] so that
/// per-request resolution is allocation-light and infallible.
#[derive(Debug)]
pub struct IdentityResolver {
    user_header: HeaderName,
    role_header: HeaderName,
}

impl IdentityResolver {
    /// Create a resolver from configuration
    pub fn new(config: &IdentityConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            user_header: parse_header_name(&config.user_header)?,
            role_header: parse_header_name(&config.role_header)?,
        })
    }

    /// Resolve the identity asserted by the given headers
    ///
    /// An absent user header yields an empty user; an absent role header
    /// yields no roles. The role header is a comma-separated list; entries
    /// are trimmed and empty entries dropped.
    pub fn resolve(&self, headers: &HeaderMap) -> Identity {
        let user = headers
            .get(&self.user_header)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let roles = headers
            .get(&self.role_header)
            .and_then(|v| v.to_str().ok())
            .map(parse_role_list)
            .unwrap_or_default();

        trace!(user = %user, roles = ?roles, "Resolved identity");

        Identity { user, roles }
    }
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self {
            user_header: HeaderName::from_static("x-user"),
            role_header: HeaderName::from_static("x-role"),
        }
    }
}

fn parse_header_name(name: &str) -> Result<HeaderName, ConfigError> {
    HeaderName::try_from(name).map_err(|e| ConfigError::InvalidHeaderName {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Split a comma-separated role list, tolerating gateway whitespace
fn parse_role_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(String::from)
        .collect()
}
