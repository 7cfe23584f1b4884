//! Configuration loader with layered sources
//!
//! Loads configuration from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Environment variables (PERMGATE_*)
//! 2. Configuration file (TOML)
//! 3. Default values

use crate::config::types::AppConfig;
use crate::error::ConfigError;
use config::{Config, Environment, File, FileFormat};
use http::header::HeaderName;
use std::path::Path;

/// Default configuration file paths to check (in order)
const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "permgate.toml",
    ".permgate.toml",
    "~/.config/permgate/config.toml",
    "/etc/permgate/config.toml",
];

/// Load configuration from a TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(toml_str, FileFormat::Toml))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Load configuration from files and environment
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. Start with defaults (handled by serde defaults on AppConfig)

    // 2. Add configuration file
    if let Some(path) = config_path {
        // Explicit path provided - must exist
        if !Path::new(path).exists() {
            return Err(ConfigError::Load(format!(
                "Configuration file not found: {}",
                path
            )));
        }
        builder = builder.add_source(File::new(path, FileFormat::Toml));
    } else {
        // Try default paths (first existing one wins)
        for path in DEFAULT_CONFIG_PATHS {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
                break;
            }
        }
    }

    // 3. Add environment variables with PERMGATE_ prefix
    // e.g., PERMGATE_AUTHZ__AUTH_OPEN, PERMGATE_IDENTITY__USER_HEADER
    // Double underscore (__) maps to nested keys (authz.auth_open)
    builder = builder.add_source(
        Environment::with_prefix("PERMGATE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // Build and deserialize
    let config = builder
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate configuration values
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    validate_header(&config.identity.user_header, "identity.user_header")?;
    validate_header(&config.identity.role_header, "identity.role_header")?;

    if config.identity.user_header == config.identity.role_header {
        return Err(ConfigError::Invalid {
            message: "identity.user_header and identity.role_header must differ".to_string(),
        });
    }

    Ok(())
}

/// Validate that a configured header name is usable
fn validate_header(name: &str, field: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Missing {
            field: field.to_string(),
        });
    }
    HeaderName::try_from(name).map_err(|e| ConfigError::InvalidHeaderName {
        name: name.to_string(),
        reason: format!("in {}: {}", field, e),
    })?;
    Ok(())
}
