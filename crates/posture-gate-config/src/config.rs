// crates/posture-gate-config/src/config.rs
// ============================================================================
// Module: Posture Gate Configuration
// Description: Configuration loading and validation for the posture verifier.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: posture-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Invalid configuration fails closed. The file supplies the process-wide
//! remediation URI handed to endpoints alongside remediation instructions and
//! an optional default rendering language for the message catalog.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use posture_gate_core::LangTag;
use posture_gate_core::MessageCatalog;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "posture-gate.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "POSTURE_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of the remediation URI.
pub(crate) const MAX_REMEDIATION_URI_LENGTH: usize = 2048;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Posture Gate process configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostureGateConfig {
    /// Remediation delivery configuration.
    #[serde(default)]
    pub remediation: RemediationConfig,
    /// Message catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl PostureGateConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.remediation.validate()?;
        self.catalog.validate()?;
        Ok(())
    }

    /// Returns the configured remediation URI, when set.
    #[must_use]
    pub fn remediation_uri(&self) -> Option<&str> {
        self.remediation.uri.as_deref()
    }

    /// Returns the builtin message catalog with the configured default
    /// language promoted to the front of the supported set.
    #[must_use]
    pub fn message_catalog(&self) -> MessageCatalog {
        self.catalog.build_catalog()
    }
}

/// Remediation delivery configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemediationConfig {
    /// URI the endpoint should visit to remediate; absent is a legal value.
    #[serde(default)]
    pub uri: Option<String>,
}

impl RemediationConfig {
    /// Validates remediation configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the URI is present but unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(uri) = &self.uri else {
            return Ok(());
        };
        let trimmed = uri.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid("remediation.uri must be non-empty".to_string()));
        }
        if trimmed.len() > MAX_REMEDIATION_URI_LENGTH {
            return Err(ConfigError::Invalid("remediation.uri exceeds max length".to_string()));
        }
        if !trimmed.starts_with("https://") && !trimmed.starts_with("http://") {
            return Err(ConfigError::Invalid(
                "remediation.uri must use http or https".to_string(),
            ));
        }
        Ok(())
    }
}

/// Message catalog configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Default rendering language when negotiation finds no match.
    ///
    /// Must be one of the builtin catalog's supported tags.
    #[serde(default)]
    pub default_language: Option<String>,
}

impl CatalogConfig {
    /// Validates catalog configuration against the builtin supported set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the default language is unsupported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(default) = &self.default_language else {
            return Ok(());
        };
        let tag = LangTag::new(default.as_str());
        let builtin = MessageCatalog::builtin();
        if !builtin.supported().contains(&tag) {
            return Err(ConfigError::Invalid(format!(
                "catalog.default_language {default} is not supported"
            )));
        }
        Ok(())
    }

    /// Builds the builtin catalog with the configured default promoted to
    /// the front of the supported set.
    #[must_use]
    pub fn build_catalog(&self) -> MessageCatalog {
        let builtin = MessageCatalog::builtin();
        let Some(default) = &self.default_language else {
            return builtin;
        };
        let tag = LangTag::new(default.as_str());
        if !builtin.supported().contains(&tag) {
            return builtin;
        }
        let mut supported = vec![tag.clone()];
        supported
            .extend(builtin.supported().iter().filter(|existing| **existing != tag).cloned());
        builtin.with_supported(supported)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}
