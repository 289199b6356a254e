//! Client configuration
//!
//! Loaded once at startup from a YAML document and never mutated afterwards.
//!
//! ```yaml
//! token: "eyJhbGciOi..."
//! saveFormURL: "https://example.org/api/save_fact"
//! getFormsURL: "https://example.org/api/get_facts"
//! ```
//!
//! # Environment variables
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | FORM_BATCH_TOKEN | `token` |
//! | FORM_BATCH_SAVE_URL | `saveFormURL` |
//! | FORM_BATCH_GET_URL | `getFormsURL` |

use crate::error::{ConfigError, ConfigResult};
use reqwest::Url;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Connection settings for the form API
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Bearer token for the `Authorization` header
    #[serde(default)]
    pub token: String,

    /// Endpoint accepting one record per POST
    #[serde(rename = "saveFormURL", default)]
    pub save_form_url: String,

    /// Endpoint returning saved records for a period/indicator
    #[serde(rename = "getFormsURL", default)]
    pub get_forms_url: String,
}

impl Config {
    /// Read the YAML file, apply environment overrides and validate
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let mut config = Self::read_file(path.as_ref())?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Read and validate the YAML file, ignoring `FORM_BATCH_*` overrides
    pub fn load_without_env(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let config = Self::read_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> ConfigResult<Self> {
        debug!(path = %path.display(), "Loading configuration");

        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&data)
    }

    /// Parse a YAML document without touching the environment
    pub fn from_yaml(data: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(data)?)
    }

    /// Replace values for which `lookup` returns a `FORM_BATCH_*` override
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(token) = lookup("FORM_BATCH_TOKEN") {
            self.token = token;
        }
        if let Some(url) = lookup("FORM_BATCH_SAVE_URL") {
            self.save_form_url = url;
        }
        if let Some(url) = lookup("FORM_BATCH_GET_URL") {
            self.get_forms_url = url;
        }
    }

    /// Check that every value is present and both endpoints are http(s) URLs
    pub fn validate(&self) -> ConfigResult<()> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::Missing("token"));
        }
        check_url("saveFormURL", &self.save_form_url)?;
        check_url("getFormsURL", &self.get_forms_url)?;
        Ok(())
    }
}

fn check_url(field: &'static str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::Missing(field));
    }
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}
