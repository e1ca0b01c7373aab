//! Configuration for the Freshrelease API connection
//!
//! All settings come from `FRESHRELEASE_*` environment variables. A missing
//! token or project key is deliberately not a startup failure: the first
//! remote call surfaces it as an authorization or not-found error instead.

use crate::error::{FreshreleaseError, Result};
use std::env;

/// Default Freshrelease instance used when no override is configured
pub const DEFAULT_BASE_URL: &str = "https://freshworks.freshrelease.com";

/// Environment variable prefix for all configuration values
const ENV_PREFIX: &str = "FRESHRELEASE";

/// Connection settings for the Freshrelease API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Freshrelease instance, without a trailing slash
    pub base_url: String,
    /// API token sent as `Authorization: Token <value>`
    pub api_token: String,
    /// Project key that scopes every request URL (e.g. `FBOTS`)
    pub project_key: String,
}

impl Config {
    /// Create a configuration from explicit values
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        project_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            project_key: project_key.into(),
        }
    }

    /// Load configuration from `FRESHRELEASE_*` environment variables
    ///
    /// Unset variables fall back to the default base URL and empty strings;
    /// use [`Config::validate`] to report on the empty values.
    pub fn from_env() -> Self {
        Self {
            base_url: env_string("BASE_URL", DEFAULT_BASE_URL),
            api_token: env_string("API_TOKEN", ""),
            project_key: env_string("PROJECT_KEY", ""),
        }
    }

    /// Check that the values required for authenticated calls are present
    pub fn validate(&self) -> Result<()> {
        if self.api_token.is_empty() {
            return Err(FreshreleaseError::Config(format!(
                "{ENV_PREFIX}_API_TOKEN is not set"
            )));
        }
        if self.project_key.is_empty() {
            return Err(FreshreleaseError::Config(format!(
                "{ENV_PREFIX}_PROJECT_KEY is not set"
            )));
        }
        Ok(())
    }
}

/// Load a prefixed environment variable with a string default
fn env_string(suffix: &str, default: &str) -> String {
    env::var(format!("{ENV_PREFIX}_{suffix}")).unwrap_or_else(|_| default.to_string())
}
