//! Live client for the Freshrelease REST API

use crate::config::Config;
use crate::error::{FreshreleaseError, Result};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use super::FreshreleaseApi;

/// HTTP client for a single Freshrelease instance
///
/// Each call builds a fresh `reqwest::Client`, performs exactly one request,
/// and drops the client when the call scope ends. Responses with a
/// non-success status become [`FreshreleaseError::RemoteFailure`] carrying
/// the status and the raw response body; nothing is retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
}

impl ApiClient {
    /// Create a client for the given connection settings
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Full URL for a project-scoped endpoint path
    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}{}",
            self.config.base_url, self.config.project_key, path
        )
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let url = self.url_for(path);
        tracing::debug!(%method, %url, "sending Freshrelease API request");

        let client = reqwest::Client::new();
        let mut request = client
            .request(method, &url)
            .header("Authorization", format!("Token {}", self.config.api_token))
            .header("Content-Type", "application/json");
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, "Freshrelease API request failed");
            return Err(FreshreleaseError::RemoteFailure { status, body });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl FreshreleaseApi for ApiClient {
    async fn get(&self, path: &str) -> Result<Value> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value> {
        self.send(Method::PUT, path, Some(body)).await
    }

    fn project_key(&self) -> &str {
        &self.config.project_key
    }
}
