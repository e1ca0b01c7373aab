//! HTTP access to the Freshrelease REST API
//!
//! The [`FreshreleaseApi`] trait is the seam between tool dispatch and the
//! network: tools build endpoint paths and JSON bodies, implementations turn
//! them into requests. [`ApiClient`] talks to a live instance and
//! [`MockApi`] records calls for tests.

pub mod client;
pub mod mock;

pub use client::ApiClient;
pub use mock::{MockApi, RecordedRequest};

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for Freshrelease API operations
///
/// Paths are endpoint fragments relative to the project scope, starting with
/// `/` (e.g. `/issues/FBOTS-1`). The implementation prepends the base URL and
/// project key.
#[async_trait]
pub trait FreshreleaseApi: Send + Sync {
    /// Issue a GET request and decode the JSON response
    async fn get(&self, path: &str) -> Result<Value>;

    /// Issue a POST request with a JSON body and decode the JSON response
    async fn post(&self, path: &str, body: Value) -> Result<Value>;

    /// Issue a PUT request with a JSON body and decode the JSON response
    async fn put(&self, path: &str, body: Value) -> Result<Value>;

    /// The project key that scopes every request
    ///
    /// Exposed because issue creation embeds the same key in the request
    /// body that the URL carries as a path segment.
    fn project_key(&self) -> &str;
}
