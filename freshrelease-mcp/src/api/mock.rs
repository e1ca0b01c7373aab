//! Mock in-memory API implementation for testing
//!
//! `MockApi` records every request a tool makes and replays queued
//! responses, so dispatch tests can assert on the exact method, endpoint
//! path, and JSON body without touching the network.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::FreshreleaseApi;

/// One request observed by [`MockApi`], in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// HTTP method name (`GET`, `POST`, `PUT`)
    pub method: String,
    /// Endpoint path as the caller supplied it, including any query string
    pub path: String,
    /// JSON body for POST/PUT requests, `None` for GET
    pub body: Option<Value>,
}

/// In-memory API double used by tool and server tests
#[derive(Debug, Clone)]
pub struct MockApi {
    project_key: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<VecDeque<Result<Value>>>>,
}

impl MockApi {
    /// Create a mock scoped to the given project key
    pub fn new(project_key: &str) -> Self {
        Self {
            project_key: project_key.to_string(),
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Queue a response; queued responses are consumed in FIFO order
    ///
    /// When the queue is empty, calls answer with an empty JSON object.
    pub async fn push_response(&self, response: Result<Value>) {
        self.responses.lock().await.push_back(response);
    }

    /// All requests recorded so far
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of requests recorded so far
    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    async fn record(&self, method: &str, path: &str, body: Option<Value>) -> Result<Value> {
        self.requests.lock().await.push(RecordedRequest {
            method: method.to_string(),
            path: path.to_string(),
            body,
        });
        match self.responses.lock().await.pop_front() {
            Some(response) => response,
            None => Ok(Value::Object(serde_json::Map::new())),
        }
    }
}

#[async_trait]
impl FreshreleaseApi for MockApi {
    async fn get(&self, path: &str) -> Result<Value> {
        self.record("GET", path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.record("POST", path, Some(body)).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value> {
        self.record("PUT", path, Some(body)).await
    }

    fn project_key(&self) -> &str {
        &self.project_key
    }
}
