//! Issue fetch tool for MCP operations

use crate::error::Result;
use crate::mcp::responses::create_json_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for fetching a single issue by key
#[derive(Default)]
pub struct GetIssueTool;

impl GetIssueTool {
    /// Creates a new instance of the GetIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetIssueTool {
    fn name(&self) -> &'static str {
        "get_issue"
    }

    fn description(&self) -> &'static str {
        "Get a specific issue by its key (e.g., FBOTS-47941)"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Issue key (e.g., FBOTS-47941)"
                }
            },
            "required": ["issue_key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: GetIssueRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!(issue_key = %request.issue_key, "fetching issue");

        let result = context
            .api
            .get(&format!("/issues/{}", request.issue_key))
            .await?;
        create_json_response(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApi;
    use crate::error::FreshreleaseError;
    use serde_json::json;
    use std::sync::Arc;

    fn args(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn test_fetches_issue_by_key() {
        let api = Arc::new(MockApi::new("FBOTS"));
        api.push_response(Ok(json!({"issue": {"key": "FBOTS-47941"}})))
            .await;
        let context = ToolContext::new(api.clone());

        let result = GetIssueTool::new()
            .execute(args(json!({"issue_key": "FBOTS-47941"})), &context)
            .await
            .unwrap();

        let requests = api.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/issues/FBOTS-47941");

        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => {
                assert_eq!(
                    text.text,
                    "{\n  \"issue\": {\n    \"key\": \"FBOTS-47941\"\n  }\n}"
                );
            }
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_remote_failure_propagates() {
        let api = Arc::new(MockApi::new("FBOTS"));
        api.push_response(Err(FreshreleaseError::RemoteFailure {
            status: reqwest::StatusCode::NOT_FOUND,
            body: "{\"errors\":\"not found\"}".to_string(),
        }))
        .await;
        let context = ToolContext::new(api.clone());

        let err = GetIssueTool::new()
            .execute(args(json!({"issue_key": "FBOTS-0"})), &context)
            .await
            .unwrap_err();

        assert!(matches!(err, FreshreleaseError::RemoteFailure { .. }));
        assert_eq!(api.request_count().await, 1);
    }
}
