//! Comment creation tool for MCP operations

use crate::error::Result;
use crate::mcp::responses::create_json_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AddCommentRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for adding a comment to an issue
#[derive(Default)]
pub struct AddCommentTool;

impl AddCommentTool {
    /// Creates a new instance of the AddCommentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddCommentTool {
    fn name(&self) -> &'static str {
        "add_comment"
    }

    fn description(&self) -> &'static str {
        "Add a comment to a specific issue"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_id": {
                    "type": "string",
                    "description": "Issue ID (numeric, e.g., '2563487')"
                },
                "content": {
                    "type": "string",
                    "description": "Comment content"
                }
            },
            "required": ["issue_id", "content"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: AddCommentRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!(issue_id = %request.issue_id, "adding comment");

        let result = context
            .api
            .post(
                &format!("/issues/{}/comments", request.issue_id),
                serde_json::json!({ "content": request.content }),
            )
            .await?;
        create_json_response(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApi;
    use serde_json::json;
    use std::sync::Arc;

    fn args(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn test_posts_comment_body_to_issue() {
        let api = Arc::new(MockApi::new("FBOTS"));
        let context = ToolContext::new(api.clone());

        AddCommentTool::new()
            .execute(args(json!({"issue_id": "123", "content": "hi"})), &context)
            .await
            .unwrap();

        let requests = api.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/issues/123/comments");
        assert_eq!(requests[0].body, Some(json!({"content": "hi"})));
    }
}
