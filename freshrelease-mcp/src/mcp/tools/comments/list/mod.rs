//! Comment listing tool for MCP operations

use crate::error::Result;
use crate::mcp::responses::create_json_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetCommentsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for listing the comments on an issue
#[derive(Default)]
pub struct GetCommentsTool;

impl GetCommentsTool {
    /// Creates a new instance of the GetCommentsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetCommentsTool {
    fn name(&self) -> &'static str {
        "get_comments"
    }

    fn description(&self) -> &'static str {
        "Get all comments on a specific issue"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_id": {
                    "type": "string",
                    "description": "Issue ID (numeric, e.g., '2563487')"
                }
            },
            "required": ["issue_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: GetCommentsRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!(issue_id = %request.issue_id, "listing comments");

        let result = context
            .api
            .get(&format!("/issues/{}/comments", request.issue_id))
            .await?;
        create_json_response(&result)
    }
}
