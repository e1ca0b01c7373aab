//! User listing tool for MCP operations
//!
//! Lists the users of the configured project, forwarding both pagination
//! parameters to the API.

use crate::error::Result;
use crate::mcp::responses::create_json_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetUsersRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for listing users in the project
#[derive(Default)]
pub struct ListUsersTool;

impl ListUsersTool {
    /// Creates a new instance of the ListUsersTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListUsersTool {
    fn name(&self) -> &'static str {
        "get_users"
    }

    fn description(&self) -> &'static str {
        "Get all users in the Freshrelease project with pagination"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "page": {
                    "type": "number",
                    "description": "Page number for pagination",
                    "default": 1
                },
                "limit": {
                    "type": "number",
                    "description": "Number of users per page",
                    "default": 30
                }
            }
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: GetUsersRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!(page = request.page, limit = request.limit, "listing users");

        let result = context
            .api
            .get(&format!(
                "/users?page={}&limit={}",
                request.page, request.limit
            ))
            .await?;
        create_json_response(&result)
    }
}
