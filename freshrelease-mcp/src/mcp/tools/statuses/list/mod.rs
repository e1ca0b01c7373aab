//! Status listing tool for MCP operations

use crate::error::Result;
use crate::mcp::responses::create_json_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetStatusesRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for listing the statuses configured in the project
#[derive(Default)]
pub struct ListStatusesTool;

impl ListStatusesTool {
    /// Creates a new instance of the ListStatusesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListStatusesTool {
    fn name(&self) -> &'static str {
        "get_statuses"
    }

    fn description(&self) -> &'static str {
        "Get all statuses in the project"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let _request: GetStatusesRequest = BaseToolImpl::parse_arguments(arguments)?;

        let result = context.api.get("/statuses").await?;
        create_json_response(&result)
    }
}
