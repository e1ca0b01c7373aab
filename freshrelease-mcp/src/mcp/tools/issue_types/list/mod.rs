//! Issue type listing tool for MCP operations

use crate::error::Result;
use crate::mcp::responses::create_json_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetIssueTypesRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for listing the issue types available in the project
#[derive(Default)]
pub struct ListIssueTypesTool;

impl ListIssueTypesTool {
    /// Creates a new instance of the ListIssueTypesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListIssueTypesTool {
    fn name(&self) -> &'static str {
        "get_issue_types"
    }

    fn description(&self) -> &'static str {
        "Get all issue types available in the project"
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
        let _request: GetIssueTypesRequest = BaseToolImpl::parse_arguments(arguments)?;

        let result = context.api.get("/issue_types").await?;
        create_json_response(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApi;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_requests_issue_type_list() {
        let api = Arc::new(MockApi::new("FBOTS"));
        api.push_response(Ok(json!({"issue_types": [{"id": 14, "label": "Task"}]})))
            .await;
        let context = ToolContext::new(api.clone());

        let result = ListIssueTypesTool::new()
            .execute(serde_json::Map::new(), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        let requests = api.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/issue_types");
        assert_eq!(requests[0].body, None);
    }
}
