//! Issue update tool for MCP operations
//!
//! Partial update semantics: only the optional fields supplied by the caller
//! appear in the request body, so fields the caller omitted keep their
//! current values on the remote side.

use crate::error::Result;
use crate::mcp::responses::create_json_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::UpdateIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde_json::Value;

/// Tool for updating existing issues
#[derive(Default)]
pub struct UpdateIssueTool;

impl UpdateIssueTool {
    /// Creates a new instance of the UpdateIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for UpdateIssueTool {
    fn name(&self) -> &'static str {
        "update_issue"
    }

    fn description(&self) -> &'static str {
        "Update an existing Freshrelease issue"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Issue key (e.g., FBOTS-48937)"
                },
                "description": {
                    "type": "string",
                    "description": "Updated issue description"
                },
                "issue_type_id": {
                    "type": "string",
                    "description": "Issue type ID"
                },
                "custom_fields": {
                    "type": "object",
                    "description": "Custom fields to update"
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
        let request: UpdateIssueRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!(issue_key = %request.issue_key, "updating issue");

        let mut issue = serde_json::Map::new();
        issue.insert(
            "key".to_string(),
            Value::String(request.issue_key.clone()),
        );
        if let Some(description) = request.description {
            issue.insert("description".to_string(), Value::String(description));
        }
        if let Some(issue_type_id) = request.issue_type_id {
            issue.insert("issue_type_id".to_string(), Value::String(issue_type_id));
        }
        if let Some(custom_fields) = request.custom_fields {
            issue.insert("custom_field".to_string(), Value::Object(custom_fields));
        }

        let result = context
            .api
            .put(
                &format!("/issues/{}", request.issue_key),
                serde_json::json!({ "issue": issue }),
            )
            .await?;
        create_json_response(&result)
    }
}
