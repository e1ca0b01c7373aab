//! Issue creation tool for MCP operations
//!
//! The request body carries the project key twice by API contract: once as
//! the URL scope segment and once as the `key` field of the issue object.
//! Both come from the configured connection, never from the caller.

use crate::error::Result;
use crate::mcp::responses::create_json_response;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for creating new issues
#[derive(Default)]
pub struct CreateIssueTool;

impl CreateIssueTool {
    /// Creates a new instance of the CreateIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateIssueTool {
    fn name(&self) -> &'static str {
        "create_issue"
    }

    fn description(&self) -> &'static str {
        "Create a new issue in Freshrelease"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Issue title"
                },
                "description": {
                    "type": "string",
                    "description": "Issue description"
                },
                "issue_type_id": {
                    "type": "string",
                    "description": "Issue type ID (e.g., '14' for task)"
                },
                "owner_id": {
                    "type": "string",
                    "description": "Owner user ID"
                },
                "project_id": {
                    "type": "string",
                    "description": "Project ID (e.g., '280')"
                },
                "custom_fields": {
                    "type": "object",
                    "description": "Custom fields as key-value pairs"
                }
            },
            "required": ["title", "description", "issue_type_id", "owner_id", "project_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: CreateIssueRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!(title = %request.title, "creating issue");

        let body = serde_json::json!({
            "issue": {
                "title": request.title,
                "description": request.description,
                "key": context.api.project_key(),
                "issue_type_id": request.issue_type_id,
                "owner_id": request.owner_id,
                "project_id": request.project_id,
                "custom_field": request.custom_fields,
            }
        });

        let result = context.api.post("/issues", body).await?;
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
    async fn test_builds_issue_body_with_configured_key() {
        let api = Arc::new(MockApi::new("FBOTS"));
        let context = ToolContext::new(api.clone());

        CreateIssueTool::new()
            .execute(
                args(json!({
                    "title": "T",
                    "description": "D",
                    "issue_type_id": "14",
                    "owner_id": "1",
                    "project_id": "280"
                })),
                &context,
            )
            .await
            .unwrap();

        let requests = api.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/issues");
        assert_eq!(
            requests[0].body,
            Some(json!({
                "issue": {
                    "title": "T",
                    "description": "D",
                    "key": "FBOTS",
                    "issue_type_id": "14",
                    "owner_id": "1",
                    "project_id": "280",
                    "custom_field": {}
                }
            }))
        );
    }

    #[tokio::test]
    async fn test_custom_fields_map_to_custom_field() {
        let api = Arc::new(MockApi::new("FBOTS"));
        let context = ToolContext::new(api.clone());

        CreateIssueTool::new()
            .execute(
                args(json!({
                    "title": "T",
                    "description": "D",
                    "issue_type_id": "14",
                    "owner_id": "1",
                    "project_id": "280",
                    "custom_fields": {"cf_team": "bots"}
                })),
                &context,
            )
            .await
            .unwrap();

        let requests = api.requests().await;
        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(body["issue"]["custom_field"], json!({"cf_team": "bots"}));
        assert!(body["issue"].get("custom_fields").is_none());
    }
}
