//! MCP server implementation for Freshrelease tools

use crate::api::{ApiClient, FreshreleaseApi};
use crate::config::Config;
use crate::error::FreshreleaseError;
use crate::mcp::responses::create_failure_response;
use crate::mcp::tool_registry::{validate_required_arguments, ToolContext, ToolRegistry};
use crate::mcp::tools;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

/// Usage instructions advertised to connecting MCP clients
const SERVER_INSTRUCTIONS: &str = "A Freshrelease project tracking server. Use get_users, get_statuses and get_issue_types to discover project metadata, use get_issue, create_issue and update_issue to work with issues, and use get_comments and add_comment for issue discussions.";

/// MCP server exposing Freshrelease operations as tools
#[derive(Clone)]
pub struct FreshreleaseServer {
    tool_registry: Arc<ToolRegistry>,
    /// Tool context containing the API connection shared by all tools
    pub tool_context: Arc<ToolContext>,
}

impl FreshreleaseServer {
    /// Create a server talking to a live Freshrelease instance
    pub fn new(config: Config) -> Self {
        Self::with_api(Arc::new(ApiClient::new(config)))
    }

    /// Create a server over any API implementation
    ///
    /// Used by tests to substitute a recording double for the live client.
    pub fn with_api(api: Arc<dyn FreshreleaseApi>) -> Self {
        let mut tool_registry = ToolRegistry::new();

        // Registration order below is the catalog order served to clients.
        tools::users::register_user_tools(&mut tool_registry);
        tools::statuses::register_status_tools(&mut tool_registry);
        tools::issue_types::register_issue_type_tools(&mut tool_registry);
        tools::issues::register_issue_tools(&mut tool_registry);
        tools::comments::register_comment_tools(&mut tool_registry);

        Self {
            tool_registry: Arc::new(tool_registry),
            tool_context: Arc::new(ToolContext::new(api)),
        }
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: None,
            tools: Some(ToolsCapability {
                list_changed: Some(false),
            }),
            resources: None,
            logging: None,
            completions: None,
            experimental: None,
        }
    }

    /// Dispatch one invocation to the matching tool
    ///
    /// Failures come back as `Err`; `call_tool` renders them to the uniform
    /// `Error: ...` text result so no per-call failure ever reaches the
    /// protocol layer as a fault.
    async fn dispatch(
        &self,
        request: CallToolRequestParam,
    ) -> crate::error::Result<CallToolResult> {
        let arguments = request.arguments.unwrap_or_default();
        let tool = self
            .tool_registry
            .get_tool(&request.name)
            .ok_or_else(|| FreshreleaseError::UnknownTool(request.name.to_string()))?;
        validate_required_arguments(tool, &arguments)?;
        tool.execute(arguments, &self.tool_context).await
    }
}

impl ServerHandler for FreshreleaseServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            instructions: Some(SERVER_INSTRUCTIONS.into()),
            server_info: Implementation {
                name: "freshrelease-mcp".into(),
                version: crate::VERSION.into(),
            },
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let name = request.name.clone();
        match self.dispatch(request).await {
            Ok(result) => Ok(result),
            Err(error) => {
                tracing::debug!(tool = %name, %error, "tool invocation failed");
                Ok(create_failure_response(&error))
            }
        }
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Implementation {
                name: "freshrelease-mcp".into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(SERVER_INSTRUCTIONS.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApi;
    use serde_json::json;

    const CATALOG: [&str; 8] = [
        "get_users",
        "get_statuses",
        "get_issue_types",
        "get_issue",
        "create_issue",
        "update_issue",
        "get_comments",
        "add_comment",
    ];

    fn server_with(api: Arc<MockApi>) -> FreshreleaseServer {
        FreshreleaseServer::with_api(api)
    }

    fn call(name: &str, arguments: serde_json::Value) -> CallToolRequestParam {
        CallToolRequestParam {
            name: name.to_string().into(),
            arguments: arguments.as_object().cloned(),
        }
    }

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_catalog_lists_every_tool_once_in_order() {
        let server = server_with(Arc::new(MockApi::new("FBOTS")));
        assert_eq!(server.tool_registry.list_tool_names(), CATALOG);

        let tools = server.tool_registry.list_tools();
        assert_eq!(tools.len(), CATALOG.len());
        for (tool, expected) in tools.iter().zip(CATALOG) {
            assert_eq!(tool.name, expected);
            assert!(tool.description.is_some());
        }
    }

    #[test]
    fn test_catalog_contracts_declare_required_arguments() {
        let server = server_with(Arc::new(MockApi::new("FBOTS")));
        let required_of = |name: &str| -> Vec<String> {
            let tool = server.tool_registry.get_tool(name).unwrap();
            tool.schema()
                .get("required")
                .and_then(|r| r.as_array().cloned())
                .unwrap_or_default()
                .iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        };

        assert!(required_of("get_users").is_empty());
        assert!(required_of("get_statuses").is_empty());
        assert!(required_of("get_issue_types").is_empty());
        assert_eq!(required_of("get_issue"), ["issue_key"]);
        assert_eq!(
            required_of("create_issue"),
            ["title", "description", "issue_type_id", "owner_id", "project_id"]
        );
        assert_eq!(required_of("update_issue"), ["issue_key"]);
        assert_eq!(required_of("get_comments"), ["issue_id"]);
        assert_eq!(required_of("add_comment"), ["issue_id", "content"]);
    }

    #[tokio::test]
    async fn test_dispatch_routes_to_matching_tool() {
        let api = Arc::new(MockApi::new("FBOTS"));
        api.push_response(Ok(json!([{"id": 1, "name": "Open"}])))
            .await;
        let server = server_with(api.clone());

        let result = server
            .dispatch(call("get_statuses", json!({})))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert_eq!(api.requests().await[0].path, "/statuses");
    }

    #[tokio::test]
    async fn test_unknown_tool_becomes_error_text_without_api_calls() {
        let api = Arc::new(MockApi::new("FBOTS"));
        let server = server_with(api.clone());

        let err = server
            .dispatch(call("delete_project", json!({})))
            .await
            .unwrap_err();

        assert_eq!(api.request_count().await, 0);
        let rendered = create_failure_response(&err);
        assert_eq!(rendered.is_error, Some(true));
        assert_eq!(result_text(&rendered), "Error: Unknown tool: delete_project");
    }

    #[tokio::test]
    async fn test_missing_required_argument_short_circuits() {
        let api = Arc::new(MockApi::new("FBOTS"));
        let server = server_with(api.clone());

        let err = server.dispatch(call("get_issue", json!({}))).await.unwrap_err();

        assert_eq!(api.request_count().await, 0);
        let rendered = create_failure_response(&err);
        assert_eq!(
            result_text(&rendered),
            "Error: Missing required argument: issue_key"
        );
    }

    #[tokio::test]
    async fn test_remote_failure_renders_status_in_error_text() {
        let api = Arc::new(MockApi::new("FBOTS"));
        api.push_response(Err(FreshreleaseError::RemoteFailure {
            status: reqwest::StatusCode::NOT_FOUND,
            body: "{\"errors\":\"issue not found\"}".to_string(),
        }))
        .await;
        let server = server_with(api.clone());

        let err = server
            .dispatch(call("get_issue", json!({"issue_key": "FBOTS-0"})))
            .await
            .unwrap_err();

        // one outbound call, no retry
        assert_eq!(api.request_count().await, 1);
        let rendered = create_failure_response(&err);
        let text = result_text(&rendered).to_string();
        assert!(text.starts_with("Error: API request failed with status 404"));
        assert!(text.contains("issue not found"));
    }

    #[tokio::test]
    async fn test_invalid_argument_type_becomes_error() {
        let api = Arc::new(MockApi::new("FBOTS"));
        let server = server_with(api.clone());

        let err = server
            .dispatch(call("get_issue", json!({"issue_key": 7})))
            .await
            .unwrap_err();

        assert!(matches!(err, FreshreleaseError::InvalidArguments(_)));
        assert_eq!(api.request_count().await, 0);
    }

    #[test]
    fn test_get_info_declares_static_tool_catalog() {
        let server = server_with(Arc::new(MockApi::new("FBOTS")));
        let info = server.get_info();

        let tools = info.capabilities.tools.unwrap();
        assert_eq!(tools.list_changed, Some(false));
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "freshrelease-mcp");
        assert!(info.instructions.is_some());
    }
}
