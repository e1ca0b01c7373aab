//! Tool registry for MCP operations
//!
//! This module provides a registry pattern for managing MCP tools. Tools are
//! kept in registration order because the catalog returned by `tools/list`
//! is part of the served contract and must be deterministic.

use crate::api::FreshreleaseApi;
use crate::error::{FreshreleaseError, Result};
use rmcp::model::{CallToolResult, Tool};
use std::sync::Arc;

/// Context shared by all tools during execution
#[derive(Clone)]
pub struct ToolContext {
    /// API connection every tool dispatches its request through
    pub api: Arc<dyn FreshreleaseApi>,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(api: Arc<dyn FreshreleaseApi>) -> Self {
        Self { api }
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments and context
    ///
    /// Errors are rendered to the uniform `Error: ...` text result by the
    /// server; implementations propagate them with `?`.
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult>;
}

/// Registry for managing MCP tools
///
/// Iteration order is registration order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool in the registry
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        self.tools.push(Box::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools
            .iter()
            .find(|tool| tool.name() == name)
            .map(|tool| tool.as_ref())
    }

    /// List all registered tool names, in registration order
    pub fn list_tool_names(&self) -> Vec<String> {
        self.tools.iter().map(|tool| tool.name().to_string()).collect()
    }

    /// Get all registered tools as Tool objects for the MCP list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .iter()
            .map(|tool| {
                let schema = tool.schema();
                let schema_map = if let serde_json::Value::Object(map) = schema {
                    map
                } else {
                    serde_json::Map::new()
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: std::sync::Arc::new(schema_map),
                    annotations: None,
                }
            })
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Check that every property a tool's schema marks as required is present
///
/// Runs before argument deserialization so a missing field is reported by
/// name instead of as an incidental decode failure.
pub fn validate_required_arguments(
    tool: &dyn McpTool,
    arguments: &serde_json::Map<String, serde_json::Value>,
) -> Result<()> {
    let schema = tool.schema();
    if let Some(required) = schema.get("required").and_then(|r| r.as_array()) {
        for field in required.iter().filter_map(|f| f.as_str()) {
            if !arguments.contains_key(field) {
                return Err(FreshreleaseError::MissingArgument(field.to_string()));
            }
        }
    }
    Ok(())
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct
    ///
    /// # Arguments
    ///
    /// * `arguments` - The JSON map of arguments from the MCP request
    ///
    /// # Returns
    ///
    /// * `Result<T>` - The parsed arguments or an `InvalidArguments` error
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Result<T> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| FreshreleaseError::InvalidArguments(e.to_string()))
    }
}
