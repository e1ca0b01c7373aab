//! Issue management tools for MCP operations
//!
//! This module provides the issue-related tools using the tool registry
//! pattern. Each tool is in its own submodule with a dedicated
//! implementation.

pub mod create;
pub mod get;
pub mod update;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all issue-related tools with the registry
pub fn register_issue_tools(registry: &mut ToolRegistry) {
    registry.register(get::GetIssueTool::new());
    registry.register(create::CreateIssueTool::new());
    registry.register(update::UpdateIssueTool::new());
}
