//! Issue type listing tools for MCP operations

pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all issue-type-related tools with the registry
pub fn register_issue_type_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListIssueTypesTool::new());
}
