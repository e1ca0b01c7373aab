//! Status listing tools for MCP operations

pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all status-related tools with the registry
pub fn register_status_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListStatusesTool::new());
}
