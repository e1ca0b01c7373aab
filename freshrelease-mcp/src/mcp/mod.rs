//! Model Context Protocol (MCP) server support
//!
//! The server surface is three operations: `initialize` advertises a static
//! tools capability, `tools/list` returns the catalog in registration order,
//! and `tools/call` dispatches one invocation to one Freshrelease request.

pub mod responses;
pub mod server;
pub mod tool_registry;
pub mod tools;
pub mod types;

pub use server::FreshreleaseServer;
pub use tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
