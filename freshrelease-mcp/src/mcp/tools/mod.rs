//! MCP tools for the Freshrelease API
//!
//! Each tool lives in its own submodule using the tool registry pattern.
//! Registration order across the modules below is the catalog order served
//! to clients, so it must stay stable.

pub mod comments;
pub mod issue_types;
pub mod issues;
pub mod statuses;
pub mod users;
