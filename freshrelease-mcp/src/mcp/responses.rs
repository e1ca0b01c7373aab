//! Response creation utilities for MCP tool calls
//!
//! Success payloads are the pretty-printed JSON of the remote response, with
//! stable 2-space indentation. Failures are a single `Error: ...` string.
//! Both shapes are part of the observable contract.

use crate::error::{FreshreleaseError, Result};
use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent};

/// Create a success response for MCP tool calls
pub fn create_success_response(message: String) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text: message }),
            None,
        )],
        is_error: Some(false),
    }
}

/// Create an error response for MCP tool calls
pub fn create_error_response(message: String) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text: message }),
            None,
        )],
        is_error: Some(true),
    }
}

/// Render a decoded API payload as one pretty-printed text item
pub fn create_json_response(payload: &serde_json::Value) -> Result<CallToolResult> {
    Ok(create_success_response(serde_json::to_string_pretty(
        payload,
    )?))
}

/// Render any invocation failure as the uniform `Error: ...` text result
pub fn create_failure_response(error: &FreshreleaseError) -> CallToolResult {
    create_error_response(format!("Error: {error}"))
}
