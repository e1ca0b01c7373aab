//! Unified error handling for the Freshrelease MCP library
//!
//! Every tool invocation failure is eventually rendered as a single
//! `Error: ...` text result; this module provides the typed errors that
//! exist between the failure site and that boundary.

use thiserror::Error;

/// The main error type for the Freshrelease MCP library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FreshreleaseError {
    /// Invocation referenced a tool name that is not in the catalog
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A required argument declared by the tool schema was not supplied
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Arguments were present but did not match the tool's declared types
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The Freshrelease API answered with a non-success status
    #[error("API request failed with status {status}: {body}")]
    RemoteFailure {
        /// HTTP status code of the response
        status: reqwest::StatusCode,
        /// Raw response body, usually the API's JSON error payload
        body: String,
    },

    /// Connection, timeout, or body-read failure before a status was obtained
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Freshrelease MCP operations
pub type Result<T> = std::result::Result<T, FreshreleaseError>;
