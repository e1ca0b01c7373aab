//! # Freshrelease MCP
//!
//! An MCP (Model Context Protocol) server that exposes Freshrelease project
//! tracking as callable tools.
//!
//! ## Features
//!
//! - **Tool Catalog**: A static, ordered set of eight tools covering users,
//!   statuses, issue types, issues, and comments
//! - **Dispatch**: Each invocation maps to exactly one Freshrelease REST call
//!   and one text result
//! - **Uniform Errors**: Every failure is rendered as an `Error: ...` text
//!   result instead of a protocol fault
//! - **Test Doubles**: The API seam is a trait, with a recording mock for
//!   exercising tools without a network
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use freshrelease_mcp::{Config, FreshreleaseServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads FRESHRELEASE_API_TOKEN, FRESHRELEASE_PROJECT_KEY and
//!     // FRESHRELEASE_BASE_URL from the environment.
//!     let server = FreshreleaseServer::new(Config::from_env());
//!
//!     let service = rmcp::serve_server(server, rmcp::transport::io::stdio()).await?;
//!     service.waiting().await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Freshrelease API access: the client trait, live client, and test mock
pub mod api;

/// Connection configuration loaded from the environment
pub mod config;

/// Error types used throughout the library
pub mod error;

/// Model Context Protocol (MCP) server support
pub mod mcp;

// Re-export core types
pub use api::{ApiClient, FreshreleaseApi, MockApi, RecordedRequest};
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::{FreshreleaseError, Result};
pub use mcp::FreshreleaseServer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
