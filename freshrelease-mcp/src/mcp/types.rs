//! Request types for MCP tool operations
//!
//! Argument maps from `tools/call` deserialize into these structs after the
//! required-field check. The id-like fields are strings because that is how
//! the Freshrelease API itself types them (e.g. issue_type_id "14").

use serde::Deserialize;
use serde_json::{Map, Value};

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    30
}

/// Request to list users in the project
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetUsersRequest {
    /// Page number for pagination (default: 1)
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of users per page (default: 30)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Request to list all statuses in the project
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct GetStatusesRequest {
    // No parameters needed
}

/// Request to list all issue types in the project
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct GetIssueTypesRequest {
    // No parameters needed
}

/// Request to fetch a single issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetIssueRequest {
    /// Issue key (e.g. FBOTS-47941)
    pub issue_key: String,
}

/// Request to create a new issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateIssueRequest {
    /// Issue title
    pub title: String,
    /// Issue description
    pub description: String,
    /// Issue type ID (e.g. "14" for task)
    pub issue_type_id: String,
    /// Owner user ID
    pub owner_id: String,
    /// Project ID (e.g. "280")
    pub project_id: String,
    /// Custom fields as key-value pairs
    #[serde(default)]
    pub custom_fields: Map<String, Value>,
}

/// Request to update an existing issue, partial-update semantics
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateIssueRequest {
    /// Issue key (e.g. FBOTS-48937)
    pub issue_key: String,
    /// Updated issue description
    pub description: Option<String>,
    /// Updated issue type ID
    pub issue_type_id: Option<String>,
    /// Custom fields to update
    pub custom_fields: Option<Map<String, Value>>,
}

/// Request to list the comments on an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetCommentsRequest {
    /// Issue ID (numeric, e.g. "2563487")
    pub issue_id: String,
}

/// Request to add a comment to an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddCommentRequest {
    /// Issue ID (numeric, e.g. "2563487")
    pub issue_id: String,
    /// Comment content
    pub content: String,
}
