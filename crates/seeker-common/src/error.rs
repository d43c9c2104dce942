use thiserror::Error;

use crate::types::ValidationIssue;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Validation failed: {}", render_issues(.0))]
    Validation(Vec<ValidationIssue>),

    #[error("Request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    /// Non-success response whose body has no string at `error.message`.
    #[error("Request failed with status {status} and an unrecognized error body: {body}")]
    UnexpectedErrorBody { status: u16, body: String },

    #[error("No search engine URL configured (set {env_var} or pass an explicit URL)")]
    MissingEndpoint { env_var: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Issues carried by a validation failure, empty for every other kind.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            ToolError::Validation(issues) => issues,
            _ => &[],
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ToolError::Validation(_))
    }

    /// HTTP status reported by the remote service, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ToolError::Request { status, .. } | ToolError::UnexpectedErrorBody { status, .. } => {
                Some(*status)
            }
            ToolError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

fn render_issues(issues: &[ValidationIssue]) -> String {
    serde_json::to_string(issues).unwrap_or_else(|_| format!("{:?}", issues))
}

pub type Result<T> = std::result::Result<T, ToolError>;
