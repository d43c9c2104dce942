use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{Result, ToolError};

/// Input accepted by the search-engine tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchQuery {
    /// The search query string.
    #[schemars(length(min = 1))]
    pub query: String,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }

    /// Check raw tool arguments and extract the query.
    ///
    /// Every violated constraint is collected before failing, so the caller
    /// sees all of them at once. Fields other than `query` are ignored.
    pub fn from_args(args: &Value) -> Result<Self> {
        let mut issues = Vec::new();

        let Some(object) = args.as_object() else {
            issues.push(ValidationIssue::new(
                Vec::new(),
                IssueCode::InvalidType,
                format!("Expected object, received {}", json_type_name(args)),
            ));
            return Err(ToolError::Validation(issues));
        };

        let path = vec!["query".to_string()];
        match object.get("query") {
            None => issues.push(ValidationIssue::new(
                path,
                IssueCode::InvalidType,
                "Required",
            )),
            Some(Value::String(query)) if query.is_empty() => issues.push(ValidationIssue::new(
                path,
                IssueCode::TooSmall,
                "String must contain at least 1 character(s)",
            )),
            Some(Value::String(query)) => return Ok(Self::new(query.clone())),
            Some(other) => issues.push(ValidationIssue::new(
                path,
                IssueCode::InvalidType,
                format!("Expected string, received {}", json_type_name(other)),
            )),
        }

        Err(ToolError::Validation(issues))
    }

    /// Same checks as [`SearchQuery::from_args`] for an already-typed request.
    pub fn validate(&self) -> Result<()> {
        if self.query.is_empty() {
            return Err(ToolError::Validation(vec![ValidationIssue::new(
                vec!["query".to_string()],
                IssueCode::TooSmall,
                "String must contain at least 1 character(s)",
            )]));
        }
        Ok(())
    }
}

/// Kind of constraint a validation issue reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidType,
    TooSmall,
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueCode::InvalidType => write!(f, "invalid_type"),
            IssueCode::TooSmall => write!(f, "too_small"),
        }
    }
}

/// One violated constraint: where it happened and what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: Vec<String>, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            path,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}: {}", self.code, self.message)
        } else {
            write!(f, "{} at {}: {}", self.code, self.path.join("."), self.message)
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_non_empty_query() {
        let query = SearchQuery::from_args(&json!({ "query": "rust async" })).unwrap();
        assert_eq!(query.query, "rust async");
    }

    #[test]
    fn test_ignores_extra_fields() {
        let query = SearchQuery::from_args(&json!({ "query": "x", "page": 2 })).unwrap();
        assert_eq!(query, SearchQuery::new("x"));
    }

    #[test]
    fn test_whitespace_only_query_is_accepted() {
        assert!(SearchQuery::from_args(&json!({ "query": " " })).is_ok());
    }

    #[test]
    fn test_empty_query_is_too_small() {
        let err = SearchQuery::from_args(&json!({ "query": "" })).unwrap_err();
        let issues = err.issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::TooSmall);
        assert_eq!(issues[0].path, vec!["query".to_string()]);
    }

    #[test]
    fn test_missing_query_is_required() {
        let err = SearchQuery::from_args(&json!({})).unwrap_err();
        assert_eq!(err.issues()[0].code, IssueCode::InvalidType);
        assert_eq!(err.issues()[0].message, "Required");
    }

    #[test]
    fn test_null_query_reports_received_null() {
        let err = SearchQuery::from_args(&json!({ "query": null })).unwrap_err();
        assert_eq!(err.issues()[0].code, IssueCode::InvalidType);
        assert_eq!(err.issues()[0].message, "Expected string, received null");
    }

    #[test]
    fn test_non_string_query_reports_received_type() {
        let err = SearchQuery::from_args(&json!({ "query": 42 })).unwrap_err();
        assert_eq!(err.issues()[0].message, "Expected string, received number");
    }

    #[test]
    fn test_non_object_args_rejected_at_root() {
        let err = SearchQuery::from_args(&json!("just a string")).unwrap_err();
        assert!(err.issues()[0].path.is_empty());
        assert_eq!(err.issues()[0].message, "Expected object, received string");
    }

    #[test]
    fn test_typed_validate() {
        assert!(SearchQuery::new("ok").validate().is_ok());
        assert!(SearchQuery::new("").validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue::new(vec!["query".into()], IssueCode::TooSmall, "too short");
        assert_eq!(issue.to_string(), "too_small at query: too short");
    }
}
