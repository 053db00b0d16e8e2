//! Validation failure and schema error types

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Machine-readable code attached to a failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FailureCode {
    Text(String),
    Number(i64),
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCode::Text(code) => write!(f, "{}", code),
            FailureCode::Number(code) => write!(f, "{}", code),
        }
    }
}

impl From<&str> for FailureCode {
    fn from(code: &str) -> Self {
        FailureCode::Text(code.to_string())
    }
}

impl From<String> for FailureCode {
    fn from(code: String) -> Self {
        FailureCode::Text(code)
    }
}

impl From<i64> for FailureCode {
    fn from(code: i64) -> Self {
        FailureCode::Number(code)
    }
}

/// The single failure produced by a validation run.
///
/// `message` already carries the field path, e.g. `user["age"] must >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct Failure {
    /// Human-readable message, `"<field path> <reason>"`
    pub message: String,
    /// Optional code for programmatic handling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<FailureCode>,
}

impl Failure {
    /// Create a failure without a code
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Create a failure with a code
    pub fn with_code(message: impl Into<String>, code: impl Into<FailureCode>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }

    /// Code as a string slice, when it is a text code
    pub fn code_str(&self) -> Option<&str> {
        match &self.code {
            Some(FailureCode::Text(code)) => Some(code),
            _ => None,
        }
    }

    /// Machine-readable form, as written by `vet check --json`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "success": false,
            "message": self.message,
            "code": self.code,
        })
    }
}

/// Errors raised while turning a schema document into a validator tree
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid pattern at {path}: {source}")]
    InvalidPattern {
        path: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid schema at {path}: {reason}")]
    Invalid { path: String, reason: String },

    #[error("failed to parse JSON schema: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML schema: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read schema file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
