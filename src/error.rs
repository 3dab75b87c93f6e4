//! Error types for the task importer.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (3=missing file, 4=schema, 8=I/O, etc.)
//! - Context-aware recovery hints
//! - Structured JSON output for `--json` consumers
//!
//! Usage errors never reach this module: clap rejects a bad argument
//! count before any file is touched and exits with its own status (2).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for importer operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Missing input (exit 3)
    FileNotFound,

    // Schema (exit 4)
    InvalidStructure,
    InvalidTaskId,

    // I/O (exit 8)
    IoError,
    JsonError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::FileNotFound => "FILE_NOT_FOUND",
            Self::InvalidStructure => "INVALID_STRUCTURE",
            Self::InvalidTaskId => "INVALID_TASK_ID",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::FileNotFound => 3,
            Self::InvalidStructure | Self::InvalidTaskId => 4,
            Self::IoError | Self::JsonError => 8,
        }
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Which input a missing-file error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    /// The JSON task store.
    TaskStore,
    /// The markdown task outline.
    Markdown,
}

impl std::fmt::Display for InputRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskStore => write!(f, "tasks file"),
            Self::Markdown => write!(f, "markdown file"),
        }
    }
}

/// Errors that can occur while importing tasks.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{role} not found: {}", path.display())]
    MissingFile { role: InputRole, path: PathBuf },

    #[error("Unexpected task store structure, expected: {expected}")]
    Schema { expected: String },

    #[error("Task id is not an integer: {value}")]
    InvalidTaskId { value: String },

    #[error("No task id left after {max}")]
    IdSpaceExhausted { max: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build the schema error for a store missing `{ "<tag>": { "tasks": [] } }`.
    #[must_use]
    pub fn schema_for_tag(tag: &str) -> Self {
        Self::Schema {
            expected: format!("{{ \"{tag}\": {{ \"tasks\": [] }} }}"),
        }
    }

    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingFile { .. } => ErrorCode::FileNotFound,
            Self::Schema { .. } => ErrorCode::InvalidStructure,
            Self::InvalidTaskId { .. } | Self::IdSpaceExhausted { .. } => {
                ErrorCode::InvalidTaskId
            }
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::MissingFile { role, path } => Some(format!(
                "Check the {role} path '{}', or pass both paths explicitly: \
                 task-import <TASKS_JSON> <MARKDOWN>",
                path.display()
            )),
            Self::Schema { .. } => Some(
                "Use --tag to select a different top-level key if the tasks live elsewhere"
                    .to_string(),
            ),
            Self::InvalidTaskId { .. } => {
                Some("Task ids must be integers (e.g. 7 or \"7\")".to_string())
            }
            Self::IdSpaceExhausted { .. } => Some(
                "Renumber the existing tasks so the highest id is below 9223372036854775807"
                    .to_string(),
            ),
            Self::Io(_) | Self::Json(_) | Self::Other(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_message_names_role_and_path() {
        let err = Error::MissingFile {
            role: InputRole::Markdown,
            path: PathBuf::from("docs/plan.md"),
        };
        assert_eq!(err.to_string(), "markdown file not found: docs/plan.md");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_schema_error_shows_expected_shape() {
        let err = Error::schema_for_tag("master");
        assert!(err.to_string().contains(r#"{ "master": { "tasks": [] } }"#));
        assert_eq!(err.error_code(), ErrorCode::InvalidStructure);
    }

    #[test]
    fn test_structured_json_includes_hint() {
        let err = Error::InvalidTaskId {
            value: "\"abc\"".to_string(),
        };
        let json = err.to_structured_json();
        assert_eq!(json["error"]["code"], "INVALID_TASK_ID");
        assert_eq!(json["error"]["exit_code"], 4);
        assert!(json["error"]["hint"].is_string());
    }

    #[test]
    fn test_json_error_has_no_hint() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(parse_err);
        assert_eq!(err.exit_code(), 8);
        assert!(err.hint().is_none());
    }
}
