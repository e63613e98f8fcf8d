//! Error types and exit codes for pathways
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown building or entity names)
//! - 3: Data error (missing or malformed dataset files)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the pathways CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed dataset (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathways operations
#[derive(Error, Debug)]
pub enum PathwaysError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    /// A vertex handed to a graph reader or search is not in the graph
    #[error("vertex not in graph: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("unknown building{}: {}", plural(.names), .names.join(", "))]
    UnknownBuilding { names: Vec<String> },

    #[error("unknown character{}: {}", plural(.names), .names.join(", "))]
    UnknownEntity { names: Vec<String> },

    // Data errors (exit code 3)
    #[error("invalid record in {source_name} at line {line}: {reason}")]
    InvalidRecord {
        source_name: String,
        line: u64,
        reason: String,
    },

    #[error("data file not found: {path:?}")]
    DataNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

fn plural(names: &[String]) -> &'static str {
    if names.len() > 1 {
        "s"
    } else {
        ""
    }
}

impl PathwaysError {
    /// Create an error for a vertex missing from a graph
    pub fn unknown_vertex(vertex: impl std::fmt::Debug) -> Self {
        PathwaysError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PathwaysError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a malformed dataset row
    pub fn invalid_record(
        source_name: impl std::fmt::Display,
        line: u64,
        reason: impl std::fmt::Display,
    ) -> Self {
        PathwaysError::InvalidRecord {
            source_name: source_name.to_string(),
            line,
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathwaysError::UsageError(_)
            | PathwaysError::UnknownVertex { .. }
            | PathwaysError::UnknownBuilding { .. }
            | PathwaysError::UnknownEntity { .. } => ExitCode::Usage,

            PathwaysError::InvalidRecord { .. } | PathwaysError::DataNotFound { .. } => {
                ExitCode::Data
            }

            PathwaysError::Io(_)
            | PathwaysError::Json(_)
            | PathwaysError::Toml(_)
            | PathwaysError::FailedOperationWithTarget { .. }
            | PathwaysError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathwaysError::UsageError(_) => "usage_error",
            PathwaysError::UnknownVertex { .. } => "unknown_vertex",
            PathwaysError::UnknownBuilding { .. } => "unknown_building",
            PathwaysError::UnknownEntity { .. } => "unknown_entity",
            PathwaysError::InvalidRecord { .. } => "invalid_record",
            PathwaysError::DataNotFound { .. } => "data_not_found",
            PathwaysError::Io(_) => "io_error",
            PathwaysError::Json(_) => "json_error",
            PathwaysError::Toml(_) => "toml_error",
            PathwaysError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            PathwaysError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            PathwaysError::UnknownBuilding { names } | PathwaysError::UnknownEntity { names } => {
                error_obj["names"] = serde_json::json!(names);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for pathways operations
pub type Result<T> = std::result::Result<T, PathwaysError>;
