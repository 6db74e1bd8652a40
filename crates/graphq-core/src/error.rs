//! Error types and exit codes for graphq
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed graph or query file, unknown vertex, failed queries)

mod macros;

use thiserror::Error;

/// Exit codes for the graphq binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input, unknown vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading or querying a graph
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("duplicate vertex: {name}")]
    DuplicateVertex { name: String },

    #[error("edge {from} -> {to} references unknown vertex {missing}")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },

    #[error("vertex not found: {name}")]
    VertexNotFound { name: String },

    #[error("cycle detected at vertex {vertex}")]
    CycleDetected { vertex: String },

    #[error("graph declares {count} vertices (limit: {limit})")]
    TooManyVertices { count: usize, limit: usize },

    #[error("{failed} of {total} queries failed")]
    QueryBatchFailed { failed: usize, total: usize },

    // Generic failures (exit code 1)
    #[error("adjacency lists must be sorted before traversal")]
    UnsortedAdjacency,

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

impl GraphError {
    /// Create an error for a malformed line in a graph or query file
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        GraphError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for a vertex name absent from the graph
    pub fn vertex_not_found(name: impl Into<String>) -> Self {
        GraphError::VertexNotFound { name: name.into() }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Whether this error is the recoverable "graph has a cycle" condition
    pub fn is_cycle(&self) -> bool {
        matches!(self, GraphError::CycleDetected { .. })
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::DuplicateFormat
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::MalformedInput { .. }
            | GraphError::DuplicateVertex { .. }
            | GraphError::DanglingEdge { .. }
            | GraphError::VertexNotFound { .. }
            | GraphError::CycleDetected { .. }
            | GraphError::TooManyVertices { .. }
            | GraphError::QueryBatchFailed { .. } => ExitCode::Data,

            GraphError::UnsortedAdjacency
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::FailedOperationWithTarget { .. }
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::DuplicateFormat => "duplicate_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::MalformedInput { .. } => "malformed_input",
            GraphError::DuplicateVertex { .. } => "duplicate_vertex",
            GraphError::DanglingEdge { .. } => "dangling_edge",
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::CycleDetected { .. } => "cycle_detected",
            GraphError::TooManyVertices { .. } => "too_many_vertices",
            GraphError::QueryBatchFailed { .. } => "query_batch_failed",
            GraphError::UnsortedAdjacency => "unsorted_adjacency",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            GraphError::Other(_) => "other",
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
            GraphError::MalformedInput { line, .. } => {
                error_obj["line"] = serde_json::json!(line);
            }
            GraphError::VertexNotFound { name } => {
                error_obj["vertex"] = serde_json::json!(name);
            }
            GraphError::CycleDetected { vertex } => {
                error_obj["vertex"] = serde_json::json!(vertex);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for graphq operations
pub type Result<T> = std::result::Result<T, GraphError>;
