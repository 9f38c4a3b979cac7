//! Error types and exit codes for campus-nav
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed map data)
//! - 3: Data error (unknown location, no route)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown location, no route (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during campus-nav operations
#[derive(Error, Debug)]
pub enum NavError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },

    // Data errors (exit code 3)
    #[error("location not found: {name}")]
    VertexNotFound { name: String },

    #[error("no route found from {from} to {to}")]
    NoPathFound { from: String, to: String },

    #[error("route distance from {from} to {to} exceeds the representable range")]
    DistanceOverflow { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl NavError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NavError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an edge that cannot be inserted
    pub fn invalid_edge(from: &str, to: &str, reason: impl std::fmt::Display) -> Self {
        NavError::InvalidEdge {
            from: from.to_string(),
            to: to.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a location missing from the graph
    pub fn vertex_not_found(name: &str) -> Self {
        NavError::VertexNotFound {
            name: name.to_string(),
        }
    }

    /// Create an error for a disconnected pair of locations
    pub fn no_path(from: &str, to: &str) -> Self {
        NavError::NoPathFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for a route total that overflowed
    pub fn distance_overflow(from: &str, to: &str) -> Self {
        NavError::DistanceOverflow {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NavError::UnknownFormat(_)
            | NavError::UsageError(_)
            | NavError::InvalidValue { .. }
            | NavError::InvalidEdge { .. } => ExitCode::Usage,

            NavError::VertexNotFound { .. }
            | NavError::NoPathFound { .. }
            | NavError::DistanceOverflow { .. } => ExitCode::Data,

            NavError::Io(_)
            | NavError::Json(_)
            | NavError::Toml(_)
            | NavError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            NavError::UnknownFormat(_) => "unknown_format",
            NavError::UsageError(_) => "usage_error",
            NavError::InvalidValue { .. } => "invalid_value",
            NavError::InvalidEdge { .. } => "invalid_edge",
            NavError::VertexNotFound { .. } => "vertex_not_found",
            NavError::NoPathFound { .. } => "no_path_found",
            NavError::DistanceOverflow { .. } => "distance_overflow",
            NavError::Io(_) => "io_error",
            NavError::Json(_) => "json_error",
            NavError::Toml(_) => "toml_error",
            NavError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for campus-nav operations
pub type Result<T> = std::result::Result<T, NavError>;
