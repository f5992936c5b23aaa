//! Error types for schema projection

use thiserror::Error;

/// Result type for projection operations
pub type Result<T> = std::result::Result<T, EmitError>;

/// Schema projection errors
///
/// Only two conditions abort a projection: a subtree path that matches
/// nothing, and a mandatory substatement missing from a tree that was
/// supposed to be validated upstream. Everything else (unmapped base types,
/// node kinds without a projection, absent vendor annotations) degrades to a
/// documented default and is reported through `tracing` diagnostics.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("path '{0}' does not exist in module")]
    PathNotFound(String),

    #[error("{kind} '{name}' has no {field} substatement")]
    MissingField {
        kind: String,
        name: String,
        field: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
