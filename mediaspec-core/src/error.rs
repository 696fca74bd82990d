use thiserror::Error;

/// Errors produced by mediaspec-core.
///
/// Record reads and writes never fail; these errors come from the dynamic
/// field interface, document I/O, configuration parsing and strict-mode
/// validation.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{record} has no field named '{field}'")]
    UnknownField { record: &'static str, field: String },

    #[error("Invalid value for {record}.{field}: {message}")]
    InvalidFieldValue {
        record: &'static str,
        field: &'static str,
        message: String,
    },

    #[error("Unknown record kind: {0}")]
    UnknownRecordKind(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{record} failed validation with {count} violation(s): {summary}")]
    Validation {
        record: &'static str,
        count: usize,
        summary: String,
    },
}

/// Result type for mediaspec-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
