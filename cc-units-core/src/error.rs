//! Structured errors for unit conversion
//!
//! Unrecognized literals are never errors: they surface as the invalid
//! sentinel values of `Prefix`, `Measure` and `Unit`. Only requests that
//! cannot be answered at all produce a `UnitsError`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INCOMPATIBLE_MEASURES: &str = "INCOMPATIBLE_MEASURES";
    pub const INVALID_UNIT: &str = "INVALID_UNIT";
    pub const INVALID_PREFIX: &str = "INVALID_PREFIX";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const UNKNOWN_METHOD: &str = "UNKNOWN_METHOD";
}

/// Error type for unit operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("Incompatible measures: cannot convert {from} to {to}")]
    IncompatibleMeasures { from: String, to: String },

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid prefix: {0}")]
    InvalidPrefix(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),
}

impl UnitsError {
    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            UnitsError::IncompatibleMeasures { .. } => codes::INCOMPATIBLE_MEASURES,
            UnitsError::InvalidUnit(_) => codes::INVALID_UNIT,
            UnitsError::InvalidPrefix(_) => codes::INVALID_PREFIX,
            UnitsError::ParseError(_) => codes::PARSE_ERROR,
            UnitsError::InvalidRequest(_) => codes::INVALID_REQUEST,
            UnitsError::UnknownMethod(_) => codes::UNKNOWN_METHOD,
        }
    }

    /// Suggestion for fixing the error, if there is a useful one
    pub fn suggestion(&self) -> Option<String> {
        match self {
            UnitsError::IncompatibleMeasures { .. } => {
                Some("Only prefixes of the same measure (or degC/degF) can be converted".to_string())
            }
            UnitsError::InvalidUnit(_) => Some("Use a literal like \"MB/s\", \"GHz\" or \"%\"".to_string()),
            UnitsError::InvalidPrefix(_) => Some("Use a prefix like \"K\", \"M\", \"Gi\" or \"Milli\"".to_string()),
            UnitsError::UnknownMethod(_) => {
                Some("Known methods: parse, convert, convert_prefix, list_prefixes, list_measures".to_string())
            }
            _ => None,
        }
    }

    /// Serializable report for JSON consumers
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
            suggestion: self.suggestion(),
        }
    }
}

/// Structured error as seen by external callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}
