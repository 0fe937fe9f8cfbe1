//! Input contract errors
//!
//! Scoring itself cannot fail. The only errors a caller sees are raised at
//! the boundary, before any text reaches the detectors.

use std::fmt;

/// Rejected input handed to one of the analyzer entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The value supplied was not text (null, number, object, ...)
    NotText { found: String },

    /// A corpus record did not carry the named field
    MissingField { field: String },

    /// A corpus label that is not one of 0/1, true/false, "phishing"/"legitimate"
    InvalidLabel { found: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotText { found } => write!(f, "Invalid input: expected text, found {}", found),
            InputError::MissingField { field } => write!(f, "Invalid input: missing field '{}'", field),
            InputError::InvalidLabel { found } => write!(f, "Invalid input: unrecognised label {}", found),
        }
    }
}

impl std::error::Error for InputError {}

impl InputError {
    /// Rejection for a JSON value that should have been a string
    pub fn not_text(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        InputError::NotText {
            found: found.to_string(),
        }
    }
}
