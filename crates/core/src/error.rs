//! Domain error model.

use thiserror::Error;

/// Result type for parsing the textual item form.
pub type ParseResult<T> = Result<T, ParseItemError>;

/// Failure to parse an item from its `name, sell-in, quality` form.
///
/// Syntax only: numeric fields must parse as integers, but values are
/// never range-checked and names are never validated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseItemError {
    /// A comma-separated field was absent or empty.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A numeric field did not parse as an integer.
    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

impl ParseItemError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }
}
