//! Error types for recipebook
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for recipebook operations
pub type RecipeResult<T> = Result<T, RecipeError>;

/// Kind of number a prompt expected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// Whole number (counts, calories, menu selection)
    Integer,
    /// Decimal number (quantities, scale factors)
    Decimal,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Integer => f.write_str("whole number"),
            NumberKind::Decimal => f.write_str("number"),
        }
    }
}

/// A line of input that could not be read as the expected number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} for {field}: '{input}'")]
pub struct ParseError {
    pub field: &'static str,
    pub input: String,
    pub kind: NumberKind,
}

impl ParseError {
    pub fn new(field: &'static str, input: impl Into<String>, kind: NumberKind) -> Self {
        Self {
            field,
            input: input.into(),
            kind,
        }
    }
}

/// Main error type for recipebook operations
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Malformed numeric input under the abort policy
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Input ended while a prompt still needed an answer
    #[error("input ended while waiting for: {prompt}")]
    InputClosed { prompt: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },
}
