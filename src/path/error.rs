//! Error types for path evaluation.

use thiserror::Error;

/// Errors that can occur while evaluating a path expression.
///
/// Evaluation walks an in-memory tree, so errors carry a description only,
/// never a source position.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A numeric token outside of `[...]`.
    #[error("Integer literal {0} can only be used as an array index")]
    IntegerOutsideIndex(i64),
    /// Field access on something that is not an object.
    #[error("Token preceding '.' must be a JSON object, found {found} while looking up \"{key}\"")]
    NotAnObject { key: String, found: &'static str },
    #[error("Key \"{0}\" was not found in parent object")]
    KeyNotFound(String),
    /// `[` applied to something that is not an array.
    #[error("Token preceding '[' must be a JSON array, found {0}")]
    NotAnArray(&'static str),
    #[error("Expected number value as index in JSON array, found {0}")]
    IndexNotNumber(&'static str),
    #[error("Expected integer index in JSON array, found {0}")]
    NonIntegerIndex(f64),
    #[error("Index '{index}' is out of range for array of length {len}")]
    IndexOutOfRange { index: i64, len: usize },
    /// Text between `]` and the next delimiter.
    #[error("Unexpected token \"{0}\" after ']'")]
    UnexpectedToken(String),
    #[error("Unmatched ']' in expression")]
    UnmatchedBracket,
    #[error("Missing ']' in expression")]
    UnclosedBracket,
    #[error("Brackets nested deeper than {0} levels")]
    NestingTooDeep(usize),
}
