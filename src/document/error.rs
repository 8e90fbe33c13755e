//! Error types for JSON parsing.

use std::io;
use thiserror::Error;

/// What went wrong while parsing.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("The root of JSON file must be an object")]
    RootNotObject,
    #[error("Invalid object format")]
    InvalidObjectFormat,
    #[error("Missing comma between members")]
    MissingMemberComma,
    #[error("Missing comma between elements")]
    MissingElementComma,
    #[error("String must start with \" sign")]
    ExpectedString,
    #[error("Invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    #[error("Invalid unicode hex digit '{0}'")]
    InvalidUnicodeDigit(char),
    #[error("Invalid unicode escape \\u{0:04X}: surrogate pairs are not supported")]
    UnsupportedSurrogate(u32),
    #[error("Invalid control character U+{0:04X} in string")]
    InvalidCharacter(u32),
    #[error("Invalid number format '{0}'")]
    InvalidNumber(String),
    #[error("Number out of range '{0}'")]
    NumberOutOfRange(String),
    #[error("Invalid boolean value")]
    InvalidBoolean,
    #[error("Invalid null value")]
    InvalidNull,
    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("Unexpected trailing character '{0}' after root object")]
    TrailingCharacter(char),
    #[error("Nesting deeper than {0} levels")]
    DepthLimitExceeded(usize),
    #[error("Invalid UTF-8 sequence")]
    InvalidUtf8,
    #[error("End of file reached")]
    UnexpectedEof,
    #[error("Error reading character from file: {0}")]
    Read(#[from] io::Error),
}

/// A parse failure together with the position of the offending character.
///
/// Lines and columns are 1-based. A column of 0 means the failure happened
/// right after a newline, before any character of the line was read.
#[derive(Debug, Error)]
#[error("[Line: {line}] [Column: {column}]: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    #[source]
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, column: usize, kind: ParseErrorKind) -> Self {
        Self { line, column, kind }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}
