//! Single-pass tokenizer for path expressions.
//!
//! A token is the run of characters up to the next `.`, `[` or `]`. The
//! delimiter is reported separately and is consumed together with the token,
//! leaving the expression positioned at the start of the next token.

/// Character that ended a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `.` - field access follows
    Dot,
    /// `[` - an index expression follows
    OpenBracket,
    /// `]` - the enclosing index expression is complete
    CloseBracket,
}

impl Delimiter {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Delimiter::Dot),
            '[' => Some(Delimiter::OpenBracket),
            ']' => Some(Delimiter::CloseBracket),
            _ => None,
        }
    }
}

/// A token and the delimiter that ended it (`None` at end of input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'e> {
    pub text: &'e str,
    pub delimiter: Option<Delimiter>,
}

/// Splits the next token off the front of `expression`.
///
/// # Example
///
/// ```
/// use jsoneval::path::{next_token, Delimiter};
///
/// let mut rest = "a.b[1]";
/// let token = next_token(&mut rest);
/// assert_eq!(token.text, "a");
/// assert_eq!(token.delimiter, Some(Delimiter::Dot));
/// assert_eq!(rest, "b[1]");
/// ```
pub fn next_token<'e>(expression: &mut &'e str) -> Token<'e> {
    let source = *expression;
    for (pos, ch) in source.char_indices() {
        if let Some(delimiter) = Delimiter::from_char(ch) {
            *expression = &source[pos + ch.len_utf8()..];
            return Token {
                text: &source[..pos],
                delimiter: Some(delimiter),
            };
        }
    }

    *expression = "";
    Token {
        text: source,
        delimiter: None,
    }
}

/// Removes every double quote from a caller-supplied expression.
///
/// Shells and scripts often pass expressions wrapped in quotes, which are never
/// part of a path.
pub fn strip_quotes(raw: &str) -> String {
    raw.chars().filter(|&ch| ch != '"').collect()
}
