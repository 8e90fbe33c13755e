//! Recursive-descent JSON parser.
//!
//! The parser pulls characters from a [`CharReader`] and builds a [`JsonValue`]
//! tree bottom-up. It holds exactly one "current" character: every `parse_*`
//! method starts with the first character of its value in `self.ch` and returns
//! with the last character of that value in `self.ch`, so the caller always
//! advances past it before looking for the next token.
//!
//! Parsing is all-or-nothing. The first problem aborts the parse with a
//! [`ParseError`] carrying the line and column of the offending character.
//!
//! The document root must be an object.
//!
//! # Example
//!
//! ```
//! use jsoneval::document::parser::parse_str;
//!
//! let root = parse_str(r#"{"name": "Alice", "age": 30}"#).unwrap();
//! assert_eq!(root.get("age").unwrap().to_string(), "30");
//!
//! let err = parse_str("[1, 2]").unwrap_err();
//! assert_eq!(err.to_string(), "[Line: 1] [Column: 1]: The root of JSON file must be an object");
//! ```

use super::error::{ParseError, ParseErrorKind};
use super::node::{JsonNumber, JsonObject, JsonValue};
use super::reader::{is_json_whitespace, CharReader};
use std::io::Read;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, ParseError>;

/// Deepest nesting of objects and arrays accepted, counting the root.
pub const MAX_DEPTH: usize = 128;

/// Parses a complete document from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<JsonValue> {
    JsonParser::new(reader).parse()
}

/// Parses a complete document from a string.
pub fn parse_str(source: &str) -> Result<JsonValue> {
    parse_reader(source.as_bytes())
}

/// Lexer state while scanning a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringState {
    Normal,
    Escape,
    Unicode { digits: u8, code: u32 },
}

/// Single-use parser over one character stream.
pub struct JsonParser<R: Read> {
    reader: CharReader<R>,
    ch: char,
    depth: usize,
}

impl<R: Read> JsonParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: CharReader::new(reader),
            ch: '\0',
            depth: 0,
        }
    }

    /// Parses the whole stream into a tree rooted at an object.
    pub fn parse(mut self) -> Result<JsonValue> {
        self.next_char_skip_ws()?;

        if self.ch != '{' {
            return Err(self.error(ParseErrorKind::RootNotObject));
        }

        let root = self.parse_value()?;
        self.expect_end()?;

        debug!(
            members = root.len(),
            lines = self.reader.line(),
            "parsed JSON document"
        );
        Ok(root)
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.reader.line(), self.reader.column(), kind)
    }

    /// Advances to the next character; running out of input is an error.
    fn next_char(&mut self) -> Result<()> {
        match self.reader.read_char() {
            Ok(Some(ch)) => {
                self.ch = ch;
                Ok(())
            }
            Ok(None) => Err(self.error(ParseErrorKind::UnexpectedEof)),
            Err(kind) => Err(self.error(kind)),
        }
    }

    fn next_char_skip_ws(&mut self) -> Result<()> {
        loop {
            self.next_char()?;
            if !is_json_whitespace(self.ch) {
                return Ok(());
            }
        }
    }

    /// Puts the lookahead character back so the caller reads it next.
    fn return_char(&mut self) {
        self.reader.unread_char();
    }

    /// Only whitespace may follow the root object.
    fn expect_end(&mut self) -> Result<()> {
        loop {
            match self.reader.read_char() {
                Ok(Some(ch)) if is_json_whitespace(ch) => continue,
                Ok(Some(ch)) => return Err(self.error(ParseErrorKind::TrailingCharacter(ch))),
                Ok(None) => return Ok(()),
                Err(kind) => return Err(self.error(kind)),
            }
        }
    }

    fn parse_value(&mut self) -> Result<JsonValue> {
        trace!(ch = %self.ch, line = self.reader.line(), column = self.reader.column(), "parse value");
        match self.ch {
            '{' => self.nested(Self::parse_object).map(JsonValue::Object),
            '[' => self.nested(Self::parse_array).map(JsonValue::Array),
            '"' => self.parse_string().map(JsonValue::String),
            't' | 'f' => self.parse_boolean().map(JsonValue::Boolean),
            'n' => self.parse_null().map(|()| JsonValue::Null),
            _ => self.parse_number().map(JsonValue::Number),
        }
    }

    /// Runs `parse` one container level deeper, refusing to go past `MAX_DEPTH`.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(ParseErrorKind::DepthLimitExceeded(MAX_DEPTH)));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn parse_object(&mut self) -> Result<JsonObject> {
        let mut fields = JsonObject::new();

        self.next_char_skip_ws()?;
        if self.ch == '}' {
            return Ok(fields);
        }

        loop {
            // Empty keys are dropped, but their values are still parsed so the
            // rest of the document gets validated.
            let key = self.parse_string()?;

            self.next_char_skip_ws()?;
            if self.ch != ':' {
                return Err(self.error(ParseErrorKind::InvalidObjectFormat));
            }

            self.next_char_skip_ws()?;
            let value = self.parse_value()?;

            if !key.is_empty() {
                fields.insert(key, value);
            }

            self.next_char_skip_ws()?;
            match self.ch {
                ',' => self.next_char_skip_ws()?,
                '}' => return Ok(fields),
                _ => return Err(self.error(ParseErrorKind::MissingMemberComma)),
            }
        }
    }

    fn parse_array(&mut self) -> Result<Vec<JsonValue>> {
        let mut elements = Vec::new();

        self.next_char_skip_ws()?;
        if self.ch == ']' {
            return Ok(elements);
        }

        loop {
            elements.push(self.parse_value()?);

            self.next_char_skip_ws()?;
            match self.ch {
                ',' => self.next_char_skip_ws()?,
                ']' => return Ok(elements),
                _ => return Err(self.error(ParseErrorKind::MissingElementComma)),
            }
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        if self.ch != '"' {
            return Err(self.error(ParseErrorKind::ExpectedString));
        }

        let mut text = String::new();
        let mut state = StringState::Normal;

        loop {
            self.next_char()?;

            state = match state {
                StringState::Normal => match self.ch {
                    '\\' => StringState::Escape,
                    '"' => return Ok(text),
                    ch if ch < '\u{20}' => {
                        return Err(self.error(ParseErrorKind::InvalidCharacter(u32::from(ch))))
                    }
                    ch => {
                        text.push(ch);
                        StringState::Normal
                    }
                },
                StringState::Escape => match self.ch {
                    'u' => StringState::Unicode { digits: 0, code: 0 },
                    other => {
                        let unescaped = match other {
                            '"' => '"',
                            '\\' => '\\',
                            '/' => '/',
                            'b' => '\u{08}',
                            'f' => '\u{0C}',
                            'n' => '\n',
                            'r' => '\r',
                            't' => '\t',
                            _ => return Err(self.error(ParseErrorKind::InvalidEscape(other))),
                        };
                        text.push(unescaped);
                        StringState::Normal
                    }
                },
                StringState::Unicode { digits, code } => {
                    let Some(digit) = self.ch.to_digit(16) else {
                        return Err(self.error(ParseErrorKind::InvalidUnicodeDigit(self.ch)));
                    };
                    let code = code * 16 + digit;

                    if digits + 1 < 4 {
                        StringState::Unicode {
                            digits: digits + 1,
                            code,
                        }
                    } else {
                        // A single code unit; surrogate halves cannot stand alone.
                        let decoded = char::from_u32(code)
                            .ok_or_else(|| self.error(ParseErrorKind::UnsupportedSurrogate(code)))?;
                        text.push(decoded);
                        StringState::Normal
                    }
                }
            };
        }
    }

    /// Appends consecutive ASCII digits and returns how many were read.
    fn take_digits(&mut self, text: &mut String) -> Result<usize> {
        let mut count = 0;
        while self.ch.is_ascii_digit() {
            text.push(self.ch);
            count += 1;
            self.next_char()?;
        }
        Ok(count)
    }

    fn parse_number(&mut self) -> Result<JsonNumber> {
        let mut text = String::new();
        let mut is_integer = true;

        if self.ch == '-' {
            text.push('-');
            self.next_char()?;
        }

        let mut well_formed = self.take_digits(&mut text)? > 0;

        if text.is_empty() {
            return Err(self.error(ParseErrorKind::UnexpectedCharacter(self.ch)));
        }

        if self.ch == '.' {
            is_integer = false;
            text.push('.');
            self.next_char()?;
            well_formed &= self.take_digits(&mut text)? > 0;
        }

        if matches!(self.ch, 'e' | 'E') {
            is_integer = false;
            text.push(self.ch);
            self.next_char()?;
            if matches!(self.ch, '+' | '-') {
                text.push(self.ch);
                self.next_char()?;
            }
            well_formed &= self.take_digits(&mut text)? > 0;
        }

        // The first character after the number belongs to the caller.
        self.return_char();

        if !well_formed {
            return Err(self.error(ParseErrorKind::InvalidNumber(text)));
        }

        if is_integer {
            if let Ok(value) = text.parse::<i64>() {
                return Ok(JsonNumber::Integer(value));
            }
            trace!(%text, "integer literal overflows i64, storing as float");
        }

        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(JsonNumber::Float(value)),
            Ok(_) => Err(self.error(ParseErrorKind::NumberOutOfRange(text))),
            Err(_) => Err(self.error(ParseErrorKind::InvalidNumber(text))),
        }
    }

    fn parse_boolean(&mut self) -> Result<bool> {
        let mut word = String::new();
        while self.ch.is_ascii_alphabetic() && word.len() < 5 {
            word.push(self.ch);
            self.next_char()?;
        }

        match word.as_str() {
            "true" | "false" => {
                self.return_char();
                Ok(word == "true")
            }
            _ => Err(self.error(ParseErrorKind::InvalidBoolean)),
        }
    }

    fn parse_null(&mut self) -> Result<()> {
        for (i, expected) in "null".chars().enumerate() {
            if i > 0 {
                self.next_char()?;
            }
            if self.ch != expected {
                return Err(self.error(ParseErrorKind::InvalidNull));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(source: &str) -> ParseError {
        parse_str(source).unwrap_err()
    }

    #[test]
    fn test_parse_empty_object() {
        let root = parse_str("{}").unwrap();
        assert_eq!(root, JsonValue::Object(JsonObject::new()));
    }

    #[test]
    fn test_parse_nested_document() {
        let root = parse_str(r#"{"a": {"b": [1, 2, {"c": "test"}, [11, 12]]}}"#).unwrap();
        let b = root.get("a").and_then(|a| a.get("b")).unwrap();
        assert_eq!(b.len(), 4);
        assert_eq!(b.get_index(1), Some(&JsonValue::Number(JsonNumber::Integer(2))));
        assert_eq!(
            b.get_index(2).and_then(|v| v.get("c")).and_then(JsonValue::as_str),
            Some("test")
        );
    }

    #[test]
    fn test_parse_multiple_members() {
        let root = parse_str(r#"{"x": 1, "y": true, "z": null}"#).unwrap();
        assert_eq!(root.len(), 3);
        assert_eq!(root.get("y"), Some(&JsonValue::Boolean(true)));
        assert_eq!(root.get("z"), Some(&JsonValue::Null));
    }

    #[test]
    fn test_parse_scalars_followed_by_delimiters() {
        let root = parse_str(r#"{"v": [true,false,null,-1.5e2,"s"]}"#).unwrap();
        let v = root.get("v").unwrap();
        assert_eq!(
            v,
            &JsonValue::Array(vec![
                JsonValue::Boolean(true),
                JsonValue::Boolean(false),
                JsonValue::Null,
                JsonValue::Number(JsonNumber::Float(-150.0)),
                JsonValue::String("s".to_string()),
            ])
        );
    }

    #[test]
    fn test_parse_empty_array() {
        let root = parse_str(r#"{"a": [ ]}"#).unwrap();
        assert_eq!(root.get("a"), Some(&JsonValue::Array(vec![])));
    }

    #[test]
    fn test_empty_key_is_dropped() {
        let root = parse_str(r#"{"": 1, "k": 2}"#).unwrap();
        assert_eq!(root.len(), 1);
        assert!(root.contains_key("k"));
    }

    #[test]
    fn test_empty_key_value_is_still_validated() {
        let err = parse_err(r#"{"": tru}"#);
        assert!(matches!(err.kind, ParseErrorKind::InvalidBoolean));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let root = parse_str(r#"{"k": 1, "k": 2}"#).unwrap();
        assert_eq!(root.len(), 1);
        assert_eq!(root.get("k"), Some(&JsonValue::Number(JsonNumber::Integer(2))));
    }

    #[test]
    fn test_string_escapes() {
        let root = parse_str(r#"{"s": "q\" b\\ s\/ \b\f\n\r\t \u0041é"}"#).unwrap();
        assert_eq!(
            root.get("s").and_then(JsonValue::as_str),
            Some("q\" b\\ s/ \u{08}\u{0C}\n\r\t A\u{e9}")
        );
    }

    #[test]
    fn test_invalid_unicode_digit() {
        let err = parse_err(r#"{"s": "\u00G1"}"#);
        assert!(matches!(err.kind, ParseErrorKind::InvalidUnicodeDigit('G')));
    }

    #[test]
    fn test_surrogate_is_rejected() {
        let err = parse_err(r#"{"s": "\uD83D\uDE00"}"#);
        assert!(matches!(err.kind, ParseErrorKind::UnsupportedSurrogate(0xD83D)));
    }

    #[test]
    fn test_unknown_escape_is_rejected() {
        let err = parse_err(r#"{"s": "\x"}"#);
        assert!(matches!(err.kind, ParseErrorKind::InvalidEscape('x')));
    }

    #[test]
    fn test_control_character_is_rejected() {
        let err = parse_err("{\"s\": \"a\tb\"}");
        assert!(matches!(err.kind, ParseErrorKind::InvalidCharacter(0x09)));
    }

    #[test]
    fn test_integer_and_float_flags() {
        let root = parse_str(r#"{"i": 42, "n": -7, "f": 1.0, "e": 1e3}"#).unwrap();
        assert_eq!(root.get("i"), Some(&JsonValue::Number(JsonNumber::Integer(42))));
        assert_eq!(root.get("n"), Some(&JsonValue::Number(JsonNumber::Integer(-7))));
        assert_eq!(root.get("f"), Some(&JsonValue::Number(JsonNumber::Float(1.0))));
        assert_eq!(root.get("e"), Some(&JsonValue::Number(JsonNumber::Float(1000.0))));
    }

    #[test]
    fn test_integer_overflow_falls_back_to_float() {
        let root = parse_str(r#"{"big": 123456789012345678901234567890}"#).unwrap();
        match root.get("big") {
            Some(JsonValue::Number(JsonNumber::Float(f))) => assert!(*f > 1e29),
            other => panic!("Expected float, got {:?}", other),
        }
    }

    #[test]
    fn test_lone_minus_is_invalid_number() {
        let err = parse_err(r#"{"n": -}"#);
        assert!(matches!(err.kind, ParseErrorKind::InvalidNumber(ref t) if t == "-"));
    }

    #[test]
    fn test_missing_fraction_digits() {
        let err = parse_err(r#"{"n": 1.}"#);
        assert!(matches!(err.kind, ParseErrorKind::InvalidNumber(ref t) if t == "1."));
    }

    #[test]
    fn test_infinite_number_is_rejected() {
        let err = parse_err(r#"{"n": 1e999}"#);
        assert!(matches!(err.kind, ParseErrorKind::NumberOutOfRange(_)));
    }

    #[test]
    fn test_invalid_keywords() {
        assert!(matches!(parse_err(r#"{"b": tru}"#).kind, ParseErrorKind::InvalidBoolean));
        assert!(matches!(parse_err(r#"{"b": falsey}"#).kind, ParseErrorKind::MissingMemberComma));
        assert!(matches!(parse_err(r#"{"b": nul}"#).kind, ParseErrorKind::InvalidNull));
    }

    #[test]
    fn test_missing_colon() {
        let err = parse_err(r#"{"a" 1}"#);
        assert!(matches!(err.kind, ParseErrorKind::InvalidObjectFormat));
        assert_eq!((err.line, err.column), (1, 6));
    }

    #[test]
    fn test_missing_commas() {
        assert!(matches!(
            parse_err(r#"{"a": 1 "b": 2}"#).kind,
            ParseErrorKind::MissingMemberComma
        ));
        assert!(matches!(
            parse_err(r#"{"a": [1 2]}"#).kind,
            ParseErrorKind::MissingElementComma
        ));
    }

    #[test]
    fn test_trailing_commas() {
        assert!(matches!(parse_err(r#"{"a": 1,}"#).kind, ParseErrorKind::ExpectedString));
        assert!(matches!(
            parse_err(r#"{"a": [1,]}"#).kind,
            ParseErrorKind::UnexpectedCharacter(']')
        ));
    }

    #[test]
    fn test_root_must_be_object() {
        for source in ["[1]", "\"s\"", "1", "true", "null"] {
            assert!(matches!(parse_err(source).kind, ParseErrorKind::RootNotObject));
        }
    }

    #[test]
    fn test_unterminated_string_hits_eof() {
        let err = parse_err(r#"{"a": "never closed"#);
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEof));
    }

    #[test]
    fn test_empty_input_hits_eof() {
        assert!(matches!(parse_err("  \n ").kind, ParseErrorKind::UnexpectedEof));
    }

    #[test]
    fn test_trailing_characters() {
        assert!(parse_str("{}\n  \n").is_ok());
        assert!(matches!(
            parse_err("{} x").kind,
            ParseErrorKind::TrailingCharacter('x')
        ));
    }

    fn nested_arrays(levels: usize) -> String {
        format!(r#"{{"a": {}{}}}"#, "[".repeat(levels), "]".repeat(levels))
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let err = parse_err(&nested_arrays(100_000));
        assert!(matches!(err.kind, ParseErrorKind::DepthLimitExceeded(MAX_DEPTH)));
        // The root object is level one, so the array that crosses the limit
        // opens at column 6 + MAX_DEPTH.
        assert_eq!((err.line, err.column), (1, 6 + MAX_DEPTH));
    }

    #[test]
    fn test_nesting_up_to_limit_is_accepted() {
        let root = parse_str(&nested_arrays(MAX_DEPTH - 1)).unwrap();
        let mut value = root.get("a").unwrap();
        let mut levels = 1;
        while let Some(inner) = value.get_index(0) {
            value = inner;
            levels += 1;
        }
        assert_eq!(levels, MAX_DEPTH - 1);
        assert!(matches!(
            parse_err(&nested_arrays(MAX_DEPTH)).kind,
            ParseErrorKind::DepthLimitExceeded(_)
        ));
    }

    #[test]
    fn test_error_position_on_later_line() {
        let err = parse_err("{\n  \"a\": 1,\n  \"b\": nope\n}");
        assert!(matches!(err.kind, ParseErrorKind::InvalidNull));
        assert_eq!(err.line, 3);
        assert_eq!(err.column, 9);
    }
}
