//! Character stream used by the parser.
//!
//! `CharReader` decodes UTF-8 from any `io::Read` one character at a time and
//! keeps the line/column of the most recently read character. One character can
//! be put back, which is all the parser's lookahead ever needs.

use super::error::ParseErrorKind;
use std::io::{self, BufReader, Bytes, Read};

/// Characters treated as insignificant between tokens.
pub fn is_json_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Reads characters from a byte stream while tracking the source position.
pub struct CharReader<R: Read> {
    bytes: Bytes<BufReader<R>>,
    pushed_back: Option<char>,
    line: usize,
    column: usize,
    /// Column of the last character on the previous line, for putting back a newline.
    previous_line_column: usize,
    last: Option<char>,
}

impl<R: Read> CharReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            pushed_back: None,
            line: 1,
            column: 0,
            previous_line_column: 0,
            last: None,
        }
    }

    /// Line of the last character read (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column of the last character read (1-based, 0 right after a newline).
    pub fn column(&self) -> usize {
        self.column
    }

    /// Reads the next character, or `None` at end of input.
    pub fn read_char(&mut self) -> Result<Option<char>, ParseErrorKind> {
        let ch = match self.pushed_back.take() {
            Some(ch) => ch,
            None => match self.decode_char()? {
                Some(ch) => ch,
                None => return Ok(None),
            },
        };

        if ch == '\n' {
            self.line += 1;
            self.previous_line_column = self.column;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self.last = Some(ch);
        Ok(Some(ch))
    }

    /// Puts the last character read back onto the stream.
    ///
    /// Only one character of put-back is supported; calling this twice without
    /// an intervening read is a no-op the second time.
    pub fn unread_char(&mut self) {
        let Some(ch) = self.last.take() else {
            return;
        };
        if ch == '\n' {
            self.line -= 1;
            self.column = self.previous_line_column;
        } else {
            self.column -= 1;
        }
        self.pushed_back = Some(ch);
    }

    fn next_byte(&mut self) -> Result<Option<u8>, ParseErrorKind> {
        match self.bytes.next() {
            Some(Ok(byte)) => Ok(Some(byte)),
            Some(Err(e)) if e.kind() == io::ErrorKind::Interrupted => self.next_byte(),
            Some(Err(e)) => Err(ParseErrorKind::Read(e)),
            None => Ok(None),
        }
    }

    fn decode_char(&mut self) -> Result<Option<char>, ParseErrorKind> {
        let Some(first) = self.next_byte()? else {
            return Ok(None);
        };

        let width = match first {
            0x00..=0x7F => return Ok(Some(char::from(first))),
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return Err(ParseErrorKind::InvalidUtf8),
        };

        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self.next_byte()?.ok_or(ParseErrorKind::InvalidUtf8)?;
        }

        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or(ParseErrorKind::InvalidUtf8)
    }
}
