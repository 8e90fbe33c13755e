//! Rendering of `JsonValue` trees.
//!
//! Compact output keeps everything on one line:
//!
//! ```text
//! { "a": { "b": [ 1, 2, { "c": "test" }, [ 11, 12 ] ] } }
//! ```
//!
//! Pretty output puts every sibling on its own line, indented by a fixed number
//! of spaces per nesting level. Indentation depth is passed down explicitly, so
//! printing never touches shared state.
//!
//! A string printed on its own is written as its raw text. Strings nested in a
//! container, and all object keys, are quoted and escaped so the output can be
//! parsed back into the same tree.
//!
//! # Example
//!
//! ```
//! use jsoneval::document::parser::parse_str;
//! use jsoneval::document::printer::{render, Layout};
//!
//! let root = parse_str(r#"{"a": [1, "x"]}"#).unwrap();
//! assert_eq!(render(&root, Layout::Compact), r#"{ "a": [ 1, "x" ] }"#);
//! assert_eq!(
//!     render(&root, Layout::Pretty { indent: 2 }),
//!     "{\n  \"a\": [\n    1,\n    \"x\"\n  ]\n}"
//! );
//! ```

use super::node::{JsonNumber, JsonValue};
use std::fmt::{self, Write};

/// Indentation used by `{:#}` formatting.
pub const DEFAULT_INDENT: usize = 4;

/// How siblings are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Single line, siblings separated by `", "`.
    Compact,
    /// One sibling per line, `indent` spaces per nesting level.
    Pretty { indent: usize },
}

/// A value paired with the layout it should be printed in.
///
/// Lets a tree be written straight into any formatter, e.g. `println!`.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'v> {
    value: &'v JsonValue,
    layout: Layout,
}

impl<'v> Rendered<'v> {
    pub fn new(value: &'v JsonValue, layout: Layout) -> Self {
        Rendered { value, layout }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.value, self.layout, 0, false)
    }
}

/// Renders a value to a new string.
pub fn render(value: &JsonValue, layout: Layout) -> String {
    Rendered::new(value, layout).to_string()
}

/// Writes `value` at nesting level `depth`.
///
/// `nested` is true when the value sits inside a container, which decides
/// whether strings are quoted.
pub fn write_value<W: Write>(
    out: &mut W,
    value: &JsonValue,
    layout: Layout,
    depth: usize,
    nested: bool,
) -> fmt::Result {
    match value {
        JsonValue::Object(fields) => {
            out.write_char('{')?;
            write_separator(out, layout, depth + 1)?;
            for (i, (key, child)) in fields.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                    write_separator(out, layout, depth + 1)?;
                }
                write_quoted(out, key)?;
                out.write_str(": ")?;
                write_value(out, child, layout, depth + 1, true)?;
            }
            write_separator(out, layout, depth)?;
            out.write_char('}')
        }
        JsonValue::Array(elements) => {
            out.write_char('[')?;
            write_separator(out, layout, depth + 1)?;
            for (i, child) in elements.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                    write_separator(out, layout, depth + 1)?;
                }
                write_value(out, child, layout, depth + 1, true)?;
            }
            write_separator(out, layout, depth)?;
            out.write_char(']')
        }
        JsonValue::String(s) if nested => write_quoted(out, s),
        JsonValue::String(s) => out.write_str(s),
        JsonValue::Number(n) => write_number(out, n),
        JsonValue::Boolean(b) => out.write_str(if *b { "true" } else { "false" }),
        JsonValue::Null => out.write_str("null"),
    }
}

fn write_separator<W: Write>(out: &mut W, layout: Layout, depth: usize) -> fmt::Result {
    match layout {
        Layout::Compact => out.write_char(' '),
        Layout::Pretty { indent } => {
            out.write_char('\n')?;
            for _ in 0..depth * indent {
                out.write_char(' ')?;
            }
            Ok(())
        }
    }
}

fn write_number<W: Write>(out: &mut W, number: &JsonNumber) -> fmt::Result {
    match number {
        JsonNumber::Integer(i) => write!(out, "{}", i),
        JsonNumber::Float(f) => {
            let text = f.to_string();
            out.write_str(&text)?;
            // Keep floats distinguishable from integers when read back.
            if !text.contains(['.', 'e', 'E']) && f.is_finite() {
                out.write_str(".0")?;
            }
            Ok(())
        }
    }
}

/// Writes `s` as a quoted JSON string literal.
pub fn write_quoted<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            '\u{08}' => out.write_str("\\b")?,
            '\u{0C}' => out.write_str("\\f")?,
            c if c < '\u{20}' => write!(out, "\\u{:04x}", u32::from(c))?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

impl fmt::Display for JsonValue {
    /// `{}` renders compactly, `{:#}` renders with four-space indentation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = if f.alternate() {
            Layout::Pretty {
                indent: DEFAULT_INDENT,
            }
        } else {
            Layout::Compact
        };
        fmt::Display::fmt(&Rendered::new(self, layout), f)
    }
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_number(f, self)
    }
}
