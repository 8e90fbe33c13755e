//! JSON document model, parsing and printing.
//!
//! # Modules
//!
//! - `node`: The `JsonValue` tree and its read-only accessors
//! - `reader`: Character stream with line/column tracking
//! - `parser`: Recursive-descent parser producing a `JsonValue` tree
//! - `printer`: Compact and pretty rendering of trees
//! - `error`: Parse errors carrying the offending position

pub mod error;
pub mod node;
pub mod parser;
pub mod printer;
pub mod reader;
