//! jsoneval - parse JSON documents and evaluate path expressions against them.
//!
//! The crate has two cooperating halves:
//!
//! - [`document`] turns a character stream into an owned [`JsonValue`] tree
//!   and prints trees back out.
//! - [`path`] resolves expressions such as `a.b[a.b[1]].c` against a parsed tree.
//!
//! # Example
//!
//! ```
//! use jsoneval::document::parser::parse_str;
//! use jsoneval::path::Evaluator;
//!
//! let root = parse_str(r#"{"a": {"b": [1, 2, {"c": "test"}, [11, 12]]}}"#).unwrap();
//! let evaluator = Evaluator::new(&root);
//!
//! assert_eq!(evaluator.evaluate("a.b[1]").unwrap().to_string(), "2");
//! assert_eq!(evaluator.evaluate("a.b[a.b[1]].c").unwrap().to_string(), "test");
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod path;

pub use document::node::{JsonNumber, JsonObject, JsonValue};
