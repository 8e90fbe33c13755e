//! Path expressions over parsed JSON documents.
//!
//! # Supported Syntax
//!
//! - `name` - Field of the current object (the first token starts at the root)
//! - `.name` - Field access
//! - `[expr]` - Array index, where `expr` is an integer literal or another path
//!   evaluated from the document root
//!
//! # Examples
//!
//! ```text
//! a.b[1]          second element of a.b
//! a.b[2].c        field c of the third element
//! a.b[a.b[1]].c   index computed from another path
//! a.b[3][0]       chained indexing
//! ```

pub mod error;
pub mod evaluator;
pub mod token;

pub use error::EvalError;
pub use evaluator::Evaluator;
pub use token::{next_token, strip_quotes, Delimiter, Token};
