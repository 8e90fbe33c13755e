//! File I/O for JSON documents.
//!
//! This module loads JSON documents from disk or stdin, transparently
//! decompressing gzip input, and streams them straight into the parser.

pub mod loader;
