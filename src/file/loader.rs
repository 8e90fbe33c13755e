//! JSON document loading.
//!
//! Documents are never read into memory as a whole: the source is wrapped in a
//! buffered reader (and a gzip decoder when needed) and handed to the streaming
//! parser.

use crate::document::node::JsonValue;
use crate::document::parser::parse_reader;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Magic bytes at the start of every gzip stream.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Loads a document from `path`, or from stdin when `path` is `-`.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<JsonValue> {
    let path = path.as_ref();
    if path.as_os_str() == STDIN_PATH {
        load_json_from_stdin()
    } else {
        load_json_file(path)
    }
}

/// Loads and parses a JSON file from the filesystem.
///
/// Gzip-compressed files are detected by their magic bytes and decompressed
/// on the fly, whatever their extension.
///
/// # Examples
///
/// ```no_run
/// use jsoneval::file::loader::load_json_file;
///
/// let root = load_json_file("test.json").unwrap();
/// assert!(root.is_object());
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be opened (missing, permissions, etc.)
/// - The file contents are not a valid JSON document with an object root
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<JsonValue> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading JSON document");

    let file = File::open(path)
        .with_context(|| format!("Could not open file {}", path.display()))?;

    load_json_from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))
}

/// Loads and parses JSON from standard input.
///
/// # Examples
///
/// ```no_run
/// use jsoneval::file::loader::load_json_from_stdin;
///
/// // Usage: echo '{"key": "value"}' | jsoneval - key
/// let root = load_json_from_stdin().unwrap();
/// ```
pub fn load_json_from_stdin() -> Result<JsonValue> {
    info!("loading JSON document from stdin");
    let stdin = io::stdin();
    load_json_from_reader(stdin.lock()).context("Failed to parse JSON from stdin")
}

/// Parses a document from any buffered reader, decompressing gzip input.
pub fn load_json_from_reader<R: BufRead>(mut reader: R) -> Result<JsonValue> {
    let is_gzipped = reader
        .fill_buf()
        .context("Error reading character from file")?
        .starts_with(&GZIP_MAGIC);

    let root = if is_gzipped {
        debug!("input is gzip-compressed");
        parse_reader(GzDecoder::new(reader))?
    } else {
        parse_reader(reader)?
    };
    Ok(root)
}
