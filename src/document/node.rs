//! JSON value representation.
//!
//! A parsed document is a tree of [`JsonValue`]s where every container owns its
//! children outright. Trees are built once by the parser and only read afterwards,
//! so the accessors here hand out shared references and report a missing key or
//! out-of-range index as `None` rather than as an error.
//!
//! # Example
//!
//! ```
//! use jsoneval::document::node::{JsonNumber, JsonObject, JsonValue};
//!
//! let mut fields = JsonObject::new();
//! fields.insert("name".to_string(), JsonValue::String("jsoneval".to_string()));
//! fields.insert("version".to_string(), JsonValue::Number(JsonNumber::Integer(1)));
//! let object = JsonValue::Object(fields);
//!
//! assert!(object.is_object());
//! assert_eq!(object.get("name").and_then(JsonValue::as_str), Some("jsoneval"));
//! assert!(object.get("missing").is_none());
//! ```

use indexmap::IndexMap;

/// Key/value storage for JSON objects, kept in insertion order.
pub type JsonObject = IndexMap<String, JsonValue>;

/// Represents JSON numbers.
///
/// A literal without a fractional part or exponent that fits in an `i64` is an
/// `Integer`; every other literal is a `Float`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonNumber {
    Integer(i64),
    Float(f64),
}

impl JsonNumber {
    pub fn as_f64(&self) -> f64 {
        match self {
            JsonNumber::Integer(i) => *i as f64,
            JsonNumber::Float(f) => *f,
        }
    }

    /// Returns the integer value for integer-typed numbers.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonNumber::Integer(i) => Some(*i),
            JsonNumber::Float(_) => None,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, JsonNumber::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, JsonNumber::Float(_))
    }
}

impl From<i64> for JsonNumber {
    fn from(value: i64) -> Self {
        JsonNumber::Integer(value)
    }
}

impl From<f64> for JsonNumber {
    fn from(value: f64) -> Self {
        JsonNumber::Float(value)
    }
}

/// A JSON value.
///
/// Objects and arrays own their children, so a tree has exactly one owner per
/// node and no sharing between branches.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// A JSON object containing key-value pairs
    Object(JsonObject),
    /// A JSON array containing ordered values
    Array(Vec<JsonValue>),
    /// A JSON string with escapes already resolved
    String(String),
    /// A JSON number (integer or float)
    Number(JsonNumber),
    /// A JSON boolean
    Boolean(bool),
    /// A JSON null value
    Null,
}

impl JsonValue {
    /// Returns true if this value is an object.
    ///
    /// # Example
    ///
    /// ```
    /// use jsoneval::document::node::{JsonNumber, JsonObject, JsonValue};
    ///
    /// assert!(JsonValue::Object(JsonObject::new()).is_object());
    /// assert!(!JsonValue::Number(JsonNumber::Integer(42)).is_object());
    /// ```
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, JsonValue::Boolean(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns true if this value is an object or array.
    pub fn is_container(&self) -> bool {
        self.is_object() || self.is_array()
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<JsonNumber> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Looks up a field by key.
    ///
    /// Returns `None` when the key is missing or when this value is not an object.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|fields| fields.get(key))
    }

    /// Looks up an array element by position.
    ///
    /// Returns `None` when the index is past the end or when this value is not an array.
    ///
    /// # Example
    ///
    /// ```
    /// use jsoneval::document::node::{JsonNumber, JsonValue};
    ///
    /// let array = JsonValue::Array(vec![JsonValue::Number(JsonNumber::Integer(7))]);
    /// assert!(array.get_index(0).is_some());
    /// assert!(array.get_index(1).is_none());
    /// ```
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array().and_then(|elements| elements.get(index))
    }

    /// Returns true if this value is an object containing `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.as_object()
            .is_some_and(|fields| fields.contains_key(key))
    }

    /// Returns the number of direct children (0 for scalars).
    pub fn len(&self) -> usize {
        match self {
            JsonValue::Object(fields) => fields.len(),
            JsonValue::Array(elements) => elements.len(),
            _ => 0,
        }
    }

    /// Returns true if this value has no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short lowercase name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Object(_) => "object",
            JsonValue::Array(_) => "array",
            JsonValue::String(_) => "string",
            JsonValue::Number(_) => "number",
            JsonValue::Boolean(_) => "boolean",
            JsonValue::Null => "null",
        }
    }
}

impl From<JsonNumber> for JsonValue {
    fn from(number: JsonNumber) -> Self {
        JsonValue::Number(number)
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Boolean(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}
