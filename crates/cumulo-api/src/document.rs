//! Generic, path-addressed view of a JSON response body.
//!
//! The API's responses are JSON objects or arrays whose schemas belong to
//! the service, not to this client. [`Document`] wraps the parsed tree and
//! lets each endpoint function pull out the named fields it needs, failing
//! with a declared [`ApiError::Decode`] at the point of use instead of an
//! unchecked cast. It has no knowledge of any resource schema.

use serde_json::Value;

use crate::error::{ApiError, Result};

/// A parsed response body: a dynamically-typed tree of objects, arrays and
/// scalars, accessed by path rather than by static schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    value: Value,
}

impl Document {
    /// Parse a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] if the payload is not well-formed JSON.
    pub fn parse(raw: &str) -> Result<Self> {
        let value = serde_json::from_str(raw).map_err(|e| ApiError::Parse {
            reason: e.to_string(),
        })?;
        Ok(Self { value })
    }

    /// Wrap an already-parsed JSON value.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    /// The underlying JSON value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Look up an object member. `None` when the member is absent or this
    /// document is not an object — never a panic.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<Self> {
        self.value.get(name).cloned().map(Self::from_value)
    }

    /// Look up a nested path. A segment that parses as an index steps into
    /// an array; every other segment steps into an object member.
    #[must_use]
    pub fn at(&self, path: &[&str]) -> Option<Self> {
        let mut current = &self.value;
        for segment in path {
            current = match current {
                Value::Array(items) => {
                    let index = segment.parse::<usize>().ok()?;
                    items.get(index)?
                }
                _ => current.get(*segment)?,
            };
        }
        Some(Self::from_value(current.clone()))
    }

    /// The elements of an array document, in server-provided order.
    /// Empty for non-array documents.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        match &self.value {
            Value::Array(items) => items.iter().cloned().map(Self::from_value).collect(),
            _ => Vec::new(),
        }
    }

    /// String value of this document, if it is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    /// Integer value of this document, if it is an integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_i64()
    }

    /// Float value of this document, if it is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_f64()
    }

    /// Boolean value of this document, if it is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_bool()
    }

    /// Extract a required string field.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the field is absent or not a
    /// string.
    pub fn string(&self, name: &str) -> Result<String> {
        let field = self.required(name)?;
        field
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch(name, "string", field.value()))
    }

    /// Extract a required integer field.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the field is absent or not an
    /// integer.
    pub fn integer(&self, name: &str) -> Result<i64> {
        let field = self.required(name)?;
        field
            .as_i64()
            .ok_or_else(|| mismatch(name, "integer", field.value()))
    }

    /// Extract a required boolean field.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the field is absent or not a
    /// boolean.
    pub fn boolean(&self, name: &str) -> Result<bool> {
        let field = self.required(name)?;
        field
            .as_bool()
            .ok_or_else(|| mismatch(name, "boolean", field.value()))
    }

    /// Display form of an optional field: the string value when present,
    /// the JSON rendering for other scalars, and empty when absent or
    /// null. For table rendering, where absence is not an error.
    #[must_use]
    pub fn text(&self, name: &str) -> String {
        match self.value.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    fn required(&self, name: &str) -> Result<Self> {
        self.field(name).ok_or_else(|| ApiError::Decode {
            path: name.to_string(),
            reason: "field is absent".to_string(),
        })
    }
}

fn mismatch(path: &str, expected: &str, found: &Value) -> ApiError {
    ApiError::Decode {
        path: path.to_string(),
        reason: format!("expected {expected}, found {}", type_name(found)),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
