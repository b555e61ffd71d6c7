//! Conversion output model.
//!
//! Everything produced here is JSON-compatible: a description is a flat map
//! of string keys to JSON values, and the overall result serializes as either
//! one object (scalar schemas) or an ordered array of objects (map schemas).

use serde::Serialize;
use serde_json::{Map, Value};

/// One flat description: string keys to JSON-compatible values.
pub type Description = Map<String, Value>;

/// Result of converting a schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Described {
    /// Scalar description, for any non-map schema.
    One(Description),
    /// Ordered field descriptors, one per map key.
    Fields(Vec<Description>),
}

impl Described {
    /// Returns the scalar description, if this is one.
    pub fn as_one(&self) -> Option<&Description> {
        match self {
            Described::One(description) => Some(description),
            Described::Fields(_) => None,
        }
    }

    /// Returns the field descriptors, if this is a field list.
    pub fn as_fields(&self) -> Option<&[Description]> {
        match self {
            Described::One(_) => None,
            Described::Fields(fields) => Some(fields),
        }
    }
}

impl From<Described> for Value {
    fn from(described: Described) -> Value {
        match described {
            Described::One(description) => Value::Object(description),
            Described::Fields(fields) => {
                Value::Array(fields.into_iter().map(Value::Object).collect())
            }
        }
    }
}
