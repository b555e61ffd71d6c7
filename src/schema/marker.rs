//! Field markers for map schemas.
//!
//! Every key in a map schema is wrapped in a [`Marker`] carrying the field
//! name, its required/optional status, and optional description and default
//! metadata. The marker annotates the key side only; the value side of the
//! entry is an ordinary schema node.

use std::fmt;

use serde_json::Value;

/// Field requirement kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Field must be present.
    Required,
    /// Field may be omitted.
    Optional,
}

impl MarkerKind {
    /// Returns the key emitted on the field descriptor.
    pub fn key(&self) -> &'static str {
        match self {
            MarkerKind::Required => "required",
            MarkerKind::Optional => "optional",
        }
    }
}

/// Map-key wrapper carrying a field's name and requirement metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    kind: MarkerKind,
    name: String,
    description: Option<String>,
    default: Option<Value>,
}

impl Marker {
    /// Create a required field marker.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            kind: MarkerKind::Required,
            name: name.into(),
            description: None,
            default: None,
        }
    }

    /// Create an optional field marker.
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            kind: MarkerKind::Optional,
            name: name.into(),
            description: None,
            default: None,
        }
    }

    /// Attach a human-readable description.
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Attach a default value.
    pub fn default_to(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Returns the requirement kind.
    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if one was attached.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the default value, if one was attached.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            MarkerKind::Required => "Required",
            MarkerKind::Optional => "Optional",
        };
        write!(f, "{}('{}')", kind, self.name)
    }
}
