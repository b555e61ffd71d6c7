//! Primitive type classification.

use serde_json::Value;

use super::output::Description;
use crate::schema::{Schema, TypeMarker};

/// Maps recognized primitive markers and their coercions to type tags.
///
/// A bare marker and its coercion wrapper map to the same tag. Returns `None`
/// for everything else (container markers, custom named types, enum
/// coercions), which the dispatcher then routes to another handler or to the
/// unsupported arm.
pub(crate) fn classify(schema: &Schema) -> Option<Description> {
    let marker = match schema {
        Schema::Type(marker) | Schema::Coerce(marker) => marker,
        _ => return None,
    };
    let tag = type_tag(marker)?;

    let mut description = Description::new();
    description.insert("type".into(), Value::from(tag));
    Some(description)
}

/// Semantic tag for a primitive marker, if it has one.
fn type_tag(marker: &TypeMarker) -> Option<&'static str> {
    match marker {
        TypeMarker::Int => Some("integer"),
        TypeMarker::Str => Some("string"),
        TypeMarker::Float => Some("float"),
        TypeMarker::Bool => Some("boolean"),
        _ => None,
    }
}
