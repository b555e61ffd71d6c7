//! Field extraction for map schemas.

use serde_json::Value;

use super::dispatch::{convert_node, Hook};
use super::errors::{ConvertError, ConvertResult};
use super::output::{Described, Description};
use crate::schema::{Marker, Schema};

/// Converts a map schema into an ordered list of field descriptors.
///
/// Each entry's value sub-schema is converted first and must be scalar: a
/// nested map as a field value is rejected with that sub-schema's rendering
/// rather than producing a nested field list. The marker then contributes
/// `name`, exactly one of `required`/`optional`, and any `description` or
/// `default` it carries. Entries stay in declared order; no sorting.
pub(crate) fn extract(
    fields: &[(Marker, Schema)],
    custom: Hook<'_>,
) -> ConvertResult<Vec<Description>> {
    let mut descriptors = Vec::with_capacity(fields.len());
    for (marker, value) in fields {
        let mut descriptor = match convert_node(value, custom)? {
            Described::One(description) => description,
            Described::Fields(_) => return Err(ConvertError::nested_map(value)),
        };

        descriptor.insert("name".into(), Value::from(marker.name()));
        if let Some(text) = marker.description() {
            descriptor.insert("description".into(), Value::from(text));
        }
        descriptor.insert(marker.kind().key().into(), Value::Bool(true));
        if let Some(default) = marker.default() {
            descriptor.insert("default".into(), default.clone());
        }

        descriptors.push(descriptor);
    }
    Ok(descriptors)
}
