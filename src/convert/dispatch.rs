//! Recursive schema dispatch.
//!
//! The entry point inspects one node at a time, in a fixed priority order:
//! map schemas, the caller's custom serializer, primitive classification,
//! the specialized handlers, literal constants. Handlers recurse back through
//! [`convert_node`] for their children, so the whole conversion is one
//! descent over the tree with no shared state. Anything unrecognized fails
//! immediately with the node's rendering; child failures propagate unmodified.

use serde_json::Value;

use super::classify::classify;
use super::errors::{ConvertError, ConvertResult};
use super::fields::extract;
use super::flatten::flatten;
use super::output::{Described, Description};
use super::select::selection;
use crate::schema::Schema;

/// Caller-supplied serializer consulted before built-in handling.
///
/// `Some(description)` takes over the node verbatim; `None` falls through to
/// the built-in handlers.
pub(crate) type Hook<'a> = Option<&'a dyn Fn(&Schema) -> Option<Description>>;

/// Converts a schema into its JSON-serializable description.
///
/// Scalar schemas yield a single description; map schemas yield an ordered
/// field-descriptor list. A single unsupported node anywhere in the tree
/// aborts the whole call; no partial results are returned.
pub fn convert(schema: &Schema) -> ConvertResult<Described> {
    convert_node(schema, None)
}

/// Converts a schema, consulting `custom_serializer` before built-in handling.
///
/// The serializer may override or extend the recognized node set without
/// touching the core: return `Some(description)` to take over a node, `None`
/// to decline it. It is called once per node, including nodes reached through
/// recursion, and its output participates in conjunction flattening like any
/// built-in handler's.
pub fn convert_with<F>(schema: &Schema, custom_serializer: F) -> ConvertResult<Described>
where
    F: Fn(&Schema) -> Option<Description>,
{
    convert_node(schema, Some(&custom_serializer))
}

/// Single dispatch step; handlers recurse back through here for children.
pub(crate) fn convert_node(schema: &Schema, custom: Hook<'_>) -> ConvertResult<Described> {
    // A bare map is a schema in its own right and wins over everything else.
    if let Schema::Map(fields) = schema {
        return extract(fields, custom).map(Described::Fields);
    }

    if let Some(serializer) = custom {
        if let Some(description) = serializer(schema) {
            return Ok(Described::One(description));
        }
    }

    if let Some(description) = classify(schema) {
        return Ok(Described::One(description));
    }

    if let Some(description) = selection(schema) {
        return Ok(Described::One(description));
    }

    match schema {
        Schema::All(members) => flatten(members, custom).map(Described::One),

        Schema::Range { min, max } | Schema::Clamp { min, max } => Ok(Described::One(bounds(
            "valueMin",
            min.clone(),
            "valueMax",
            max.clone(),
        ))),
        Schema::Length { min, max } => {
            Ok(Described::One(bounds("lengthMin", *min, "lengthMax", *max)))
        }

        Schema::Datetime { format } => {
            let mut description = Description::new();
            description.insert("type".into(), Value::from("datetime"));
            description.insert("format".into(), Value::from(format.as_str()));
            Ok(Described::One(description))
        }

        Schema::Lower => Ok(Described::One(flag("lower"))),
        Schema::Upper => Ok(Described::One(flag("upper"))),
        Schema::Capitalize => Ok(Described::One(flag("capitalize"))),
        Schema::Title => Ok(Described::One(flag("title"))),
        Schema::Strip => Ok(Described::One(flag("strip"))),

        Schema::Email => Ok(Described::One(format_tag("email"))),
        Schema::Url => Ok(Described::One(format_tag("url"))),
        Schema::FqdnUrl => Ok(Described::One(format_tag("fqdnurl"))),

        Schema::Maybe(inner) => match convert_node(inner, custom)? {
            Described::One(mut description) => {
                description.insert("allow_none".into(), Value::Bool(true));
                Ok(Described::One(description))
            }
            Described::Fields(_) => Err(ConvertError::nested_map(inner.as_ref())),
        },

        // A bare null is not a constant; it falls through to the
        // unsupported arm below.
        Schema::Constant(value) if is_literal(value) => {
            let mut description = Description::new();
            description.insert("type".into(), Value::from("constant"));
            description.insert("value".into(), value.clone());
            Ok(Described::One(description))
        }

        _ => Err(ConvertError::unsupported(schema)),
    }
}

/// Bound fragment with only the present bounds included.
fn bounds<T: Into<Value>>(
    min_key: &str,
    min: Option<T>,
    max_key: &str,
    max: Option<T>,
) -> Description {
    let mut description = Description::new();
    if let Some(min) = min {
        description.insert(min_key.into(), min.into());
    }
    if let Some(max) = max {
        description.insert(max_key.into(), max.into());
    }
    description
}

/// `{<name>: true}` fragment for string transforms.
fn flag(name: &str) -> Description {
    let mut description = Description::new();
    description.insert(name.into(), Value::Bool(true));
    description
}

/// `{"format": <name>}` fragment for string format checks.
fn format_tag(name: &str) -> Description {
    let mut description = Description::new();
    description.insert("format".into(), Value::from(name));
    description
}

/// Boolean, string, and number literals are the supported constants.
fn is_literal(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::String(_) | Value::Number(_))
}
