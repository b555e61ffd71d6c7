//! Conjunction flattening.

use super::dispatch::{convert_node, Hook};
use super::errors::{ConvertError, ConvertResult};
use super::output::{Described, Description};
use crate::schema::Schema;

/// Flattens a conjunction's members into one description.
///
/// Each member is converted through the dispatcher (so the custom serializer
/// still applies) and must yield a scalar description; a member that converts
/// to a field list fails with that member's rendering. Members merge
/// left-to-right with later keys overwriting earlier ones, which is how a
/// bound, a transform flag, and a base type combine into one description.
pub(crate) fn flatten(members: &[Schema], custom: Hook<'_>) -> ConvertResult<Description> {
    let mut merged = Description::new();
    for member in members {
        match convert_node(member, custom)? {
            Described::One(description) => {
                for (key, value) in description {
                    merged.insert(key, value);
                }
            }
            Described::Fields(_) => return Err(ConvertError::nested_map(member)),
        }
    }
    Ok(merged)
}
