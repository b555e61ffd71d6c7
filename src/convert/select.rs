//! Selection constraints.

use serde_json::Value;

use super::output::Description;
use crate::schema::Schema;

/// Builds the `{"type": "select", "options": [...]}` description.
///
/// Three source forms produce one shape: a value set yields `[v, v]` pairs in
/// vector order, a labeled set yields `[value, label]` pairs in insertion
/// order, and an enum coercion yields `[value, value]` pairs in member
/// declaration order. Option order always matches the source's declared
/// order.
pub(crate) fn selection(schema: &Schema) -> Option<Description> {
    let options: Vec<Value> = match schema {
        Schema::In(values) => values
            .iter()
            .map(|value| option(value.clone(), value.clone()))
            .collect(),
        Schema::InLabeled(entries) => entries
            .iter()
            .map(|(value, label)| option(value.clone(), Value::String(label.clone())))
            .collect(),
        Schema::CoerceEnum(ty) => ty
            .members()
            .iter()
            .map(|member| option(member.value().clone(), member.value().clone()))
            .collect(),
        _ => return None,
    };

    let mut description = Description::new();
    description.insert("type".into(), Value::from("select"));
    description.insert("options".into(), Value::Array(options));
    Some(description)
}

fn option(value: Value, label: Value) -> Value {
    Value::Array(vec![value, label])
}
