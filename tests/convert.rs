//! Conversion Behavior Tests
//!
//! End-to-end coverage of the public API:
//! - Primitive and coercion classification
//! - Conjunction flattening and merge order
//! - Selection sources and option order
//! - Map schemas, markers, and field order
//! - Nullable wrapping, constants, custom serializers
//! - Unsupported nodes and failure message shape

use formshape::{
    convert, convert_with, Description, EnumMember, EnumType, Marker, Schema, TypeMarker,
    DEFAULT_DATETIME_FORMAT,
};
use serde_json::{json, Number, Value};

// =============================================================================
// Test Utilities
// =============================================================================

fn converted(schema: &Schema) -> Value {
    Value::from(convert(schema).expect("schema should convert"))
}

fn conversion_error(schema: &Schema) -> String {
    convert(schema).expect_err("schema must not convert").to_string()
}

fn range_min(min: i64) -> Schema {
    Schema::Range {
        min: Some(Number::from(min)),
        max: None,
    }
}

fn clamp(min: i64, max: i64) -> Schema {
    Schema::Clamp {
        min: Some(Number::from(min)),
        max: Some(Number::from(max)),
    }
}

fn length(min: u64, max: u64) -> Schema {
    Schema::Length {
        min: Some(min),
        max: Some(max),
    }
}

// =============================================================================
// Primitive Classification
// =============================================================================

#[test]
fn test_int_schema() {
    for schema in [Schema::integer(), Schema::Coerce(TypeMarker::Int)] {
        assert_eq!(converted(&schema), json!({"type": "integer"}));
    }
}

#[test]
fn test_str_schema() {
    for schema in [Schema::string(), Schema::Coerce(TypeMarker::Str)] {
        assert_eq!(converted(&schema), json!({"type": "string"}));
    }
}

#[test]
fn test_float_schema() {
    for schema in [Schema::float(), Schema::Coerce(TypeMarker::Float)] {
        assert_eq!(converted(&schema), json!({"type": "float"}));
    }
}

#[test]
fn test_bool_schema() {
    for schema in [Schema::boolean(), Schema::Coerce(TypeMarker::Bool)] {
        assert_eq!(converted(&schema), json!({"type": "boolean"}));
    }
}

// =============================================================================
// Conjunction Flattening
// =============================================================================

#[test]
fn test_integer_clamp() {
    let schema = Schema::all([Schema::Coerce(TypeMarker::Int), clamp(100, 1000)]);
    assert_eq!(
        converted(&schema),
        json!({"type": "integer", "valueMin": 100, "valueMax": 1000})
    );
}

#[test]
fn test_length() {
    let schema = Schema::all([Schema::Coerce(TypeMarker::Str), length(100, 1000)]);
    assert_eq!(
        converted(&schema),
        json!({"type": "string", "lengthMin": 100, "lengthMax": 1000})
    );
}

#[test]
fn test_merge_is_ordered_not_commutative() {
    // The later member's bounds win on collision; reversing the members
    // reverses the outcome.
    let forward = Schema::all([clamp(1, 10), clamp(5, 5)]);
    assert_eq!(converted(&forward), json!({"valueMin": 5, "valueMax": 5}));

    let backward = Schema::all([clamp(5, 5), clamp(1, 10)]);
    assert_eq!(converted(&backward), json!({"valueMin": 1, "valueMax": 10}));
}

// =============================================================================
// Scalar Handlers
// =============================================================================

#[test]
fn test_datetime() {
    assert_eq!(
        converted(&Schema::datetime()),
        json!({"type": "datetime", "format": "%Y-%m-%dT%H:%M:%S.%fZ"})
    );
}

#[test]
fn test_datetime_custom_format() {
    let schema = Schema::Datetime {
        format: "%Y-%m-%d".into(),
    };
    assert_eq!(
        converted(&schema),
        json!({"type": "datetime", "format": "%Y-%m-%d"})
    );
}

#[test]
fn test_default_datetime_format_constant() {
    assert_eq!(DEFAULT_DATETIME_FORMAT, "%Y-%m-%dT%H:%M:%S.%fZ");
}

#[test]
fn test_string_transforms() {
    for (schema, key) in [
        (Schema::Lower, "lower"),
        (Schema::Upper, "upper"),
        (Schema::Capitalize, "capitalize"),
        (Schema::Title, "title"),
        (Schema::Strip, "strip"),
    ] {
        let combined = Schema::all([schema, Schema::string()]);
        assert_eq!(
            converted(&combined),
            json!({"type": "string", key: true})
        );
    }
}

#[test]
fn test_string_formats() {
    for (schema, name) in [
        (Schema::Email, "email"),
        (Schema::Url, "url"),
        (Schema::FqdnUrl, "fqdnurl"),
    ] {
        let combined = Schema::all([schema, Schema::string()]);
        assert_eq!(
            converted(&combined),
            json!({"type": "string", "format": name})
        );
    }
}

// =============================================================================
// Selection Sources
// =============================================================================

#[test]
fn test_in() {
    let schema = Schema::In(vec![json!("beer"), json!("wine")]);
    assert_eq!(
        converted(&schema),
        json!({
            "type": "select",
            "options": [["beer", "beer"], ["wine", "wine"]],
        })
    );
}

#[test]
fn test_in_labeled() {
    let schema = Schema::InLabeled(vec![
        (json!("en_US"), "American English".into()),
        (json!("zh_CN"), "Chinese (Simplified)".into()),
    ]);
    assert_eq!(
        converted(&schema),
        json!({
            "type": "select",
            "options": [
                ["en_US", "American English"],
                ["zh_CN", "Chinese (Simplified)"],
            ],
        })
    );
}

#[test]
fn test_enum() {
    let schema = Schema::CoerceEnum(EnumType::new(
        "TestEnum",
        vec![EnumMember::new("ONE", "one"), EnumMember::new("TWO", 2)],
    ));
    assert_eq!(
        converted(&schema),
        json!({
            "type": "select",
            "options": [["one", "one"], [2, 2]],
        })
    );
}

#[test]
fn test_selection_order_matches_declaration_order() {
    let reversed = Schema::In(vec![json!("wine"), json!("beer")]);
    assert_eq!(
        converted(&reversed),
        json!({
            "type": "select",
            "options": [["wine", "wine"], ["beer", "beer"]],
        })
    );
}

// =============================================================================
// Map Schemas
// =============================================================================

#[test]
fn test_map() {
    let schema = Schema::Map(vec![
        (
            Marker::required("name"),
            Schema::all([
                Schema::string(),
                Schema::Length {
                    min: Some(5),
                    max: None,
                },
            ]),
        ),
        (
            Marker::required("age"),
            Schema::all([Schema::Coerce(TypeMarker::Int), range_min(18)]),
        ),
        (
            Marker::optional("hobby").default_to("not specified"),
            Schema::string(),
        ),
    ]);

    assert_eq!(
        converted(&schema),
        json!([
            {
                "name": "name",
                "type": "string",
                "lengthMin": 5,
                "required": true,
            },
            {
                "name": "age",
                "type": "integer",
                "valueMin": 18,
                "required": true,
            },
            {
                "name": "hobby",
                "type": "string",
                "default": "not specified",
                "optional": true,
            },
        ])
    );
}

#[test]
fn test_marker_description() {
    let schema = Schema::Map(vec![(
        Marker::required("name").describe("Description of name"),
        Schema::string(),
    )]);
    assert_eq!(
        converted(&schema),
        json!([
            {
                "name": "name",
                "type": "string",
                "description": "Description of name",
                "required": true,
            },
        ])
    );
}

#[test]
fn test_field_order_is_preserved() {
    let schema = Schema::Map(vec![
        (Marker::required("zulu"), Schema::string()),
        (Marker::required("alpha"), Schema::string()),
        (Marker::optional("mike"), Schema::string()),
    ]);
    let described = convert(&schema).unwrap();
    let names: Vec<Value> = described
        .as_fields()
        .expect("map schemas convert to field lists")
        .iter()
        .map(|field| field["name"].clone())
        .collect();
    assert_eq!(names, [json!("zulu"), json!("alpha"), json!("mike")]);
}

#[test]
fn test_each_field_has_exactly_one_requirement_key() {
    let schema = Schema::Map(vec![
        (Marker::required("a"), Schema::string()),
        (Marker::optional("b"), Schema::string()),
    ]);
    let described = convert(&schema).unwrap();
    for field in described.as_fields().unwrap() {
        let required = field.contains_key("required");
        let optional = field.contains_key("optional");
        assert!(required != optional, "exactly one of required/optional");
    }
}

// =============================================================================
// Nullable Wrapping
// =============================================================================

#[test]
fn test_maybe() {
    let schema = Schema::maybe(Schema::string());
    assert_eq!(
        converted(&schema),
        json!({"type": "string", "allow_none": true})
    );
}

#[test]
fn test_maybe_is_transparent_to_inner_keys() {
    let schema = Schema::maybe(Schema::all([Schema::Upper, Schema::string()]));
    assert_eq!(
        converted(&schema),
        json!({"type": "string", "upper": true, "allow_none": true})
    );
}

// =============================================================================
// Constants
// =============================================================================

#[test]
fn test_constant() {
    for value in [json!(true), json!(false), json!("Hello"), json!(1)] {
        let schema = Schema::Constant(value.clone());
        assert_eq!(
            converted(&schema),
            json!({"type": "constant", "value": value})
        );
    }
}

// =============================================================================
// Custom Serializers
// =============================================================================

#[test]
fn test_custom_serializer() {
    let custom = |schema: &Schema| {
        if *schema == Schema::string() {
            let mut description = Description::new();
            description.insert("type".into(), json!("a string!"));
            Some(description)
        } else {
            None
        }
    };

    let schema = Schema::all([Schema::Upper, Schema::string()]);
    let described = convert_with(&schema, custom).unwrap();
    assert_eq!(
        Value::from(described),
        json!({"type": "a string!", "upper": true})
    );
}

#[test]
fn test_custom_serializer_reaches_map_field_values() {
    let custom = |schema: &Schema| {
        if *schema == Schema::Unique {
            let mut description = Description::new();
            description.insert("type".into(), json!("unique"));
            Some(description)
        } else {
            None
        }
    };

    let schema = Schema::Map(vec![(Marker::required("tags"), Schema::Unique)]);
    let described = convert_with(&schema, custom).unwrap();
    assert_eq!(
        Value::from(described),
        json!([{"name": "tags", "type": "unique", "required": true}])
    );
}

// =============================================================================
// Unsupported Schemas
// =============================================================================

#[test]
fn test_unsupported_schema() {
    let unsupported = vec![
        Schema::Constant(Value::Null),
        Schema::Type(TypeMarker::Object),
        Schema::Type(TypeMarker::List),
        Schema::Type(TypeMarker::Set),
        Schema::Type(TypeMarker::Tuple),
        Schema::Type(TypeMarker::Custom("UnsupportedClass".into())),
        Schema::Sequence(vec![]),
        Schema::IsFalse,
        Schema::IsTrue,
        Schema::Boolean,
        Schema::Any(vec![
            Schema::constant(1),
            Schema::constant(2),
            Schema::constant(3),
        ]),
        Schema::Any(vec![
            Schema::constant("true"),
            Schema::constant("false"),
            Schema::all([
                Schema::Any(vec![Schema::integer(), Schema::boolean()]),
                Schema::Coerce(TypeMarker::Bool),
            ]),
        ]),
        Schema::Union(vec![
            Schema::constant("a"),
            Schema::constant("b"),
        ]),
        Schema::Match("^0x[A-F0-9]+$".into()),
        Schema::Replace {
            pattern: "hello".into(),
            substitution: "goodbye".into(),
        },
        Schema::IsFile,
        Schema::IsDir,
        Schema::PathExists,
        Schema::NotIn(vec![json!("beer"), json!("wine")]),
        Schema::Contains(json!(1)),
        Schema::ExactSequence(vec![
            Schema::string(),
            Schema::integer(),
            Schema::Type(TypeMarker::List),
            Schema::Type(TypeMarker::List),
        ]),
        Schema::Unique,
        Schema::Equal(json!(1)),
        Schema::Unordered(vec![Schema::constant(2), Schema::constant(1)]),
        Schema::Number {
            precision: Some(6),
            scale: Some(2),
        },
        Schema::SomeOf {
            min_valid: Some(2),
            max_valid: None,
            validators: vec![
                clamp(1, 5),
                Schema::Any(vec![Schema::float(), Schema::integer()]),
                Schema::constant(6.6),
            ],
        },
    ];

    for schema in unsupported {
        // The full message is compared so the outer schema is the one that
        // failed, not some sub-part.
        assert_eq!(
            conversion_error(&schema),
            format!("Unable to convert schema: {}", schema),
        );
    }
}

#[test]
fn test_unsupported_subschema() {
    let nested_map = Schema::Map(vec![(Marker::required("a"), Schema::integer())]);
    let unsupported = vec![
        Schema::all([nested_map.clone()]),
        Schema::Map(vec![
            (Marker::required("name"), Schema::string()),
            (
                Marker::required("position"),
                Schema::Map(vec![
                    (Marker::required("lat"), Schema::float()),
                    (Marker::required("lon"), Schema::float()),
                ]),
            ),
        ]),
        Schema::Map(vec![(Marker::required("bad"), Schema::Unique)]),
    ];

    for schema in unsupported {
        let message = conversion_error(&schema);
        assert!(
            message.starts_with("Unable to convert "),
            "unexpected message: {message}"
        );
        assert!(message.contains("schema: "), "unexpected message: {message}");
    }
}

#[test]
fn test_nested_failure_keeps_the_inner_rendering() {
    let schema = Schema::Map(vec![(Marker::required("bad"), Schema::Unique)]);
    assert_eq!(
        conversion_error(&schema),
        "Unable to convert schema: Unique"
    );
}
