//! Validator node definitions.
//!
//! A schema is a tree of typed validator nodes. The node set is deliberately
//! wider than what the converter accepts: the framework it models is
//! open-ended, so this enum also carries the constructs the converter must
//! recognize only to reject. The converter's allowlist is closed; everything
//! outside it fails with the node's rendering in the message.
//!
//! Every node implements `Display`, producing the constructor-like form used
//! verbatim in error messages.

use std::fmt;

use serde_json::{Number, Value};

use super::marker::Marker;

/// Datetime pattern used when a datetime node is built without one.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%fZ";

/// Primitive type markers, usable bare or under a coercion.
///
/// Only `Str`, `Int`, `Float`, and `Bool` are classifiable; container and
/// custom markers exist so the model can express schemas the converter
/// rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMarker {
    /// UTF-8 string.
    Str,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Boolean.
    Bool,
    /// Unconstrained list.
    List,
    /// Unconstrained set.
    Set,
    /// Unconstrained tuple.
    Tuple,
    /// Unconstrained object.
    Object,
    /// Arbitrary named type outside the primitive set.
    Custom(String),
}

impl TypeMarker {
    /// Returns the marker name for error messages.
    pub fn name(&self) -> &str {
        match self {
            TypeMarker::Str => "str",
            TypeMarker::Int => "int",
            TypeMarker::Float => "float",
            TypeMarker::Bool => "bool",
            TypeMarker::List => "list",
            TypeMarker::Set => "set",
            TypeMarker::Tuple => "tuple",
            TypeMarker::Object => "object",
            TypeMarker::Custom(name) => name,
        }
    }
}

impl fmt::Display for TypeMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One declared member of an [`EnumType`].
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    name: String,
    value: Value,
}

impl EnumMember {
    /// Create a member with its declared value.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the member name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// An enumerated type with declaration-ordered members.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    name: String,
    members: Vec<EnumMember>,
}

impl EnumType {
    /// Create an enumerated type from its declared members.
    pub fn new(name: impl Into<String>, members: Vec<EnumMember>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// Returns the type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the members in declaration order.
    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }
}

impl fmt::Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One node of the validator tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// Bare primitive type marker.
    Type(TypeMarker),
    /// Coercion into a primitive type.
    Coerce(TypeMarker),
    /// Coercion into an enumerated type.
    CoerceEnum(EnumType),
    /// Conjunction: every member must hold, checked in order.
    All(Vec<Schema>),
    /// Disjunction: at least one member must hold.
    Any(Vec<Schema>),
    /// Discriminated union of alternatives.
    Union(Vec<Schema>),
    /// Ordered field map; every key carries a required/optional marker.
    Map(Vec<(Marker, Schema)>),
    /// Sequence with per-position element schemas.
    Sequence(Vec<Schema>),
    /// Membership in an ordered value set.
    In(Vec<Value>),
    /// Membership with display labels, in insertion order.
    InLabeled(Vec<(Value, String)>),
    /// Exclusion from a value set.
    NotIn(Vec<Value>),
    /// Numeric range check.
    Range {
        /// Inclusive lower bound.
        min: Option<Number>,
        /// Inclusive upper bound.
        max: Option<Number>,
    },
    /// Clamp into numeric bounds.
    Clamp {
        /// Inclusive lower bound.
        min: Option<Number>,
        /// Inclusive upper bound.
        max: Option<Number>,
    },
    /// Length bounds for strings and sequences.
    Length {
        /// Minimum length.
        min: Option<u64>,
        /// Maximum length.
        max: Option<u64>,
    },
    /// Datetime parse against a strftime pattern.
    Datetime {
        /// Accepted strftime pattern.
        format: String,
    },
    /// Lowercase the value.
    Lower,
    /// Uppercase the value.
    Upper,
    /// Capitalize the value.
    Capitalize,
    /// Title-case the value.
    Title,
    /// Strip surrounding whitespace.
    Strip,
    /// Email address format.
    Email,
    /// URL format.
    Url,
    /// Fully-qualified-domain URL format.
    FqdnUrl,
    /// Accept null in addition to the inner schema.
    Maybe(Box<Schema>),
    /// Exact literal value.
    Constant(Value),
    /// Regex match.
    Match(String),
    /// Substring replacement.
    Replace {
        /// Pattern to replace.
        pattern: String,
        /// Replacement text.
        substitution: String,
    },
    /// Path names an existing file.
    IsFile,
    /// Path names an existing directory.
    IsDir,
    /// Path exists.
    PathExists,
    /// Sequence contains a value.
    Contains(Value),
    /// Fixed-length sequence with positional schemas.
    ExactSequence(Vec<Schema>),
    /// Sequence elements must be unique.
    Unique,
    /// Equality with a fixed value.
    Equal(Value),
    /// Sequence matching the member schemas in any order.
    Unordered(Vec<Schema>),
    /// Decimal with precision and scale limits.
    Number {
        /// Maximum total digits.
        precision: Option<u32>,
        /// Maximum fractional digits.
        scale: Option<u32>,
    },
    /// At least `min_valid` (and at most `max_valid`) members must hold.
    SomeOf {
        /// Minimum passing members.
        min_valid: Option<usize>,
        /// Maximum passing members.
        max_valid: Option<usize>,
        /// Member validators.
        validators: Vec<Schema>,
    },
    /// Value must be truthy.
    IsTrue,
    /// Value must be falsy.
    IsFalse,
    /// Loose boolean coercion from strings and numbers.
    Boolean,
}

impl Schema {
    /// Bare string marker.
    pub fn string() -> Self {
        Schema::Type(TypeMarker::Str)
    }

    /// Bare integer marker.
    pub fn integer() -> Self {
        Schema::Type(TypeMarker::Int)
    }

    /// Bare float marker.
    pub fn float() -> Self {
        Schema::Type(TypeMarker::Float)
    }

    /// Bare boolean marker.
    pub fn boolean() -> Self {
        Schema::Type(TypeMarker::Bool)
    }

    /// Conjunction over the given members.
    pub fn all(members: impl IntoIterator<Item = Schema>) -> Self {
        Schema::All(members.into_iter().collect())
    }

    /// Nullable wrapper around `inner`.
    pub fn maybe(inner: Schema) -> Self {
        Schema::Maybe(Box::new(inner))
    }

    /// Literal constant.
    pub fn constant(value: impl Into<Value>) -> Self {
        Schema::Constant(value.into())
    }

    /// Datetime node with the default pattern.
    pub fn datetime() -> Self {
        Schema::Datetime {
            format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Type(marker) => write!(f, "Type({})", marker),
            Schema::Coerce(marker) => write!(f, "Coerce({})", marker),
            Schema::CoerceEnum(ty) => write!(f, "Coerce({})", ty),
            Schema::All(members) => write_members(f, "All", members),
            Schema::Any(members) => write_members(f, "Any", members),
            Schema::Union(members) => write_members(f, "Union", members),
            Schema::Map(fields) => {
                write!(f, "{{")?;
                for (i, (marker, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", marker, value)?;
                }
                write!(f, "}}")
            }
            Schema::Sequence(items) => write_members(f, "Sequence", items),
            Schema::In(values) => {
                write!(f, "In(")?;
                write_values(f, values)?;
                write!(f, ")")
            }
            Schema::InLabeled(entries) => {
                write!(f, "In({{")?;
                for (i, (value, label)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: '{}'", value, label)?;
                }
                write!(f, "}})")
            }
            Schema::NotIn(values) => {
                write!(f, "NotIn(")?;
                write_values(f, values)?;
                write!(f, ")")
            }
            Schema::Range { min, max } => write_bounds(f, "Range", min, max),
            Schema::Clamp { min, max } => write_bounds(f, "Clamp", min, max),
            Schema::Length { min, max } => write_bounds(f, "Length", min, max),
            Schema::Datetime { format } => write!(f, "Datetime(format='{}')", format),
            Schema::Lower => write!(f, "Lower"),
            Schema::Upper => write!(f, "Upper"),
            Schema::Capitalize => write!(f, "Capitalize"),
            Schema::Title => write!(f, "Title"),
            Schema::Strip => write!(f, "Strip"),
            Schema::Email => write!(f, "Email"),
            Schema::Url => write!(f, "Url"),
            Schema::FqdnUrl => write!(f, "FqdnUrl"),
            Schema::Maybe(inner) => write!(f, "Maybe({})", inner),
            Schema::Constant(value) => write!(f, "Constant({})", value),
            Schema::Match(pattern) => write!(f, "Match('{}')", pattern),
            Schema::Replace {
                pattern,
                substitution,
            } => write!(f, "Replace('{}', '{}')", pattern, substitution),
            Schema::IsFile => write!(f, "IsFile"),
            Schema::IsDir => write!(f, "IsDir"),
            Schema::PathExists => write!(f, "PathExists"),
            Schema::Contains(value) => write!(f, "Contains({})", value),
            Schema::ExactSequence(items) => write_members(f, "ExactSequence", items),
            Schema::Unique => write!(f, "Unique"),
            Schema::Equal(value) => write!(f, "Equal({})", value),
            Schema::Unordered(items) => write_members(f, "Unordered", items),
            Schema::Number { precision, scale } => {
                write!(f, "Number(precision=")?;
                write_opt(f, precision)?;
                write!(f, ", scale=")?;
                write_opt(f, scale)?;
                write!(f, ")")
            }
            Schema::SomeOf {
                min_valid,
                max_valid,
                validators,
            } => {
                write!(f, "SomeOf(min_valid=")?;
                write_opt(f, min_valid)?;
                write!(f, ", max_valid=")?;
                write_opt(f, max_valid)?;
                write!(f, ", validators=[")?;
                for (i, member) in validators.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", member)?;
                }
                write!(f, "])")
            }
            Schema::IsTrue => write!(f, "IsTrue"),
            Schema::IsFalse => write!(f, "IsFalse"),
            Schema::Boolean => write!(f, "Boolean"),
        }
    }
}

fn write_members(f: &mut fmt::Formatter<'_>, name: &str, members: &[Schema]) -> fmt::Result {
    write!(f, "{}(", name)?;
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", member)?;
    }
    write!(f, ")")
}

fn write_values(f: &mut fmt::Formatter<'_>, values: &[Value]) -> fmt::Result {
    write!(f, "[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    write!(f, "]")
}

fn write_bounds<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    min: &Option<T>,
    max: &Option<T>,
) -> fmt::Result {
    write!(f, "{}(min=", name)?;
    write_opt(f, min)?;
    write!(f, ", max=")?;
    write_opt(f, max)?;
    write!(f, ")")
}

fn write_opt<T: fmt::Display>(f: &mut fmt::Formatter<'_>, value: &Option<T>) -> fmt::Result {
    match value {
        Some(value) => write!(f, "{}", value),
        None => write!(f, "None"),
    }
}
