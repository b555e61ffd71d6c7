//! formshape - a strict, deterministic converter from validator schemas to
//! JSON form descriptions
//!
//! Build a schema from typed validator nodes, then [`convert`] it into the
//! flat description a form renderer or doc generator consumes. Conversion is
//! total over a closed allowlist and fails loudly on anything outside it.
//!
//! ```
//! use formshape::{convert, Marker, Schema};
//! use serde_json::{json, Value};
//!
//! let schema = Schema::Map(vec![
//!     (Marker::required("name"), Schema::string()),
//!     (Marker::optional("age").default_to(21), Schema::integer()),
//! ]);
//!
//! let described = convert(&schema)?;
//! assert_eq!(
//!     Value::from(described),
//!     json!([
//!         {"name": "name", "type": "string", "required": true},
//!         {"name": "age", "type": "integer", "optional": true, "default": 21},
//!     ])
//! );
//! # Ok::<_, formshape::ConvertError>(())
//! ```

pub mod convert;
pub mod schema;

pub use convert::{convert, convert_with, ConvertError, ConvertResult, Described, Description};
pub use schema::{
    EnumMember, EnumType, Marker, MarkerKind, Schema, TypeMarker, DEFAULT_DATETIME_FORMAT,
};
