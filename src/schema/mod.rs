//! Validator node model.
//!
//! The input boundary of the crate: a tree of typed validator nodes built
//! with the constructors in this module. Nodes are plain values; building
//! one never fails and never allocates beyond its own storage.
//!
//! # Design Principles
//!
//! - Open-ended node set, closed conversion allowlist
//! - Markers annotate map keys, not values
//! - Declaration order is preserved everywhere
//! - Nodes are immutable once built

mod marker;
mod types;

pub use marker::{Marker, MarkerKind};
pub use types::{EnumMember, EnumType, Schema, TypeMarker, DEFAULT_DATETIME_FORMAT};
