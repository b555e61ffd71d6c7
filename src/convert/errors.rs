//! Conversion error types.
//!
//! A single failure class: the schema (or one of its descendants) is outside
//! the supported allowlist. Both variants render with the
//! `Unable to convert ... schema:` prefix so callers can match on the failure
//! class from the message alone, and both carry the offending node's
//! rendering. Intermediate handlers never catch or re-summarize child
//! failures, so the innermost node's rendering survives to the top level.

use std::fmt;

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors raised while converting a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The node is outside the supported allowlist.
    #[error("Unable to convert schema: {0}")]
    UnsupportedSchema(String),

    /// A map schema appeared where only a scalar description can go:
    /// as a field value, a conjunction member, or a nullable inner schema.
    #[error("Unable to convert nested mapping schema: {0}")]
    NestedMapSchema(String),
}

impl ConvertError {
    /// Unsupported-node failure carrying the node's rendering.
    pub(crate) fn unsupported(node: &impl fmt::Display) -> Self {
        ConvertError::UnsupportedSchema(node.to_string())
    }

    /// Nested-map failure carrying the offending sub-schema's rendering.
    pub(crate) fn nested_map(node: &impl fmt::Display) -> Self {
        ConvertError::NestedMapSchema(node.to_string())
    }
}
