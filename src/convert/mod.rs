//! Schema conversion subsystem.
//!
//! Turns a validator tree into a flat, JSON-serializable description of the
//! accepted input shape. One recursive descent, no shared state, no partial
//! results.
//!
//! # Design Principles
//!
//! - Total over a closed allowlist, loud on everything else
//! - Left-to-right merge for conjunctions; later keys win
//! - Declaration order preserved for options and fields
//! - Child failures bubble unmodified so the offending node stays visible

mod classify;
mod dispatch;
mod errors;
mod fields;
mod flatten;
mod output;
mod select;

pub use dispatch::{convert, convert_with};
pub use errors::{ConvertError, ConvertResult};
pub use output::{Described, Description};
