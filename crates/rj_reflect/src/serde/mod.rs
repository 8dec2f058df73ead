//! Conversion between values and `serde_json` nodes.
//!
//! # Overview
//!
//! ## Serialization
//!
//! Serialization cannot fail.
//!
//! - [`to_value`]: builds a fresh node.
//! - [`push`] / [`push_field`]: appends into an array node or sets an object entry.
//! - [`to_string`]: compact JSON text.
//! - [`SerializeDriver`]: the same encoding through any `serde` serializer.
//!
//! Records become objects whose keys follow the field declaration order.
//! NaN and infinities become `null`.
//!
//! ## Deserialization
//!
//! - [`pull`]: writes a node into an existing value.
//! - [`pull_next`] / [`pull_field`]: positional and keyed reads from an array or object.
//! - [`from_value`] / [`from_str`]: build a new value, returned only on success.
//!
//! A node must have the kind of the target's category, `null` is never
//! accepted. Sequences are replaced as a whole. Records are matched by key:
//! keys may come in any order, unknown keys are ignored and absent keys leave
//! the field untouched.
//!
//! Failures are reported as [`DeserializeError`], carrying an [`ErrorKind`]
//! and the [`FieldPath`] of the failed node.

// -----------------------------------------------------------------------------
// Modules

mod de;
mod error;
mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use de::{from_str, from_value, pull, pull_field, pull_next};
pub use error::{DeserializeError, Error, ErrorKind, FieldPath, PathSegment};
pub use ser::{SerializeDriver, push, push_field, to_string, to_value};
