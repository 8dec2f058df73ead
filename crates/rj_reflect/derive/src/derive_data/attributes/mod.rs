//! Provide some tools for parsing attributes.
//!
//! This includes all the `#[record(...)]` attributes required to generate code.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod rename_rule;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use rename_rule::RenameRule;
pub(crate) use type_attributes::TypeAttributes;
