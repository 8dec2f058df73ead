//! Static type information: the encoding category of each type and the
//! ordered field table of each record.
//!
//! - [`Category`]: the closed set of encoding strategies.
//! - [`Typed`]: compile-time classification of a type.
//! - [`Record`]: a type with a non-empty [`StructInfo`].
//! - [`NodeKind`]: the kind of a JSON node, used in error reports.

// -----------------------------------------------------------------------------
// Modules

mod category;
mod field_info;
mod node_kind;
mod struct_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use category::Category;
pub use field_info::NamedField;
pub use node_kind::NodeKind;
pub use struct_info::StructInfo;
pub use typed::{Record, Typed};
