//! Value access interfaces used by the (de)serialization engine.
//!
//! ## Menu
//!
//! ### Interface
//!
//! - [`ToJson`]: read view of a value, see [`JsonRef`].
//! - [`FromJson`]: write view of a value, see [`JsonMut`].
//! - [`NumberSlot`]: a numeric target that validates incoming numbers.
//! - [`List`] / [`ListMut`]: element access for sequences (e.g. `Vec<i32>`).
//! - [`Struct`] / [`StructMut`]: field access for records.
//!
//! All of them are object-safe, which lets the engine recurse through
//! `&dyn ToJson` and `&mut dyn FromJson` without knowing the concrete
//! field or element types.

// -----------------------------------------------------------------------------
// Modules

mod json;
mod kind;
mod list_ops;
mod number_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use json::{FromJson, ToJson};
pub use kind::{JsonMut, JsonRef};
pub use list_ops::{List, ListItemIter, ListMut};
pub use number_ops::{NumberSlot, NumberValue};
pub use struct_ops::{Struct, StructFieldIter, StructMut};

pub(crate) use number_ops::{narrow_f32, narrow_integer};
