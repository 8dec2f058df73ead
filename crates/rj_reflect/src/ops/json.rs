use crate::ops::{JsonMut, JsonRef};

/// A value that can be serialized into a JSON node.
///
/// The engine never inspects a value directly: it asks for a [`JsonRef`],
/// a borrowed view tagged with the value's [`Category`], and dispatches on it.
///
/// Implemented for every supported primitive, text and sequence type, for
/// transparent pointers (`&T`, `Box<T>`, `Rc<T>`, ...) and by
/// `#[derive(Record)]`.
///
/// # Examples
///
/// ```
/// use rj_reflect::{ToJson, ops::JsonRef, info::Category};
///
/// let value: &dyn ToJson = &vec![1_u8, 2, 3];
///
/// assert_eq!(value.json_ref().category(), Category::Sequence);
/// assert!(matches!(true.json_ref(), JsonRef::Boolean(true)));
/// ```
///
/// [`Category`]: crate::info::Category
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be serialized to JSON",
    label = "not a boolean, number, string, sequence or record",
    note = "derive `Record` for structs with named fields"
)]
pub trait ToJson {
    /// Returns a read view of this value.
    fn json_ref(&self) -> JsonRef<'_>;
}

/// A value that can be populated in place from a JSON node.
///
/// Mirrors [`ToJson`]: the engine asks for a [`JsonMut`] and writes through it.
/// Types which only borrow their content (`&str`, slices, arrays) do not
/// implement this trait.
///
/// # Examples
///
/// ```
/// use rj_reflect::{FromJson, ops::JsonMut};
///
/// let mut flag = false;
/// if let JsonMut::Boolean(slot) = flag.json_mut() {
///     *slot = true;
/// }
/// assert!(flag);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be deserialized from JSON",
    label = "not an owned boolean, number, string, sequence or record",
    note = "views such as `&str` and fixed arrays are serialize-only"
)]
pub trait FromJson {
    /// Returns a write view of this value.
    fn json_mut(&mut self) -> JsonMut<'_>;
}
