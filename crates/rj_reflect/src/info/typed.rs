use crate::info::{Category, StructInfo};

/// Compile-time classification of a type.
///
/// The category is an associated constant, so it is fixed per type and can be
/// read without any value at hand. A type without a `Typed` implementation
/// has no encoding and is rejected by the compiler wherever the engine needs one.
///
/// # Examples
///
/// ```
/// use rj_reflect::{Typed, info::Category};
///
/// assert_eq!(<Vec<String> as Typed>::CATEGORY, Category::Sequence);
/// assert_eq!(<Box<u16> as Typed>::CATEGORY, Category::Numeric);
/// ```
///
/// Types outside the five categories are rejected at build time, also when
/// used as a record field:
///
/// ```compile_fail
/// use rj_reflect::derive::Record;
///
/// #[derive(Record)]
/// struct Timeout {
///     limit: std::time::Duration,
/// }
/// ```
///
/// Views are serialize-only, a `&str` cannot be deserialized into:
///
/// ```compile_fail
/// use rj_reflect::serde::pull;
///
/// let mut text: &str = "fixed";
/// pull(&mut text, &serde_json::json!("new")).unwrap();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no JSON encoding category",
    label = "not a boolean, number, string, sequence or record",
    note = "derive `Record` for structs with named fields"
)]
pub trait Typed {
    /// The encoding category of this type.
    const CATEGORY: Category;
}

/// A type that exposes an ordered, non-empty field table.
///
/// Usually implemented by `#[derive(Record)]`; the derive also provides
/// [`Struct`](crate::ops::Struct) and the JSON traits.
///
/// # Examples
///
/// ```
/// use rj_reflect::{Record, derive::Record};
///
/// #[derive(Record, Default)]
/// struct Player {
///     name: String,
///     score: u32,
/// }
///
/// let names: Vec<_> = Player::STRUCT_INFO.field_names().collect();
/// assert_eq!(names, ["name", "score"]);
/// ```
///
/// The derive rejects anything without named fields to list:
///
/// ```compile_fail
/// use rj_reflect::derive::Record;
///
/// #[derive(Record)]
/// struct Marker;
/// ```
///
/// ```compile_fail
/// use rj_reflect::derive::Record;
///
/// #[derive(Record, Default)]
/// struct Hidden {
///     #[record(skip)]
///     cache: Vec<u8>,
/// }
/// ```
pub trait Record: Typed {
    /// Field descriptors in declaration order.
    const STRUCT_INFO: &'static StructInfo;
}
