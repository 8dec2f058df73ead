use crate::info::{Category, Typed};

/// Information for a named record field.
///
/// `name` is the JSON object key, which is the field identifier unless the
/// derive renamed it.
///
/// # Examples
///
/// ```
/// use rj_reflect::info::{Category, NamedField};
///
/// let field = NamedField::new::<Vec<f64>>("samples");
///
/// assert_eq!(field.name(), "samples");
/// assert_eq!(field.category(), Category::Sequence);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamedField {
    name: &'static str,
    category: Category,
}

impl NamedField {
    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub const fn new<T: Typed + ?Sized>(name: &'static str) -> Self {
        Self {
            name,
            category: T::CATEGORY,
        }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field's encoding category.
    #[inline]
    pub const fn category(&self) -> Category {
        self.category
    }
}
