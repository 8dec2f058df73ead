use core::slice::Iter;

use crate::info::NamedField;

/// A container for compile-time record info.
///
/// The field order is fixed by the input order, which is the declaration
/// order when produced by `#[derive(Record)]`. Serialization emits object
/// keys in this order.
///
/// [`StructInfo::new`] is a `const fn` and rejects an empty or ambiguous field
/// table; in a constant such as [`Record::STRUCT_INFO`] that rejection
/// happens at compile time.
///
/// # Examples
///
/// ```rust
/// use rj_reflect::info::{NamedField, StructInfo};
///
/// const INFO: StructInfo = StructInfo::new(
///     "Sample",
///     &[NamedField::new::<f32>("val"), NamedField::new::<String>("label")],
/// );
///
/// assert_eq!(INFO.field_len(), 2);
/// assert_eq!(INFO.index_of("label"), Some(1));
/// ```
///
/// [`Record::STRUCT_INFO`]: crate::info::Record::STRUCT_INFO
#[derive(Clone, Copy, Debug)]
pub struct StructInfo {
    type_ident: &'static str,
    fields: &'static [NamedField],
}

impl StructInfo {
    /// Create a new [`StructInfo`].
    ///
    /// # Panics
    ///
    /// If `fields` is empty or two fields share a name.
    pub const fn new(type_ident: &'static str, fields: &'static [NamedField]) -> Self {
        assert!(!fields.is_empty(), "a record needs at least one field");
        assert!(!has_duplicate_names(fields), "record field names must be unique");

        Self { type_ident, fields }
    }

    /// Returns the identifier of the record type, e.g. `Player`.
    #[inline]
    pub const fn type_ident(&self) -> &'static str {
        self.type_ident
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&'static NamedField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&'static NamedField> {
        self.fields.get(index)
    }

    /// Returns the index for the given field `name`, if present.
    ///
    /// This is O(N) complexity.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> Iter<'static, NamedField> {
        self.fields.iter()
    }

    /// Returns the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + use<> {
        self.fields.iter().map(NamedField::name)
    }

    /// Returns the number of fields.
    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn has_duplicate_names(fields: &[NamedField]) -> bool {
    let mut i = 0;
    while i < fields.len() {
        let mut j = i + 1;
        while j < fields.len() {
            if str_eq(fields[i].name(), fields[j].name()) {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

// -----------------------------------------------------------------------------
// Tests
