use crate::info::StructInfo;
use crate::ops::{FromJson, ToJson};

/// Read access to the fields of a record.
///
/// When using [`#[derive(Record)]`](crate::derive::Record) on a struct with
/// named fields, this trait will be automatically implemented. Indices follow
/// the field table of [`struct_info`](Struct::struct_info), so skipped fields
/// are not reachable.
///
/// # Examples
///
/// ```
/// use rj_reflect::{derive::Record, ops::Struct};
///
/// #[derive(Record, Default)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// let foo = Foo { a: 10, b: true };
/// let value: &dyn Struct = &foo;
///
/// assert_eq!(value.field_len(), 2);
/// assert!(value.field("b").is_some());
/// assert!(value.field("c").is_none());
/// ```
pub trait Struct {
    /// Returns the field table of this record.
    fn struct_info(&self) -> &'static StructInfo;

    /// Returns the field at `index` in declaration order.
    fn field_at(&self, index: usize) -> Option<&dyn ToJson>;

    /// Returns the field named `name`.
    ///
    /// `name` is the JSON key, i.e. the renamed name if any.
    fn field(&self, name: &str) -> Option<&dyn ToJson> {
        self.field_at(self.struct_info().index_of(name)?)
    }

    /// Returns the number of fields.
    #[inline]
    fn field_len(&self) -> usize {
        self.struct_info().field_len()
    }

    /// Returns an iterator over the fields in declaration order.
    #[inline]
    fn iter_fields(&self) -> StructFieldIter<'_>
    where
        Self: Sized,
    {
        StructFieldIter::new(self)
    }
}

/// Write access to the fields of a record.
///
/// # Examples
///
/// ```
/// use rj_reflect::{derive::Record, FromJson, ops::{JsonMut, StructMut}};
///
/// #[derive(Record, Default)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// let mut foo = Foo::default();
/// if let Some(field) = foo.field_mut("b") {
///     if let JsonMut::Boolean(b) = field.json_mut() {
///         *b = true;
///     }
/// }
/// assert!(foo.b);
/// ```
pub trait StructMut: Struct {
    /// Returns the field at `index` in declaration order.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn FromJson>;

    /// Returns the field named `name`.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn FromJson> {
        let index = self.struct_info().index_of(name)?;
        self.field_at_mut(index)
    }
}

/// An iterator over the field values of a record, in declaration order.
///
/// # Examples
///
/// ```
/// use rj_reflect::{derive::Record, ops::StructFieldIter};
///
/// #[derive(Record)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// let foo = Foo { a: 1, b: true };
/// let iter = StructFieldIter::new(&foo);
///
/// assert_eq!(iter.len(), 2);
/// ```
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new iterator for the given record.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn ToJson;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use serde_json::json;

    use crate::derive::Record;
    use crate::info::{Category, Record as _};
    use crate::ops::{JsonMut, JsonRef, Struct, StructMut};
    use crate::serde::{pull, to_value};

    #[derive(Record, Default, Debug, PartialEq)]
    #[record(rename_all = "camelCase")]
    struct Profile {
        display_name: String,
        #[record(rename = "hp")]
        hit_points: u32,
        #[record(skip)]
        cache: Vec<u8>,
        r#type: bool,
    }

    #[derive(Record, Default, Debug, PartialEq)]
    struct Page<T> {
        index: u32,
        items: Vec<T>,
    }

    #[test]
    fn field_table() {
        let info = Profile::STRUCT_INFO;

        assert_eq!(info.type_ident(), "Profile");
        assert_eq!(
            info.field_names().collect::<Vec<_>>(),
            ["displayName", "hp", "type"]
        );
        assert_eq!(info.field("hp").map(|f| f.category()), Some(Category::Numeric));
        assert!(info.field("cache").is_none());
    }

    #[test]
    fn field_access() {
        let mut profile = Profile {
            display_name: "Ann".to_string(),
            hit_points: 7,
            cache: vec![1, 2],
            r#type: false,
        };

        assert_eq!(profile.field_len(), 3);
        assert!(matches!(
            profile.field("displayName").map(|f| f.json_ref()),
            Some(JsonRef::Text("Ann"))
        ));
        assert!(profile.field("display_name").is_none());
        assert!(profile.field_at(3).is_none());

        let kinds = profile
            .iter_fields()
            .map(|field| field.json_ref().category())
            .collect::<Vec<_>>();
        assert_eq!(kinds, [Category::Text, Category::Numeric, Category::Boolean]);

        if let Some(JsonMut::Boolean(b)) = profile.field_at_mut(2).map(|f| f.json_mut()) {
            *b = true;
        }
        assert!(profile.r#type);
        assert!(profile.field_mut("cache").is_none());
    }

    #[test]
    fn renamed_keys() {
        let mut profile = Profile {
            display_name: "Ann".to_string(),
            hit_points: 7,
            cache: vec![1, 2],
            r#type: true,
        };

        assert_eq!(
            to_value(&profile),
            json!({ "displayName": "Ann", "hp": 7, "type": true })
        );

        pull(&mut profile, &json!({ "displayName": "Bob", "cache": [9], "hit_points": 1 }))
            .unwrap();
        assert_eq!(profile.display_name, "Bob");
        assert_eq!(profile.hit_points, 7);
        assert_eq!(profile.cache, [1, 2]);
    }

    #[test]
    fn generic_record() {
        let page = Page {
            index: 2,
            items: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(to_value(&page), json!({ "index": 2, "items": ["a", "b"] }));

        let mut nested = Page::<Page<bool>>::default();
        pull(
            &mut nested,
            &json!({ "index": 1, "items": [{ "index": 0, "items": [true, false] }] }),
        )
        .unwrap();
        assert_eq!(nested.items.len(), 1);
        assert_eq!(nested.items[0].items, [true, false]);
        assert_eq!(<Page<f32> as crate::info::Typed>::CATEGORY, Category::Record);
    }
}
