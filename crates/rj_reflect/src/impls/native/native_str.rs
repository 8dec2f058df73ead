use crate::info::{Category, Typed};
use crate::ops::{JsonRef, ToJson};

// `&str` and `Box<str>` reach this through the pointer impls.

impl Typed for str {
    const CATEGORY: Category = Category::Text;
}

impl ToJson for str {
    #[inline]
    fn json_ref(&self) -> JsonRef<'_> {
        JsonRef::Text(self)
    }
}
