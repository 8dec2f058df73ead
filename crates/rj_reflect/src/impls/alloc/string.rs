use alloc::string::String;

use crate::info::{Category, Typed};
use crate::ops::{FromJson, JsonMut, JsonRef, ToJson};

impl Typed for String {
    const CATEGORY: Category = Category::Text;
}

impl ToJson for String {
    #[inline]
    fn json_ref(&self) -> JsonRef<'_> {
        JsonRef::Text(self)
    }
}

impl FromJson for String {
    #[inline]
    fn json_mut(&mut self) -> JsonMut<'_> {
        JsonMut::Text(self)
    }
}
