use alloc::boxed::Box;

use crate::info::{Category, Typed};
use crate::ops::{FromJson, JsonMut, JsonRef, ToJson};

// `Box<str>` and `Box<[T]>` are serialize-only, `str` and `[T]` have no
// `FromJson`.

impl<T: Typed + ?Sized> Typed for Box<T> {
    const CATEGORY: Category = T::CATEGORY;
}

impl<T: ToJson + ?Sized> ToJson for Box<T> {
    #[inline]
    fn json_ref(&self) -> JsonRef<'_> {
        (**self).json_ref()
    }
}

impl<T: FromJson + ?Sized> FromJson for Box<T> {
    #[inline]
    fn json_mut(&mut self) -> JsonMut<'_> {
        (**self).json_mut()
    }
}
