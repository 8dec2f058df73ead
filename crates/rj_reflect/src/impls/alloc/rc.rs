use alloc::rc::Rc;
use alloc::sync::Arc;

use crate::info::{Category, Typed};
use crate::ops::{JsonRef, ToJson};

// Shared pointers give no unique access, so they serialize only.

impl<T: Typed + ?Sized> Typed for Rc<T> {
    const CATEGORY: Category = T::CATEGORY;
}

impl<T: ToJson + ?Sized> ToJson for Rc<T> {
    #[inline]
    fn json_ref(&self) -> JsonRef<'_> {
        (**self).json_ref()
    }
}

impl<T: Typed + ?Sized> Typed for Arc<T> {
    const CATEGORY: Category = T::CATEGORY;
}

impl<T: ToJson + ?Sized> ToJson for Arc<T> {
    #[inline]
    fn json_ref(&self) -> JsonRef<'_> {
        (**self).json_ref()
    }
}
