use crate::info::{Category, Typed};
use crate::ops::{FromJson, JsonMut, JsonRef, ToJson};

impl<T: Typed + ?Sized> Typed for &T {
    const CATEGORY: Category = T::CATEGORY;
}

impl<T: Typed + ?Sized> Typed for &mut T {
    const CATEGORY: Category = T::CATEGORY;
}

impl<T: ToJson + ?Sized> ToJson for &T {
    #[inline]
    fn json_ref(&self) -> JsonRef<'_> {
        (**self).json_ref()
    }
}

impl<T: ToJson + ?Sized> ToJson for &mut T {
    #[inline]
    fn json_ref(&self) -> JsonRef<'_> {
        (**self).json_ref()
    }
}

impl<T: FromJson + ?Sized> FromJson for &mut T {
    #[inline]
    fn json_mut(&mut self) -> JsonMut<'_> {
        (**self).json_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::info::Category;
    use crate::ops::{FromJson, JsonMut, JsonRef, ToJson};

    #[test]
    fn transparent() {
        let text = "abc";
        assert!(matches!((&text).json_ref(), JsonRef::Text("abc")));
        assert_eq!(Category::of::<&&str>(), Category::Text);

        let mut flag = false;
        let mut target = &mut flag;
        if let JsonMut::Boolean(slot) = <&mut bool as FromJson>::json_mut(&mut target) {
            *slot = true;
        }
        assert!(flag);
    }
}
