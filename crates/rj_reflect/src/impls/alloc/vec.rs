use alloc::vec::Vec;

use crate::impls::native::slice_iter;
use crate::info::{Category, Typed};
use crate::ops::{FromJson, JsonMut, JsonRef, List, ListItemIter, ListMut, ToJson};
use crate::serde::DeserializeError;

impl<T: Typed> Typed for Vec<T> {
    const CATEGORY: Category = Category::Sequence;
}

impl<T: ToJson> ToJson for Vec<T> {
    #[inline]
    fn json_ref(&self) -> JsonRef<'_> {
        JsonRef::Sequence(self)
    }
}

impl<T: FromJson + Default> FromJson for Vec<T> {
    #[inline]
    fn json_mut(&mut self) -> JsonMut<'_> {
        JsonMut::Sequence(self)
    }
}

impl<T: ToJson> List for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> ListItemIter<'_> {
        slice_iter(self)
    }
}

impl<T: FromJson + Default> ListMut for Vec<T> {
    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }

    fn push_with(
        &mut self,
        fill: &mut dyn FnMut(&mut dyn FromJson) -> Result<(), DeserializeError>,
    ) -> Result<(), DeserializeError> {
        let mut item = T::default();
        fill(&mut item)?;
        self.push(item);
        Ok(())
    }
}
