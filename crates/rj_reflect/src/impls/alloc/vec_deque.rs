use alloc::boxed::Box;
use alloc::collections::VecDeque;

use crate::info::{Category, Typed};
use crate::ops::{FromJson, JsonMut, JsonRef, List, ListItemIter, ListMut, ToJson};
use crate::serde::DeserializeError;

impl<T: Typed> Typed for VecDeque<T> {
    const CATEGORY: Category = Category::Sequence;
}

impl<T: ToJson> ToJson for VecDeque<T> {
    #[inline]
    fn json_ref(&self) -> JsonRef<'_> {
        JsonRef::Sequence(self)
    }
}

impl<T: FromJson + Default> FromJson for VecDeque<T> {
    #[inline]
    fn json_mut(&mut self) -> JsonMut<'_> {
        JsonMut::Sequence(self)
    }
}

impl<T: ToJson> List for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn iter(&self) -> ListItemIter<'_> {
        Box::new(VecDeque::iter(self).map(|item| item as &dyn ToJson))
    }
}

impl<T: FromJson + Default> ListMut for VecDeque<T> {
    #[inline]
    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        VecDeque::reserve(self, additional);
    }

    fn push_with(
        &mut self,
        fill: &mut dyn FnMut(&mut dyn FromJson) -> Result<(), DeserializeError>,
    ) -> Result<(), DeserializeError> {
        let mut item = T::default();
        fill(&mut item)?;
        self.push_back(item);
        Ok(())
    }
}
