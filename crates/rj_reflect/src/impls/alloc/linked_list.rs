use alloc::boxed::Box;
use alloc::collections::LinkedList;

use crate::info::{Category, Typed};
use crate::ops::{FromJson, JsonMut, JsonRef, List, ListItemIter, ListMut, ToJson};
use crate::serde::DeserializeError;

impl<T: Typed> Typed for LinkedList<T> {
    const CATEGORY: Category = Category::Sequence;
}

impl<T: ToJson> ToJson for LinkedList<T> {
    #[inline]
    fn json_ref(&self) -> JsonRef<'_> {
        JsonRef::Sequence(self)
    }
}

impl<T: FromJson + Default> FromJson for LinkedList<T> {
    #[inline]
    fn json_mut(&mut self) -> JsonMut<'_> {
        JsonMut::Sequence(self)
    }
}

impl<T: ToJson> List for LinkedList<T> {
    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn iter(&self) -> ListItemIter<'_> {
        Box::new(LinkedList::iter(self).map(|item| item as &dyn ToJson))
    }
}

impl<T: FromJson + Default> ListMut for LinkedList<T> {
    #[inline]
    fn clear(&mut self) {
        LinkedList::clear(self);
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
