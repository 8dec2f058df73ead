use alloc::boxed::Box;

use crate::info::{Category, Typed};
use crate::ops::{JsonRef, List, ListItemIter, ToJson};

// Fixed-size lists can be written but not populated: their length is not
// theirs to change.
//
// `[T]` is unsized and cannot be viewed as `&dyn List`, so only the pointers
// to it serialize.

impl<T: Typed, const N: usize> Typed for [T; N] {
    const CATEGORY: Category = Category::Sequence;
}

impl<T: Typed> Typed for [T] {
    const CATEGORY: Category = Category::Sequence;
}

impl<T: ToJson, const N: usize> ToJson for [T; N] {
    #[inline]
    fn json_ref(&self) -> JsonRef<'_> {
        JsonRef::Sequence(self)
    }
}

impl<T: ToJson, const N: usize> List for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    fn iter(&self) -> ListItemIter<'_> {
        slice_iter(self)
    }
}

impl<T: ToJson> ToJson for &[T] {
    #[inline]
    fn json_ref(&self) -> JsonRef<'_> {
        JsonRef::Sequence(self)
    }
}

impl<T: ToJson> List for &[T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn iter(&self) -> ListItemIter<'_> {
        slice_iter(self)
    }
}

impl<T: ToJson> ToJson for Box<[T]> {
    #[inline]
    fn json_ref(&self) -> JsonRef<'_> {
        JsonRef::Sequence(self)
    }
}

impl<T: ToJson> List for Box<[T]> {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn iter(&self) -> ListItemIter<'_> {
        slice_iter(self)
    }
}

pub(crate) fn slice_iter<T: ToJson>(items: &[T]) -> ListItemIter<'_> {
    Box::new(items.iter().map(|item| item as &dyn ToJson))
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec;

    use crate::ops::{JsonRef, ToJson};

    fn len_of(value: &dyn ToJson) -> usize {
        match value.json_ref() {
            JsonRef::Sequence(list) => list.iter().count(),
            _ => panic!("not a sequence"),
        }
    }

    #[test]
    fn fixed_lists() {
        let array = [1_u8, 2, 3];
        let slice: &[u8] = &array[1..];
        let boxed: Box<[u8]> = vec![4, 5, 6, 7].into_boxed_slice();

        assert_eq!(len_of(&array), 3);
        assert_eq!(len_of(&slice), 2);
        assert_eq!(len_of(&boxed), 4);
    }
}
