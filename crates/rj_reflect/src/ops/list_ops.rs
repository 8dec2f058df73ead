use alloc::boxed::Box;

use crate::ops::{FromJson, ToJson};
use crate::serde::DeserializeError;

/// An iterator over the elements of a [`List`], in iteration order.
pub type ListItemIter<'a> = Box<dyn Iterator<Item = &'a dyn ToJson> + 'a>;

/// Read access to a sequence.
///
/// Implemented for `Vec<T>`, `VecDeque<T>`, `LinkedList<T>`, slices and
/// arrays whose element type implements [`ToJson`].
///
/// # Examples
///
/// ```
/// use rj_reflect::ops::List;
///
/// let list: &dyn List = &[3_u8, 4, 5];
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.iter().count(), 3);
/// ```
pub trait List {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements.
    fn iter(&self) -> ListItemIter<'_>;
}

/// Write access to a growable sequence.
///
/// Deserialization replaces the whole content: it calls [`clear`], then one
/// [`push_with`] per element node.
///
/// [`clear`]: ListMut::clear
/// [`push_with`]: ListMut::push_with
pub trait ListMut {
    /// Removes all elements.
    fn clear(&mut self);

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// Does nothing by default.
    #[inline]
    fn reserve(&mut self, additional: usize) {
        let _ = additional;
    }

    /// Creates a default element, lets `fill` populate it and appends it.
    ///
    /// Nothing is appended if `fill` fails.
    fn push_with(
        &mut self,
        fill: &mut dyn FnMut(&mut dyn FromJson) -> Result<(), DeserializeError>,
    ) -> Result<(), DeserializeError>;
}
