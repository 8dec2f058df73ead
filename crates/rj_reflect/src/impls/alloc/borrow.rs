use alloc::borrow::Cow;

use crate::info::{Category, Typed};
use crate::ops::{FromJson, JsonMut, JsonRef, ToJson};

impl Typed for Cow<'_, str> {
    const CATEGORY: Category = Category::Text;
}

impl ToJson for Cow<'_, str> {
    #[inline]
    fn json_ref(&self) -> JsonRef<'_> {
        JsonRef::Text(self)
    }
}

/// A borrowed value is turned into an owned one before being overwritten.
impl FromJson for Cow<'_, str> {
    #[inline]
    fn json_mut(&mut self) -> JsonMut<'_> {
        JsonMut::Text(self.to_mut())
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;

    use crate::ops::{FromJson, JsonMut};

    #[test]
    fn borrowed_becomes_owned() {
        let mut text = Cow::Borrowed("old");
        if let JsonMut::Text(slot) = text.json_mut() {
            slot.clear();
            slot.push_str("new");
        }
        assert!(matches!(text, Cow::Owned(ref s) if s == "new"));
    }
}
