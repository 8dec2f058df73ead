use core::fmt;

use crate::info::{NodeKind, Typed};

/// An enumeration of the encoding categories.
///
/// Every supported type belongs to exactly one category, decided by its
/// [`Typed`] implementation and never by a runtime value.
///
/// # Examples
///
/// ```
/// use rj_reflect::info::Category;
///
/// assert_eq!(Category::of::<bool>(), Category::Boolean);
/// assert_eq!(Category::of::<f32>(), Category::Numeric);
/// assert_eq!(Category::of::<&str>(), Category::Text);
/// assert_eq!(Category::of::<Vec<Vec<u8>>>(), Category::Sequence);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Boolean,
    Numeric,
    Text,
    Sequence,
    Record,
}

impl Category {
    /// Returns the category of `T`.
    #[inline]
    pub const fn of<T: Typed + ?Sized>() -> Self {
        T::CATEGORY
    }

    /// Returns the JSON node kind this category is encoded as.
    #[inline]
    pub const fn node_kind(self) -> NodeKind {
        match self {
            Self::Boolean => NodeKind::Boolean,
            Self::Numeric => NodeKind::Number,
            Self::Text => NodeKind::String,
            Self::Sequence => NodeKind::Array,
            Self::Record => NodeKind::Object,
        }
    }

    /// Returns `true` if a node of `kind` can be deserialized into this category.
    ///
    /// `Null` is accepted by none of them.
    #[inline]
    pub const fn accepts(self, kind: NodeKind) -> bool {
        matches!(
            (self, kind),
            (Self::Boolean, NodeKind::Boolean)
                | (Self::Numeric, NodeKind::Number)
                | (Self::Text, NodeKind::String)
                | (Self::Sequence, NodeKind::Array)
                | (Self::Record, NodeKind::Object)
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.pad("Boolean"),
            Self::Numeric => f.pad("Numeric"),
            Self::Text => f.pad("Text"),
            Self::Sequence => f.pad("Sequence"),
            Self::Record => f.pad("Record"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::collections::{LinkedList, VecDeque};
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::Category;
    use crate::info::NodeKind;

    #[test]
    fn classify_scalars() {
        assert_eq!(Category::of::<bool>(), Category::Boolean);
        assert_eq!(Category::of::<u8>(), Category::Numeric);
        assert_eq!(Category::of::<isize>(), Category::Numeric);
        assert_eq!(Category::of::<i128>(), Category::Numeric);
        assert_eq!(Category::of::<u128>(), Category::Numeric);
        assert_eq!(Category::of::<f64>(), Category::Numeric);
        assert_eq!(Category::of::<String>(), Category::Text);
        assert_eq!(Category::of::<str>(), Category::Text);
        assert_eq!(Category::of::<Cow<'static, str>>(), Category::Text);
        assert_eq!(Category::of::<Box<str>>(), Category::Text);
    }

    #[test]
    fn classify_sequences() {
        assert_eq!(Category::of::<Vec<i32>>(), Category::Sequence);
        assert_eq!(Category::of::<VecDeque<String>>(), Category::Sequence);
        assert_eq!(Category::of::<LinkedList<&str>>(), Category::Sequence);
        assert_eq!(Category::of::<[bool; 3]>(), Category::Sequence);
        assert_eq!(Category::of::<[u8]>(), Category::Sequence);
        assert_eq!(Category::of::<&[u8]>(), Category::Sequence);
    }

    #[test]
    fn node_kinds() {
        for category in [
            Category::Boolean,
            Category::Numeric,
            Category::Text,
            Category::Sequence,
            Category::Record,
        ] {
            assert!(category.accepts(category.node_kind()));
            assert!(!category.accepts(NodeKind::Null));
        }
        assert!(!Category::Numeric.accepts(NodeKind::String));
    }
}
