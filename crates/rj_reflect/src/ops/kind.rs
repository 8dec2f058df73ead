use alloc::string::String;

use crate::info::Category;
use crate::ops::{List, ListMut, NumberSlot, NumberValue, Struct, StructMut};

/// An immutable view of a value, one variant per [`Category`].
///
/// Returned by [`ToJson::json_ref`](crate::ToJson::json_ref).
#[derive(Clone, Copy)]
pub enum JsonRef<'a> {
    Boolean(bool),
    Number(NumberValue),
    Text(&'a str),
    Sequence(&'a dyn List),
    Record(&'a dyn Struct),
}

/// A mutable view of a value, one variant per [`Category`].
///
/// Returned by [`FromJson::json_mut`](crate::FromJson::json_mut).
pub enum JsonMut<'a> {
    Boolean(&'a mut bool),
    Number(&'a mut dyn NumberSlot),
    Text(&'a mut String),
    Sequence(&'a mut dyn ListMut),
    Record(&'a mut dyn StructMut),
}

impl JsonRef<'_> {
    /// Returns the category of the viewed value.
    #[inline]
    pub const fn category(&self) -> Category {
        match self {
            Self::Boolean(_) => Category::Boolean,
            Self::Number(_) => Category::Numeric,
            Self::Text(_) => Category::Text,
            Self::Sequence(_) => Category::Sequence,
            Self::Record(_) => Category::Record,
        }
    }
}

impl JsonMut<'_> {
    /// Returns the category of the viewed value.
    #[inline]
    pub const fn category(&self) -> Category {
        match self {
            Self::Boolean(_) => Category::Boolean,
            Self::Number(_) => Category::Numeric,
            Self::Text(_) => Category::Text,
            Self::Sequence(_) => Category::Sequence,
            Self::Record(_) => Category::Record,
        }
    }
}
