use core::fmt;

use serde_json::Value;

/// The kind of a JSON node.
///
/// Reported by [`ErrorKind::TypeMismatch`] as the kind actually found in the input.
///
/// [`ErrorKind::TypeMismatch`]: crate::serde::ErrorKind::TypeMismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl NodeKind {
    /// Returns the kind of `node`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rj_reflect::info::NodeKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(NodeKind::of(&json!(null)), NodeKind::Null);
    /// assert_eq!(NodeKind::of(&json!([1, 2])), NodeKind::Array);
    /// assert_eq!(NodeKind::of(&json!({ "a": 1 })), NodeKind::Object);
    /// ```
    #[inline]
    pub const fn of(node: &Value) -> Self {
        match node {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.pad("null"),
            Self::Boolean => f.pad("boolean"),
            Self::Number => f.pad("number"),
            Self::String => f.pad("string"),
            Self::Array => f.pad("array"),
            Self::Object => f.pad("object"),
        }
    }
}
