use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use serde_json::Number;
use thiserror::Error;

use crate::info::{Category, NodeKind};

// -----------------------------------------------------------------------------
// ErrorKind

/// The reason a node could not be written into a value.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Category, found: NodeKind },

    #[error("number {number} does not fit in `{target}`")]
    NumericOverflow { number: Number, target: &'static str },

    #[error("array exhausted: expected one more {expected} element")]
    MissingElement { expected: Category },
}

impl ErrorKind {
    #[inline]
    pub(crate) fn overflow(number: &Number, target: &'static str) -> Self {
        Self::NumericOverflow {
            number: number.clone(),
            target,
        }
    }
}

// -----------------------------------------------------------------------------
// FieldPath

/// One step from a node to one of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// An object key.
    Field(Cow<'static, str>),
    /// An array index.
    Index(usize),
}

/// The location of a failed node, relative to the root passed to the engine.
///
/// Displayed as `$` followed by the segments, e.g. `$.items[1].count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    // Innermost first, segments are added while the error unwinds.
    rev_segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Returns `true` if the error happened at the root node.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.rev_segments.is_empty()
    }

    /// Returns the segments from the root to the failed node.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &PathSegment> {
        self.rev_segments.iter().rev()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in self.segments() {
            match segment {
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// DeserializeError

/// A deserialization failure and where it happened.
///
/// The first failure aborts the whole call. Fields and elements written
/// before it keep their new values.
///
/// # Examples
///
/// ```
/// use rj_reflect::{derive::Record, serde::{pull, ErrorKind}};
/// use serde_json::json;
///
/// #[derive(Record, Default)]
/// struct Item {
///     count: u8,
/// }
///
/// #[derive(Record, Default)]
/// struct Order {
///     items: Vec<Item>,
/// }
///
/// let mut order = Order::default();
/// let node = json!({ "items": [{ "count": 1 }, { "count": "two" }] });
///
/// let err = pull(&mut order, &node).unwrap_err();
/// assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
/// assert_eq!(err.path().to_string(), "$.items[1].count");
/// assert_eq!(
///     err.to_string(),
///     "type mismatch: expected Numeric, found string (at `$.items[1].count`)",
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind} (at `{path}`)")]
pub struct DeserializeError {
    kind: ErrorKind,
    path: FieldPath,
}

impl DeserializeError {
    /// Returns the reason of the failure.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the location of the failed node.
    #[inline]
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Splits the error into its reason and location.
    #[inline]
    pub fn into_parts(self) -> (ErrorKind, FieldPath) {
        (self.kind, self.path)
    }

    #[inline]
    pub(crate) fn at_field(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.path.rev_segments.push(PathSegment::Field(name.into()));
        self
    }

    #[inline]
    pub(crate) fn at_index(mut self, index: usize) -> Self {
        self.path.rev_segments.push(PathSegment::Index(index));
        self
    }
}

impl From<ErrorKind> for DeserializeError {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: FieldPath::default(),
        }
    }
}

// -----------------------------------------------------------------------------
// Error

/// Error returned by the text-level entry points.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The text is not valid JSON.
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Deserialize(#[from] DeserializeError),
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use serde_json::Number;

    use super::{DeserializeError, ErrorKind, PathSegment};
    use crate::info::{Category, NodeKind};

    #[test]
    fn path_display() {
        let err = DeserializeError::from(ErrorKind::overflow(&Number::from(300), "u8"))
            .at_field("count")
            .at_index(1)
            .at_field("items");

        assert_eq!(err.path().to_string(), "$.items[1].count");
        assert_eq!(
            err.path().segments().next(),
            Some(&PathSegment::Field("items".into())),
        );
        assert_eq!(
            err.to_string(),
            "number 300 does not fit in `u8` (at `$.items[1].count`)",
        );
    }

    #[test]
    fn root() {
        let err = DeserializeError::from(ErrorKind::TypeMismatch {
            expected: Category::Boolean,
            found: NodeKind::Null,
        });

        assert!(err.path().is_root());
        assert_eq!(
            err.to_string(),
            "type mismatch: expected Boolean, found null (at `$`)",
        );
    }
}
