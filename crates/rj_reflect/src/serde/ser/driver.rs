use serde_core::ser::{SerializeSeq, SerializeStruct};
use serde_core::{Serialize, Serializer};

use crate::ops::{JsonRef, NumberValue, StructFieldIter, ToJson};

/// Runs the engine's encoding through any `serde` serializer.
///
/// Produces the same structure as [`to_value`]: records are serialized as
/// structs with fields in declaration order, sequences as sequences and
/// numbers keep their source width. Non-finite floats are handed to the
/// serializer as they are, so the output format decides how to write them
/// (`serde_json` writes `null`).
///
/// # Examples
///
/// ```
/// use rj_reflect::{derive::Record, serde::SerializeDriver};
///
/// #[derive(Record)]
/// struct MyStruct {
///     value: i32,
/// }
///
/// let input = MyStruct { value: 123 };
/// let driver = SerializeDriver::new(&input);
///
/// assert_eq!(ron::to_string(&driver).unwrap(), r#"(value:123)"#);
/// assert_eq!(serde_json::to_string(&driver).unwrap(), r#"{"value":123}"#);
/// ```
///
/// [`to_value`]: crate::serde::to_value
#[derive(Clone, Copy)]
pub struct SerializeDriver<'a> {
    value: JsonRef<'a>,
}

impl<'a> SerializeDriver<'a> {
    /// Creates a driver for `value`.
    #[inline]
    pub fn new<T: ToJson + ?Sized>(value: &'a T) -> Self {
        Self {
            value: value.json_ref(),
        }
    }
}

impl Serialize for SerializeDriver<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::cfg::debug! {
            log::trace!("drive {}", self.value.category());
        }

        match self.value {
            JsonRef::Boolean(v) => serializer.serialize_bool(v),
            JsonRef::Number(NumberValue::Signed(v)) => serializer.serialize_i64(v),
            JsonRef::Number(NumberValue::Unsigned(v)) => serializer.serialize_u64(v),
            JsonRef::Number(NumberValue::Signed128(v)) => serializer.serialize_i128(v),
            JsonRef::Number(NumberValue::Unsigned128(v)) => serializer.serialize_u128(v),
            JsonRef::Number(NumberValue::F32(v)) => serializer.serialize_f32(v),
            JsonRef::Number(NumberValue::F64(v)) => serializer.serialize_f64(v),
            JsonRef::Text(v) => serializer.serialize_str(v),
            JsonRef::Sequence(list) => {
                let mut state = serializer.serialize_seq(Some(list.len()))?;
                for item in list.iter() {
                    state.serialize_element(&SerializeDriver::new(item))?;
                }
                state.end()
            }
            JsonRef::Record(record) => {
                let info = record.struct_info();
                let mut state = serializer.serialize_struct(info.type_ident(), info.field_len())?;
                for (field, value) in info.iter().zip(StructFieldIter::new(record)) {
                    state.serialize_field(field.name(), &SerializeDriver::new(value))?;
                }
                state.end()
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
