use serde_json::Number;

use crate::info::{Category, Typed};
use crate::ops::{FromJson, JsonMut, JsonRef, NumberSlot, NumberValue, ToJson};
use crate::ops::{narrow_f32, narrow_integer};
use crate::serde::ErrorKind;

impl Typed for bool {
    const CATEGORY: Category = Category::Boolean;
}

impl ToJson for bool {
    #[inline]
    fn json_ref(&self) -> JsonRef<'_> {
        JsonRef::Boolean(*self)
    }
}

impl FromJson for bool {
    #[inline]
    fn json_mut(&mut self) -> JsonMut<'_> {
        JsonMut::Boolean(self)
    }
}

macro_rules! impl_numeric {
    ($ty:ident, |$v:ident| $read:expr, |$n:ident| $narrow:expr) => {
        impl Typed for $ty {
            const CATEGORY: Category = Category::Numeric;
        }

        impl ToJson for $ty {
            #[inline]
            fn json_ref(&self) -> JsonRef<'_> {
                let $v = *self;
                JsonRef::Number($read)
            }
        }

        impl FromJson for $ty {
            #[inline]
            fn json_mut(&mut self) -> JsonMut<'_> {
                JsonMut::Number(self)
            }
        }

        impl NumberSlot for $ty {
            #[inline]
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn set_number(&mut self, $n: &Number) -> Result<(), ErrorKind> {
                match $narrow {
                    Some(value) => {
                        *self = value;
                        Ok(())
                    }
                    None => Err(ErrorKind::overflow($n, stringify!($ty))),
                }
            }
        }
    };
}

macro_rules! impl_signed {
    ($($ty:ident),*) => {$(
        impl_numeric!($ty, |v| NumberValue::Signed(v as i64), |n| narrow_integer::<$ty>(n));
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ident),*) => {$(
        impl_numeric!($ty, |v| NumberValue::Unsigned(v as u64), |n| narrow_integer::<$ty>(n));
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl_numeric!(i128, |v| NumberValue::Signed128(v), |n| narrow_integer::<i128>(n));
impl_numeric!(u128, |v| NumberValue::Unsigned128(v), |n| narrow_integer::<u128>(n));

impl_numeric!(f32, |v| NumberValue::F32(v), |n| narrow_f32(n));
impl_numeric!(f64, |v| NumberValue::F64(v), |n| n.as_f64());

// -----------------------------------------------------------------------------
// Tests
