use alloc::string::ToString;

use serde_json::Number;

use crate::serde::ErrorKind;

// -----------------------------------------------------------------------------
// NumberValue

/// A number read from a [`Numeric`](crate::info::Category::Numeric) value.
///
/// The variant keeps the source width, so `f32` values can be rendered with
/// their own shortest representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    Signed(i64),
    Unsigned(u64),
    Signed128(i128),
    Unsigned128(u128),
    F32(f32),
    F64(f64),
}

impl NumberValue {
    /// Converts this value into a JSON number.
    ///
    /// Returns `None` for NaN and infinities, which have no JSON form.
    ///
    /// # Examples
    ///
    /// ```
    /// use rj_reflect::ops::NumberValue;
    ///
    /// let n = NumberValue::F32(0.1).to_json_number().unwrap();
    /// assert_eq!(n.to_string(), "0.1");
    ///
    /// assert!(NumberValue::F64(f64::NAN).to_json_number().is_none());
    /// ```
    pub fn to_json_number(self) -> Option<Number> {
        match self {
            Self::Signed(v) => Some(Number::from(v)),
            Self::Unsigned(v) => Some(Number::from(v)),
            Self::Signed128(v) => Number::from_i128(v),
            Self::Unsigned128(v) => Number::from_u128(v),
            // `0.1_f32 as f64` is 0.10000000149011612, go through the
            // shortest decimal form instead.
            Self::F32(v) if v.is_finite() => {
                Number::from_f64(v.to_string().parse::<f64>().ok()?)
            }
            Self::F32(_) => None,
            Self::F64(v) => Number::from_f64(v),
        }
    }
}

// -----------------------------------------------------------------------------
// NumberSlot

/// A numeric deserialization target.
///
/// Implemented for every primitive integer and float type. The slot decides
/// whether an incoming [`Number`] fits:
///
/// - integers accept only integral numbers in range of the target width,
///   including integral values in exponent form such as `5e6`;
/// - floats accept any number, rounding to nearest, but a finite number
///   beyond the `f32` range is rejected.
///
/// Rejected numbers leave the slot untouched and report
/// [`ErrorKind::NumericOverflow`].
///
/// # Examples
///
/// ```
/// use rj_reflect::ops::NumberSlot;
/// use serde_json::Number;
///
/// let mut byte = 7_u8;
/// assert!(byte.set_number(&Number::from(300)).is_err());
/// assert_eq!(byte, 7);
///
/// byte.set_number(&Number::from(255)).unwrap();
/// assert_eq!(byte, 255);
/// ```
pub trait NumberSlot {
    /// Returns the name of the target type, e.g. `u8`.
    fn type_name(&self) -> &'static str;

    /// Writes `number` into this slot if it fits.
    fn set_number(&mut self, number: &Number) -> Result<(), ErrorKind>;
}

// -----------------------------------------------------------------------------
// Conversions

/// 2^127 and 2^128, exactly representable.
const I128_END: f64 = i128::MAX as f64;
const U128_END: f64 = u128::MAX as f64;

/// Narrows `number` into the integer type `T`.
///
/// Returns `None` if the number is fractional or out of range.
pub(crate) fn narrow_integer<T>(number: &Number) -> Option<T>
where
    T: TryFrom<i128> + TryFrom<u128>,
{
    if let Some(v) = number.as_i128() {
        return T::try_from(v).ok();
    }
    if let Some(v) = number.as_u128() {
        return T::try_from(v).ok();
    }

    let v = number.as_f64()?;
    // NaN and infinities have a NaN fraction.
    if v.fract() != 0.0 {
        return None;
    }
    if (-I128_END..I128_END).contains(&v) {
        T::try_from(v as i128).ok()
    } else if (0.0..U128_END).contains(&v) {
        T::try_from(v as u128).ok()
    } else {
        None
    }
}

/// Narrows `number` into an `f32`, rounding to nearest.
///
/// Returns `None` if a finite number would become infinite.
pub(crate) fn narrow_f32(number: &Number) -> Option<f32> {
    let v = number.as_f64()?;
    let narrowed = v as f32;
    if narrowed.is_infinite() && v.is_finite() {
        None
    } else {
        Some(narrowed)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use serde_json::Number;

    use super::{NumberValue, narrow_f32, narrow_integer};

    fn float(v: f64) -> Number {
        Number::from_f64(v).unwrap()
    }

    #[test]
    fn integers_from_integers() {
        assert_eq!(narrow_integer::<u8>(&Number::from(255)), Some(255));
        assert_eq!(narrow_integer::<u8>(&Number::from(300)), None);
        assert_eq!(narrow_integer::<u8>(&Number::from(-1)), None);
        assert_eq!(narrow_integer::<i8>(&Number::from(-128)), Some(-128));
        assert_eq!(narrow_integer::<i64>(&Number::from(u64::MAX)), None);
        assert_eq!(narrow_integer::<u64>(&Number::from(u64::MAX)), Some(u64::MAX));
    }

    #[test]
    fn integers_from_floats() {
        assert_eq!(narrow_integer::<i32>(&float(5e6)), Some(5_000_000));
        assert_eq!(narrow_integer::<i32>(&float(-2.0)), Some(-2));
        assert_eq!(narrow_integer::<u8>(&float(1.5)), None);
        assert_eq!(narrow_integer::<u32>(&float(-3.0)), None);
        assert_eq!(narrow_integer::<u64>(&float(1e19)), Some(10_000_000_000_000_000_000));
        assert_eq!(narrow_integer::<u64>(&float(1e20)), None);
        assert_eq!(narrow_integer::<u128>(&float(1e20)), Some(10_u128.pow(20)));
        assert_eq!(narrow_integer::<i128>(&float(-1e22)), Some(-10_i128.pow(22)));
        assert_eq!(narrow_integer::<u128>(&float(1e39)), None);
    }

    #[test]
    fn wide_integers() {
        let max = Number::from_u128(u128::MAX).unwrap();
        let min = Number::from_i128(i128::MIN).unwrap();

        assert_eq!(max.to_string(), "340282366920938463463374607431768211455");
        assert_eq!(narrow_integer::<u128>(&max), Some(u128::MAX));
        assert_eq!(narrow_integer::<i128>(&max), None);
        assert_eq!(narrow_integer::<u64>(&max), None);
        assert_eq!(narrow_integer::<i128>(&min), Some(i128::MIN));
        assert_eq!(narrow_integer::<u128>(&min), None);
    }

    #[test]
    fn floats() {
        assert_eq!(narrow_f32(&float(4.125)), Some(4.125));
        assert_eq!(narrow_f32(&float(5e6)), Some(5e6));
        assert_eq!(narrow_f32(&Number::from(7)), Some(7.0));
        assert_eq!(narrow_f32(&float(1e300)), None);
    }

    #[test]
    fn render() {
        let text = |v: NumberValue| v.to_json_number().map(|n| n.to_string());

        assert_eq!(text(NumberValue::Signed(-4)).as_deref(), Some("-4"));
        assert_eq!(text(NumberValue::Unsigned(u64::MAX)).as_deref(), Some("18446744073709551615"));
        assert_eq!(
            text(NumberValue::Signed128(i128::MIN)).as_deref(),
            Some("-170141183460469231731687303715884105728"),
        );
        assert_eq!(text(NumberValue::F32(12.5)).as_deref(), Some("12.5"));
        assert_eq!(text(NumberValue::F32(0.3)).as_deref(), Some("0.3"));
        assert_eq!(
            text(NumberValue::F64(core::f64::consts::PI)).as_deref(),
            Some("3.141592653589793"),
        );
        assert_eq!(text(NumberValue::F32(f32::INFINITY)), None);
    }
}
