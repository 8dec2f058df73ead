use alloc::string::String;

use serde_json::Value;

use crate::ops::{FromJson, ToJson};
use crate::serde::{self, DeserializeError, Error};

/// Whole-document conversions for types that go both ways.
///
/// Implemented for every `ToJson + FromJson + Default` type, records
/// included.
///
/// # Examples
///
/// ```
/// use rj_reflect::{JsonSerializable, derive::Record};
///
/// #[derive(Record, Default, Debug, PartialEq)]
/// struct Settings {
///     volume: u8,
///     muted: bool,
/// }
///
/// let settings = Settings { volume: 80, muted: false };
/// let text = settings.to_json();
/// assert_eq!(text, r#"{"volume":80,"muted":false}"#);
///
/// let mut loaded = Settings::from_json(&text).unwrap();
/// assert_eq!(loaded, settings);
///
/// loaded.assign_json(r#"{"muted":true}"#).unwrap();
/// assert_eq!(loaded, Settings { volume: 80, muted: true });
/// ```
pub trait JsonSerializable: ToJson + FromJson + Default {
    /// Serializes `self` into a JSON node.
    #[inline]
    fn to_json_value(&self) -> Value {
        serde::to_value(self)
    }

    /// Serializes `self` into compact JSON text.
    #[inline]
    fn to_json(&self) -> String {
        serde::to_string(self)
    }

    /// Deserializes a new value from a JSON node.
    #[inline]
    fn from_json_value(node: &Value) -> Result<Self, DeserializeError> {
        serde::from_value(node)
    }

    /// Parses `text` and deserializes a new value from it.
    #[inline]
    fn from_json(text: &str) -> Result<Self, Error> {
        serde::from_str(text)
    }

    /// Parses `text` and deserializes it into `self`, in place.
    ///
    /// Keys absent from `text` leave their fields untouched. Nothing is
    /// written if `text` is not valid JSON.
    fn assign_json(&mut self, text: &str) -> Result<(), Error> {
        let node: Value = serde_json::from_str(text)?;
        serde::pull(self, &node)?;
        Ok(())
    }
}

impl<T: ToJson + FromJson + Default> JsonSerializable for T {}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use serde_json::json;

    use super::JsonSerializable;
    use crate::derive::Record;
    use crate::serde::Error;

    #[derive(Record, Default, Debug, PartialEq)]
    struct TestObject {
        number: i32,
        number2: f64,
        numbers: Vec<i32>,
        text: String,
        boolean: bool,
    }

    #[derive(Record, Default, Debug, PartialEq)]
    struct NestingObject {
        name: String,
        object: TestObject,
        objects: Vec<TestObject>,
    }

    fn test_object(number: i32) -> TestObject {
        TestObject {
            number,
            number2: core::f64::consts::PI,
            numbers: vec![1, 2, 3, 4],
            text: "test".into(),
            boolean: false,
        }
    }

    #[test]
    fn round_trip() {
        let value = NestingObject {
            name: "nesting".into(),
            object: test_object(1),
            objects: vec![test_object(2), test_object(3)],
        };

        let text = value.to_json();
        assert_eq!(NestingObject::from_json(&text).unwrap(), value);
        assert_eq!(NestingObject::from_json_value(&value.to_json_value()).unwrap(), value);
    }

    #[test]
    fn primitives() {
        assert_eq!(42_u32.to_json(), "42");
        assert_eq!(String::from_json(r#""a\"b""#).unwrap(), "a\"b");
        assert_eq!(Vec::<bool>::from_json_value(&json!([true])).unwrap(), [true]);
    }

    #[derive(Record, Default, Debug, PartialEq)]
    struct Ledger {
        credit: u128,
        debit: i128,
        entries: Vec<u128>,
    }

    #[test]
    fn wide_integers() {
        let value = Ledger {
            credit: u128::MAX,
            debit: i128::MIN,
            entries: vec![1_u128 << 100, 0],
        };

        let text = value.to_json();
        assert_eq!(
            text,
            r#"{"credit":340282366920938463463374607431768211455,"debit":-170141183460469231731687303715884105728,"entries":[1267650600228229401496703205376,0]}"#
        );
        assert_eq!(Ledger::from_json(&text).unwrap(), value);

        assert!(Vec::<u64>::from_json("[18446744073709551616]").is_err());
        assert_eq!(
            Vec::<u128>::from_json("[18446744073709551616]").unwrap(),
            [u128::from(u64::MAX) + 1]
        );
    }

    #[test]
    fn assign_errors() {
        let mut value = test_object(5);

        assert!(matches!(value.assign_json("{"), Err(Error::Parse(_))));
        assert!(matches!(
            value.assign_json(r#"{"number":6,"text":1}"#),
            Err(Error::Deserialize(_))
        ));
        assert_eq!(value.number, 6);
        assert_eq!(value.text, "test");
    }
}
