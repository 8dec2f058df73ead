use alloc::borrow::ToOwned;
use alloc::string::String;

use serde_json::{Map, Value};

use super::node_reader::{pull, read};
use crate::ops::FromJson;
use crate::serde::{DeserializeError, Error, ErrorKind};

/// Deserializes the next node of `cursor` into `value`.
///
/// Reads an array positionally, one call per element. An exhausted cursor
/// is reported as [`ErrorKind::MissingElement`].
///
/// # Examples
///
/// ```
/// use rj_reflect::serde::pull_next;
/// use serde_json::json;
///
/// let node = json!(["a", 5, true]);
/// let mut cursor = node.as_array().unwrap().iter();
///
/// let (mut text, mut number, mut flag) = (String::new(), 0_i32, false);
/// pull_next(&mut text, &mut cursor).unwrap();
/// pull_next(&mut number, &mut cursor).unwrap();
/// pull_next(&mut flag, &mut cursor).unwrap();
///
/// assert_eq!((text.as_str(), number, flag), ("a", 5, true));
/// assert!(pull_next(&mut flag, &mut cursor).is_err());
/// ```
pub fn pull_next<'a, T, I>(value: &mut T, cursor: &mut I) -> Result<(), DeserializeError>
where
    T: FromJson + ?Sized,
    I: Iterator<Item = &'a Value>,
{
    let target = value.json_mut();
    match cursor.next() {
        Some(node) => read(target, node),
        None => Err(ErrorKind::MissingElement {
            expected: target.category(),
        }
        .into()),
    }
}

/// Deserializes the entry `name` of `object` into `value`.
///
/// Returns `false` and leaves `value` untouched if the key is absent.
///
/// # Examples
///
/// ```
/// use rj_reflect::serde::pull_field;
/// use serde_json::json;
///
/// let node = json!({ "number": 42 });
/// let object = node.as_object().unwrap();
///
/// let mut number = 0_u64;
/// assert!(pull_field(&mut number, "number", object).unwrap());
/// assert!(!pull_field(&mut number, "missing", object).unwrap());
/// assert_eq!(number, 42);
/// ```
pub fn pull_field<T: FromJson + ?Sized>(
    value: &mut T,
    name: &str,
    object: &Map<String, Value>,
) -> Result<bool, DeserializeError> {
    match object.get(name) {
        Some(node) => {
            pull(value, node).map_err(|err| err.at_field(name.to_owned()))?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Deserializes `node` into a new `T`, starting from `T::default()`.
///
/// Unlike [`pull`], nothing is returned unless the whole node was read.
///
/// # Examples
///
/// ```
/// use rj_reflect::serde::from_value;
/// use serde_json::json;
///
/// let words: Vec<String> = from_value(&json!(["foo", "bar"])).unwrap();
/// assert_eq!(words, ["foo", "bar"]);
///
/// assert!(from_value::<Vec<u8>>(&json!([1, -1])).is_err());
/// ```
pub fn from_value<T: FromJson + Default>(node: &Value) -> Result<T, DeserializeError> {
    let mut value = T::default();
    pull(&mut value, node)?;
    Ok(value)
}

/// Parses `text` and deserializes it into a new `T`.
///
/// # Examples
///
/// ```
/// use rj_reflect::serde::{from_str, Error};
///
/// let numbers: Vec<f64> = from_str("[1, 2.5, 5e6]").unwrap();
/// assert_eq!(numbers, [1.0, 2.5, 5e6]);
///
/// assert!(matches!(from_str::<Vec<f64>>("[1, "), Err(Error::Parse(_))));
/// assert!(matches!(from_str::<Vec<f64>>("[true]"), Err(Error::Deserialize(_))));
/// ```
pub fn from_str<T: FromJson + Default>(text: &str) -> Result<T, Error> {
    let node: Value = serde_json::from_str(text)?;
    Ok(from_value(&node)?)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use serde_json::json;

    use super::{from_str, from_value, pull_field, pull_next};
    use crate::derive::Record;
    use crate::info::Category;
    use crate::serde::ErrorKind;

    #[test]
    fn positional() {
        let node = json!(["a", 5, 5e6, "test", true, 4.125, false]);
        let mut cursor = node.as_array().unwrap().iter();

        let mut a = String::new();
        let mut b = 0_i32;
        let mut c = 0_f32;
        let mut d = String::new();
        let mut e = false;
        let mut f = 0_f64;
        let mut g = true;

        pull_next(&mut a, &mut cursor).unwrap();
        pull_next(&mut b, &mut cursor).unwrap();
        pull_next(&mut c, &mut cursor).unwrap();
        pull_next(&mut d, &mut cursor).unwrap();
        pull_next(&mut e, &mut cursor).unwrap();
        pull_next(&mut f, &mut cursor).unwrap();
        pull_next(&mut g, &mut cursor).unwrap();

        assert_eq!(a, "a");
        assert_eq!(b, 5);
        assert_eq!(c, 5e6);
        assert_eq!(d, "test");
        assert!(e);
        assert_eq!(f, 4.125);
        assert!(!g);

        let err = pull_next(&mut a, &mut cursor).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::MissingElement {
                expected: Category::Text,
            }
        );
    }

    #[test]
    fn keyed() {
        let node = json!({ "list": [1, "x"] });
        let object = node.as_object().unwrap();

        let mut list: Vec<u8> = Vec::new();
        let err = pull_field(&mut list, "list", object).unwrap_err();
        assert_eq!(err.path().to_string(), "$.list[1]");
    }

    #[derive(Record, Default, Debug, PartialEq)]
    struct Config {
        #[record(rename = "displayName")]
        name: String,
        retries: u8,
    }

    #[test]
    fn atomic_result() {
        let config: Config = from_str(r#"{"displayName":"main","retries":3}"#).unwrap();
        assert_eq!(
            config,
            Config {
                name: "main".into(),
                retries: 3,
            }
        );

        assert!(from_value::<Config>(&json!({ "retries": 256 })).is_err());
    }
}
