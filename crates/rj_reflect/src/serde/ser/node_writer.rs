use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde_json::{Map, Value};

use crate::ops::{JsonRef, StructFieldIter, ToJson};

/// Serializes `value` into a new JSON node.
///
/// # Examples
///
/// ```
/// use rj_reflect::serde::to_value;
/// use serde_json::json;
///
/// assert_eq!(to_value(&vec![vec![1, 2], vec![3]]), json!([[1, 2], [3]]));
/// assert_eq!(to_value("text"), json!("text"));
/// assert_eq!(to_value(&f64::NAN), json!(null));
/// ```
pub fn to_value<T: ToJson + ?Sized>(value: &T) -> Value {
    write(value.json_ref())
}

/// Serializes `value` and appends it to `array`.
///
/// # Examples
///
/// ```
/// use rj_reflect::serde::push;
///
/// let mut array = Vec::new();
/// push("foo", &mut array);
/// push(&25, &mut array);
///
/// assert_eq!(serde_json::Value::Array(array).to_string(), r#"["foo",25]"#);
/// ```
#[inline]
pub fn push<T: ToJson + ?Sized>(value: &T, array: &mut Vec<Value>) {
    array.push(to_value(value));
}

/// Serializes `value` into the entry `name` of `object`.
///
/// A new key is appended after the existing ones; an existing key keeps its
/// position and gets the new value.
///
/// # Examples
///
/// ```
/// use rj_reflect::serde::push_field;
/// use serde_json::{Map, Value};
///
/// let mut object = Map::new();
/// push_field(&42, "number", &mut object);
/// push_field(&false, "boolean", &mut object);
///
/// assert_eq!(Value::Object(object).to_string(), r#"{"number":42,"boolean":false}"#);
/// ```
#[inline]
pub fn push_field<T: ToJson + ?Sized>(value: &T, name: &str, object: &mut Map<String, Value>) {
    object.insert(name.to_owned(), to_value(value));
}

/// Serializes `value` into compact JSON text.
#[inline]
pub fn to_string<T: ToJson + ?Sized>(value: &T) -> String {
    to_value(value).to_string()
}

fn write(value: JsonRef<'_>) -> Value {
    crate::cfg::debug! {
        log::trace!("serialize {}", value.category());
    }

    match value {
        JsonRef::Boolean(v) => Value::Bool(v),
        JsonRef::Number(v) => match v.to_json_number() {
            Some(number) => Value::Number(number),
            None => {
                log::debug!("{v:?} has no JSON number form, written as null");
                Value::Null
            }
        },
        JsonRef::Text(v) => Value::String(v.to_owned()),
        JsonRef::Sequence(list) => {
            let mut array = Vec::with_capacity(list.len());
            for item in list.iter() {
                push(item, &mut array);
            }
            Value::Array(array)
        }
        JsonRef::Record(record) => {
            let info = record.struct_info();
            let mut object = Map::with_capacity(info.field_len());
            for (field, value) in info.iter().zip(StructFieldIter::new(record)) {
                push_field(value, field.name(), &mut object);
            }
            Value::Object(object)
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::collections::LinkedList;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use serde_json::{Map, Value, json};

    use super::{push, push_field, to_string, to_value};
    use crate::derive::Record;

    #[derive(Record)]
    struct TestObject {
        number: i32,
        number2: f64,
        numbers: Vec<i32>,
        text: String,
        boolean: bool,
    }

    #[derive(Record)]
    #[record(FromJson = false)]
    struct NestingObject {
        name: &'static str,
        object: TestObject,
    }

    #[derive(Record)]
    #[record(FromJson = false)]
    struct NestingArray {
        objects: Vec<TestObject>,
    }

    fn test_object() -> TestObject {
        TestObject {
            number: 42,
            number2: core::f64::consts::PI,
            numbers: vec![1, 2, 3, 4],
            text: "test".into(),
            boolean: false,
        }
    }

    const TEST_OBJECT: &str =
        r#"{"number":42,"number2":3.141592653589793,"numbers":[1,2,3,4],"text":"test","boolean":false}"#;

    #[test]
    fn push_primitives() {
        let mut array = Vec::new();

        push(&String::from("foo"), &mut array);
        push("bar", &mut array);
        push(&25, &mut array);
        push(&12.5, &mut array);
        push(&vec!["foo1", "bar1"], &mut array);
        push(&LinkedList::from(["foo2", "bar2"]), &mut array);
        push(&["foo3", "bar3"], &mut array);
        push(&true, &mut array);
        push(&false, &mut array);

        assert_eq!(
            Value::Array(array).to_string(),
            r#"["foo","bar",25,12.5,["foo1","bar1"],["foo2","bar2"],["foo3","bar3"],true,false]"#,
        );
    }

    #[test]
    fn record_in_declaration_order() {
        assert_eq!(to_string(&test_object()), TEST_OBJECT);
    }

    #[test]
    fn nesting() {
        let nested = NestingObject {
            name: "outer",
            object: test_object(),
        };
        assert_eq!(
            to_string(&nested),
            alloc::format!(r#"{{"name":"outer","object":{TEST_OBJECT}}}"#),
        );

        let array = NestingArray {
            objects: vec![test_object(), test_object()],
        };
        assert_eq!(
            to_string(&array),
            alloc::format!(r#"{{"objects":[{TEST_OBJECT},{TEST_OBJECT}]}}"#),
        );
    }

    #[test]
    fn slots() {
        let mut object = Map::new();
        push_field(&Cow::Borrowed("a"), "text", &mut object);
        push_field(&-1_i64, "number", &mut object);
        push_field(&"b", "text", &mut object);

        assert_eq!(Value::Object(object), json!({ "text": "b", "number": -1 }));
    }

    #[test]
    fn non_finite() {
        assert_eq!(to_value(&[1.0, f64::INFINITY]), json!([1.0, null]));
        assert_eq!(to_value(&f32::NAN), Value::Null);
    }
}
