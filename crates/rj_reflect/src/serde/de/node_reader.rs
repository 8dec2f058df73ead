use alloc::string::String;

use serde_json::{Map, Value};

use crate::info::NodeKind;
use crate::ops::{FromJson, JsonMut, ListMut, StructMut};
use crate::serde::{DeserializeError, ErrorKind};

/// Deserializes `node` into `value`, in place.
///
/// On failure, the parts of `value` written before the failed node keep
/// their new content. Use [`from_value`] for an all-or-nothing result.
///
/// # Examples
///
/// ```
/// use rj_reflect::serde::pull;
/// use serde_json::json;
///
/// let mut numbers = vec![9, 9, 9];
/// pull(&mut numbers, &json!([1, 2])).unwrap();
/// assert_eq!(numbers, [1, 2]);
///
/// let mut text = String::new();
/// assert!(pull(&mut text, &json!(null)).is_err());
/// ```
///
/// [`from_value`]: crate::serde::from_value
pub fn pull<T: FromJson + ?Sized>(value: &mut T, node: &Value) -> Result<(), DeserializeError> {
    read(value.json_mut(), node)
}

pub(super) fn read(target: JsonMut<'_>, node: &Value) -> Result<(), DeserializeError> {
    crate::cfg::debug! {
        log::trace!("deserialize {} from {}", target.category(), NodeKind::of(node));
    }

    match (target, node) {
        (JsonMut::Boolean(slot), Value::Bool(v)) => *slot = *v,
        (JsonMut::Number(slot), Value::Number(v)) => slot.set_number(v)?,
        (JsonMut::Text(slot), Value::String(v)) => slot.clone_from(v),
        (JsonMut::Sequence(list), Value::Array(items)) => read_list(list, items)?,
        (JsonMut::Record(record), Value::Object(object)) => read_record(record, object)?,
        (target, node) => {
            return Err(ErrorKind::TypeMismatch {
                expected: target.category(),
                found: NodeKind::of(node),
            }
            .into());
        }
    }
    Ok(())
}

fn read_list(list: &mut dyn ListMut, items: &[Value]) -> Result<(), DeserializeError> {
    list.clear();
    list.reserve(items.len());

    for (index, item) in items.iter().enumerate() {
        list.push_with(&mut |element: &mut dyn FromJson| pull(element, item))
            .map_err(|err| err.at_index(index))?;
    }
    Ok(())
}

fn read_record(
    record: &mut dyn StructMut,
    object: &Map<String, Value>,
) -> Result<(), DeserializeError> {
    let info = record.struct_info();
    let mut matched = 0;

    for (index, field) in info.iter().enumerate() {
        let Some(node) = object.get(field.name()) else {
            log::trace!(
                "no key `{}` for `{}`, field left unchanged",
                field.name(),
                info.type_ident(),
            );
            continue;
        };
        matched += 1;

        if let Some(slot) = record.field_at_mut(index) {
            pull(slot, node).map_err(|err| err.at_field(field.name()))?;
        }
    }

    if matched < object.len() && log::log_enabled!(log::Level::Debug) {
        for key in object.keys().filter(|key| info.field(key).is_none()) {
            log::debug!("ignored unknown key `{key}` for `{}`", info.type_ident());
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::{LinkedList, VecDeque};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use serde_json::json;

    use super::pull;
    use crate::derive::Record;
    use crate::info::{Category, NodeKind};
    use crate::serde::ErrorKind;

    #[derive(Record, Default, Debug, PartialEq)]
    struct TestObject {
        number: i32,
        number2: f64,
        numbers: Vec<i32>,
        text: String,
        boolean: bool,
    }

    #[derive(Record, Default, Debug, PartialEq)]
    struct NestingArray {
        name: String,
        objects: Vec<TestObject>,
    }

    #[test]
    fn record() {
        let mut value = TestObject::default();
        let node = json!({
            "boolean": true,
            "text": "test",
            "numbers": [1, 2, 3, 4],
            "number2": 3.141592653589793,
            "number": 42
        });
        pull(&mut value, &node).unwrap();

        assert_eq!(
            value,
            TestObject {
                number: 42,
                number2: core::f64::consts::PI,
                numbers: vec![1, 2, 3, 4],
                text: "test".into(),
                boolean: true,
            }
        );
    }

    #[test]
    fn unknown_and_missing_keys() {
        let mut value = TestObject {
            number: 7,
            text: "keep".into(),
            ..Default::default()
        };
        pull(&mut value, &json!({ "boolean": true, "extra": [null], "number2": 0.5 })).unwrap();

        assert_eq!(value.number, 7);
        assert_eq!(value.text, "keep");
        assert_eq!(value.number2, 0.5);
        assert!(value.boolean);
    }

    #[test]
    fn sequences_are_replaced() {
        let mut list = VecDeque::from([5_u16; 4]);
        pull(&mut list, &json!([1, 2])).unwrap();
        assert_eq!(list, [1, 2]);

        let mut linked: LinkedList<String> = LinkedList::new();
        pull(&mut linked, &json!(["a", "b"])).unwrap();
        assert_eq!(linked.into_iter().collect::<Vec<_>>(), ["a", "b"]);

        let mut nested: Vec<Vec<bool>> = vec![vec![true]];
        pull(&mut nested, &json!([[], [false, true]])).unwrap();
        assert_eq!(nested, [vec![], vec![false, true]]);
    }

    #[test]
    fn array_of_records() {
        let mut value = NestingArray::default();
        let node = json!({
            "name": "list",
            "objects": [{ "number": 1 }, { "number": 2, "text": "second" }]
        });
        pull(&mut value, &node).unwrap();

        assert_eq!(value.name, "list");
        assert_eq!(value.objects.len(), 2);
        assert_eq!(value.objects[0].number, 1);
        assert_eq!(value.objects[1].text, "second");
    }

    #[test]
    fn mismatch() {
        let mut value = TestObject::default();
        let err = pull(&mut value, &json!({ "number": "42" })).unwrap_err();

        assert_eq!(
            err.kind(),
            &ErrorKind::TypeMismatch {
                expected: Category::Numeric,
                found: NodeKind::String,
            }
        );
        assert_eq!(err.path().to_string(), "$.number");

        let err = pull(&mut value, &json!([1])).unwrap_err();
        assert!(err.path().is_root());

        let mut flag = false;
        let err = pull(&mut flag, &json!(null)).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::TypeMismatch {
                expected: Category::Boolean,
                found: NodeKind::Null,
            }
        );
    }

    #[test]
    fn overflow_keeps_written_prefix() {
        let mut value = NestingArray::default();
        let node = json!({
            "name": "written",
            "objects": [{ "number": 1 }, { "numbers": [1, 2.5] }]
        });
        let err = pull(&mut value, &node).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::NumericOverflow { target: "i32", .. }));
        assert_eq!(err.path().to_string(), "$.objects[1].numbers[1]");
        assert_eq!(value.name, "written");
        assert_eq!(value.objects.len(), 1);
    }

    #[test]
    fn narrow_integers() {
        let mut byte = 0_u8;
        assert!(pull(&mut byte, &json!(1.5)).is_err());
        assert!(pull(&mut byte, &json!(300)).is_err());
        pull(&mut byte, &json!(2e2)).unwrap();
        assert_eq!(byte, 200);

        let mut single = 0_f32;
        assert!(pull(&mut single, &json!(1e300)).is_err());
    }
}
