//! Path lookups, defaults and typed gets.

use databag::{Bag, List, Map, Value};

use crate::helpers::*;

#[test]
fn test_get_deeply_held_value() {
    let bag = nested_keys();

    assert_eq!(bag.get("nested_1.nested_2.key"), &Value::Int(1));
    assert_eq!(bag.get_typed::<i64>("nested_1.nested_2.key").unwrap(), 1);
}

#[test]
fn test_get_shallow_map() {
    let bag = nested_keys();

    let inner: Map = [("key", 1)].into_iter().collect();
    let expected: Map = [("nested_2", inner)].into_iter().collect();
    assert_eq!(bag.get("nested_1"), &Value::Map(expected));
}

#[test]
fn test_get_simplest_value() {
    let bag = nested_keys();

    assert_eq!(bag.get("simplest"), &Value::from("abcd"));
    assert!(*bag.get("simplest") == "abcd");
}

#[test]
fn test_get_empty_path_is_null() {
    let bag = nested_keys();

    assert!(bag.get("").is_null());
    assert!(bag.get(".").is_null());
}

#[test]
fn test_get_missing_is_null() {
    let bag = nested_keys();

    assert!(bag.get("unknown").is_null());
    assert!(bag.get("nested_1.unknown.key").is_null());
    // Descending through a scalar is absence, not an error
    assert!(bag.get("simplest.deeper").is_null());
    assert!(!bag.contains("unknown"));
    assert!(bag.contains("nested_1.nested_2"));
}

#[test]
fn test_get_trailing_dot_addresses_parent_key() {
    let bag = nested_keys();

    assert_eq!(bag.get("simplest."), bag.get("simplest"));
}

#[test]
fn test_get_or_default_on_missing() {
    let bag = nested_keys();

    assert_eq!(bag.get_or_default("unknown", 9), Value::Int(9));
    assert_eq!(bag.get_or_default("simplest", 9), Value::from("abcd"));
}

#[test]
fn test_get_or_default_keeps_falsy_values() {
    let bag = Bag::empty()
        .put("zero", 0)
        .put("no", false)
        .put("blank", "")
        .put("nothing", Value::Null);

    assert_eq!(bag.get_or_default("zero", 9), Value::Int(0));
    assert_eq!(bag.get_or_default("no", true), Value::Bool(false));
    assert_eq!(bag.get_or_default("blank", "x"), Value::from(""));
    // A stored null is replaced just like a missing key
    assert_eq!(bag.get_or_default("nothing", 9), Value::Int(9));
}

#[test]
fn test_get_typed_list() {
    let bag = arrays();

    let list = bag.get_typed::<List>("array").unwrap();
    assert_eq!(list, [1, 2, 3].into_iter().collect::<List>());

    let items = bag.get_typed::<Vec<Value>>("array").unwrap();
    assert_eq!(items, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn test_get_typed_scalars() {
    let bag = pick_from();

    assert_eq!(bag.get_typed::<i64>("a").unwrap(), 1);
    assert_eq!(bag.get_typed::<String>("b").unwrap(), "text");
    assert_eq!(bag.get_typed::<&str>("b").unwrap(), "text");
    assert!(bag.get_typed::<bool>("c").unwrap());
    assert_eq!(bag.get_typed::<i64>("nested.nested.nested_key").unwrap(), 2);
    assert_eq!(key_renaming().get_typed::<f64>("d").unwrap(), 9.2);
}

#[test]
fn test_get_typed_mismatch_is_an_error() {
    let bag = pick_from();

    let err = bag.get_typed::<i64>("b").unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(err.module(), "value");

    // An int is not a float
    assert!(bag.get_typed::<f64>("a").unwrap_err().is_type_error());
    assert!(bag.get_typed::<Map>("a").unwrap_err().is_type_error());
}

#[test]
fn test_get_typed_missing_is_an_error() {
    let bag = arrays();

    assert!(bag.get_typed::<List>("unknown").unwrap_err().is_type_error());
    assert!(bag.get_typed::<List>("null_array").unwrap_err().is_type_error());
}

#[test]
fn test_get_typed_or_default_on_null() {
    let bag = arrays();
    let fallback: List = [1].into_iter().collect();

    assert_eq!(
        bag.get_typed_or_default("null_array", fallback.clone()).unwrap(),
        fallback
    );
    assert_eq!(
        bag.get_typed_or_default("unknown", fallback.clone()).unwrap(),
        fallback
    );
    assert_eq!(
        bag.get_typed_or_default("array", fallback).unwrap(),
        [1, 2, 3].into_iter().collect::<List>()
    );
}

#[test]
fn test_get_typed_or_default_mismatch_is_not_defaulted() {
    let bag = arrays();

    let err = bag
        .get_typed_or_default("not_an_array", List::new())
        .unwrap_err();
    assert!(err.is_type_error());
}
