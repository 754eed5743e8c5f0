//! Building bags from maps, key/value sequences and JSON.

use databag::{Bag, Map, Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_empty_bag() {
    let bag = Bag::empty();

    assert!(bag.is_empty());
    assert_eq!(bag.len(), 0);
    assert_eq!(bag, Bag::default());
    assert_eq!(bag, Bag::new(Map::new()));
}

#[test]
fn test_new_wraps_map_without_copying() {
    let root: Map = [("key1", Value::from(1)), ("key2", Value::from("a"))]
        .into_iter()
        .collect();
    let bag = Bag::new(root.clone());

    assert!(bag.root().ptr_eq(&root));
    assert_eq!(bag.into_inner(), root);
}

#[test]
fn test_from_pairs_matches_map_construction() {
    let from_pairs = Bag::from_pairs(["key1", "key2"], [Value::from(1), Value::from("a")]);
    let from_map: Bag = [("key1", Value::from(1)), ("key2", Value::from("a"))]
        .into_iter()
        .collect();

    assert_eq!(from_pairs, from_map);
}

#[test]
fn test_from_pairs_ignores_extra_values() {
    let bag = Bag::from_pairs(["key1"], [Value::from(1), Value::from("a")]);

    assert_eq!(bag, Bag::from_pairs(["key1"], [1]));
    assert_eq!(bag.len(), 1);
}

#[test]
fn test_from_pairs_drops_keys_without_values() {
    let bag = Bag::from_pairs(["key1", "key2"], [1]);

    assert_eq!(bag, Bag::from_pairs(["key1"], [1]));
    // A dropped key is absent, not a stored null
    assert!(!bag.root().contains_key("key2"));
}

#[test]
fn test_from_pairs_keys_are_not_paths() {
    let bag = Bag::from_pairs(["a.b"], [1]);

    assert!(bag.root().contains_key("a.b"));
    assert!(bag.get("a.b").is_null());
    assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["a.b"]);
}

#[test]
fn test_from_json_object() {
    let bag = nested_keys();

    assert_eq!(bag.len(), 2);
    assert_eq!(bag.get("simplest"), &Value::from("abcd"));
    assert!(bag.get("nested_1").is_map());
}

#[test]
fn test_from_json_rejects_non_objects() {
    let err = Bag::try_from(json!([1, 2, 3])).unwrap_err();
    assert!(err.is_serialization_error());
    assert_eq!(err.module(), "serialize");

    assert!(Bag::try_from(json!("text")).is_err());
}

#[test]
fn test_from_value_requires_map() {
    let err = Bag::try_from(Value::from(vec![1, 2])).unwrap_err();
    assert!(err.is_not_a_map());
    assert_eq!(err.actual(), "list");

    let map: Map = [("k", 1)].into_iter().collect();
    let bag = Bag::try_from(Value::from(map.clone())).unwrap();
    assert_eq!(bag, Bag::new(map));
}
