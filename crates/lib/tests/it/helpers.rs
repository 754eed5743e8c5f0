use databag::Bag;
use serde_json::json;

// ==========================
// FIXTURES
// ==========================
// Each fixture is a bag built from a parsed JSON object, the way host code
// usually hands data to a bag.

/// Builds a bag from a JSON object literal.
pub fn bag_from_json(json: serde_json::Value) -> Bag {
    Bag::try_from(json).expect("fixture must be a JSON object")
}

/// Two levels of nesting plus a top-level scalar.
pub fn nested_keys() -> Bag {
    bag_from_json(json!({
        "nested_1": { "nested_2": { "key": 1 } },
        "simplest": "abcd"
    }))
}

/// A shallow key next to a deeply nested one.
pub fn pick_from() -> Bag {
    bag_from_json(json!({
        "a": 1,
        "b": "text",
        "c": true,
        "nested": { "nested": { "nested_key": 2 } }
    }))
}

/// A populated list, a null and an empty list.
pub fn arrays() -> Bag {
    bag_from_json(json!({
        "array": [1, 2, 3],
        "null_array": null,
        "empty_array": [],
        "not_an_array": "abc"
    }))
}

/// A float at the top and one nested key.
pub fn key_renaming() -> Bag {
    bag_from_json(json!({
        "d": 9.2,
        "nested": { "nested_key": 2 }
    }))
}

/// A scalar next to a nested map that has a key to remove.
pub fn key_removal_nested() -> Bag {
    bag_from_json(json!({
        "value0": 0,
        "value1": { "value": "abc", "removed": 1 }
    }))
}
