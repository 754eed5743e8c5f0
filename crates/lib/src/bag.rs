//! The immutable, path-addressable [`Bag`].
//!
//! Every operation that looks like a mutation returns a new bag and leaves
//! the receiver untouched. The new bag starts as an O(1) clone of the
//! receiver's root map; the write then copies only the maps along the path it
//! touches, so the two bags keep sharing every other branch.
//!
//! # Examples
//!
//! ```
//! # use databag::{Bag, Value};
//! let bag = Bag::empty().put("server.port", 8080).put("server.host", "localhost");
//!
//! assert_eq!(bag.get("server.port"), &Value::Int(8080));
//! assert!(bag.get("server.missing").is_null());
//! assert_eq!(bag.get_typed::<&str>("server.host")?, "localhost");
//!
//! let renamed = bag.rename_key("server.port", "server.listen");
//! assert!(renamed.get("server.port").is_null());
//! assert_eq!(bag.get("server.port"), &Value::Int(8080)); // receiver unchanged
//! # Ok::<(), databag::Error>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    errors::ValueError,
    resolver::PathResolver,
    value::{Map, Value},
};

/// An immutable key-value container addressed by dotted paths.
///
/// Two bags are equal when their root maps are deeply equal, regardless of
/// the order in which keys were inserted. Hashing is consistent with
/// equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bag {
    root: Map,
}

impl Bag {
    /// Wraps `root` without copying it
    pub fn new(root: Map) -> Self {
        Self { root }
    }

    /// Creates a bag with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a bag by pairing keys with values positionally.
    ///
    /// The shorter sequence wins: keys without a value are dropped and extra
    /// values are ignored. Keys are stored verbatim as top-level keys, they
    /// are not parsed as paths.
    ///
    /// ```
    /// # use databag::Bag;
    /// let bag = Bag::from_pairs(["k1", "k2"], [1]);
    /// assert_eq!(bag, Bag::from_pairs(["k1"], [1, 2]));
    /// assert_eq!(bag.len(), 1);
    /// ```
    pub fn from_pairs<K, V>(
        keys: impl IntoIterator<Item = K>,
        values: impl IntoIterator<Item = V>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        keys.into_iter().zip(values).collect()
    }

    /// Returns the root map
    pub fn root(&self) -> &Map {
        &self.root
    }

    /// Unwraps the bag into its root map
    pub fn into_inner(self) -> Map {
        self.root
    }

    /// Returns the number of top-level entries
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns true if the bag has no top-level entries
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns an iterator over the top-level keys in order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.root.keys()
    }

    // ===== Reads =====

    /// Gets the value at `path`, or `Null` when any part of the path is
    /// missing or runs through a non-map value.
    pub fn get(&self, path: &str) -> &Value {
        PathResolver::new(path).deepest_value(&self.root)
    }

    /// Returns true if `path` resolves to a non-null value
    pub fn contains(&self, path: &str) -> bool {
        !self.get(path).is_null()
    }

    /// Gets the value at `path`, substituting `default` only when the value
    /// is `Null`. Falsy values such as `0` or `false` are returned as is.
    pub fn get_or_default(&self, path: &str, default: impl Into<Value>) -> Value {
        match self.get(path) {
            Value::Null => default.into(),
            value => value.clone(),
        }
    }

    /// Gets the value at `path` converted to `T`.
    ///
    /// # Errors
    /// Returns a type mismatch if the stored value is not a `T`. A missing
    /// value is `Null` and therefore also a mismatch; use
    /// [`Self::get_typed_or_default`] to tolerate absence.
    pub fn get_typed<'a, T>(&'a self, path: &str) -> Result<T>
    where
        T: TryFrom<&'a Value, Error = ValueError>,
    {
        T::try_from(self.get(path)).map_err(|err| {
            debug!(path, error = %err, "Typed get failed");
            err.into()
        })
    }

    /// Gets the value at `path` converted to `T`, or `default` when the value
    /// is `Null`.
    ///
    /// # Errors
    /// A non-null value of the wrong type is still a type mismatch; it is
    /// never replaced by the default.
    pub fn get_typed_or_default<'a, T>(&'a self, path: &str, default: T) -> Result<T>
    where
        T: TryFrom<&'a Value, Error = ValueError>,
    {
        if self.get(path).is_null() {
            return Ok(default);
        }
        self.get_typed(path)
    }

    // ===== Derivations =====

    /// Builds a flat bag from the given paths, keyed by each path's last
    /// segment.
    ///
    /// Paths that resolve to nothing still produce a `Null` entry. When two
    /// paths end in the same segment the later one wins.
    ///
    /// ```
    /// # use databag::{Bag, Value};
    /// let bag = Bag::empty().put("c", true).put("nested.nested.nested_key", 2);
    /// let picked = bag.pick(["c", "nested.nested.nested_key"]);
    ///
    /// let expected: Bag = [("c", Value::from(true)), ("nested_key", Value::from(2))]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(picked, expected);
    /// ```
    pub fn pick<I, S>(&self, paths: I) -> Bag
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .map(|path| {
                let resolver = PathResolver::new(path.as_ref());
                (
                    resolver.deepest_key().to_string(),
                    resolver.deepest_value(&self.root).clone(),
                )
            })
            .collect()
    }

    /// Moves the value at `old_path` to `new_path`.
    ///
    /// If nothing lives at `old_path`, `Null` is still written at `new_path`.
    /// A destination blocked by a non-map value is left alone while the
    /// source is still removed.
    pub fn rename_key(&self, old_path: &str, new_path: &str) -> Bag {
        let mut result = self.clone();
        let value = result.get(old_path).clone();
        if value.is_null() {
            debug!(from = old_path, to = new_path, "Renaming a missing key, writing null");
        }
        result.put_in_place(new_path, value);
        result.remove_in_place(old_path);
        result
    }

    /// Replaces the value at `path` with `transform(old)`.
    ///
    /// `transform` runs exactly once, even when the old value is `Null`, and
    /// its result is written like [`Self::put`].
    pub fn transform_value<F>(&self, path: &str, transform: F) -> Bag
    where
        F: FnOnce(Value) -> Value,
    {
        let mut result = self.clone();
        let value = transform(result.get(path).clone());
        result.put_in_place(path, value);
        result
    }

    /// Returns a bag with `value` stored at `path`.
    ///
    /// Missing intermediate maps are created. If an intermediate segment
    /// holds a non-map value the write is dropped and the bag is returned
    /// unchanged.
    pub fn put(&self, path: &str, value: impl Into<Value>) -> Bag {
        let mut result = self.clone();
        result.put_in_place(path, value.into());
        result
    }

    /// Returns a bag without the value at `path`. Removing a missing or
    /// partially existing path returns an equal bag.
    pub fn remove(&self, path: &str) -> Bag {
        let mut result = self.clone();
        result.remove_in_place(path);
        result
    }

    /// Calls `action` once for each element of the list at `path`, in order.
    ///
    /// A missing value or a value that is not a list is treated as an empty
    /// list. The bag itself is returned untouched.
    pub fn do_on<F>(&self, path: &str, action: F) -> &Self
    where
        F: FnMut(&Value),
    {
        if let Some(list) = self.get(path).as_list() {
            list.iter().for_each(action);
        }
        self
    }

    // Only ever applied to a freshly cloned bag before it is handed out.
    fn put_in_place(&mut self, path: &str, value: Value) -> &mut Self {
        PathResolver::new(path).alter_with(&mut self.root, value);
        self
    }

    fn remove_in_place(&mut self, path: &str) -> &mut Self {
        PathResolver::new(path).remove_key_from(&mut self.root);
        self
    }
}

impl From<Map> for Bag {
    fn from(root: Map) -> Self {
        Self::new(root)
    }
}

impl TryFrom<Value> for Bag {
    type Error = ValueError;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Map(root) => Ok(Self::new(root)),
            other => Err(ValueError::NotAMap {
                actual: other.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<serde_json::Value> for Bag {
    type Error = crate::Error;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(json)?)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Bag {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Bag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", std::any::type_name::<Self>(), self.root)
    }
}
