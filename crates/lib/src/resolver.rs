//! Path resolution and path mutation over nested maps.
//!
//! [`PathResolver`] walks a [`KeyPath`] through a root [`Map`]. Reads stop at
//! the first missing segment or non-map value and report [`Value::Null`].
//! Writes rebuild the spine of maps from the root down to the deepest key;
//! because [`Map`] is copy-on-write, only the maps along that spine are
//! copied and every other branch stays shared with the original root.
//!
//! Absence is never an error. A write whose spine runs into a scalar, or a
//! removal whose spine is incomplete, does nothing at all.

use tracing::trace;

use crate::{
    path::KeyPath,
    value::{Map, NULL, Value},
};

/// Resolves one dotted path against root maps.
#[derive(Debug, Clone)]
pub struct PathResolver<'p> {
    path: KeyPath<'p>,
}

impl<'p> PathResolver<'p> {
    /// Parses `path` for resolution
    pub fn new(path: &'p str) -> Self {
        Self {
            path: KeyPath::parse(path),
        }
    }

    /// Returns the parsed path
    pub fn path(&self) -> &KeyPath<'p> {
        &self.path
    }

    /// Returns the last segment of the path
    pub fn deepest_key(&self) -> &'p str {
        self.path.deepest_key()
    }

    /// Looks up the value at the path, or `Null` if any segment is missing or
    /// passes through a value that is not a map.
    pub fn deepest_value<'m>(&self, root: &'m Map) -> &'m Value {
        self.parent(root)
            .and_then(|parent| parent.get(self.deepest_key()))
            .unwrap_or(&NULL)
    }

    /// Returns the map holding the deepest key, if the whole spine exists.
    fn parent<'m>(&self, root: &'m Map) -> Option<&'m Map> {
        let mut current = root;
        for segment in self.path.parents() {
            current = current.get(segment)?.as_map()?;
        }
        Some(current)
    }

    /// Mutable counterpart of [`Self::parent`]. Unshares each map on the way.
    fn parent_mut<'m>(&self, root: &'m mut Map) -> Option<&'m mut Map> {
        let mut current = root;
        for segment in self.path.parents() {
            current = current.get_mut(segment)?.as_map_mut()?;
        }
        Some(current)
    }

    /// Makes sure every intermediate segment is a map and returns the map
    /// that holds the deepest key.
    ///
    /// Missing or null intermediates become empty maps. If an intermediate
    /// holds any other value the spine cannot be built: `None` is returned and
    /// `root` is left as it was.
    pub fn ensure_path<'m>(&self, root: &'m mut Map) -> Option<&'m mut Map> {
        // Only a missing segment creates maps, and nothing below it can be
        // blocked, so checking first keeps a failed walk free of side effects.
        if let Some(segment) = self.blocking_segment(root) {
            trace!(path = %self.path, segment, "Spine blocked by a non-map value");
            return None;
        }
        let mut current = root;
        for segment in self.path.parents() {
            current = current.child_map_or_insert(segment)?;
        }
        Some(current)
    }

    /// Finds the first intermediate segment whose value is neither absent,
    /// null, nor a map.
    fn blocking_segment(&self, root: &Map) -> Option<&'p str> {
        let mut current = root;
        for segment in self.path.parents() {
            match current.get(segment) {
                None | Some(Value::Null) => return None,
                Some(Value::Map(map)) => current = map,
                Some(_) => return Some(*segment),
            }
        }
        None
    }

    /// Writes `value` at the path, creating the spine as needed and
    /// overwriting whatever was stored there before, whatever its type.
    ///
    /// Returns false, without touching `root`, when the spine is blocked by a
    /// non-map value.
    pub fn alter_with(&self, root: &mut Map, value: Value) -> bool {
        match self.ensure_path(root) {
            Some(parent) => {
                parent.insert(self.deepest_key(), value);
                true
            }
            None => false,
        }
    }

    /// Removes the value at the path and returns it.
    ///
    /// A missing or partially existing path is a no-op that returns `None`
    /// and leaves `root` sharing its storage.
    pub fn remove_key_from(&self, root: &mut Map) -> Option<Value> {
        let key = self.deepest_key();
        let present = self
            .parent(root)
            .is_some_and(|parent| parent.contains_key(key));
        if !present {
            trace!(path = %self.path, "Nothing to remove");
            return None;
        }
        self.parent_mut(root)?.remove(key)
    }
}
