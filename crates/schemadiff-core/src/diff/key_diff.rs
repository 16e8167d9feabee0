//! Key-set partition of two maps.

use std::collections::BTreeMap;

/// Keys of two maps split into right-only, left-only and shared.
///
/// Values are borrowed from the inputs; nothing is cloned.
#[derive(Debug, Clone, PartialEq)]
pub struct MapKeyDiff<'a, K, V> {
    /// Entries only in the right map
    pub increased: BTreeMap<&'a K, &'a V>,
    /// Entries only in the left map
    pub missing: BTreeMap<&'a K, &'a V>,
    /// Keys in both maps, ascending
    pub shared_keys: Vec<&'a K>,
}

impl<'a, K: Ord, V> MapKeyDiff<'a, K, V> {
    /// Partition the keys of `left` and `right`. An absent map counts as empty.
    pub fn diff(left: Option<&'a BTreeMap<K, V>>, right: Option<&'a BTreeMap<K, V>>) -> Self {
        let mut increased = BTreeMap::new();
        let mut missing = BTreeMap::new();
        let mut shared_keys = Vec::new();

        if let Some(left) = left {
            for (key, value) in left {
                if right.is_some_and(|right| right.contains_key(key)) {
                    shared_keys.push(key);
                } else {
                    missing.insert(key, value);
                }
            }
        }

        if let Some(right) = right {
            for (key, value) in right {
                if !left.is_some_and(|left| left.contains_key(key)) {
                    increased.insert(key, value);
                }
            }
        }

        Self {
            increased,
            missing,
            shared_keys,
        }
    }
}
