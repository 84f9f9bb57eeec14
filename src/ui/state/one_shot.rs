// SPDX-License-Identifier: MPL-2.0
//! Monotonic per-key flags.

use std::collections::BTreeMap;

/// Tracks keys that start unset and can only ever become set.
///
/// Used by the reveal gates: once an element is marked, it is no longer
/// watched and nothing can clear the mark.
#[derive(Debug, Clone)]
pub struct OneShot<K: Ord> {
    flags: BTreeMap<K, bool>,
}

impl<K: Ord> Default for OneShot<K> {
    fn default() -> Self {
        Self {
            flags: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> OneShot<K> {
    /// Starts watching `keys`, all unset.
    pub fn watch(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            flags: keys.into_iter().map(|key| (key, false)).collect(),
        }
    }

    /// Sets the flag for `key`. Returns `true` only on the first call for a
    /// watched key.
    pub fn fire(&mut self, key: K) -> bool {
        match self.flags.get_mut(&key) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_fired(&self, key: K) -> bool {
        self.flags.get(&key).copied().unwrap_or(false)
    }

    /// Keys still waiting to fire, in key order.
    pub fn pending(&self) -> impl Iterator<Item = K> + '_ {
        self.flags
            .iter()
            .filter(|(_, fired)| !**fired)
            .map(|(key, _)| *key)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.flags.values().filter(|fired| !**fired).count()
    }
}
