// index-aware scans
use crate::core::map::IndexedMap;

impl<K, V> IndexedMap<K, V> {
    //None on empty, never -1
    pub fn last_index(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// `true` if `predicate` holds for every entry. Stops at the first entry
    /// that fails; an empty map is vacuously `true`.
    pub fn all_indexed<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(usize, &K, &V) -> bool,
    {
        for (index, (key, value)) in self.iter().enumerate() {
            if !predicate(index, key, value) {
                return false;
            }
        }
        true
    }

    pub fn any_indexed<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(usize, &K, &V) -> bool,
    {
        for (index, (key, value)) in self.iter().enumerate() {
            if predicate(index, key, value) {
                return true;
            }
        }
        false
    }

    pub fn for_each_indexed<F>(&self, mut action: F)
    where
        F: FnMut(usize, &K, &V),
    {
        for (index, (key, value)) in self.iter().enumerate() {
            action(index, key, value);
        }
    }

    pub fn for_each_key_indexed<F>(&self, mut action: F)
    where
        F: FnMut(usize, &K),
    {
        for (index, key) in self.keys().enumerate() {
            action(index, key);
        }
    }

    pub fn for_each_value_indexed<F>(&self, mut action: F)
    where
        F: FnMut(usize, &V),
    {
        for (index, value) in self.values().enumerate() {
            action(index, value);
        }
    }

    /// First `Some` produced by `transform`, scanning forward. Entries after
    /// it are not visited.
    pub fn first_not_null_of_indexed<R, F>(&self, mut transform: F) -> Option<R>
    where
        F: FnMut(usize, &K, &V) -> Option<R>,
    {
        for (index, (key, value)) in self.iter().enumerate() {
            if let Some(found) = transform(index, key, value) {
                return Some(found);
            }
        }
        None
    }
}
