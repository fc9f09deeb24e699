// operator sugar over put/remove/get
use std::borrow::Borrow;
use std::ops::{Index, SubAssign};

use crate::core::map::IndexedMap;

impl<K: Ord, V> IndexedMap<K, V> {
    /// `put` without the previous value.
    pub fn set(&mut self, key: K, value: V) {
        self.put(key, value);
    }
}

/// `map -= &key` removes `key` if present.
impl<K, V, Q> SubAssign<&Q> for IndexedMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    fn sub_assign(&mut self, key: &Q) {
        self.remove(key);
    }
}

/// Panics if `key` is absent; use [`IndexedMap::get`] when it may be.
impl<K, V, Q> Index<&Q> for IndexedMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not present in IndexedMap"),
        }
    }
}
