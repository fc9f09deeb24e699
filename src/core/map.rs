// storage + primitive contract
use std::borrow::Borrow;
use std::fmt;
use std::iter::Zip;
use std::mem;
use std::slice;
use std::vec;

use crate::core::error::{MapError, Result};

/// Ordered key -> value map stored as two parallel arrays.
///
/// Keys are kept in ascending `Ord` order, so lookup is a binary search and
/// every entry also has a position `0..len()`. Insertion and removal shift the
/// entries that follow, which keeps positions dense: after `remove_at(i)` the
/// entry that used to be at `i + 1` is at `i`.
///
/// ```
/// use indexed_map::IndexedMap;
///
/// let mut map = IndexedMap::new();
/// map.put("b", 2);
/// map.put("a", 1);
///
/// assert_eq!(map.key_at(0), Ok(&"a"));
/// assert_eq!(map.get(&"b"), Some(&2));
/// assert_eq!(map.index_of_key(&"c"), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IndexedMap<K, V> {
    //keys[i] and values[i] are always the same entry
    pub(crate) keys: Vec<K>,
    pub(crate) values: Vec<V>,
}

impl<K, V> IndexedMap<K, V> {
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.keys.capacity().min(self.values.capacity())
    }

    pub fn reserve(&mut self, additional: usize) {
        self.keys.reserve(additional);
        self.values.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.keys.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    fn out_of_range(&self, index: usize) -> MapError {
        MapError::IndexOutOfRange {
            index,
            len: self.len(),
        }
    }

    pub fn key_at(&self, index: usize) -> Result<&K> {
        self.keys.get(index).ok_or_else(|| self.out_of_range(index))
    }

    pub fn value_at(&self, index: usize) -> Result<&V> {
        self.values.get(index).ok_or_else(|| self.out_of_range(index))
    }

    pub fn value_at_mut(&mut self, index: usize) -> Result<&mut V> {
        let err = self.out_of_range(index);
        self.values.get_mut(index).ok_or(err)
    }

    /// Replaces the value at `index` without touching its key, returning the
    /// previous value.
    pub fn set_value_at(&mut self, index: usize, value: V) -> Result<V> {
        let slot = self.value_at_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Removes the entry at `index`. Every later entry moves down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<(K, V)> {
        if index >= self.len() {
            return Err(self.out_of_range(index));
        }
        Ok((self.keys.remove(index), self.values.remove(index)))
    }

    //linear scan, first match wins
    pub fn index_of_value(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.values.iter().position(|v| v == value)
    }

    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.index_of_value(value).is_some()
    }

    pub fn iter(&self) -> Zip<slice::Iter<'_, K>, slice::Iter<'_, V>> {
        self.keys.iter().zip(self.values.iter())
    }

    pub fn iter_mut(&mut self) -> Zip<slice::Iter<'_, K>, slice::IterMut<'_, V>> {
        self.keys.iter().zip(self.values.iter_mut())
    }

    pub fn keys(&self) -> slice::Iter<'_, K> {
        self.keys.iter()
    }

    pub fn values(&self) -> slice::Iter<'_, V> {
        self.values.iter()
    }

    pub fn values_mut(&mut self) -> slice::IterMut<'_, V> {
        self.values.iter_mut()
    }
}

impl<K: Ord, V> IndexedMap<K, V> {
    //Ok(i): key lives at i. Err(i): key would be inserted at i
    pub(crate) fn search<Q>(&self, key: &Q) -> std::result::Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.keys.binary_search_by(|probe| probe.borrow().cmp(key))
    }

    pub fn index_of_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).ok()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_ok()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index_of_key(key).map(|index| &self.values[index])
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.index_of_key(key)?;
        Some(&mut self.values[index])
    }

    /// Inserts `value` under `key`, overwriting any existing value.
    ///
    /// Returns the value previously stored under `key`. On overwrite the
    /// stored key is kept and the entry keeps its index.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            Ok(index) => Some(mem::replace(&mut self.values[index], value)),
            Err(index) => {
                self.keys.insert(index, key);
                self.values.insert(index, value);
                None
            }
        }
    }

    //absent key: no-op
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.index_of_key(key)?;
        self.keys.remove(index);
        Some(self.values.remove(index))
    }

    /// Puts every entry of `entries`; later entries win on duplicate keys.
    pub fn put_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = entries.into_iter();
        self.reserve(entries.size_hint().0);
        for (key, value) in entries {
            self.put(key, value);
        }
    }
}

impl<K, V> Default for IndexedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IndexedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> Extend<(K, V)> for IndexedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for IndexedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.put_all(iter);
        map
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for IndexedMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> IntoIterator for IndexedMap<K, V> {
    type Item = (K, V);
    type IntoIter = Zip<vec::IntoIter<K>, vec::IntoIter<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.values)
    }
}

impl<'a, K, V> IntoIterator for &'a IndexedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
