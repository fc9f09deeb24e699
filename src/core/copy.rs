// copy with per-value transform
use log::debug;

use crate::core::map::IndexedMap;

impl<K: Clone, V> IndexedMap<K, V> {
    /// New map with the same keys in the same order, each value replaced by
    /// `copy_value(&old)`. `self` is left untouched.
    ///
    /// ```
    /// use indexed_map::IndexedMap;
    ///
    /// let map = IndexedMap::from([("a", vec![1]), ("b", vec![2, 3])]);
    /// let lens = map.copy(|v| vec![v.len() as i32]);
    ///
    /// assert_eq!(lens.get(&"b"), Some(&vec![2]));
    /// ```
    pub fn copy<F>(&self, mut copy_value: F) -> IndexedMap<K, V>
    where
        F: FnMut(&V) -> V,
    {
        let copied = IndexedMap {
            keys: self.keys.clone(),
            values: self.values.iter().map(|value| copy_value(value)).collect(),
        };
        debug!("copy: {} entries", copied.len());
        copied
    }
}
