// get-or-put and sentinel-default helpers
use std::borrow::Borrow;
use std::mem;

use log::trace;

use crate::core::map::IndexedMap;

impl<K: Ord, V> IndexedMap<K, V> {
    /// Returns the value under `key`, inserting `supplier()` first if the key
    /// is absent. `supplier` runs at most once and only on absence.
    pub fn get_or_put<F>(&mut self, key: K, supplier: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let index = match self.search(&key) {
            Ok(index) => index,
            Err(index) => {
                let value = supplier();
                self.keys.insert(index, key);
                self.values.insert(index, value);
                index
            }
        };
        &mut self.values[index]
    }

    pub fn get_with_default<Q>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: Clone,
    {
        match self.get(key) {
            Some(value) => value.clone(),
            None => default,
        }
    }

    /// Stores `value` under `key`, treating `default` as "no entry".
    ///
    /// Putting the default removes the entry instead of storing it, even when
    /// the stored value already is the default, and an absent key reads as
    /// `default`.
    ///
    /// Returns what `key` held before the call: the old value if present,
    /// otherwise `default`. When a non-default `value` equals the stored value
    /// nothing is written and `value` itself is handed back.
    pub fn put_with_default(&mut self, key: K, value: V, default: V) -> V
    where
        V: PartialEq,
    {
        match self.search(&key) {
            Ok(index) => {
                //default is never stored, even if it was put explicitly before
                if value == default {
                    self.keys.remove(index);
                    let old = self.values.remove(index);
                    trace!(
                        "put_with_default: dropped entry at index {index}, {} entries left",
                        self.len()
                    );
                    old
                } else if value == self.values[index] {
                    value
                } else {
                    mem::replace(&mut self.values[index], value)
                }
            }
            Err(index) => {
                if value != default {
                    self.keys.insert(index, key);
                    self.values.insert(index, value);
                }
                default
            }
        }
    }
}

/// [`IndexedMap::get_with_default`] for an optional map: a missing map reads
/// as empty and yields `default`.
pub fn get_with_default<K, V, Q>(map: Option<&IndexedMap<K, V>>, key: &Q, default: V) -> V
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
    V: Clone,
{
    match map {
        Some(map) => map.get_with_default(key, default),
        None => default,
    }
}
