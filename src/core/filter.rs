// conditional bulk removal
use log::trace;

use crate::core::map::IndexedMap;

impl<K, V> IndexedMap<K, V> {
    /// Removes every entry for which `predicate` holds and returns how many
    /// were removed.
    ///
    /// Entries are visited from the last index down to 0, so removing one
    /// never shifts an entry that is still to be visited: the index passed to
    /// `predicate` is the entry's index before the call. Survivors keep their
    /// relative order.
    pub fn remove_all_indexed<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(usize, &K, &V) -> bool,
    {
        let before = self.len();
        for index in (0..before).rev() {
            if predicate(index, &self.keys[index], &self.values[index]) {
                self.keys.remove(index);
                self.values.remove(index);
            }
        }
        let removed = before - self.len();
        trace!("remove_all_indexed: removed {removed} of {before} entries");
        removed
    }

    /// Keeps only the entries for which `predicate` holds. Same visiting
    /// order as [`IndexedMap::remove_all_indexed`].
    pub fn retain_all_indexed<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(usize, &K, &V) -> bool,
    {
        let removed = self.remove_all_indexed(|index, key, value| !predicate(index, key, value));
        trace!("retain_all_indexed: {} entries kept", self.len());
        removed
    }
}
