//! An ordered map implemented with an AVL tree.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Index, RangeBounds};

use crate::compare::{ByKey, Compare, Natural};
use crate::cursor::{self, Cursor};
use crate::error::{Error, Result};
use crate::tree::{check_range_bounds, AvlTree, Duplicates};

/// An ordered map implemented with an AVL tree.
///
/// Each key is stored once; inserting an already present key keeps the
/// value that was inserted first.
///
/// ```
/// use avl_cursor_tree::AvlTreeMap;
/// let mut map = AvlTreeMap::new();
/// map.insert(0, "zero");
/// map.insert(1, "one");
/// map.insert(2, "two");
/// assert_eq!(map.get(&1), Some(&"one"));
/// assert!(!map.insert(1, "uno"));
/// assert_eq!(map[&1], "one");
/// map.remove(&1);
/// assert!(map.get(&1).is_none());
/// assert!(map.at(&1).is_err());
/// ```
#[derive(Clone)]
pub struct AvlTreeMap<K, V, C = Natural> {
    tree: AvlTree<(K, V), ByKey<C>>,
}

/// An iterator over the entries of a map.
pub struct Iter<'a, K, V> {
    inner: cursor::Iter<'a, (K, V)>,
}

/// An iterator over the keys of a map.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a map.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An owning iterator over the entries of a map.
pub type IntoIter<K, V, C> = cursor::IntoIter<(K, V), ByKey<C>>;

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Creates an empty map.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, C> AvlTreeMap<K, V, C> {
    /// Creates an empty map whose keys are ordered by `compare`.
    pub fn with_comparator(compare: C) -> Self {
        Self {
            tree: AvlTree::with_comparator(ByKey(compare), Duplicates::Reject),
        }
    }

    /// Returns true if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Clears the map, deallocating all memory.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.tree.iter(),
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Calls `f` on every entry in order by key, with mutable access to the value.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V),
    {
        self.tree.for_each_mut(|(key, value)| f(key, value));
    }

    /// Returns the entry with the smallest key.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.tree.first().map(|(key, value)| (key, value))
    }

    /// Returns the entry with the largest key.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.tree.last().map(|(key, value)| (key, value))
    }

    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.tree.pop_first()
    }

    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.tree.pop_last()
    }

    pub fn begin(&self) -> Cursor {
        self.tree.begin()
    }

    pub fn end(&self) -> Cursor {
        self.tree.end()
    }

    /// Returns the entry under `cursor`, or `None` at the end position.
    pub fn get_at(&self, cursor: &Cursor) -> Option<(&K, &V)> {
        self.tree.get(cursor).map(|(key, value)| (key, value))
    }

    /// Returns the value under `cursor` mutably, or `None` at the end position.
    pub fn get_at_mut(&mut self, cursor: &Cursor) -> Option<&mut V> {
        self.tree.get_mut(cursor).map(|(_, value)| value)
    }

    /// Removes the entry under `cursor`.
    /// Returns a cursor at the next entry.
    pub fn erase_at(&mut self, cursor: Cursor) -> Cursor {
        self.tree.erase_at(cursor)
    }

    /// Removes the entries in `[first, last)`.
    pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> Cursor {
        self.tree.erase_range(first, last)
    }

    /// The tree the map is built on, e.g. to step cursors.
    pub fn as_tree(&self) -> &AvlTree<(K, V), ByKey<C>> {
        &self.tree
    }
}

impl<K, V, C: Compare<K>> AvlTreeMap<K, V, C> {
    fn key_compare(&self) -> &C {
        &self.tree.comparator().0
    }

    /// Inserts a key-value pair into the map.
    /// Returns false, dropping the pair, if the key is already present.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.tree.insert((key, value))
    }

    /// Returns a cursor at the entry with the given key, or the end cursor.
    pub fn find(&self, key: &K) -> Cursor {
        let cursor = self.lower_bound(key);
        match self.tree.get(&cursor) {
            Some((found, _)) if !self.key_compare().less(key, found) => cursor,
            _ => self.tree.end(),
        }
    }

    /// Returns a cursor at the first entry whose key is not less than `key`.
    pub fn lower_bound(&self, key: &K) -> Cursor {
        let compare = self.key_compare();
        self.tree
            .cursor_at(self.tree.partition_point(|(other, _)| compare.less(other, key)))
    }

    /// Returns a cursor at the first entry whose key is greater than `key`.
    pub fn upper_bound(&self, key: &K) -> Cursor {
        let compare = self.key_compare();
        self.tree
            .cursor_at(self.tree.partition_point(|(other, _)| !compare.less(key, other)))
    }

    /// Returns a reference to the value corresponding to the key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// Returns references to the key-value pair corresponding to the key.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.get_at(&self.find(key))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let cursor = self.find(key);
        self.get_at_mut(&cursor)
    }

    /// Returns true if the map contains a value for the specified key.
    pub fn contains_key(&self, key: &K) -> bool {
        !self.find(key).is_end()
    }

    /// Returns the value for `key`, failing if the key is absent.
    pub fn at(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns the value for `key` mutably, failing if the key is absent.
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V> {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns the value for `key`, inserting `default()` first if the key is
    /// absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let mut cursor = self.find(&key);
        if cursor.is_end() {
            let value = default();
            cursor = self.lower_bound(&key);
            self.tree.insert((key, value));
            cursor.move_prev(&self.tree);
        }
        match self.tree.get_mut(&cursor) {
            Some((_, value)) => value,
            None => unreachable!("entry was found or inserted"),
        }
    }

    /// Removes a key from the map.
    /// Returns the value at the key if the key was previously in the map.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map.
    /// Returns the stored key and value if the key was previously in the map.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let cursor = self.find(key);
        self.tree.take_at(cursor)
    }

    /// Gets an iterator over a sub-range of entries in the map, sorted by key.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`.
    /// Panics if range `start == end` and both bounds are `Excluded`.
    pub fn range<R>(&self, range: R) -> Iter<'_, K, V>
    where
        R: RangeBounds<K>,
    {
        let compare = self.key_compare();
        check_range_bounds::<K, R, _>(&range, |a, b| compare.less(a, b));
        Iter {
            inner: self.tree.range_by::<K, R, _, _>(
                &range,
                |(key, _), bound| compare.less(key, bound),
                |bound, (key, _)| compare.less(bound, key),
            ),
        }
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        self.tree.check_consistency()
    }
}

impl<K: Ord, V> Default for AvlTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: Compare<K>> Index<&K> for AvlTreeMap<K, V, C> {
    type Output = V;

    /// Returns a reference to the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for AvlTreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<K: Eq, V: Eq, C> Eq for AvlTreeMap<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for AvlTreeMap<K, V, C> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for AvlTreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a AvlTreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for AvlTreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, C>;
    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

// Auto derived clone seems to have an invalid type bound of K: Clone
impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}
