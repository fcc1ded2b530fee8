//! An ordered set implemented with an AVL tree.

use std::fmt;
use std::ops::RangeBounds;

use crate::compare::{Compare, Natural};
use crate::cursor::{Cursor, IntoIter, Iter};
use crate::error::Result;
use crate::tree::{AvlTree, Duplicates};

/// An ordered set implemented with an AVL tree.
///
/// ```
/// use avl_cursor_tree::AvlTreeSet;
/// let mut set = AvlTreeSet::new();
/// set.insert(0);
/// set.insert(1);
/// set.insert(2);
/// assert_eq!(set.get(&1), Some(&1));
/// set.remove(&1);
/// assert!(set.get(&1).is_none());
/// ```
#[derive(Clone)]
pub struct AvlTreeSet<T, C = Natural> {
    tree: AvlTree<T, C>,
}

/// A lazy iterator for the values in the union of two sets.
///
/// This `struct` is created by the [`union`] method on [`AvlTreeSet`].
///
/// [`union`]: AvlTreeSet::union
pub struct Union<'a, T, C> {
    compare: &'a C,
    lhs_peek: Option<&'a T>,
    rhs_peek: Option<&'a T>,
    lhs_iter: Iter<'a, T>,
    rhs_iter: Iter<'a, T>,
}

/// A lazy iterator for the values in the intersection of two sets.
///
/// This `struct` is created by the [`intersection`] method on [`AvlTreeSet`].
///
/// [`intersection`]: AvlTreeSet::intersection
pub struct Intersection<'a, T, C> {
    compare: &'a C,
    lhs_peek: Option<&'a T>,
    rhs_peek: Option<&'a T>,
    lhs_iter: Iter<'a, T>,
    rhs_iter: Iter<'a, T>,
}

impl<T: Ord> AvlTreeSet<T> {
    /// Creates an empty set.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> AvlTreeSet<T, C> {
    /// Creates an empty set ordered by `compare`.
    pub fn with_comparator(compare: C) -> Self {
        Self {
            tree: AvlTree::with_comparator(compare, Duplicates::Reject),
        }
    }

    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Clears the set, deallocating all memory.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Gets an iterator over the values of the set in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.tree.iter()
    }

    /// Returns the smallest value.
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns the largest value.
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Returns the smallest value, failing on an empty set.
    pub fn front(&self) -> Result<&T> {
        self.tree.front()
    }

    /// Returns the largest value, failing on an empty set.
    pub fn back(&self) -> Result<&T> {
        self.tree.back()
    }

    pub fn pop_first(&mut self) -> Option<T> {
        self.tree.pop_first()
    }

    pub fn pop_last(&mut self) -> Option<T> {
        self.tree.pop_last()
    }

    pub fn begin(&self) -> Cursor {
        self.tree.begin()
    }

    pub fn end(&self) -> Cursor {
        self.tree.end()
    }

    /// Returns the value under `cursor`, or `None` at the end position.
    pub fn get_at(&self, cursor: &Cursor) -> Option<&T> {
        self.tree.get(cursor)
    }

    /// Removes the value under `cursor`.
    /// Returns a cursor at the next value.
    pub fn erase_at(&mut self, cursor: Cursor) -> Cursor {
        self.tree.erase_at(cursor)
    }

    /// Removes the values in `[first, last)`.
    pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> Cursor {
        self.tree.erase_range(first, last)
    }

    /// The tree the set is built on, e.g. to step cursors.
    pub fn as_tree(&self) -> &AvlTree<T, C> {
        &self.tree
    }
}

impl<T, C: Compare<T>> AvlTreeSet<T, C> {
    /// Inserts a value into the set.
    /// Returns false if an equal value was already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.tree.insert(value)
    }

    /// Returns a reference to the value in the set that is equal to the given value.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.tree.get(&self.tree.find(value))
    }

    /// Returns true if the set contains a value.
    pub fn contains(&self, value: &T) -> bool {
        self.tree.contains(value)
    }

    /// Removes a value from the set.
    /// Returns whether the value was previously in the set.
    pub fn remove(&mut self, value: &T) -> bool {
        self.tree.erase(value) > 0
    }

    /// Removes a value from the set.
    /// Returns the value if it was previously in the set.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let cursor = self.tree.find(value);
        self.tree.take_at(cursor)
    }

    pub fn find(&self, value: &T) -> Cursor {
        self.tree.find(value)
    }

    pub fn lower_bound(&self, value: &T) -> Cursor {
        self.tree.lower_bound(value)
    }

    pub fn upper_bound(&self, value: &T) -> Cursor {
        self.tree.upper_bound(value)
    }

    /// Gets an iterator over a sub-range of values in the set in sorted order.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`.
    /// Panics if range `start == end` and both bounds are `Excluded`.
    pub fn range<R>(&self, range: R) -> Iter<'_, T>
    where
        R: RangeBounds<T>,
    {
        self.tree.range(range)
    }

    /// Gets an iterator over the values of the union set,
    /// i.e., all values in `self` or `other`, without duplicates,
    /// in ascending order.
    pub fn union<'a>(&'a self, other: &'a Self) -> Union<'a, T, C> {
        Union::new(self, other)
    }

    /// Gets an iterator over the values of the intersection set,
    /// i.e., all values that are both in `self` and `other`,
    /// in ascending order.
    pub fn intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, T, C> {
        Intersection::new(self, other)
    }

    /// Returns `true` if `self` has no elements in common with `other`.
    /// This is equivalent to checking for an empty intersection.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.intersection(other).next().is_none()
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        self.tree.check_consistency()
    }
}

impl<T: Ord> Default for AvlTreeSet<T> {
    /// Creates an empty set.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq, C> PartialEq for AvlTreeSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<T: Eq, C> Eq for AvlTreeSet<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for AvlTreeSet<T, C> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTreeSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for AvlTreeSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;
    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<T, C: Compare<T>> Extend<T> for AvlTreeSet<T, C> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.tree.extend(iter);
    }
}

impl<'a, T, C> Extend<&'a T> for AvlTreeSet<T, C>
where
    T: Copy + 'a,
    C: Compare<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T, C: Compare<T>> Union<'a, T, C> {
    fn new(lhs: &'a AvlTreeSet<T, C>, rhs: &'a AvlTreeSet<T, C>) -> Self {
        let mut lhs_iter = lhs.iter();
        let mut rhs_iter = rhs.iter();
        Self {
            compare: lhs.tree.comparator(),
            lhs_peek: lhs_iter.next(),
            rhs_peek: rhs_iter.next(),
            lhs_iter,
            rhs_iter,
        }
    }
}

// Auto derived clone seems to have an invalid type bound of T: Clone
impl<'a, T, C> Clone for Union<'a, T, C> {
    fn clone(&self) -> Self {
        Self {
            compare: self.compare,
            lhs_peek: self.lhs_peek,
            rhs_peek: self.rhs_peek,
            lhs_iter: self.lhs_iter.clone(),
            rhs_iter: self.rhs_iter.clone(),
        }
    }
}

impl<'a, T: fmt::Debug, C: Compare<T>> fmt::Debug for Union<'a, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Union")?;
        f.debug_set().entries(self.clone()).finish()
    }
}

impl<'a, T, C: Compare<T>> Iterator for Union<'a, T, C> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        match (self.lhs_peek, self.rhs_peek) {
            (None, None) => None,
            (Some(lhs), None) => {
                self.lhs_peek = self.lhs_iter.next();
                Some(lhs)
            }
            (None, Some(rhs)) => {
                self.rhs_peek = self.rhs_iter.next();
                Some(rhs)
            }
            (Some(lhs), Some(rhs)) => {
                if self.compare.less(lhs, rhs) {
                    self.lhs_peek = self.lhs_iter.next();
                    Some(lhs)
                } else if self.compare.less(rhs, lhs) {
                    self.rhs_peek = self.rhs_iter.next();
                    Some(rhs)
                } else {
                    self.lhs_peek = self.lhs_iter.next();
                    self.rhs_peek = self.rhs_iter.next();
                    Some(lhs)
                }
            }
        }
    }
}

impl<'a, T, C: Compare<T>> Intersection<'a, T, C> {
    fn new(lhs: &'a AvlTreeSet<T, C>, rhs: &'a AvlTreeSet<T, C>) -> Self {
        let mut lhs_iter = lhs.iter();
        let mut rhs_iter = rhs.iter();
        Self {
            compare: lhs.tree.comparator(),
            lhs_peek: lhs_iter.next(),
            rhs_peek: rhs_iter.next(),
            lhs_iter,
            rhs_iter,
        }
    }
}

// Auto derived Clone seems to have an invalid type bound of T: Clone
impl<'a, T, C> Clone for Intersection<'a, T, C> {
    fn clone(&self) -> Self {
        Self {
            compare: self.compare,
            lhs_peek: self.lhs_peek,
            rhs_peek: self.rhs_peek,
            lhs_iter: self.lhs_iter.clone(),
            rhs_iter: self.rhs_iter.clone(),
        }
    }
}

impl<'a, T: fmt::Debug, C: Compare<T>> fmt::Debug for Intersection<'a, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Intersection")?;
        f.debug_set().entries(self.clone()).finish()
    }
}

impl<'a, T, C: Compare<T>> Iterator for Intersection<'a, T, C> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (lhs, rhs) = (self.lhs_peek?, self.rhs_peek?);
            if self.compare.less(lhs, rhs) {
                self.lhs_peek = self.lhs_iter.next();
            } else if self.compare.less(rhs, lhs) {
                self.rhs_peek = self.rhs_iter.next();
            } else {
                self.lhs_peek = self.lhs_iter.next();
                self.rhs_peek = self.rhs_iter.next();
                return Some(lhs);
            }
        }
    }
}
