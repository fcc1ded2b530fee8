//! Positions inside a tree and iterators over its elements.

use std::fmt;
use std::iter::FusedIterator;

use crate::node::{Link, Nodes};
use crate::tree::AvlTree;

/// A position inside an [`AvlTree`]: an element, or the end position one
/// past the largest element.
///
/// A cursor does not borrow its tree. It stays valid across insertions and
/// across erasure of other elements, and remembers the neighbours it had
/// when it was positioned so that stepping an unchanged tree takes constant
/// time. The end position sits between the largest and the smallest
/// element, so stepping past either end of the sequence wraps through it.
///
/// Once the element under a cursor is erased, the cursor is stale: reading
/// or stepping it panics. [`AvlTree::erase_at`] returns a fresh cursor at the
/// erased element's successor instead.
///
/// Cursors compare equal when they refer to the same position.
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
    pub(crate) current: Link,
    prev: Link,
    next: Link,
    stamp: u64,
}

impl Cursor {
    pub(crate) fn new(current: Link, prev: Link, next: Link, stamp: u64) -> Self {
        Self {
            current,
            prev,
            next,
            stamp,
        }
    }

    /// Returns true if the cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Moves the cursor to the next element, from the largest element to the
    /// end position, and from the end position to the smallest element.
    ///
    /// # Panics
    ///
    /// Panics if the element under the cursor has been erased.
    pub fn move_next<T, C>(&mut self, tree: &AvlTree<T, C>) {
        if self.stamp != tree.stamp() {
            *self = tree.refresh(*self);
        }
        let current = self.next;
        let next = match current {
            Some(node_id) => tree.nodes.successor(node_id),
            None => tree.first_node(),
        };
        *self = Self::new(current, self.current, next, self.stamp);
    }

    /// Moves the cursor to the previous element, from the smallest element to
    /// the end position, and from the end position to the largest element.
    ///
    /// # Panics
    ///
    /// Panics if the element under the cursor has been erased.
    pub fn move_prev<T, C>(&mut self, tree: &AvlTree<T, C>) {
        if self.stamp != tree.stamp() {
            *self = tree.refresh(*self);
        }
        let current = self.prev;
        let prev = match current {
            Some(node_id) => tree.nodes.predecessor(node_id),
            None => tree.last_node(),
        };
        *self = Self::new(current, prev, self.current, self.stamp);
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl Eq for Cursor {}

/// An iterator over the elements of a tree, or of a range of it.
pub struct Iter<'a, T> {
    nodes: &'a Nodes<T>,
    front: Link,
    back: Link,
}

impl<'a, T> Iter<'a, T> {
    /// `front` and `back` are the first and the last node to visit, both
    /// `None` for an empty iteration.
    pub(crate) fn new(nodes: &'a Nodes<T>, front: Link, back: Link) -> Self {
        Self { nodes, front, back }
    }

    fn finish(&mut self) {
        self.front = None;
        self.back = None;
    }
}

// Auto derived clone seems to have an invalid type bound of T: Clone
impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node_id = self.front?;
        if self.front == self.back {
            self.finish();
        } else {
            self.front = nodes.successor(node_id);
        }
        Some(&nodes.get(node_id).value)
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node_id = self.back?;
        if self.front == self.back {
            self.finish();
        } else {
            self.back = nodes.predecessor(node_id);
        }
        Some(&nodes.get(node_id).value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a tree.
pub struct IntoIter<T, C> {
    tree: AvlTree<T, C>,
}

impl<T, C> IntoIter<T, C> {
    pub(crate) fn new(tree: AvlTree<T, C>) -> Self {
        Self { tree }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for IntoIter<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.tree.iter()).finish()
    }
}

impl<T, C> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<T, C> DoubleEndedIterator for IntoIter<T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree.pop_last()
    }
}

impl<T, C> ExactSizeIterator for IntoIter<T, C> {}

impl<T, C> FusedIterator for IntoIter<T, C> {}
