use std::fmt;
use std::ops::{Bound, RangeBounds};

use tracing::{debug, trace};

use crate::arena::{Arena, NodeId};
use crate::compare::{Compare, Natural};
use crate::cursor::{Cursor, IntoIter, Iter};
use crate::error::{Error, Result};
use crate::node::{Link, Node, Nodes, Side};

/// Whether a tree keeps several elements that compare equivalent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Duplicates {
    /// Inserting an element equivalent to a stored one is a no-op.
    #[default]
    Reject,
    /// Equivalent elements are kept in insertion order.
    Allow,
}

/// An ordered container implemented with an AVL tree.
///
/// Elements are ordered by the comparator given at construction
/// ([`Natural`] ordering by default). Positions inside the tree are handed
/// out as [`Cursor`]s, which stay valid across insertions and across erasure
/// of other elements.
///
/// ```
/// use avl_cursor_tree::{AvlTree, Duplicates};
/// let mut tree = AvlTree::with_duplicates();
/// tree.extend([3, 1, 3, 2]);
/// assert_eq!(tree.len(), 4);
/// assert_eq!(tree.erase(&3), 2);
/// assert!(tree.iter().eq([1, 2].iter()));
/// assert_eq!(tree.duplicates(), Duplicates::Allow);
/// ```
#[derive(Clone)]
pub struct AvlTree<T, C = Natural> {
    pub(crate) nodes: Nodes<T>,
    root: Link,
    num_nodes: usize,
    compare: C,
    duplicates: Duplicates,
    stamp: u64,
}

/// The four shapes of an unbalanced trinode, named by the path from the
/// unbalanced node down to its heavy grandchild.
#[derive(Clone, Copy, Debug)]
enum Shape {
    LeftLeft,
    LeftRight,
    RightLeft,
    RightRight,
}

#[allow(clippy::enum_variant_names)]
enum Direction {
    FromParent,
    FromLeft,
    FromRight,
}

impl<T: Ord> AvlTree<T> {
    /// Creates an empty tree that rejects duplicates.
    /// No memory is allocated until the first element is inserted.
    pub fn new() -> Self {
        Self::with_comparator(Natural, Duplicates::Reject)
    }

    /// Creates an empty tree that keeps equivalent elements.
    pub fn with_duplicates() -> Self {
        Self::with_comparator(Natural, Duplicates::Allow)
    }
}

impl<T, C> AvlTree<T, C> {
    /// Creates an empty tree ordered by `compare`.
    pub fn with_comparator(compare: C, duplicates: Duplicates) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            num_nodes: 0,
            compare,
            duplicates,
            stamp: 0,
        }
    }

    /// Returns true if the tree contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree; an empty tree has height 0.
    pub fn height(&self) -> usize {
        self.nodes.height(self.root)
    }

    pub fn duplicates(&self) -> Duplicates {
        self.duplicates
    }

    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Removes all elements. Every outstanding cursor becomes stale.
    pub fn clear(&mut self) {
        let mut released = Vec::with_capacity(self.num_nodes);
        self.postorder(|node_id| released.push(node_id));
        for node_id in released {
            self.nodes.take(node_id);
        }
        debug!(removed = self.num_nodes, "cleared tree");
        self.root = None;
        self.num_nodes = 0;
        self.touch();
    }

    /// Returns a cursor at the smallest element, or the end cursor if empty.
    pub fn begin(&self) -> Cursor {
        self.cursor_at(self.first_node())
    }

    /// Returns the end cursor, positioned one past the largest element.
    pub fn end(&self) -> Cursor {
        self.cursor_at(None)
    }

    /// Returns the element under `cursor`, or `None` for the end cursor.
    ///
    /// # Panics
    ///
    /// Panics if the element under `cursor` has been erased.
    pub fn get(&self, cursor: &Cursor) -> Option<&T> {
        cursor.current.map(|node_id| {
            self.assert_live(node_id);
            &self.nodes.get(node_id).value
        })
    }

    /// Returns the smallest element.
    pub fn first(&self) -> Option<&T> {
        self.first_node().map(|node_id| &self.nodes.get(node_id).value)
    }

    /// Returns the largest element.
    pub fn last(&self) -> Option<&T> {
        self.last_node().map(|node_id| &self.nodes.get(node_id).value)
    }

    /// Like [`first`](Self::first), but an empty tree is an error.
    pub fn front(&self) -> Result<&T> {
        self.first().ok_or(Error::Empty { op: "front" })
    }

    /// Like [`last`](Self::last), but an empty tree is an error.
    pub fn back(&self) -> Result<&T> {
        self.last().ok_or(Error::Empty { op: "back" })
    }

    pub fn pop_first(&mut self) -> Option<T> {
        let node_id = self.first_node()?;
        Some(self.remove_node(node_id))
    }

    pub fn pop_last(&mut self) -> Option<T> {
        let node_id = self.last_node()?;
        Some(self.remove_node(node_id))
    }

    /// Removes the element under `cursor` and returns a cursor at its former
    /// successor. Erasing at the end cursor does nothing.
    ///
    /// # Panics
    ///
    /// Panics if the element under `cursor` has already been erased.
    pub fn erase_at(&mut self, cursor: Cursor) -> Cursor {
        let Some(node_id) = cursor.current else {
            return self.end();
        };
        self.assert_live(node_id);
        // The successor keeps its identity while the target is swapped down.
        let successor = self.nodes.successor(node_id);
        self.remove_node(node_id);
        self.cursor_at(successor)
    }

    /// Removes the element under `cursor` and returns it.
    pub fn take_at(&mut self, cursor: Cursor) -> Option<T> {
        let node_id = cursor.current?;
        self.assert_live(node_id);
        Some(self.remove_node(node_id))
    }

    /// Removes the elements in `[first, last)` and returns a cursor at `last`.
    pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> Cursor {
        let num_nodes = self.num_nodes;
        let mut cursor = first;
        while cursor != last && !cursor.is_end() {
            cursor = self.erase_at(cursor);
        }
        debug!(removed = num_nodes - self.num_nodes, "erased range");
        self.refresh(last)
    }

    /// Gets an iterator over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.first_node(), self.last_node())
    }

    /// Gets an iterator over the elements in `[first, last)`.
    pub fn between(&self, first: Cursor, last: Cursor) -> Iter<'_, T> {
        if let Some(node_id) = first.current {
            self.assert_live(node_id);
        }
        if let Some(node_id) = last.current {
            self.assert_live(node_id);
        }
        self.iter_links(first.current, last.current)
    }

    /// Calls `f` on every element in order, allowing it to be changed in place.
    /// `f` must not change the relative order of the elements.
    pub(crate) fn for_each_mut<F: FnMut(&mut T)>(&mut self, mut f: F) {
        let mut current = self.first_node();
        while let Some(node_id) = current {
            f(&mut self.nodes.get_mut(node_id).value);
            current = self.nodes.successor(node_id);
        }
    }

    /// Mutable access to the element under `cursor`, for façades that only
    /// change parts of the element that do not take part in the ordering.
    pub(crate) fn get_mut(&mut self, cursor: &Cursor) -> Option<&mut T> {
        let node_id = cursor.current?;
        self.assert_live(node_id);
        Some(&mut self.nodes.get_mut(node_id).value)
    }

    /// Returns the first node for which `pred` is false, given that `pred`
    /// holds for a (possibly empty) prefix of the in-order sequence.
    pub(crate) fn partition_point<P>(&self, pred: P) -> Link
    where
        P: Fn(&T) -> bool,
    {
        let mut candidate = None;
        let mut current = self.root;
        while let Some(node_id) = current {
            let node = self.nodes.get(node_id);
            if pred(&node.value) {
                current = node.right;
            } else {
                candidate = Some(node_id);
                current = node.left;
            }
        }
        candidate
    }

    /// Iterates over the elements inside `range`, where `before(element, bound)`
    /// and `after(bound, element)` order elements against bounds.
    pub(crate) fn range_by<Q, R, B, A>(&self, range: &R, before: B, after: A) -> Iter<'_, T>
    where
        Q: ?Sized,
        R: RangeBounds<Q> + ?Sized,
        B: Fn(&T, &Q) -> bool,
        A: Fn(&Q, &T) -> bool,
    {
        let first = match range.start_bound() {
            Bound::Included(start) => self.partition_point(|element| before(element, start)),
            Bound::Excluded(start) => self.partition_point(|element| !after(start, element)),
            Bound::Unbounded => self.first_node(),
        };
        let last = match range.end_bound() {
            Bound::Included(end) => self.partition_point(|element| !after(end, element)),
            Bound::Excluded(end) => self.partition_point(|element| before(element, end)),
            Bound::Unbounded => None,
        };
        self.iter_links(first, last)
    }

    pub(crate) fn cursor_at(&self, current: Link) -> Cursor {
        let (prev, next) = match current {
            Some(node_id) => (
                self.nodes.predecessor(node_id),
                self.nodes.successor(node_id),
            ),
            None => (self.last_node(), self.first_node()),
        };
        Cursor::new(current, prev, next, self.stamp)
    }

    /// Repositions `cursor` from the current tree structure.
    pub(crate) fn refresh(&self, cursor: Cursor) -> Cursor {
        if let Some(node_id) = cursor.current {
            self.assert_live(node_id);
        }
        self.cursor_at(cursor.current)
    }

    pub(crate) fn stamp(&self) -> u64 {
        self.stamp
    }

    pub(crate) fn first_node(&self) -> Link {
        self.root.map(|root_id| self.nodes.min_node(root_id))
    }

    pub(crate) fn last_node(&self) -> Link {
        self.root.map(|root_id| self.nodes.max_node(root_id))
    }

    pub(crate) fn assert_live(&self, node_id: NodeId) {
        assert!(
            self.nodes.contains(node_id),
            "cursor refers to an element that has been erased"
        );
    }

    fn iter_links(&self, first: Link, last: Link) -> Iter<'_, T> {
        let back = match (first, last) {
            (None, _) => None,
            (Some(_), _) if first == last => None,
            (Some(_), Some(last_id)) => self.nodes.predecessor(last_id),
            (Some(_), None) => self.last_node(),
        };
        match back {
            None => Iter::new(&self.nodes, None, None),
            Some(_) => Iter::new(&self.nodes, first, back),
        }
    }

    fn touch(&mut self) {
        self.stamp = self.stamp.wrapping_add(1);
    }

    fn attach_root(&mut self, parent: Link, old: NodeId, new: NodeId) {
        match parent {
            None => {
                self.root = Some(new);
                self.nodes.get_mut(new).parent = None;
            }
            Some(parent_id) => {
                let side = self.nodes.side_of(parent_id, old);
                self.nodes.attach(parent_id, side, Some(new));
            }
        }
    }

    /// Detaches `node_id` from the tree, releases it and rebalances.
    fn remove_node(&mut self, node_id: NodeId) -> T {
        // Swap the target's position down until it is a leaf.
        loop {
            let node = self.nodes.get(node_id);
            let swap_target = match (node.left, node.right) {
                (None, None) => break,
                (Some(left_id), _) => self.nodes.max_node(left_id),
                (None, Some(right_id)) => self.nodes.min_node(right_id),
            };
            self.swap_positions(node_id, swap_target);
        }

        let parent = self.nodes.get(node_id).parent;
        match parent {
            None => self.root = None,
            Some(parent_id) => {
                let side = self.nodes.side_of(parent_id, node_id);
                self.nodes.attach(parent_id, side, None);
            }
        }
        let node = self.nodes.take(node_id);
        debug_assert!(self.num_nodes >= 1);
        self.num_nodes -= 1;
        self.touch();

        // Parent node might be out of balance now
        self.rebalance(parent);
        node.value
    }

    /// Exchanges the tree positions of two nodes: parent and child links and
    /// the cached heights move, the values stay with their nodes.
    fn swap_positions(&mut self, first: NodeId, second: NodeId) {
        // If the nodes are adjacent, `upper` is the parent.
        let (upper, lower) = if self.nodes.get(first).parent == Some(second) {
            (second, first)
        } else {
            (first, second)
        };
        let (upper_parent, upper_left, upper_right, upper_height) = {
            let node = self.nodes.get(upper);
            (node.parent, node.left, node.right, node.height)
        };
        let (lower_parent, lower_left, lower_right, lower_height) = {
            let node = self.nodes.get(lower);
            (node.parent, node.left, node.right, node.height)
        };
        let lower_is_left = upper_left == Some(lower);
        let lower_is_right = upper_right == Some(lower);
        let adjacent = lower_is_left || lower_is_right;

        // Sides are read before any link changes; both nodes may share a parent.
        let upper_side = upper_parent.map(|parent_id| self.nodes.side_of(parent_id, upper));
        let lower_side = lower_parent.map(|parent_id| self.nodes.side_of(parent_id, lower));

        match (upper_parent, upper_side) {
            (Some(parent_id), Some(side)) => self.nodes.attach(parent_id, side, Some(lower)),
            _ => self.root = Some(lower),
        }
        if !adjacent {
            if let (Some(parent_id), Some(side)) = (lower_parent, lower_side) {
                self.nodes.attach(parent_id, side, Some(upper));
            }
        }

        let (new_left, new_right) = match (lower_is_left, lower_is_right) {
            (true, _) => (Some(upper), upper_right),
            (_, true) => (upper_left, Some(upper)),
            _ => (upper_left, upper_right),
        };
        self.nodes.attach(lower, Side::Left, new_left);
        self.nodes.attach(lower, Side::Right, new_right);
        let node = self.nodes.get_mut(lower);
        node.parent = upper_parent;
        node.height = upper_height;

        self.nodes.attach(upper, Side::Left, lower_left);
        self.nodes.attach(upper, Side::Right, lower_right);
        let node = self.nodes.get_mut(upper);
        node.parent = if adjacent { Some(lower) } else { lower_parent };
        node.height = lower_height;
    }

    /// Rebalances nodes starting from given position up to the root node.
    /// Restructuring after an erase may shorten the subtree, so the walk only
    /// stops at a node that is in balance and kept its height.
    fn rebalance(&mut self, start_from: Link) {
        let mut current = start_from;
        while let Some(node_id) = current {
            let old_height = self.nodes.get(node_id).height;
            let subtree_root = if self.nodes.balance(node_id).abs() > 1 {
                self.restructure(node_id)
            } else if self.nodes.update_height(node_id) == old_height {
                break;
            } else {
                node_id
            };
            current = self.nodes.get(subtree_root).parent;
        }
    }

    /// Rebalances nodes starting from given position up to the root node.
    /// Stops at the first node that kept its height, or after the first
    /// restructuring, which restores the height the subtree had before a
    /// single insert.
    fn rebalance_once(&mut self, start_from: Link) {
        let mut current = start_from;
        while let Some(node_id) = current {
            let old_height = self.nodes.get(node_id).height;
            if self.nodes.balance(node_id).abs() > 1 {
                self.restructure(node_id);
                break;
            }
            if self.nodes.update_height(node_id) == old_height {
                break;
            }
            current = self.nodes.get(node_id).parent;
        }
    }

    /// Trinode restructuring of the unbalanced node `z`.
    ///
    /// `y` is the taller child of `z` and `x` the taller child of `y`, where a
    /// balanced `y` picks the child on the same side as `y` itself. The three
    /// nodes are renamed `a < b < c` in order and their at most four
    /// remaining subtrees `t0..t3`; `b` becomes the subtree root with
    /// children `a` and `c`. Returns `b`.
    fn restructure(&mut self, z: NodeId) -> NodeId {
        let nodes = &self.nodes;
        let (shape, a, b, c, [t0, t1, t2, t3]) = if nodes.balance(z) < 0 {
            let y = nodes.get(z).left.expect("left-heavy node has a left child");
            if nodes.balance(y) <= 0 {
                let x = nodes.get(y).left.expect("left-left shape has a left grandchild");
                let subtrees = [nodes.get(x).left, nodes.get(x).right, nodes.get(y).right, nodes.get(z).right];
                (Shape::LeftLeft, x, y, z, subtrees)
            } else {
                let x = nodes.get(y).right.expect("left-right shape has a right grandchild");
                let subtrees = [nodes.get(y).left, nodes.get(x).left, nodes.get(x).right, nodes.get(z).right];
                (Shape::LeftRight, y, x, z, subtrees)
            }
        } else {
            let y = nodes.get(z).right.expect("right-heavy node has a right child");
            if nodes.balance(y) < 0 {
                let x = nodes.get(y).left.expect("right-left shape has a left grandchild");
                let subtrees = [nodes.get(z).left, nodes.get(x).left, nodes.get(x).right, nodes.get(y).right];
                (Shape::RightLeft, z, x, y, subtrees)
            } else {
                let x = nodes.get(y).right.expect("right-right shape has a right grandchild");
                let subtrees = [nodes.get(z).left, nodes.get(y).left, nodes.get(x).left, nodes.get(x).right];
                (Shape::RightRight, z, y, x, subtrees)
            }
        };
        let parent = self.nodes.get(z).parent;

        self.nodes.attach(a, Side::Left, t0);
        self.nodes.attach(a, Side::Right, t1);
        self.nodes.update_height(a);

        self.nodes.attach(c, Side::Left, t2);
        self.nodes.attach(c, Side::Right, t3);
        self.nodes.update_height(c);

        self.nodes.attach(b, Side::Left, Some(a));
        self.nodes.attach(b, Side::Right, Some(c));
        self.nodes.update_height(b);

        self.attach_root(parent, z, b);
        trace!(?shape, at_root = parent.is_none(), "restructured unbalanced subtree");
        b
    }

    #[cfg(any(test, feature = "consistency_check"))]
    fn preorder<F: FnMut(NodeId)>(&self, f: F) {
        self.traverse(f, |_| {}, |_| {});
    }

    fn postorder<F: FnMut(NodeId)>(&self, f: F) {
        self.traverse(|_| {}, |_| {}, f);
    }

    fn traverse<Pre, In, Post>(&self, mut preorder: Pre, mut inorder: In, mut postorder: Post)
    where
        Pre: FnMut(NodeId),
        In: FnMut(NodeId),
        Post: FnMut(NodeId),
    {
        if let Some(mut node_id) = self.root {
            let mut dir = Direction::FromParent;
            loop {
                match dir {
                    Direction::FromParent => {
                        preorder(node_id);
                        if let Some(left_id) = self.nodes.get(node_id).left {
                            node_id = left_id;
                        } else {
                            dir = Direction::FromLeft;
                        }
                    }
                    Direction::FromLeft => {
                        inorder(node_id);
                        if let Some(right_id) = self.nodes.get(node_id).right {
                            node_id = right_id;
                            dir = Direction::FromParent;
                        } else {
                            dir = Direction::FromRight;
                        }
                    }
                    Direction::FromRight => {
                        postorder(node_id);
                        if let Some(parent_id) = self.nodes.get(node_id).parent {
                            if Some(node_id) == self.nodes.get(parent_id).left {
                                dir = Direction::FromLeft;
                            } else {
                                dir = Direction::FromRight;
                            }
                            node_id = parent_id;
                        } else {
                            break;
                        }
                    }
                }
            }
        }
    }
}

impl<T, C: Compare<T>> AvlTree<T, C> {
    /// Inserts an element.
    /// Returns false, leaving the tree unchanged, if duplicates are rejected
    /// and an equivalent element is already stored.
    pub fn insert(&mut self, value: T) -> bool {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(node_id) = current {
            let node = self.nodes.get(node_id);
            if self.compare.less(&value, &node.value) {
                side = Side::Left;
                current = node.left;
            } else {
                if self.duplicates == Duplicates::Reject && !self.compare.less(&node.value, &value) {
                    return false;
                }
                side = Side::Right;
                current = node.right;
            }
            parent = Some(node_id);
        }

        let node_id = self.nodes.alloc(Node::leaf(value, parent));
        match parent {
            None => self.root = Some(node_id),
            Some(parent_id) => self.nodes.attach(parent_id, side, Some(node_id)),
        }
        self.num_nodes += 1;
        self.touch();
        self.rebalance_once(parent);
        true
    }

    /// Returns a cursor at the leftmost element equivalent to `value`, or the
    /// end cursor if there is none.
    pub fn find(&self, value: &T) -> Cursor {
        let found = self
            .partition_point(|element| self.compare.less(element, value))
            .filter(|&node_id| !self.compare.less(value, &self.nodes.get(node_id).value));
        self.cursor_at(found)
    }

    /// Returns a cursor at the first element that is not less than `value`.
    pub fn lower_bound(&self, value: &T) -> Cursor {
        self.cursor_at(self.partition_point(|element| self.compare.less(element, value)))
    }

    /// Returns a cursor at the first element that is greater than `value`.
    pub fn upper_bound(&self, value: &T) -> Cursor {
        self.cursor_at(self.partition_point(|element| !self.compare.less(value, element)))
    }

    pub fn contains(&self, value: &T) -> bool {
        !self.find(value).is_end()
    }

    /// Returns the number of elements equivalent to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.between(self.lower_bound(value), self.upper_bound(value))
            .count()
    }

    /// Removes every element equivalent to `value` and returns how many
    /// were removed.
    pub fn erase(&mut self, value: &T) -> usize {
        let num_nodes = self.num_nodes;
        let first = self.lower_bound(value);
        let last = self.upper_bound(value);
        self.erase_range(first, last);
        num_nodes - self.num_nodes
    }

    /// Gets an iterator over a range of elements in order.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`.
    /// Panics if range `start == end` and both bounds are `Excluded`.
    pub fn range<R>(&self, range: R) -> Iter<'_, T>
    where
        R: RangeBounds<T>,
    {
        let compare = &self.compare;
        check_range_bounds::<T, R, _>(&range, |a, b| compare.less(a, b));
        self.range_by::<T, R, _, _>(
            &range,
            |element, bound| compare.less(element, bound),
            |bound, element| compare.less(bound, element),
        )
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // Check root link
        if let Some(root_id) = self.root {
            assert!(self.nodes.get(root_id).parent.is_none());
        }

        // Check tree nodes
        let mut num_nodes = 0;
        self.preorder(|node_id| {
            let node = self.nodes.get(node_id);
            let mut left_height = 0;
            let mut right_height = 0;

            if let Some(left_id) = node.left {
                let left = self.nodes.get(left_id);
                assert_eq!(left.parent, Some(node_id));
                assert!(!self.compare.less(&node.value, &left.value));
                left_height = left.height;
            }
            if let Some(right_id) = node.right {
                let right = self.nodes.get(right_id);
                assert_eq!(right.parent, Some(node_id));
                assert!(!self.compare.less(&right.value, &node.value));
                right_height = right.height;
            }

            // Check height
            assert_eq!(node.height, 1 + left_height.max(right_height));

            // Check AVL condition (nearly balance)
            assert!(left_height <= right_height + 1);
            assert!(right_height <= left_height + 1);

            num_nodes += 1;
        });

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);
        assert_eq!(self.nodes.len(), self.num_nodes);

        // Check in-order sequence
        let mut steps = 0;
        let mut prev: Option<&T> = None;
        for value in self.iter() {
            if let Some(prev) = prev {
                assert!(!self.compare.less(value, prev));
                if self.duplicates == Duplicates::Reject {
                    assert!(self.compare.less(prev, value));
                }
            }
            prev = Some(value);
            steps += 1;
        }
        assert_eq!(steps, self.num_nodes);
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for AvlTree<T, C> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, C> PartialEq for AvlTree<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for AvlTree<T, C> {}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C: Compare<T>> Extend<T> for AvlTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for AvlTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

/// Panics on the range bounds `BTreeMap::range` rejects as well.
pub(crate) fn check_range_bounds<Q, R, L>(range: &R, less: L)
where
    Q: ?Sized,
    R: RangeBounds<Q> + ?Sized,
    L: Fn(&Q, &Q) -> bool,
{
    match (range.start_bound(), range.end_bound()) {
        (Bound::Excluded(start), Bound::Excluded(end)) if !less(start, end) && !less(end, start) => {
            panic!("range start and end are equal and excluded")
        }
        (
            Bound::Included(start) | Bound::Excluded(start),
            Bound::Included(end) | Bound::Excluded(end),
        ) if less(end, start) => {
            panic!("range start is greater than range end")
        }
        _ => {}
    }
}
