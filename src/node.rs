use std::cmp;

use crate::arena::{Arena, NodeId};

pub(crate) type Link = Option<NodeId>;
pub(crate) type Nodes<T> = Arena<Node<T>>;

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) parent: Link,
    pub(crate) left: Link,
    pub(crate) right: Link,
    pub(crate) height: usize,
}

impl<T> Node<T> {
    pub(crate) fn leaf(value: T, parent: Link) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
            height: 1,
        }
    }
}

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl<T> Arena<Node<T>> {
    #[inline]
    pub(crate) fn height(&self, link: Link) -> usize {
        link.map_or(0, |id| self.get(id).height)
    }

    /// Right subtree height minus left subtree height.
    pub(crate) fn balance(&self, id: NodeId) -> isize {
        let node = self.get(id);
        self.height(node.right) as isize - self.height(node.left) as isize
    }

    /// Recomputes the cached height of `id` from its children and returns it.
    pub(crate) fn update_height(&mut self, id: NodeId) -> usize {
        let node = self.get(id);
        let height = 1 + cmp::max(self.height(node.left), self.height(node.right));
        self.get_mut(id).height = height;
        height
    }

    pub(crate) fn side_of(&self, parent: NodeId, child: NodeId) -> Side {
        if self.get(parent).left == Some(child) {
            Side::Left
        } else {
            debug_assert_eq!(self.get(parent).right, Some(child));
            Side::Right
        }
    }

    /// Stores `child` in the given slot of `parent` and points the child back.
    pub(crate) fn attach(&mut self, parent: NodeId, side: Side, child: Link) {
        match side {
            Side::Left => self.get_mut(parent).left = child,
            Side::Right => self.get_mut(parent).right = child,
        }
        if let Some(child) = child {
            self.get_mut(child).parent = Some(parent);
        }
    }

    pub(crate) fn min_node(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.get(id).left {
            id = left;
        }
        id
    }

    pub(crate) fn max_node(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.get(id).right {
            id = right;
        }
        id
    }

    /// In-order successor: leftmost node of the right subtree, else the
    /// nearest ancestor reached by ascending while coming from a right child.
    pub(crate) fn successor(&self, id: NodeId) -> Link {
        if let Some(right) = self.get(id).right {
            return Some(self.min_node(right));
        }
        let mut child = id;
        let mut parent = self.get(id).parent;
        while let Some(parent_id) = parent {
            if self.get(parent_id).right != Some(child) {
                break;
            }
            child = parent_id;
            parent = self.get(parent_id).parent;
        }
        parent
    }

    /// In-order predecessor, the mirror image of [`successor`](Self::successor).
    pub(crate) fn predecessor(&self, id: NodeId) -> Link {
        if let Some(left) = self.get(id).left {
            return Some(self.max_node(left));
        }
        let mut child = id;
        let mut parent = self.get(id).parent;
        while let Some(parent_id) = parent {
            if self.get(parent_id).left != Some(child) {
                break;
            }
            child = parent_id;
            parent = self.get(parent_id).parent;
        }
        parent
    }
}
