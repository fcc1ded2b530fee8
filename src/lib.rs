//! An ordered container implemented with an AVL tree.
//!
//! [`AvlTree`] is the engine: it keeps elements ordered by a caller supplied
//! [`Compare`] predicate, either rejecting or keeping equivalent elements,
//! and hands out [`Cursor`]s for bound queries, bidirectional stepping and
//! erasure while iterating. [`AvlTreeSet`] and [`AvlTreeMap`] are thin
//! façades over it.
//!
//! ```
//! use avl_cursor_tree::AvlTree;
//!
//! let mut tree: AvlTree<i32> = [1, 6, 7, 3, 2, 4, 8, 9, 5, 3, 0].into_iter().collect();
//! tree.erase(&3);
//! tree.erase(&6);
//!
//! let first = tree.lower_bound(&3);
//! let last = tree.upper_bound(&7);
//! assert!(tree.between(first, last).eq([4, 5, 7].iter()));
//!
//! // Erase every even element while walking the tree.
//! let mut cursor = tree.begin();
//! while let Some(&value) = tree.get(&cursor) {
//!     if value % 2 == 0 {
//!         cursor = tree.erase_at(cursor);
//!     } else {
//!         cursor.move_next(&tree);
//!     }
//! }
//! assert!(tree.iter().eq([1, 5, 7, 9].iter()));
//! ```

mod arena;
mod compare;
mod cursor;
mod error;
pub mod map;
mod node;
pub mod set;
mod tree;

pub use compare::{ByKey, Compare, Natural};
pub use cursor::{Cursor, IntoIter, Iter};
pub use error::{Error, Result};
pub use map::AvlTreeMap;
pub use set::AvlTreeSet;
pub use tree::{AvlTree, Duplicates};

#[cfg(test)]
mod tests;
