//! Ordering predicates.

/// A strict weak ordering over `T`, stored by a tree at construction time.
///
/// Two values are *equivalent* when neither is less than the other.
/// Nothing re-validates the ordering at runtime; an inconsistent predicate
/// leaves the tree's ordering guarantees undefined.
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` is ordered strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Returns `true` if neither value is ordered before the other.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// The ordering given by [`Ord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders key-value pairs by their key alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByKey<C>(pub(crate) C);

impl<K, V, C: Compare<K>> Compare<(K, V)> for ByKey<C> {
    #[inline]
    fn less(&self, a: &(K, V), b: &(K, V)) -> bool {
        self.0.less(&a.0, &b.0)
    }
}
