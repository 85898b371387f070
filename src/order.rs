/// A strict total order over `T`, injected into a heap at construction.
///
/// `less` must be a strict order: irreflexive, transitive, and total in the
/// sense that for any `a`, `b` at most one of `less(a, b)` / `less(b, a)`
/// holds, and `!less(a, b) && !less(b, a)` means `a` and `b` are tied.
pub trait TotalOrder<T> {
    fn less(&self, lhs: &T, rhs: &T) -> bool;
}

/// The type's own `Ord`.
#[derive(Clone, Copy, Default, Debug)]
pub struct NaturalOrder;

impl<T: Ord> TotalOrder<T> for NaturalOrder {
    #[inline]
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }
}

/// `Ord` flipped, so a max-heap over it behaves as a min-heap.
#[derive(Clone, Copy, Default, Debug)]
pub struct ReverseOrder;

impl<T: Ord> TotalOrder<T> for ReverseOrder {
    #[inline]
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        rhs < lhs
    }
}

/// Orders elements by a derived key.
#[derive(Clone, Copy, Default, Debug)]
pub struct ByKey<F>(pub F);

impl<T, K: Ord, F: Fn(&T) -> K> TotalOrder<T> for ByKey<F> {
    #[inline]
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        (self.0)(lhs) < (self.0)(rhs)
    }
}

/// Wraps an arbitrary two-argument strict-order predicate.
#[derive(Clone, Copy, Default, Debug)]
pub struct FnOrder<F>(pub F);

impl<T, F: Fn(&T, &T) -> bool> TotalOrder<T> for FnOrder<F> {
    #[inline]
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        (self.0)(lhs, rhs)
    }
}
