//! The `Dual` wrapper - a semigroup with its operands swapped.
//!
//! `Dual(a).combine(Dual(b))` equals `Dual(b.combine(a))`. Wrapping an
//! endomorphism in `Dual` therefore reverses composition order, which is
//! how the dual fold is implemented without a second folding algorithm.
//!
//! Wrapping and unwrapping are pure relabelings: [`Dual::new`] and
//! [`Dual::into_inner`] never touch the wrapped value.

use super::{Monoid, Semigroup};

/// The dual of a semigroup: combines in the opposite order.
///
/// # Examples
///
/// ```rust
/// use endofold::typeclass::{Dual, Semigroup};
///
/// let combined = Dual::new(String::from("world")).combine(Dual::new(String::from("hello ")));
/// assert_eq!(combined.into_inner(), "hello world");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dual<A>(pub A);

impl<A> Dual<A> {
    /// Creates a new `Dual` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the dual, returning the inner value unchanged.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Dual<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: Semigroup> Semigroup for Dual<A> {
    fn combine(self, other: Self) -> Self {
        Self(other.0.combine(self.0))
    }
}

impl<A: Monoid> Monoid for Dual<A> {
    fn empty() -> Self {
        Self(A::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn dual_combine_swaps_operands() {
        let combined = Dual::new(vec![1]).combine(Dual::new(vec![2]));
        assert_eq!(combined.into_inner(), vec![2, 1]);
    }

    #[rstest]
    fn dual_combine_all_reverses_order() {
        let duals = vec![Dual(String::from("a")), Dual(String::from("b")), Dual(String::from("c"))];
        assert_eq!(Dual::combine_all(duals).into_inner(), "cba");
    }

    #[rstest]
    fn dual_of_dual_restores_order() {
        let left = Dual(Dual(vec![1]));
        let right = Dual(Dual(vec![2]));
        assert_eq!(left.combine(right).into_inner().into_inner(), vec![1, 2]);
    }

    #[rstest]
    fn dual_empty_is_inner_empty() {
        assert_eq!(Dual::<String>::empty(), Dual(String::new()));
    }
}
