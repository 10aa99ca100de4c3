//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ```text
//! T::empty().combine(a) == a        // left identity
//! a.combine(T::empty()) == a        // right identity
//! ```
//!
//! For endomorphisms the identity element is the transformer that returns
//! its input unchanged, which is also what an empty fold normalizes to.
//!
//! # Examples
//!
//! ```rust
//! use endofold::endo::Endo;
//! use endofold::typeclass::Monoid;
//!
//! let steps = vec![
//!     Endo::new(|x: i32| x + 1),
//!     Endo::new(|x: i32| x * 10),
//! ];
//! // (+1) after (*10)
//! assert_eq!(Endo::combine_all(steps).apply(2), 21);
//! assert_eq!(Endo::<i32>::combine_all(Vec::new()).apply(2), 2);
//! ```

use super::Identity;
use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert!(Vec::<i32>::empty().is_empty());
    /// ```
    fn empty() -> Self;

    /// Combines all elements of an iterator, starting from the identity
    /// element and folding strictly left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::typeclass::Monoid;
    ///
    /// let strings = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::combine_all(strings), "abc");
    /// assert_eq!(String::combine_all(Vec::new()), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// The unit type forms a trivial monoid with `()` as the identity.
impl Monoid for () {
    fn empty() -> Self {}
}

/// Identity forms a monoid when its inner type is a monoid.
impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_identity_laws() {
        let value = String::from("hello");
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[rstest]
    fn combine_all_preserves_iteration_order() {
        let chunks = vec![vec![1], vec![2, 3], vec![], vec![4]];
        assert_eq!(Vec::combine_all(chunks), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn identity_empty_wraps_inner_empty() {
        assert_eq!(Identity::<String>::empty(), Identity::new(String::new()));
    }
}
