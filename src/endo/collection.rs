//! Normalization of homogeneous collections of representables.
//!
//! A collection folds its elements strictly left to right in iteration
//! order: the forward form combines forward forms with [`Endo`]'s combine,
//! the dual form combines dual forms with [`Dual`]'s combine. An empty
//! collection normalizes to the identity.
//!
//! [`WrapIter`] lifts any [`IntoIterator`] into a representable, and
//! [`Reverse`] traverses a double-ended collection back to front. Reversing
//! the traversal and dual-folding cancel out:
//!
//! ```rust
//! use endofold::endo::{AnEndo, Reverse};
//!
//! let prepend = |value: i32| move |mut list: Vec<i32>| {
//!     list.insert(0, value);
//!     list
//! };
//! let setters = vec![prepend(1), prepend(2), prepend(3)];
//!
//! let forward = setters.clone().an_endo().apply(Vec::new());
//! let reversed_dual = Reverse(setters).a_dual_endo().into_inner().apply(Vec::new());
//! assert_eq!(forward, vec![1, 2, 3]);
//! assert_eq!(reversed_dual, forward);
//! ```

use std::collections::VecDeque;

use super::{AnEndo, Endo};
use crate::typeclass::{Dual, Monoid};

fn forward_fold<T, I>(elements: I) -> Endo<T>
where
    I: IntoIterator,
    I::Item: AnEndo<T>,
{
    Endo::combine_all(elements.into_iter().map(AnEndo::an_endo))
}

fn dual_fold<T, I>(elements: I) -> Dual<Endo<T>>
where
    I: IntoIterator,
    I::Item: AnEndo<T>,
{
    Dual::combine_all(elements.into_iter().map(AnEndo::a_dual_endo))
}

/// Wraps any iterable of representables so it can be folded as one.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use endofold::endo::{AnEndo, WrapIter};
///
/// let scale = |x: i32| x * 10;
/// let mut by_priority = BTreeMap::new();
/// by_priority.insert(2, scale);
/// by_priority.insert(1, scale);
///
/// let all = WrapIter(by_priority.into_values());
/// assert_eq!(all.an_endo().apply(1), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WrapIter<I>(pub I);

impl<T, I> AnEndo<T> for WrapIter<I>
where
    I: IntoIterator,
    I::Item: AnEndo<T>,
{
    fn an_endo(self) -> Endo<T> {
        forward_fold(self.0)
    }

    fn a_dual_endo(self) -> Dual<Endo<T>> {
        dual_fold(self.0)
    }
}

/// Traverses a collection of representables from back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reverse<I>(pub I);

impl<T, I> AnEndo<T> for Reverse<I>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    I::Item: AnEndo<T>,
{
    fn an_endo(self) -> Endo<T> {
        forward_fold(self.0.into_iter().rev())
    }

    fn a_dual_endo(self) -> Dual<Endo<T>> {
        dual_fold(self.0.into_iter().rev())
    }
}

impl<T, A: AnEndo<T>> AnEndo<T> for Vec<A> {
    fn an_endo(self) -> Endo<T> {
        forward_fold(self)
    }

    fn a_dual_endo(self) -> Dual<Endo<T>> {
        dual_fold(self)
    }
}

impl<T, A: AnEndo<T>> AnEndo<T> for VecDeque<A> {
    fn an_endo(self) -> Endo<T> {
        forward_fold(self)
    }

    fn a_dual_endo(self) -> Dual<Endo<T>> {
        dual_fold(self)
    }
}

impl<T, A: AnEndo<T>, const N: usize> AnEndo<T> for [A; N] {
    fn an_endo(self) -> Endo<T> {
        forward_fold(self)
    }

    fn a_dual_endo(self) -> Dual<Endo<T>> {
        dual_fold(self)
    }
}
