//! The variadic fold builder.
//!
//! [`FoldEndo`] accumulates one argument per call and yields the folded
//! endomorphism inside the context `C` chosen by the caller. The number of
//! arguments is fixed by the calling code; the [`fold_endo!`](crate::fold_endo)
//! and [`dual_fold_endo!`](crate::dual_fold_endo) macros give the same chain a
//! variadic call syntax.
//!
//! # Direction
//!
//! A forward fold ([`Forward`]) makes the first-listed argument outermost, so
//! the last-listed argument acts on the value first. A dual fold
//! ([`Backward`]) makes the last-listed argument outermost.
//!
//! ```rust
//! use endofold::fold::{dual_fold_endo, fold_endo};
//! use endofold::endo::Endo;
//!
//! let forward: Endo<i32> = fold_endo()
//!     .with(|x: i32| x + 1)
//!     .with(|x: i32| x + 2)
//!     .with(|x: i32| x * 3)
//!     .finish();
//! assert_eq!(forward.apply(1), 6);
//!
//! let dual: Endo<i32> = dual_fold_endo()
//!     .with(|x: i32| x + 1)
//!     .with(|x: i32| x + 2)
//!     .with(|x: i32| x * 3)
//!     .finish();
//! assert_eq!(dual.apply(1), 12);
//! ```

use std::marker::PhantomData;

use tracing::trace;

use super::FoldContext;
use crate::endo::{AnEndo, Endo};
use crate::typeclass::Semigroup;

mod sealed {
    pub trait Sealed {}
}

/// The order in which a [`FoldEndo`] nests its arguments.
///
/// Implemented by [`Forward`] and [`Backward`] only.
pub trait Direction: sealed::Sealed + 'static {
    /// Name recorded in trace events.
    const NAME: &'static str;

    /// Normalizes an argument into the form this direction folds.
    fn normalize<T, A: AnEndo<T>>(argument: A) -> Endo<T>;

    /// Merges the next normalized argument into the accumulator.
    fn combine<T>(accumulator: Endo<T>, next: Endo<T>) -> Endo<T>;
}

/// First-listed argument outermost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forward {}

/// Last-listed argument outermost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backward {}

impl sealed::Sealed for Forward {}
impl sealed::Sealed for Backward {}

impl Direction for Forward {
    const NAME: &'static str = "forward";

    fn normalize<T, A: AnEndo<T>>(argument: A) -> Endo<T> {
        argument.an_endo()
    }

    fn combine<T>(accumulator: Endo<T>, next: Endo<T>) -> Endo<T> {
        accumulator.combine(next)
    }
}

impl Direction for Backward {
    const NAME: &'static str = "dual";

    fn normalize<T, A: AnEndo<T>>(argument: A) -> Endo<T> {
        argument.a_dual_endo().into_inner()
    }

    // Dual<Endo>::combine with the operands swapped, without the wrapper.
    fn combine<T>(accumulator: Endo<T>, next: Endo<T>) -> Endo<T> {
        next.combine(accumulator)
    }
}

/// An in-progress fold producing a `C`.
///
/// Created by [`fold_endo`] or [`dual_fold_endo`]; consumed by
/// [`finish`](Self::finish).
#[must_use = "a fold does nothing until `finish` is called"]
pub struct FoldEndo<C, D = Forward> {
    accumulator: C,
    arity: usize,
    direction: PhantomData<D>,
}

/// Starts a forward fold producing `C`.
///
/// # Examples
///
/// ```rust
/// use endofold::fold::fold_endo;
/// use endofold::endo::Endo;
///
/// let prepend = |item: u8| move |mut items: Vec<u8>| {
///     items.insert(0, item);
///     items
/// };
///
/// let folded: Option<Endo<Vec<u8>>> = fold_endo()
///     .with(prepend(1))
///     .with_effect(Some(prepend(2)))
///     .finish();
/// assert_eq!(folded.map(|endo| endo.apply(Vec::new())), Some(vec![1, 2]));
/// ```
pub fn fold_endo<C: FoldContext>() -> FoldEndo<C, Forward> {
    FoldEndo::start()
}

/// Starts a dual fold producing `C`.
///
/// # Examples
///
/// ```rust
/// use endofold::fold::dual_fold_endo;
/// use endofold::endo::Endo;
///
/// let prepend = |item: u8| move |mut items: Vec<u8>| {
///     items.insert(0, item);
///     items
/// };
///
/// let folded: Endo<Vec<u8>> = dual_fold_endo().with(prepend(1)).with(prepend(2)).finish();
/// assert_eq!(folded.apply(Vec::new()), vec![2, 1]);
/// ```
pub fn dual_fold_endo<C: FoldContext>() -> FoldEndo<C, Backward> {
    FoldEndo::start()
}

impl<C, D> FoldEndo<C, D>
where
    C: FoldContext,
    D: Direction,
{
    /// A fold with no arguments; its result is the lifted identity.
    pub fn start() -> Self {
        Self {
            accumulator: C::lift(Endo::identity()),
            arity: 0,
            direction: PhantomData,
        }
    }

    /// Adds a plain representable argument.
    pub fn with<A>(self, argument: A) -> Self
    where
        A: AnEndo<C::Operand>,
    {
        trace!(direction = D::NAME, position = self.arity, "fold argument");
        let next = D::normalize(argument);
        Self {
            accumulator: self
                .accumulator
                .map_endo(move |accumulator| D::combine(accumulator, next.clone())),
            arity: self.arity + 1,
            direction: PhantomData,
        }
    }

    /// Adds a representable wrapped in the context's effect.
    ///
    /// The effect is sequenced after every earlier argument; if either side
    /// short-circuits, the fold keeps the first stopping value.
    pub fn with_effect<A>(self, effect: C::Effect<A>) -> Self
    where
        A: AnEndo<C::Operand> + Clone + 'static,
    {
        trace!(direction = D::NAME, position = self.arity, "fold effect argument");
        Self {
            accumulator: self.accumulator.bind_effect(effect, |accumulator, argument: A| {
                D::combine(accumulator, D::normalize(argument))
            }),
            arity: self.arity + 1,
            direction: PhantomData,
        }
    }

    /// Number of arguments added so far.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Ends the fold.
    pub fn finish(self) -> C {
        trace!(direction = D::NAME, arity = self.arity, "fold finished");
        self.accumulator
    }
}

impl<C, D: Direction> std::fmt::Debug for FoldEndo<C, D> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FoldEndo")
            .field("direction", &D::NAME)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endo::Reverse;
    use rstest::rstest;

    fn prepend(item: u8) -> impl Fn(Vec<u8>) -> Vec<u8> + Clone + 'static {
        move |mut items: Vec<u8>| {
            items.insert(0, item);
            items
        }
    }

    #[rstest]
    fn empty_fold_is_identity() {
        let folded: Endo<i32> = fold_endo().finish();
        assert!(folded.is_identity());
        assert_eq!(folded.apply(9), 9);
    }

    #[rstest]
    fn forward_puts_first_argument_outermost() {
        let folded: Endo<Vec<u8>> = fold_endo().with(prepend(1)).with(prepend(2)).finish();
        assert_eq!(folded.apply(Vec::new()), vec![1, 2]);
    }

    #[rstest]
    fn dual_puts_last_argument_outermost() {
        let folded: Endo<Vec<u8>> = dual_fold_endo().with(prepend(1)).with(prepend(2)).finish();
        assert_eq!(folded.apply(Vec::new()), vec![2, 1]);
    }

    #[rstest]
    fn dual_of_reversed_arguments_matches_forward() {
        let items = vec![prepend(1), prepend(2), prepend(3)];
        let forward: Endo<Vec<u8>> = fold_endo().with(items.clone()).finish();
        let dual: Endo<Vec<u8>> = dual_fold_endo().with(Reverse(items)).finish();
        assert_eq!(forward.apply(Vec::new()), dual.apply(Vec::new()));
    }

    #[rstest]
    fn arity_counts_every_argument() {
        let builder = fold_endo::<Option<Endo<i32>>>()
            .with(|x: i32| x + 1)
            .with_effect(None::<fn(i32) -> i32>)
            .with(|x: i32| x * 2);
        assert_eq!(builder.arity(), 3);
        assert!(builder.finish().is_none());
    }

    #[rstest]
    fn plain_arguments_after_stop_keep_it_stopped() {
        let folded: Result<Endo<i32>, &str> = fold_endo()
            .with_effect(Err::<fn(i32) -> i32, _>("first"))
            .with(|x: i32| x + 1)
            .with_effect(Err::<fn(i32) -> i32, _>("second"))
            .finish();
        assert_eq!(folded.map(|endo| endo.apply(0)), Err("first"));
    }

    #[rstest]
    fn debug_shows_direction_and_arity() {
        let builder = dual_fold_endo::<Endo<i32>>().with(|x: i32| x);
        assert_eq!(
            format!("{builder:?}"),
            "FoldEndo { direction: \"dual\", arity: 1, .. }"
        );
    }
}
