//! The endomorphism value: a composable transformer `T -> T`.
//!
//! # Overview
//!
//! `Endo<T>` wraps a transformer from `T` to `T` and forms a monoid:
//!
//! - the identity element returns its input unchanged;
//! - `f.combine(g)` is `x ↦ f(g(x))`: the right operand runs first and its
//!   result is fed into the left operand.
//!
//! # Representation
//!
//! An `Endo` is a flat double-ended queue of shared steps rather than a tower
//! of nested closures. Application walks the queue iteratively, so folding
//! thousands of setters never grows the call stack. Combining moves the
//! shorter operand's steps onto whichever end of the longer one they belong,
//! which keeps both forward and dual folds linear in the number of steps.
//! Steps are reference-counted, which makes cloning cheap and makes `Endo`
//! neither `Send` nor `Sync`.
//!
//! Only application of the composed steps is iterative. A fold context such
//! as `IO` chains one closure per effect-wrapped argument, so running that
//! context still nests one call per such argument.
//!
//! # Laws
//!
//! ```text
//! Endo::identity().combine(f) ≡ f ≡ f.combine(Endo::identity())
//! f.combine(g).combine(h) ≡ f.combine(g.combine(h))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use endofold::endo::Endo;
//! use endofold::typeclass::{Monoid, Semigroup};
//!
//! let add_one = Endo::new(|x: i32| x + 1);
//! let double = Endo::new(|x: i32| x * 2);
//!
//! assert_eq!(add_one.clone().combine(double.clone()).apply(5), 11);
//! assert_eq!(double.combine(add_one).apply(5), 12);
//! assert_eq!(Endo::<i32>::empty().apply(5), 5);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Dual, Monoid, Semigroup};

type Step<T> = Rc<dyn Fn(T) -> T>;

/// A composable transformer from a type to itself.
///
/// See the [module documentation](self) for the composition order.
pub struct Endo<T> {
    /// Outermost step first; application runs them back to front.
    steps: VecDeque<Step<T>>,
}

impl<T> Endo<T> {
    /// Returns the transformer that leaves its input unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::endo::Endo;
    ///
    /// assert_eq!(Endo::identity().apply("unchanged"), "unchanged");
    /// ```
    #[must_use]
    pub fn identity() -> Self {
        Self {
            steps: VecDeque::new(),
        }
    }

    /// Creates an endomorphism from a transformer function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::endo::Endo;
    ///
    /// let shout = Endo::new(|text: String| text.to_uppercase());
    /// assert_eq!(shout.apply("hi".to_string()), "HI");
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(T) -> T + 'static,
    {
        let mut steps: VecDeque<Step<T>> = VecDeque::with_capacity(1);
        steps.push_back(Rc::new(function));
        Self { steps }
    }

    /// Applies the transformer to a value.
    ///
    /// The endomorphism is not consumed and can be applied again.
    pub fn apply(&self, value: T) -> T {
        self.steps
            .iter()
            .rev()
            .fold(value, |accumulator, step| step(accumulator))
    }

    /// Converts the endomorphism into a plain closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::endo::Endo;
    ///
    /// let negate = Endo::new(|x: i64| -x).into_fn();
    /// assert_eq!([1, 2].map(negate), [-1, -2]);
    /// ```
    pub fn into_fn(self) -> impl Fn(T) -> T {
        move |value| self.apply(value)
    }

    /// Number of primitive steps this endomorphism runs when applied.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if this endomorphism was built only from identities.
    ///
    /// A transformer that happens to behave like the identity (for example
    /// `|x| x`) still counts as a step and returns `false`.
    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// Relabels this endomorphism as its dual form.
    ///
    /// This is a wrap, not a recomputation: the steps are moved as they are
    /// and only the combine order of the result changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::endo::Endo;
    /// use endofold::typeclass::Semigroup;
    ///
    /// let add_one = Endo::new(|x: i32| x + 1).reverse();
    /// let double = Endo::new(|x: i32| x * 2).reverse();
    ///
    /// // In dual form the right operand becomes the outer one.
    /// assert_eq!(add_one.combine(double).into_inner().apply(5), 12);
    /// ```
    #[must_use]
    pub fn reverse(self) -> Dual<Self> {
        Dual::new(self)
    }
}

impl<T> Semigroup for Endo<T> {
    fn combine(mut self, mut other: Self) -> Self {
        if self.steps.len() >= other.steps.len() {
            self.steps.extend(other.steps);
            self
        } else {
            for step in self.steps.into_iter().rev() {
                other.steps.push_front(step);
            }
            other
        }
    }
}

impl<T> Monoid for Endo<T> {
    fn empty() -> Self {
        Self::identity()
    }
}

impl<T> Clone for Endo<T> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
        }
    }
}

impl<T, F> From<F> for Endo<T>
where
    F: Fn(T) -> T + 'static,
{
    fn from(function: F) -> Self {
        Self::new(function)
    }
}

impl<T> Default for Endo<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> fmt::Debug for Endo<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Endo")
            .field("steps", &self.steps.len())
            .finish()
    }
}

impl<T> fmt::Display for Endo<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Endo: {} steps>", self.steps.len())
    }
}

static_assertions::assert_not_impl_any!(Endo<i32>: Send, Sync);
static_assertions::assert_impl_all!(Endo<String>: Clone, Default, Monoid);
