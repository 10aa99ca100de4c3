//! The contexts a fold result can be wrapped in.
//!
//! A fold over representables always produces an `Endo<T>`; the
//! [`FoldContext`] a caller asks for decides what surrounds it. Each context
//! supplies three operations:
//!
//! - `lift`: the trivial embedding of a finished endomorphism;
//! - `map_endo`: extend the wrapped endomorphism with a plain step;
//! - `bind_effect`: sequence a step whose argument is itself wrapped in the
//!   context's effect type, applying the context's short-circuit rule.
//!
//! The set is closed: the implementations in this module, in
//! `effect_context` and in `async_context` are the supported contexts.
//!
//! | Result type | Effect-wrapped argument | Stops at |
//! |---|---|---|
//! | `Endo<T>` | `Identity<A>` | never |
//! | `Identity<Endo<T>>` | `Identity<A>` | never |
//! | `Option<Endo<T>>` | `Option<A>` | first `None` |
//! | `Result<Endo<T>, E>` | `Result<A, E>` | first `Err` |
//! | `Either<E, Endo<T>>` | `Either<E, A>` | first `Left` |
//! | `Vec<Endo<T>>` | `Vec<A>` | an empty list |

use tracing::debug;

use crate::endo::Endo;
use crate::typeclass::Identity;

#[cfg(feature = "control")]
use crate::control::Either;

/// A context a fold result can be produced in.
///
/// # Examples
///
/// ```rust
/// use endofold::endo::Endo;
/// use endofold::fold::FoldContext;
///
/// let lifted = <Option<Endo<i32>> as FoldContext>::lift(Endo::new(|x| x + 1));
/// let stopped = lifted.bind_effect(None::<fn(i32) -> i32>, |accumulator, _| accumulator);
/// assert!(stopped.is_none());
/// ```
pub trait FoldContext: Sized + 'static {
    /// The type the folded endomorphism transforms.
    type Operand: 'static;

    /// The wrapper an effect-wrapped argument arrives in.
    type Effect<A: Clone + 'static>: 'static;

    /// Embeds a plain endomorphism without any effect.
    fn lift(endo: Endo<Self::Operand>) -> Self;

    /// Replaces the wrapped endomorphism with `function` applied to it.
    ///
    /// A context that has already stopped stays stopped.
    #[must_use]
    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<Self::Operand>) -> Endo<Self::Operand> + 'static;

    /// Sequences an effect-wrapped argument after the current result.
    ///
    /// `function` merges the accumulated endomorphism with the unwrapped
    /// argument. It is not called once either side has stopped, and a
    /// context that has already stopped keeps its own stopping value.
    #[must_use]
    fn bind_effect<A, F>(self, effect: Self::Effect<A>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<Self::Operand>, A) -> Endo<Self::Operand> + 'static;
}

// =============================================================================
// Plain Contexts
// =============================================================================

impl<T: 'static> FoldContext for Endo<T> {
    type Operand = T;
    type Effect<A: Clone + 'static> = Identity<A>;

    fn lift(endo: Endo<T>) -> Self {
        endo
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        function(self)
    }

    fn bind_effect<A, F>(self, effect: Identity<A>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        function(self, effect.into_inner())
    }
}

impl<T: 'static> FoldContext for Identity<Endo<T>> {
    type Operand = T;
    type Effect<A: Clone + 'static> = Identity<A>;

    fn lift(endo: Endo<T>) -> Self {
        Self::new(endo)
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        self.fmap(function)
    }

    fn bind_effect<A, F>(self, effect: Identity<A>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        Self::new(function(self.into_inner(), effect.into_inner()))
    }
}

// =============================================================================
// Short-circuiting Contexts
// =============================================================================

impl<T: 'static> FoldContext for Option<Endo<T>> {
    type Operand = T;
    type Effect<A: Clone + 'static> = Option<A>;

    fn lift(endo: Endo<T>) -> Self {
        Some(endo)
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        self.map(function)
    }

    fn bind_effect<A, F>(self, effect: Option<A>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        let accumulator = self?;
        if let Some(argument) = effect {
            Some(function(accumulator, argument))
        } else {
            debug!(context = "Option", "fold short-circuited on an absent argument");
            None
        }
    }
}

impl<T: 'static, E: 'static> FoldContext for Result<Endo<T>, E> {
    type Operand = T;
    type Effect<A: Clone + 'static> = Result<A, E>;

    fn lift(endo: Endo<T>) -> Self {
        Ok(endo)
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        self.map(function)
    }

    fn bind_effect<A, F>(self, effect: Result<A, E>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        let accumulator = self?;
        effect
            .map(|argument| function(accumulator, argument))
            .inspect_err(|_| debug!(context = "Result", "fold short-circuited on an error"))
    }
}

#[cfg(feature = "control")]
impl<T: 'static, E: 'static> FoldContext for Either<E, Endo<T>> {
    type Operand = T;
    type Effect<A: Clone + 'static> = Either<E, A>;

    fn lift(endo: Endo<T>) -> Self {
        Self::pure(endo)
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        self.fmap(function)
    }

    fn bind_effect<A, F>(self, effect: Either<E, A>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        self.flat_map(|accumulator| {
            if effect.is_left() {
                debug!(context = "Either", "fold short-circuited on a Left");
            }
            effect.fmap(|argument| function(accumulator, argument))
        })
    }
}

// =============================================================================
// Non-deterministic Context
// =============================================================================

/// Every accumulated alternative is combined with every alternative of the
/// argument, accumulated alternatives outermost.
impl<T: 'static> FoldContext for Vec<Endo<T>> {
    type Operand = T;
    type Effect<A: Clone + 'static> = Vec<A>;

    fn lift(endo: Endo<T>) -> Self {
        vec![endo]
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        self.into_iter().map(function).collect()
    }

    fn bind_effect<A, F>(self, effect: Vec<A>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        if effect.is_empty() && !self.is_empty() {
            debug!(context = "Vec", "fold short-circuited on an empty list");
        }
        self.into_iter()
            .flat_map(|accumulator| {
                effect
                    .iter()
                    .map(|argument| function(accumulator.clone(), argument.clone()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

static_assertions::assert_impl_all!(Endo<i32>: FoldContext);
static_assertions::assert_impl_all!(Option<Endo<String>>: FoldContext);
static_assertions::assert_impl_all!(Result<Endo<String>, std::io::Error>: FoldContext);
