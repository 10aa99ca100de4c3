//! `ExceptT` - early failure layered over a deferred action.
//!
//! `ExceptT<E, IO<Result<A, E>>>` runs its actions in order until one
//! produces an `Err`; every action chained after the failure is skipped and
//! never runs.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use endofold::effect::{ExceptT, IO};
//!
//! let ran_after_failure = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&ran_after_failure);
//!
//! let program = ExceptT::<String, IO<Result<i32, String>>>::throw_io("no config".to_string())
//!     .flat_map_io(move |value| {
//!         ExceptT::lift_io(IO::new(move || {
//!             flag.set(true);
//!             value + 1
//!         }))
//!     });
//!
//! assert_eq!(program.run().run_unsafe(), Err("no config".to_string()));
//! assert!(!ran_after_failure.get());
//! ```

use std::marker::PhantomData;

use super::IO;

/// An inner context `M` whose result may be an early failure of type `E`.
pub struct ExceptT<E, M>
where
    E: 'static,
{
    inner: M,
    _marker: PhantomData<E>,
}

impl<E, M> ExceptT<E, M>
where
    E: 'static,
{
    /// Wraps an inner context.
    pub const fn new(inner: M) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    /// Returns the inner context.
    pub fn run(self) -> M {
        self.inner
    }
}

// =============================================================================
// IO-specific Methods
// =============================================================================

impl<E, A> ExceptT<E, IO<Result<A, E>>>
where
    E: 'static,
    A: 'static,
{
    /// A successful action without side effects.
    pub fn pure_io(value: A) -> Self {
        Self::new(IO::pure(Ok(value)))
    }

    /// A failed action without side effects.
    pub fn throw_io(error: E) -> Self {
        Self::new(IO::pure(Err(error)))
    }

    /// Lifts an action that cannot fail.
    pub fn lift_io(inner: IO<A>) -> Self {
        Self::new(inner.fmap(Ok))
    }

    /// Transforms a successful result.
    pub fn fmap_io<B, F>(self, function: F) -> ExceptT<E, IO<Result<B, E>>>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        ExceptT::new(self.inner.fmap(move |result| result.map(function)))
    }

    /// Chains an action chosen from a successful result. After an `Err` the
    /// chained action is never built nor run.
    pub fn flat_map_io<B, F>(self, function: F) -> ExceptT<E, IO<Result<B, E>>>
    where
        F: FnOnce(A) -> ExceptT<E, IO<Result<B, E>>> + 'static,
        B: 'static,
    {
        ExceptT::new(self.inner.flat_map(move |result| match result {
            Ok(value) => function(value).inner,
            Err(error) => IO::pure(Err(error)),
        }))
    }

    /// Recovers from a failure with a handler.
    pub fn catch_io<F>(computation: Self, handler: F) -> Self
    where
        F: FnOnce(E) -> Self + 'static,
    {
        Self::new(computation.inner.flat_map(move |result| match result {
            Ok(value) => IO::pure(Ok(value)),
            Err(error) => handler(error).inner,
        }))
    }
}
