//! `StateT` - a state threaded through another context.
//!
//! `StateT<S, M>` wraps a function `S -> M` where `M` carries the result and
//! the next state, such as `Option<(A, S)>`. Without higher-kinded types the
//! operations are provided per inner context, following the naming pattern
//! `method_option`, `method_result`, `method_io`.
//!
//! # Examples
//!
//! ```rust
//! use endofold::effect::StateT;
//!
//! let take = |amount: u32| {
//!     StateT::new(move |budget: u32| budget.checked_sub(amount).map(|left| (amount, left)))
//! };
//!
//! let both = take(3).flat_map_option(move |first| take(4).fmap_option(move |second| first + second));
//! assert_eq!(both.run(10), Some((7, 3)));
//! assert_eq!(both.run(5), None);
//! ```

use std::rc::Rc;

use super::IO;

/// A computation that threads a state `S` through an inner context `M`.
pub struct StateT<S, M>
where
    S: 'static,
{
    run_function: Rc<dyn Fn(S) -> M>,
}

impl<S, M> StateT<S, M>
where
    S: 'static,
{
    /// Runs the computation from an initial state.
    pub fn run(&self, initial_state: S) -> M {
        (self.run_function)(initial_state)
    }
}

impl<S, M> StateT<S, M>
where
    S: 'static,
    M: 'static,
{
    /// Creates a `StateT` from a state transition.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> M + 'static,
    {
        Self {
            run_function: Rc::new(transition),
        }
    }
}

impl<S, M> Clone for StateT<S, M>
where
    S: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

// =============================================================================
// Option-specific Methods
// =============================================================================

impl<S, A> StateT<S, Option<(A, S)>>
where
    S: 'static,
    A: 'static,
{
    /// Returns a value without touching the state.
    pub fn pure_option(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| Some((value.clone(), state)))
    }

    /// Lifts an `Option`; `None` stops the computation.
    pub fn lift_option(inner: Option<A>) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| inner.clone().map(|value| (value, state)))
    }

    /// Transforms the result.
    pub fn fmap_option<B, F>(self, function: F) -> StateT<S, Option<(B, S)>>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        StateT::new(move |state| {
            (original)(state).map(|(value, new_state)| (function(value), new_state))
        })
    }

    /// Chains a computation chosen from the result; stops at the first `None`.
    pub fn flat_map_option<B, F>(self, function: F) -> StateT<S, Option<(B, S)>>
    where
        F: Fn(A) -> StateT<S, Option<(B, S)>> + 'static,
        B: 'static,
    {
        let original = self.run_function;
        StateT::new(move |state| {
            let (value, intermediate_state) = (original)(state)?;
            function(value).run(intermediate_state)
        })
    }

    /// Runs the computation and keeps only the result.
    pub fn eval(&self, initial_state: S) -> Option<A> {
        self.run(initial_state).map(|(value, _)| value)
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(&self, initial_state: S) -> Option<S> {
        self.run(initial_state).map(|(_, state)| state)
    }
}

// =============================================================================
// Result-specific Methods
// =============================================================================

impl<S, A, E> StateT<S, Result<(A, S), E>>
where
    S: 'static,
    A: 'static,
    E: 'static,
{
    /// Returns a value without touching the state.
    pub fn pure_result(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| Ok((value.clone(), state)))
    }

    /// Lifts a `Result`; `Err` stops the computation.
    pub fn lift_result(inner: Result<A, E>) -> Self
    where
        A: Clone,
        E: Clone,
    {
        Self::new(move |state| inner.clone().map(|value| (value, state)))
    }

    /// Transforms the result.
    pub fn fmap_result<B, F>(self, function: F) -> StateT<S, Result<(B, S), E>>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        StateT::new(move |state| {
            (original)(state).map(|(value, new_state)| (function(value), new_state))
        })
    }

    /// Chains a computation chosen from the result; stops at the first `Err`.
    pub fn flat_map_result<B, F>(self, function: F) -> StateT<S, Result<(B, S), E>>
    where
        F: Fn(A) -> StateT<S, Result<(B, S), E>> + 'static,
        B: 'static,
    {
        let original = self.run_function;
        StateT::new(move |state| {
            let (value, intermediate_state) = (original)(state)?;
            function(value).run(intermediate_state)
        })
    }
}

impl<S, E> StateT<S, Result<((), S), E>>
where
    S: 'static,
    E: 'static,
{
    /// Replaces the current state.
    pub fn put_result(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| Ok(((), new_state.clone())))
    }
}

// =============================================================================
// IO-specific Methods
// =============================================================================

impl<S, A> StateT<S, IO<(A, S)>>
where
    S: 'static,
    A: 'static,
{
    /// Returns a value without touching the state.
    pub fn pure_io(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| IO::pure((value.clone(), state)))
    }

    /// Transforms the result once the inner action has run.
    pub fn fmap_io<B, F>(self, function: F) -> StateT<S, IO<(B, S)>>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        let function_rc = Rc::new(function);
        StateT::new(move |state| {
            let function_clone = Rc::clone(&function_rc);
            (original)(state).fmap(move |(value, new_state)| (function_clone(value), new_state))
        })
    }

    /// Chains a computation chosen from the result; the inner actions run in
    /// chaining order.
    pub fn flat_map_io<B, F>(self, function: F) -> StateT<S, IO<(B, S)>>
    where
        F: Fn(A) -> StateT<S, IO<(B, S)>> + 'static,
        B: 'static,
    {
        let original = self.run_function;
        let function_rc = Rc::new(function);
        StateT::new(move |state| {
            let function_clone = Rc::clone(&function_rc);
            (original)(state).flat_map(move |(value, intermediate_state)| {
                function_clone(value).run(intermediate_state)
            })
        })
    }
}

impl<S> StateT<S, IO<((), S)>>
where
    S: 'static,
{
    /// Updates the current state.
    pub fn modify_io<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| IO::pure(((), modifier(state))))
    }
}
