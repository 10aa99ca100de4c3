//! `WriterT` - accumulated output inside another context.
//!
//! `WriterT<W, M>` wraps an inner context carrying a result and its output,
//! such as `Option<(A, W)>`. Outputs combine with `W`'s monoid in chaining
//! order; when the inner context stops, the output gathered so far is
//! discarded along with the result.
//!
//! # Examples
//!
//! ```rust
//! use endofold::effect::WriterT;
//!
//! let checked = |value: i32| -> WriterT<Vec<String>, Result<(i32, Vec<String>), String>> {
//!     if value >= 0 {
//!         WriterT::new(Ok((value, vec![format!("accepted {value}")])))
//!     } else {
//!         WriterT::new(Err(format!("rejected {value}")))
//!     }
//! };
//!
//! let total = checked(1).flat_map_result(move |first| checked(2).fmap_result(move |second| first + second));
//! assert_eq!(total.run(), Ok((3, vec!["accepted 1".to_string(), "accepted 2".to_string()])));
//! ```

use std::marker::PhantomData;

use crate::typeclass::Monoid;

/// An inner context `M` carrying a result together with an output `W`.
pub struct WriterT<W, M>
where
    W: Monoid + 'static,
{
    inner: M,
    _marker: PhantomData<W>,
}

impl<W, M> WriterT<W, M>
where
    W: Monoid + 'static,
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

impl<W, M> Clone for WriterT<W, M>
where
    W: Monoid + 'static,
    M: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<W, M> std::fmt::Debug for WriterT<W, M>
where
    W: Monoid + 'static,
    M: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_tuple("WriterT").field(&self.inner).finish()
    }
}

// =============================================================================
// Option-specific Methods
// =============================================================================

impl<W, A> WriterT<W, Option<(A, W)>>
where
    W: Monoid + 'static,
    A: 'static,
{
    /// A present value with empty output.
    pub fn pure_option(value: A) -> Self {
        Self::new(Some((value, W::empty())))
    }

    /// Transforms the result, keeping the output.
    pub fn fmap_option<B, F>(self, function: F) -> WriterT<W, Option<(B, W)>>
    where
        F: FnOnce(A) -> B,
        B: 'static,
    {
        WriterT::new(self.inner.map(|(value, output)| (function(value), output)))
    }

    /// Chains a computation chosen from the result; stops at the first `None`.
    pub fn flat_map_option<B, F>(self, function: F) -> WriterT<W, Option<(B, W)>>
    where
        F: FnOnce(A) -> WriterT<W, Option<(B, W)>>,
        B: 'static,
    {
        WriterT::new(self.inner.and_then(|(value, first_output)| {
            function(value)
                .inner
                .map(|(result, second_output)| (result, first_output.combine(second_output)))
        }))
    }
}

impl<W> WriterT<W, Option<((), W)>>
where
    W: Monoid + 'static,
{
    /// Output only.
    pub fn tell_option(output: W) -> Self {
        Self::new(Some(((), output)))
    }
}

// =============================================================================
// Result-specific Methods
// =============================================================================

impl<W, A, E> WriterT<W, Result<(A, W), E>>
where
    W: Monoid + 'static,
    A: 'static,
    E: 'static,
{
    /// A successful value with empty output.
    pub fn pure_result(value: A) -> Self {
        Self::new(Ok((value, W::empty())))
    }

    /// A failure; no output survives it.
    pub fn throw_result(error: E) -> Self {
        Self::new(Err(error))
    }

    /// Transforms the result, keeping the output.
    pub fn fmap_result<B, F>(self, function: F) -> WriterT<W, Result<(B, W), E>>
    where
        F: FnOnce(A) -> B,
        B: 'static,
    {
        WriterT::new(self.inner.map(|(value, output)| (function(value), output)))
    }

    /// Chains a computation chosen from the result; stops at the first `Err`.
    pub fn flat_map_result<B, F>(self, function: F) -> WriterT<W, Result<(B, W), E>>
    where
        F: FnOnce(A) -> WriterT<W, Result<(B, W), E>>,
        B: 'static,
    {
        WriterT::new(self.inner.and_then(|(value, first_output)| {
            function(value)
                .inner
                .map(|(result, second_output)| (result, first_output.combine(second_output)))
        }))
    }
}

impl<W, E> WriterT<W, Result<((), W), E>>
where
    W: Monoid + 'static,
    E: 'static,
{
    /// Output only.
    pub fn tell_result(output: W) -> Self {
        Self::new(Ok(((), output)))
    }
}
