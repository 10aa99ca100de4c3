//! Routing a normalized endomorphism into an arbitrary consumer.
//!
//! [`embed`] and [`embed_dual`] turn a consumer of `Endo<T>` (or of its dual
//! form) into a consumer of any representable, by normalizing first.

use super::{AnEndo, Endo};
use crate::typeclass::Dual;

/// Composes a consumer with forward normalization.
///
/// # Examples
///
/// ```rust
/// use endofold::endo::{embed, Endo};
///
/// let run_on_zero = embed(|endo: Endo<i32>| endo.apply(0));
/// assert_eq!(run_on_zero((|x: i32| x + 1, |x: i32| x * 5)), 1);
/// ```
pub fn embed<T, A, R, F>(consumer: F) -> impl Fn(A) -> R
where
    A: AnEndo<T>,
    F: Fn(Endo<T>) -> R,
{
    move |argument| consumer(argument.an_endo())
}

/// Composes a consumer with dual normalization.
///
/// # Examples
///
/// ```rust
/// use endofold::endo::{embed_dual, Endo};
/// use endofold::typeclass::Dual;
///
/// let run_on_zero = embed_dual(|endo: Dual<Endo<i32>>| endo.into_inner().apply(0));
/// assert_eq!(run_on_zero((|x: i32| x + 1, |x: i32| x * 5)), 5);
/// ```
pub fn embed_dual<T, A, R, F>(consumer: F) -> impl Fn(A) -> R
where
    A: AnEndo<T>,
    F: Fn(Dual<Endo<T>>) -> R,
{
    move |argument| consumer(argument.a_dual_endo())
}
