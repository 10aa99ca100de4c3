//! The endo-representable capability.
//!
//! [`AnEndo<T>`] is implemented by every shape of value that can be
//! normalized into a canonical [`Endo<T>`]: bare transformers, already
//! built endomorphisms, optional values, reversal-marked values, zero
//! information markers, and (in sibling modules) collections and tuples.
//!
//! Each shape yields two forms:
//!
//! - the forward form, [`AnEndo::an_endo`], used by forward folds;
//! - the dual form, [`AnEndo::a_dual_endo`], used by dual folds.
//!
//! Atomic shapes define only the forward form; the dual is derived by
//! wrapping it in [`Dual`] so the two can never disagree. A shape whose
//! dual is primary, such as [`Dual<A>`] itself, derives its forward form by
//! unwrapping instead.
//!
//! The operand type is the trait parameter, so composing representables
//! over different operands is rejected when the program is compiled:
//!
//! ```compile_fail
//! use endofold::endo::{AnEndo, Endo};
//!
//! fn normalize<A: AnEndo<i32>>(argument: A) -> Endo<i32> {
//!     argument.an_endo()
//! }
//!
//! normalize(|text: String| text);
//! ```

use std::marker::PhantomData;

use super::Endo;
use crate::typeclass::{Dual, Identity};

/// A value that can be normalized into an endomorphism over `T`.
///
/// # Examples
///
/// ```rust
/// use endofold::endo::AnEndo;
///
/// let add_one = |x: i32| x + 1;
/// assert_eq!(add_one.an_endo().apply(1), 2);
///
/// let nothing: Option<fn(i32) -> i32> = None;
/// assert_eq!(nothing.an_endo().apply(1), 1);
/// ```
pub trait AnEndo<T> {
    /// Produces the forward form of this value.
    fn an_endo(self) -> Endo<T>;

    /// Produces the dual form of this value.
    ///
    /// Defaults to the forward form relabeled as [`Dual`].
    fn a_dual_endo(self) -> Dual<Endo<T>>
    where
        Self: Sized,
    {
        self.an_endo().reverse()
    }
}

// =============================================================================
// Transformers and Built Endomorphisms
// =============================================================================

impl<T, F> AnEndo<T> for F
where
    F: Fn(T) -> T + 'static,
{
    fn an_endo(self) -> Endo<T> {
        Endo::new(self)
    }
}

impl<T> AnEndo<T> for Endo<T> {
    fn an_endo(self) -> Endo<T> {
        self
    }
}

// =============================================================================
// Wrappers
// =============================================================================

/// A reversal-marked representable: its forward form is the inner value's
/// dual form, and the other way around.
impl<T, A: AnEndo<T>> AnEndo<T> for Dual<A> {
    fn an_endo(self) -> Endo<T> {
        self.into_inner().a_dual_endo().into_inner()
    }

    fn a_dual_endo(self) -> Dual<Endo<T>> {
        self.into_inner().an_endo().reverse()
    }
}

impl<T, A: AnEndo<T>> AnEndo<T> for Identity<A> {
    fn an_endo(self) -> Endo<T> {
        self.into_inner().an_endo()
    }

    fn a_dual_endo(self) -> Dual<Endo<T>> {
        self.into_inner().a_dual_endo()
    }
}

/// Absence normalizes to the identity.
impl<T, A: AnEndo<T>> AnEndo<T> for Option<A> {
    fn an_endo(self) -> Endo<T> {
        self.map_or_else(Endo::identity, AnEndo::an_endo)
    }

    fn a_dual_endo(self) -> Dual<Endo<T>> {
        self.map_or_else(|| Endo::identity().reverse(), AnEndo::a_dual_endo)
    }
}

// =============================================================================
// Zero-Information Markers
// =============================================================================

impl<T> AnEndo<T> for PhantomData<T> {
    fn an_endo(self) -> Endo<T> {
        Endo::identity()
    }
}

/// The unit value is a no-op for every operand type.
impl<T> AnEndo<T> for () {
    fn an_endo(self) -> Endo<T> {
        Endo::identity()
    }
}
