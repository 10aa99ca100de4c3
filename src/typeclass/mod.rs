//! Algebraic type classes used to compose endomorphisms.
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Identity`]: The wrapper that adds no behavior
//! - [`Dual`]: A semigroup with its operands swapped
//!
//! # Examples
//!
//! ```rust
//! use endofold::typeclass::{Dual, Monoid, Semigroup};
//!
//! let forward = String::combine_all(vec![String::from("a"), String::from("b")]);
//! assert_eq!(forward, "ab");
//!
//! let reversed = Dual::combine_all(vec![Dual(String::from("a")), Dual(String::from("b"))]);
//! assert_eq!(reversed.into_inner(), "ba");
//! ```

mod identity;
mod monoid;
mod semigroup;
mod wrappers;

pub use identity::Identity;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::Dual;
