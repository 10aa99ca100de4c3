//! Endomorphisms and the shapes that normalize into them.
//!
//! This module provides:
//!
//! - [`Endo`]: a composable transformer `T -> T`
//! - [`AnEndo`]: the capability of a value to be normalized into an `Endo`
//! - [`WrapIter`] and [`Reverse`]: adapters for iterables of representables
//! - [`embed`] and [`embed_dual`]: routing a normalized endomorphism into a
//!   consumer
//!
//! # Examples
//!
//! ```rust
//! use endofold::endo::{AnEndo, Endo};
//!
//! let setters = (
//!     |name: String| name + "-service",
//!     Some(|name: String| name.to_uppercase()),
//!     vec![Endo::new(|name: String| name.trim().to_string())],
//! );
//!
//! assert_eq!(setters.an_endo().apply("  api ".to_string()), "API-service");
//! ```

mod collection;
mod embed;
mod endomorphism;
mod representable;
mod tuple;

pub use collection::{Reverse, WrapIter};
pub use embed::{embed, embed_dual};
pub use endomorphism::Endo;
pub use representable::AnEndo;
