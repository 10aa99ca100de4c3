//! Variadic folds of representables into a caller-chosen context.
//!
//! A fold takes any number of [`AnEndo`](crate::endo::AnEndo) arguments,
//! normalizes each one, and composes them into a single
//! [`Endo`](crate::endo::Endo) wrapped in a [`FoldContext`]. Arguments may
//! also arrive inside the context's effect (an `Option`, a `Result`, an
//! `IO`, ...); the context then decides how they are sequenced and when the
//! fold stops early.
//!
//! - [`fold_endo`] / [`fold_endo!`](crate::fold_endo): forward fold
//! - [`dual_fold_endo`] / [`dual_fold_endo!`](crate::dual_fold_endo): dual fold
//! - [`FoldContext`]: the contexts a fold result can be wrapped in
//!
//! # Examples
//!
//! ```rust
//! use endofold::fold_endo;
//! use endofold::endo::Endo;
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! struct Request {
//!     retries: u8,
//!     path: String,
//! }
//!
//! let retries = |count: u8| move |request: Request| Request { retries: count, ..request };
//! let path = |value: &'static str| move |request: Request| Request { path: value.into(), ..request };
//! let from_environment: Result<_, String> = Ok(path("/health"));
//!
//! let configure: Result<Endo<Request>, String> = fold_endo!(retries(3), <= from_environment);
//! let request = configure.map(|endo| endo.apply(Request::default()));
//! assert_eq!(request, Ok(Request { retries: 3, path: "/health".into() }));
//! ```

mod builder;
mod context;
mod fold_macro;

#[cfg(feature = "effect")]
mod effect_context;

#[cfg(feature = "async")]
mod async_context;

pub use builder::{Backward, Direction, FoldEndo, Forward, dual_fold_endo, fold_endo};
pub use context::FoldContext;
