//! # endofold
//!
//! Composable endomorphisms and a statically typed variadic fold over
//! heterogeneous setters.
//!
//! ## Overview
//!
//! - **Endomorphisms**: [`Endo<T>`](endo::Endo), a transformer `T -> T` that
//!   composes associatively with an identity
//! - **Representables**: [`AnEndo<T>`](endo::AnEndo), implemented by bare
//!   closures, options, collections, tuples and reversal markers
//! - **Folds**: [`fold_endo!`] and [`dual_fold_endo!`] compose any number of
//!   representables in a caller-chosen [`FoldContext`](fold::FoldContext)
//! - **Effect contexts**: arguments may arrive inside `Option`, `Result`,
//!   [`Either`](control::Either), [`IO`](effect::IO), state or reader
//!   transformers, or local futures
//! - **Setters**: `#[derive(Setters)]` generates one setter endomorphism per
//!   field
//!
//! ## Feature Flags
//!
//! - `control`: the `Either` type and its fold context
//! - `effect`: `IO`, `Reader`, `State`, `Writer`, the transformers and their
//!   fold contexts
//! - `async`: the local future fold context (pulls in `futures`)
//! - `derive`: `#[derive(Setters)]`
//! - `full`: enable all features (the default)
//!
//! ## Example
//!
//! ```rust
//! use endofold::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq, Default, Setters)]
//! struct ServerConfig {
//!     host: String,
//!     port: u16,
//!     workers: usize,
//! }
//!
//! let port_from_environment: Option<u16> = Some(8080);
//!
//! let configure: Option<Endo<ServerConfig>> = fold_endo!(
//!     ServerConfig::set_host("0.0.0.0".to_string()),
//!     <= port_from_environment.map(ServerConfig::set_port),
//!     ServerConfig::modify_workers(|workers| workers.max(4)),
//! );
//!
//! let config = configure.map(|endo| endo.apply(ServerConfig::default()));
//! assert_eq!(
//!     config,
//!     Some(ServerConfig { host: "0.0.0.0".to_string(), port: 8080, workers: 4 })
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the endomorphism types, the fold builder and macros, and the
/// contexts enabled by the active features.
///
/// # Usage
///
/// ```rust
/// use endofold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::endo::{AnEndo, Endo, Reverse, WrapIter, embed, embed_dual};
    pub use crate::fold::{FoldContext, FoldEndo};
    pub use crate::typeclass::{Dual, Identity, Monoid, Semigroup};
    pub use crate::{dual_fold_endo, fold_endo};

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "derive")]
    pub use crate::Setters;
}

pub mod endo;
pub mod fold;
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "derive")]
pub use endofold_derive::Setters;
