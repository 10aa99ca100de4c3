//! Derive macros for endofold.
//!
//! # Available Derive Macros
//!
//! - [`Setters`]: Generates one setter and one modifier endomorphism per
//!   struct field
//!
//! # Example
//!
//! ```rust,ignore
//! use endofold::fold_endo;
//! use endofold::endo::Endo;
//! use endofold_derive::Setters;
//!
//! #[derive(Debug, Default, PartialEq, Setters)]
//! struct Retry {
//!     attempts: u32,
//!     backoff_ms: u64,
//! }
//!
//! let configure: Endo<Retry> = fold_endo!(
//!     Retry::set_attempts(3),
//!     Retry::modify_backoff_ms(|backoff| backoff + 250),
//! );
//! assert_eq!(configure.apply(Retry::default()), Retry { attempts: 3, backoff_ms: 250 });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod setters;

use proc_macro::TokenStream;

/// Derive macro generating setter endomorphisms for struct fields.
///
/// # Requirements
///
/// - The struct must be a named struct (not a tuple or unit struct)
/// - The struct must not implement `Drop`, since modifiers move the field out
///
/// # Generated Code
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn set_foo<V>(value: V) -> Endo<Self> where V: ToOwned<Owned = T> + 'static { ... }
///     pub fn modify_foo<F>(function: F) -> Endo<Self> where F: Fn(T) -> T + 'static { ... }
/// }
/// ```
///
/// A setter clones its value on every application, so `set_foo` can only be
/// called when `T` is `Clone`. Fields of other types still get `modify_foo`.
///
/// Both return an `endofold::endo::Endo<Self>`, so the generated methods can
/// be passed straight to `fold_endo!`.
#[proc_macro_derive(Setters)]
pub fn derive_setters(input: TokenStream) -> TokenStream {
    setters::derive_setters_impl(input)
}
