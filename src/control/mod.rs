//! Control structures usable as fold contexts.
//!
//! - [`Either`]: a right-biased choice that stops at the first `Left`
//!
//! # Examples
//!
//! ```rust
//! use endofold::control::Either;
//!
//! let stopped: Either<&str, i32> = Either::Left("missing field");
//! assert_eq!(stopped.fmap(|x| x + 1).into_result(), Err("missing field"));
//! ```

mod either;

pub use either::Either;
