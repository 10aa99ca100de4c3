//! The `Either<L, R>` context: a right-biased choice between two values.
//!
//! `Right` carries the successful value and `Left` carries the value that
//! stops a computation. As a fold context, the first `Left` met in argument
//! order becomes the result and every later argument is ignored.
//!
//! `Either<L, R>` converts losslessly to and from `Result<R, L>`.
//!
//! # Examples
//!
//! ```rust
//! use endofold::control::Either;
//!
//! fn parse_port(text: &str) -> Either<String, u16> {
//!     text.parse::<u16>().map_err(|_| format!("invalid port: {text}")).into()
//! }
//!
//! let doubled = parse_port("4000").flat_map(|port| port.checked_mul(2).map_or_else(
//!     || Either::Left("overflow".to_string()),
//!     Either::Right,
//! ));
//! assert_eq!(doubled, Either::Right(8000));
//! assert!(parse_port("http").is_left());
//! ```

use std::fmt;

/// A value that is either a `Left(L)` or a `Right(R)`.
///
/// Operations that transform "the value" act on `Right`; `Left` passes
/// through untouched.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The stopping alternative.
    Left(L),
    /// The continuing alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Lifts a value into the continuing alternative.
    #[inline]
    pub const fn pure(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into an `Option<L>`, discarding a `Right`.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, discarding a `Left`.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies a function to the `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(20);
    /// assert_eq!(right.fmap(|x| x + 1), Either::Right(21));
    ///
    /// let left: Either<&str, i32> = Either::Left("stop");
    /// assert_eq!(left.fmap(|x| x + 1), Either::Left("stop"));
    /// ```
    #[inline]
    pub fn fmap<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the `Left` value.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Chains a computation that may itself stop.
    ///
    /// The function runs only for `Right`; a `Left` is returned unchanged.
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Combines two `Right` values; the first `Left` wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::control::Either;
    ///
    /// let first: Either<&str, i32> = Either::Left("first");
    /// let second: Either<&str, i32> = Either::Left("second");
    /// assert_eq!(first.map2(second, |a, b| a + b), Either::Left("first"));
    /// ```
    #[inline]
    pub fn map2<B, T, F>(self, other: Either<L, B>, function: F) -> Either<L, T>
    where
        F: FnOnce(R, B) -> T,
    {
        self.flat_map(|left_value| other.fmap(|right_value| function(left_value, right_value)))
    }

    /// Eliminates both alternatives into one value.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the alternatives.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns the `Right` value or computes one from the `Left`.
    #[inline]
    pub fn right_or_else<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.fold(function, |value| value)
    }

    /// Converts into a `Result`, with `Right` as `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.into()
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// Result Conversions
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pure_is_right() {
        let value: Either<String, i32> = Either::pure(5);
        assert!(value.is_right());
        assert_eq!(value.right(), Some(5));
    }

    #[rstest]
    #[case(Either::Right(3), Either::Right(6))]
    #[case(Either::Left("stop"), Either::Left("stop"))]
    fn fmap_touches_only_right(#[case] input: Either<&str, i32>, #[case] expected: Either<&str, i32>) {
        assert_eq!(input.fmap(|x| x * 2), expected);
    }

    #[rstest]
    #[case(Either::Left("stop"), Either::Left(4))]
    #[case(Either::Right(3), Either::Right(3))]
    fn map_left_touches_only_left(#[case] input: Either<&str, i32>, #[case] expected: Either<usize, i32>) {
        assert_eq!(input.map_left(str::len), expected);
    }

    #[rstest]
    fn flat_map_skips_function_on_left() {
        let mut called = false;
        let left: Either<&str, i32> = Either::Left("stop");
        let result = left.flat_map(|x| {
            called = true;
            Either::Right(x)
        });
        assert_eq!(result, Either::Left("stop"));
        assert!(!called);
    }

    #[rstest]
    fn map2_keeps_first_left() {
        let right: Either<&str, i32> = Either::Right(1);
        let left: Either<&str, i32> = Either::Left("second");
        assert_eq!(right.map2(left, |a, b| a + b), Either::Left("second"));
        assert_eq!(
            Either::<&str, i32>::Right(1).map2(Either::Right(2), |a, b| a + b),
            Either::Right(3)
        );
    }

    #[rstest]
    fn fold_swap_and_right_or_else() {
        let left: Either<i32, String> = Either::Left(4);
        assert_eq!(left.clone().fold(|x| x.to_string(), |text| text), "4");
        assert_eq!(left.clone().swap(), Either::Right(4));
        assert_eq!(left.right_or_else(|x| format!("default {x}")), "default 4");
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let error: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = error.into();
        assert_eq!(either.as_ref().left(), Some(&"error".to_string()));
        assert_eq!(either.into_result(), Err("error".to_string()));
    }

    #[rstest]
    fn debug_names_variant() {
        assert_eq!(format!("{:?}", Either::<i32, i32>::Left(1)), "Left(1)");
        assert_eq!(format!("{:?}", Either::<i32, i32>::Right(2)), "Right(2)");
    }
}
