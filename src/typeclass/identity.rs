//! Identity wrapper type - the context that adds nothing.
//!
//! `Identity` serves two roles in folds:
//!
//! - as a representable shape, `Identity<A>` normalizes exactly like `A`;
//! - as a fold context, `Identity<Endo<T>>` is the "no wrapper" result, and
//!   `Identity<A>` is how an argument is marked as effect-wrapped in it.

/// Wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use endofold::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Applies a function to the wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::typeclass::Identity;
    ///
    /// assert_eq!(Identity::new(20).fmap(|x| x + 1), Identity::new(21));
    /// ```
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
