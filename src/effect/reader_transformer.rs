//! `ReaderT` - an environment layered over another context.
//!
//! `ReaderT<R, M>` wraps a function `R -> M`. Unlike the other transformers
//! in this module, reading an environment does not interact with the inner
//! context, so a single generic definition serves every inner `M`: the fold
//! integration delegates sequencing and short-circuiting to `M` itself.
//!
//! # Examples
//!
//! ```rust
//! use endofold::effect::ReaderT;
//!
//! let port: ReaderT<&str, Option<u16>> = ReaderT::new(|text: &str| text.parse().ok());
//! assert_eq!(port.run("8080"), Some(8080));
//! assert_eq!(port.run("http"), None);
//! ```

use std::rc::Rc;

/// A computation that reads an environment `R` and produces an `M`.
pub struct ReaderT<R, M>
where
    R: 'static,
{
    run_function: Rc<dyn Fn(R) -> M>,
}

impl<R, M> ReaderT<R, M>
where
    R: 'static,
{
    /// Runs the computation against an environment.
    pub fn run(&self, environment: R) -> M {
        (self.run_function)(environment)
    }
}

impl<R, M> ReaderT<R, M>
where
    R: 'static,
    M: 'static,
{
    /// Creates a `ReaderT` from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> M + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Lifts an inner value, ignoring the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::effect::ReaderT;
    ///
    /// let constant: ReaderT<i32, Result<&str, String>> = ReaderT::lift(Ok("fixed"));
    /// assert_eq!(constant.run(99), Ok("fixed"));
    /// ```
    pub fn lift(inner: M) -> Self
    where
        M: Clone,
    {
        Self::new(move |_| inner.clone())
    }

    /// Runs `computation` against an environment adjusted by `modifier`.
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let computation_function = computation.run_function;
        Self::new(move |environment| (computation_function)(modifier(environment)))
    }

    /// Transforms the inner value produced for each environment.
    pub fn map_inner<N, F>(self, function: F) -> ReaderT<R, N>
    where
        F: Fn(M) -> N + 'static,
        N: 'static,
    {
        let original = self.run_function;
        ReaderT::new(move |environment| function((original)(environment)))
    }
}

impl<R, M> Clone for ReaderT<R, M>
where
    R: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, M> std::fmt::Display for ReaderT<R, M>
where
    R: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<ReaderT>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn lift_ignores_environment() {
        let reader: ReaderT<i32, Option<i32>> = ReaderT::lift(Some(1));
        assert_eq!(reader.run(0), Some(1));
        assert_eq!(reader.run(100), Some(1));
    }

    #[rstest]
    fn local_adjusts_environment() {
        let reader: ReaderT<i32, Option<i32>> = ReaderT::new(|environment| Some(environment * 2));
        let shifted = ReaderT::local(|environment| environment + 1, reader);
        assert_eq!(shifted.run(4), Some(10));
    }

    #[rstest]
    fn map_inner_changes_inner_context() {
        let reader: ReaderT<i32, Option<i32>> =
            ReaderT::new(|environment| (environment > 0).then_some(environment));
        let as_result = reader.map_inner(|inner| inner.ok_or("not positive"));
        assert_eq!(as_result.run(3), Ok(3));
        assert_eq!(as_result.run(-3), Err("not positive"));
    }

    #[rstest]
    fn clone_shares_function() {
        let reader: ReaderT<i32, Option<i32>> = ReaderT::new(Some);
        assert_eq!(reader.clone().run(5), reader.run(5));
        assert_eq!(format!("{reader}"), "<ReaderT>");
    }
}
