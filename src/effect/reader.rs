//! Reader - a computation that depends on a shared, read-only environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composed readers all see the
//! same environment, which makes `Reader<R, Endo<T>>` a natural way to build
//! a value whose setters depend on configuration supplied later.
//!
//! # Laws
//!
//! - Identity: `reader.fmap(|x| x) == reader`
//! - Left Identity: `Reader::pure(a).flat_map(f) == f(a)`
//! - Ask Local Identity: `Reader::local(|r| r, m) == m`
//!
//! # Examples
//!
//! ```rust
//! use endofold::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Environment {
//!     host: String,
//!     port: u16,
//! }
//!
//! let address = Reader::asks(|environment: Environment| environment.host)
//!     .map2(Reader::asks(|environment: Environment| environment.port), |host, port| {
//!         format!("{host}:{port}")
//!     });
//!
//! let environment = Environment { host: "localhost".to_string(), port: 8080 };
//! assert_eq!(address.run(environment), "localhost:8080");
//! ```

use std::rc::Rc;

/// A computation that reads from an environment of type `R`.
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a Reader from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation. A Reader can be run any number of times.
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// A Reader that ignores the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::effect::Reader;
    ///
    /// let reader: Reader<i32, &str> = Reader::pure("constant");
    /// assert_eq!(reader.run(100), "constant");
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Projects a value out of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs `computation` against an environment adjusted by `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::effect::Reader;
    ///
    /// let doubled: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let shifted = Reader::local(|environment| environment + 10, doubled);
    /// assert_eq!(shifted.run(5), 30);
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let computation_function = computation.run_function;
        Self::new(move |environment| (computation_function)(modifier(environment)))
    }

    /// Transforms the result.
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| function((original_function)(environment)))
    }

    /// Chains a Reader chosen from this Reader's result; both see the same
    /// environment.
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let original_function = self.run_function;
        Reader::new(move |environment: R| {
            let a = (original_function)(environment.clone());
            function(a).run(environment)
        })
    }

    /// Runs both Readers against the same environment and combines the results.
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        Reader::new(move |environment: R| {
            let a = (self_function)(environment.clone());
            let b = (other_function)(environment);
            function(a, b)
        })
    }
}

impl<Env> Reader<Env, Env>
where
    Env: Clone + 'static,
{
    /// A Reader that returns the whole environment.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> std::fmt::Display for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Reader>")
    }
}
