//! IO - a deferred, single-shot side effect.
//!
//! `IO<A>` describes an action producing an `A`. Nothing runs until
//! [`IO::run_unsafe`] is called, and then every chained action runs exactly
//! once, in the order it was chained.
//!
//! As a fold context, `IO<Endo<T>>` runs the effect of each wrapped argument
//! in argument order when the folded result is finally run.
//!
//! Each `flat_map` nests one boxed closure inside the previous one, so running
//! a chain of `n` actions takes `n` nested calls. Folds bind once per
//! effect-wrapped argument, which keeps that depth at the argument count.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use endofold::effect::IO;
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let first_log = Rc::clone(&log);
//! let second_log = Rc::clone(&log);
//!
//! let io = IO::new(move || first_log.borrow_mut().push("read"))
//!     .then(IO::new(move || {
//!         second_log.borrow_mut().push("parse");
//!         7
//!     }));
//!
//! assert!(log.borrow().is_empty());
//! assert_eq!(io.run_unsafe(), 7);
//! assert_eq!(*log.borrow(), vec!["read", "parse"]);
//! ```

use std::fmt;

/// A deferred computation that may perform side effects.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    run_io: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> IO<A> {
    /// Creates an IO action from a closure. The closure is not called yet.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            run_io: Box::new(action),
        }
    }

    /// Wraps a value in an action without side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::effect::IO;
    ///
    /// assert_eq!(IO::pure("ready").run_unsafe(), "ready");
    /// ```
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Runs the action and every action chained to it.
    ///
    /// Named `run_unsafe` because it executes the described side effects.
    pub fn run_unsafe(self) -> A {
        (self.run_io)()
    }

    /// Transforms the result once the action has run.
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run_unsafe()))
    }

    /// Chains an action that depends on this action's result.
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run_unsafe()).run_unsafe())
    }

    /// Runs this action for its effects, then `next`.
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Runs this action, then `other`, and combines both results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::effect::IO;
    ///
    /// let sum = IO::pure(10).map2(IO::new(|| 20), |a, b| a + b);
    /// assert_eq!(sum.run_unsafe(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.flat_map(move |a| other.fmap(move |b| function(a, b)))
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<IO>")
    }
}
