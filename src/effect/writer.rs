//! Writer - a result paired with an accumulated output.
//!
//! A `Writer<W, A>` holds a result `A` and an output `W: Monoid`. Chaining
//! writers combines their outputs in chaining order. As a fold context,
//! `Writer<W, Endo<T>>` collects a log (or any monoidal summary) from each
//! wrapped argument alongside the folded endomorphism.
//!
//! # Examples
//!
//! ```rust
//! use endofold::effect::Writer;
//!
//! let parsed = Writer::new(8080_u16, vec!["parsed port".to_string()]);
//! let checked = parsed.flat_map(|port| {
//!     Writer::new(port > 1024, vec!["checked range".to_string()])
//! });
//!
//! assert_eq!(checked.into_parts(), (true, vec!["parsed port".to_string(), "checked range".to_string()]));
//! ```

use crate::typeclass::Monoid;

/// A result together with an accumulated output.
#[derive(Debug)]
pub struct Writer<W, A>
where
    W: Monoid + 'static,
    A: 'static,
{
    result: A,
    output: W,
}

impl<W, A> Writer<W, A>
where
    W: Monoid + 'static,
    A: 'static,
{
    /// Creates a Writer from a result and its output.
    pub fn new(result: A, output: W) -> Self {
        Self { result, output }
    }

    /// A Writer with an empty output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::effect::Writer;
    ///
    /// let writer: Writer<String, i32> = Writer::pure(1);
    /// assert_eq!(writer.into_parts(), (1, String::new()));
    /// ```
    pub fn pure(value: A) -> Self {
        Self {
            result: value,
            output: W::empty(),
        }
    }

    /// Returns copies of the result and the output.
    pub fn run(&self) -> (A, W)
    where
        A: Clone,
        W: Clone,
    {
        (self.result.clone(), self.output.clone())
    }

    /// Splits the Writer into its result and output.
    pub fn into_parts(self) -> (A, W) {
        (self.result, self.output)
    }

    /// Transforms the result, keeping the output.
    pub fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
        B: 'static,
    {
        Writer {
            result: function(self.result),
            output: self.output,
        }
    }

    /// Chains a Writer chosen from this Writer's result; outputs combine in
    /// order.
    pub fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
        B: 'static,
    {
        let next = function(self.result);
        Writer {
            result: next.result,
            output: self.output.combine(next.output),
        }
    }

    /// Combines two Writers; this Writer's output comes first.
    pub fn map2<B, C, F>(self, other: Writer<W, B>, function: F) -> Writer<W, C>
    where
        F: FnOnce(A, B) -> C,
        B: 'static,
        C: 'static,
    {
        Writer {
            result: function(self.result, other.result),
            output: self.output.combine(other.output),
        }
    }
}

impl<W> Writer<W, ()>
where
    W: Monoid + 'static,
{
    /// A Writer that only produces output.
    pub fn tell(output: W) -> Self {
        Self { result: (), output }
    }
}

impl<W, A> Clone for Writer<W, A>
where
    W: Monoid + Clone + 'static,
    A: Clone + 'static,
{
    fn clone(&self) -> Self {
        Self {
            result: self.result.clone(),
            output: self.output.clone(),
        }
    }
}

impl<W, A> PartialEq for Writer<W, A>
where
    W: Monoid + PartialEq + 'static,
    A: PartialEq + 'static,
{
    fn eq(&self, other: &Self) -> bool {
        self.result == other.result && self.output == other.output
    }
}
