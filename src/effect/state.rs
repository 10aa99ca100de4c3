//! State - a computation that threads a state value through its steps.
//!
//! A `State<S, A>` wraps a function `S -> (A, S)`. Chained states run in
//! order, each seeing the state left by the previous one. As a fold context,
//! `State<S, Endo<T>>` lets each wrapped argument read or update `S` in
//! argument order while the endomorphism is being assembled.
//!
//! # Laws
//!
//! - Get Put: `State::get().flat_map(State::put) == State::pure(())`
//! - Put Get: `State::put(s).then(State::get()) == State::put(s).fmap(move |_| s)`
//!
//! # Examples
//!
//! ```rust
//! use endofold::effect::State;
//!
//! let next_id = State::new(|counter: u32| (counter, counter + 1));
//! let pair = next_id.clone().map2(next_id, |first, second| (first, second));
//!
//! assert_eq!(pair.run(10), ((10, 11), 12));
//! ```

use std::rc::Rc;

/// A computation that reads and updates a state of type `S`.
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a State from a state transition function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation, returning the result and the final state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and keeps only the result.
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// A State that leaves the state untouched.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Reads a projection of the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofold::effect::State;
    ///
    /// let length = State::gets(|stack: &Vec<i32>| stack.len());
    /// assert_eq!(length.run(vec![1, 2]), (2, vec![1, 2]));
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }

    /// Transforms the result.
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, new_state) = (original_function)(state);
            (function(result), new_state)
        })
    }

    /// Chains a State chosen from this State's result.
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, intermediate_state) = (original_function)(state);
            function(result).run(intermediate_state)
        })
    }

    /// Runs this State, then `next`, keeping only the second result.
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Runs this State, then `other` on the updated state, and combines the
    /// results.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        State::new(move |state| {
            let (result_a, intermediate_state) = (self_function)(state);
            let (result_b, final_state) = (other_function)(intermediate_state);
            (function(result_a, result_b), final_state)
        })
    }
}

impl<St> State<St, St>
where
    St: Clone + 'static,
{
    /// Returns the current state.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: St| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Replaces the current state.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Updates the current state with a function.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S, A> std::fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pure_keeps_state() {
        assert_eq!(State::<i32, &str>::pure("value").run(3), ("value", 3));
    }

    #[rstest]
    fn get_put_modify() {
        let program = State::get()
            .flat_map(|current: i32| State::put(current * 10))
            .then(State::modify(|state: i32| state + 1))
            .then(State::get());
        assert_eq!(program.run(4), (41, 41));
    }

    #[rstest]
    fn map2_threads_state_left_to_right() {
        let push = |value: i32| {
            State::new(move |mut stack: Vec<i32>| {
                stack.push(value);
                (stack.len(), stack)
            })
        };
        let (lengths, stack) = push(1).map2(push(2), |a, b| (a, b)).run(Vec::new());
        assert_eq!(lengths, (1, 2));
        assert_eq!(stack, vec![1, 2]);
    }

    #[rstest]
    fn eval_and_exec_split_run() {
        let state = State::new(|s: i32| (s * 2, s + 1));
        assert_eq!(state.eval(5), 10);
        assert_eq!(state.exec(5), 6);
        assert_eq!(format!("{state}"), "<State>");
    }
}
