//! Fold contexts backed by the types in [`crate::effect`].
//!
//! | Result type | Effect-wrapped argument | Stops at |
//! |---|---|---|
//! | `IO<Endo<T>>` | `IO<A>` | never; actions run in argument order |
//! | `Reader<R, Endo<T>>` | `Reader<R, A>` | never; one shared environment |
//! | `State<S, Endo<T>>` | `State<S, A>` | never; state threads in argument order |
//! | `Writer<W, Endo<T>>` | `Writer<W, A>` | never; output accumulates in order |
//! | `ReaderT<R, M>` | `ReaderT<R, M::Effect<A>>` | whatever `M` stops at |
//! | `StateT<S, Option<(Endo<T>, S)>>` | `StateT<S, Option<(A, S)>>` | first `None` |
//! | `StateT<S, Result<(Endo<T>, S), E>>` | `StateT<S, Result<(A, S), E>>` | first `Err` |
//! | `StateT<S, IO<(Endo<T>, S)>>` | `StateT<S, IO<(A, S)>>` | never |
//! | `WriterT<W, Option<(Endo<T>, W)>>` | `WriterT<W, Option<(A, W)>>` | first `None` |
//! | `WriterT<W, Result<(Endo<T>, W), E>>` | `WriterT<W, Result<(A, W), E>>` | first `Err` |
//! | `ExceptT<E, IO<Result<Endo<T>, E>>>` | `ExceptT<E, IO<Result<A, E>>>` | first `Err`; later actions never run |
//!
//! Contexts that are functions of an input (`Reader`, `State` and the
//! transformers over them) apply the fold's steps again on every run.

use std::rc::Rc;

use tracing::debug;

use super::FoldContext;
use crate::effect::{ExceptT, IO, Reader, ReaderT, State, StateT, Writer, WriterT};
use crate::endo::Endo;
use crate::typeclass::Monoid;

// =============================================================================
// Base Contexts
// =============================================================================

impl<T: 'static> FoldContext for IO<Endo<T>> {
    type Operand = T;
    type Effect<A: Clone + 'static> = IO<A>;

    fn lift(endo: Endo<T>) -> Self {
        Self::pure(endo)
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        self.fmap(function)
    }

    fn bind_effect<A, F>(self, effect: IO<A>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        self.map2(effect, function)
    }
}

impl<R, T> FoldContext for Reader<R, Endo<T>>
where
    R: Clone + 'static,
    T: 'static,
{
    type Operand = T;
    type Effect<A: Clone + 'static> = Reader<R, A>;

    fn lift(endo: Endo<T>) -> Self {
        Self::pure(endo)
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        self.fmap(function)
    }

    fn bind_effect<A, F>(self, effect: Reader<R, A>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        self.map2(effect, function)
    }
}

impl<S, T> FoldContext for State<S, Endo<T>>
where
    S: 'static,
    T: 'static,
{
    type Operand = T;
    type Effect<A: Clone + 'static> = State<S, A>;

    fn lift(endo: Endo<T>) -> Self {
        Self::pure(endo)
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        self.fmap(function)
    }

    fn bind_effect<A, F>(self, effect: State<S, A>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        self.map2(effect, function)
    }
}

impl<W, T> FoldContext for Writer<W, Endo<T>>
where
    W: Monoid + 'static,
    T: 'static,
{
    type Operand = T;
    type Effect<A: Clone + 'static> = Writer<W, A>;

    fn lift(endo: Endo<T>) -> Self {
        Self::pure(endo)
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        self.fmap(function)
    }

    fn bind_effect<A, F>(self, effect: Writer<W, A>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        self.map2(effect, function)
    }
}

// =============================================================================
// ReaderT over any Context
// =============================================================================

impl<R, M> FoldContext for ReaderT<R, M>
where
    R: Clone + 'static,
    M: FoldContext,
{
    type Operand = M::Operand;
    type Effect<A: Clone + 'static> = ReaderT<R, M::Effect<A>>;

    fn lift(endo: Endo<M::Operand>) -> Self {
        Self::new(move |_| M::lift(endo.clone()))
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<M::Operand>) -> Endo<M::Operand> + 'static,
    {
        let function = Rc::new(function);
        Self::new(move |environment| {
            let function = Rc::clone(&function);
            self.run(environment).map_endo(move |endo| function(endo))
        })
    }

    fn bind_effect<A, F>(self, effect: ReaderT<R, M::Effect<A>>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<M::Operand>, A) -> Endo<M::Operand> + 'static,
    {
        let function = Rc::new(function);
        Self::new(move |environment: R| {
            let function = Rc::clone(&function);
            let accumulated = self.run(environment.clone());
            accumulated.bind_effect(effect.run(environment), move |endo, argument| {
                function(endo, argument)
            })
        })
    }
}

// =============================================================================
// StateT Contexts
// =============================================================================

impl<S, T> FoldContext for StateT<S, Option<(Endo<T>, S)>>
where
    S: 'static,
    T: 'static,
{
    type Operand = T;
    type Effect<A: Clone + 'static> = StateT<S, Option<(A, S)>>;

    fn lift(endo: Endo<T>) -> Self {
        Self::pure_option(endo)
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        self.fmap_option(function)
    }

    fn bind_effect<A, F>(self, effect: StateT<S, Option<(A, S)>>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        Self::new(move |state| {
            let (accumulator, state) = self.run(state)?;
            if let Some((argument, state)) = effect.run(state) {
                Some((function(accumulator, argument), state))
            } else {
                debug!(context = "StateT<Option>", "fold short-circuited on an absent argument");
                None
            }
        })
    }
}

impl<S, T, E> FoldContext for StateT<S, Result<(Endo<T>, S), E>>
where
    S: 'static,
    T: 'static,
    E: 'static,
{
    type Operand = T;
    type Effect<A: Clone + 'static> = StateT<S, Result<(A, S), E>>;

    fn lift(endo: Endo<T>) -> Self {
        Self::pure_result(endo)
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        self.fmap_result(function)
    }

    fn bind_effect<A, F>(self, effect: StateT<S, Result<(A, S), E>>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        Self::new(move |state| {
            let (accumulator, state) = self.run(state)?;
            effect
                .run(state)
                .map(|(argument, state)| (function(accumulator, argument), state))
                .inspect_err(|_| debug!(context = "StateT<Result>", "fold short-circuited on an error"))
        })
    }
}

impl<S, T> FoldContext for StateT<S, IO<(Endo<T>, S)>>
where
    S: 'static,
    T: 'static,
{
    type Operand = T;
    type Effect<A: Clone + 'static> = StateT<S, IO<(A, S)>>;

    fn lift(endo: Endo<T>) -> Self {
        Self::pure_io(endo)
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        self.fmap_io(function)
    }

    fn bind_effect<A, F>(self, effect: StateT<S, IO<(A, S)>>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        let function = Rc::new(function);
        self.flat_map_io(move |accumulator| {
            let function = Rc::clone(&function);
            effect
                .clone()
                .fmap_io(move |argument| function(accumulator.clone(), argument))
        })
    }
}

// =============================================================================
// WriterT Contexts
// =============================================================================

impl<W, T> FoldContext for WriterT<W, Option<(Endo<T>, W)>>
where
    W: Monoid + 'static,
    T: 'static,
{
    type Operand = T;
    type Effect<A: Clone + 'static> = WriterT<W, Option<(A, W)>>;

    fn lift(endo: Endo<T>) -> Self {
        Self::pure_option(endo)
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        self.fmap_option(function)
    }

    fn bind_effect<A, F>(self, effect: WriterT<W, Option<(A, W)>>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        self.flat_map_option(|accumulator| match effect.run() {
            Some((argument, output)) => WriterT::new(Some((function(accumulator, argument), output))),
            None => {
                debug!(context = "WriterT<Option>", "fold short-circuited on an absent argument");
                WriterT::new(None)
            }
        })
    }
}

impl<W, T, E> FoldContext for WriterT<W, Result<(Endo<T>, W), E>>
where
    W: Monoid + 'static,
    T: 'static,
    E: 'static,
{
    type Operand = T;
    type Effect<A: Clone + 'static> = WriterT<W, Result<(A, W), E>>;

    fn lift(endo: Endo<T>) -> Self {
        Self::pure_result(endo)
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        self.fmap_result(function)
    }

    fn bind_effect<A, F>(self, effect: WriterT<W, Result<(A, W), E>>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        self.flat_map_result(|accumulator| {
            WriterT::new(
                effect
                    .run()
                    .map(|(argument, output)| (function(accumulator, argument), output))
                    .inspect_err(|_| {
                        debug!(context = "WriterT<Result>", "fold short-circuited on an error");
                    }),
            )
        })
    }
}

// =============================================================================
// ExceptT Context
// =============================================================================

impl<E, T> FoldContext for ExceptT<E, IO<Result<Endo<T>, E>>>
where
    E: 'static,
    T: 'static,
{
    type Operand = T;
    type Effect<A: Clone + 'static> = ExceptT<E, IO<Result<A, E>>>;

    fn lift(endo: Endo<T>) -> Self {
        Self::pure_io(endo)
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        self.fmap_io(function)
    }

    fn bind_effect<A, F>(self, effect: ExceptT<E, IO<Result<A, E>>>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        self.flat_map_io(move |accumulator| {
            ExceptT::new(effect.run().fmap(move |result| {
                result
                    .map(|argument| function(accumulator, argument))
                    .inspect_err(|_| debug!(context = "ExceptT<IO>", "fold short-circuited on an error"))
            }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Semigroup;
    use rstest::rstest;
    use std::cell::RefCell;

    fn append(accumulator: Endo<i32>, amount: i32) -> Endo<i32> {
        accumulator.combine(Endo::new(move |x: i32| x + amount))
    }

    #[rstest]
    fn io_runs_effects_in_argument_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let first_log = Rc::clone(&log);
        let second_log = Rc::clone(&log);
        let folded = IO::lift(Endo::identity())
            .bind_effect(
                IO::new(move || {
                    first_log.borrow_mut().push(1);
                    1
                }),
                append,
            )
            .bind_effect(
                IO::new(move || {
                    second_log.borrow_mut().push(2);
                    2
                }),
                append,
            );
        assert!(log.borrow().is_empty());
        assert_eq!(folded.run_unsafe().apply(0), 3);
        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[rstest]
    fn reader_shares_environment() {
        let folded = Reader::<i32, Endo<i32>>::lift(Endo::identity())
            .bind_effect(Reader::ask(), append)
            .bind_effect(Reader::asks(|environment: i32| environment * 10), append);
        assert_eq!(folded.run(2).apply(0), 22);
    }

    #[rstest]
    fn state_threads_in_order() {
        let next = || State::new(|counter: i32| (counter, counter + 1));
        let folded = State::lift(Endo::identity()).bind_effect(next(), append).bind_effect(next(), append);
        let (endo, final_state) = folded.run(5);
        assert_eq!(endo.apply(0), 11);
        assert_eq!(final_state, 7);
    }

    #[rstest]
    fn writer_accumulates_output() {
        let folded = Writer::lift(Endo::identity())
            .bind_effect(Writer::new(1, vec!["one"]), append)
            .bind_effect(Writer::new(2, vec!["two"]), append);
        let (endo, output) = folded.into_parts();
        assert_eq!(endo.apply(0), 3);
        assert_eq!(output, vec!["one", "two"]);
    }

    #[rstest]
    fn reader_t_delegates_short_circuit() {
        let folded = <ReaderT<i32, Option<Endo<i32>>> as FoldContext>::lift(Endo::identity())
            .bind_effect(ReaderT::new(|environment: i32| (environment > 0).then_some(environment)), append)
            .map_endo(|endo| endo.combine(Endo::new(|x: i32| x * 2)));
        assert_eq!(folded.run(4).map(|endo| endo.apply(1)), Some(6));
        assert!(folded.run(-4).is_none());
    }

    #[rstest]
    fn state_t_option_stops_at_none() {
        let take = |amount: i32| {
            StateT::new(move |budget: i32| (budget >= amount).then(|| (amount, budget - amount)))
        };
        let folded = StateT::<i32, Option<(Endo<i32>, i32)>>::lift(Endo::identity())
            .bind_effect(take(3), append)
            .bind_effect(take(4), append);
        let (endo, left) = folded.run(10).expect("budget suffices");
        assert_eq!((endo.apply(0), left), (7, 3));
        assert!(folded.run(5).is_none());
    }

    #[rstest]
    fn state_t_result_keeps_first_error() {
        let failing = |message: &'static str| StateT::<i32, Result<(i32, i32), &str>>::lift_result(Err(message));
        let folded = StateT::<i32, Result<(Endo<i32>, i32), &str>>::lift(Endo::identity())
            .bind_effect(failing("first"), append)
            .bind_effect(failing("second"), append);
        assert_eq!(folded.run(0).err(), Some("first"));
    }

    #[rstest]
    fn state_t_io_threads_state() {
        let next = || StateT::new(|counter: i32| IO::pure((counter, counter + 1)));
        let folded = StateT::<i32, IO<(Endo<i32>, i32)>>::lift(Endo::identity())
            .bind_effect(next(), append)
            .bind_effect(next(), append);
        let (endo, final_state) = folded.run(1).run_unsafe();
        assert_eq!((endo.apply(0), final_state), (3, 3));
    }

    #[rstest]
    fn writer_t_option_discards_output_on_none() {
        type Logged<A> = WriterT<Vec<&'static str>, Option<(A, Vec<&'static str>)>>;
        let folded = Logged::<Endo<i32>>::lift(Endo::identity())
            .bind_effect(Logged::new(Some((1, vec!["one"]))), append)
            .bind_effect(Logged::<i32>::new(None), append);
        assert!(folded.run().is_none());
    }

    #[rstest]
    fn writer_t_result_combines_output() {
        type Logged<A> = WriterT<String, Result<(A, String), &'static str>>;
        let folded = Logged::<Endo<i32>>::lift(Endo::identity())
            .bind_effect(Logged::new(Ok((1, String::from("a")))), append)
            .bind_effect(Logged::new(Ok((2, String::from("b")))), append);
        let (endo, output) = folded.run().expect("no errors");
        assert_eq!((endo.apply(0), output.as_str()), (3, "ab"));
    }

    #[rstest]
    fn except_t_skips_actions_after_error() {
        let ran = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&ran);
        let folded = ExceptT::<&str, IO<Result<Endo<i32>, &str>>>::lift(Endo::identity())
            .bind_effect(ExceptT::throw_io("stop"), append)
            .bind_effect(
                ExceptT::lift_io(IO::new(move || {
                    *flag.borrow_mut() = true;
                    1
                })),
                append,
            );
        assert_eq!(folded.run().run_unsafe().err(), Some("stop"));
        assert!(!*ran.borrow());
    }
}
