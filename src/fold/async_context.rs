//! A fold context over local futures.
//!
//! `LocalBoxFuture<'static, Endo<T>>` awaits the accumulated result, then
//! each effect-wrapped argument, in argument order. Nothing runs until the
//! folded future is polled. The futures are local because [`Endo`] is not
//! `Send`; drive them with a current-thread executor.
//!
//! # Examples
//!
//! ```rust
//! use futures::future::{FutureExt, LocalBoxFuture};
//! use endofold::endo::Endo;
//! use endofold::fold::FoldContext;
//! use endofold::typeclass::Semigroup;
//!
//! let pending: LocalBoxFuture<'static, i32> = async { 2 }.boxed_local();
//! let folded = <LocalBoxFuture<'static, Endo<i32>> as FoldContext>::lift(Endo::identity())
//!     .bind_effect(pending, |accumulator, amount| accumulator.combine(Endo::new(move |x| x + amount)));
//!
//! let endo = futures::executor::block_on(folded);
//! assert_eq!(endo.apply(1), 3);
//! ```

use futures::future::{self, FutureExt, LocalBoxFuture};

use super::FoldContext;
use crate::endo::Endo;

impl<T: 'static> FoldContext for LocalBoxFuture<'static, Endo<T>> {
    type Operand = T;
    type Effect<A: Clone + 'static> = LocalBoxFuture<'static, A>;

    fn lift(endo: Endo<T>) -> Self {
        future::ready(endo).boxed_local()
    }

    fn map_endo<F>(self, function: F) -> Self
    where
        F: Fn(Endo<T>) -> Endo<T> + 'static,
    {
        FutureExt::map(self, function).boxed_local()
    }

    fn bind_effect<A, F>(self, effect: LocalBoxFuture<'static, A>, function: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(Endo<T>, A) -> Endo<T> + 'static,
    {
        async move {
            let accumulator = self.await;
            let argument = effect.await;
            function(accumulator, argument)
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Semigroup;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Pending<A> = LocalBoxFuture<'static, A>;

    fn append(accumulator: Endo<i32>, amount: i32) -> Endo<i32> {
        accumulator.combine(Endo::new(move |x: i32| x + amount))
    }

    fn recorded(log: &Rc<RefCell<Vec<i32>>>, value: i32) -> Pending<i32> {
        let log = Rc::clone(log);
        async move {
            log.borrow_mut().push(value);
            value
        }
        .boxed_local()
    }

    #[rstest]
    #[tokio::test]
    async fn awaits_arguments_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let folded = Pending::<Endo<i32>>::lift(Endo::identity())
            .bind_effect(recorded(&log, 1), append)
            .bind_effect(recorded(&log, 2), append)
            .map_endo(|endo| endo.combine(Endo::new(|x: i32| x * 10)));
        assert!(log.borrow().is_empty());

        let endo = folded.await;
        assert_eq!(*log.borrow(), vec![1, 2]);
        assert_eq!(endo.apply(1), 13);
    }
}
