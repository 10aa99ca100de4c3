#![cfg(feature = "async")]
//! Folds over local futures.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use endofold::endo::Endo;
use endofold::{dual_fold_endo, fold_endo};
use futures::future::{FutureExt, LocalBoxFuture};
use rstest::rstest;

type Pending<A> = LocalBoxFuture<'static, A>;

fn push(item: &'static str) -> impl Fn(Vec<&'static str>) -> Vec<&'static str> + Clone + 'static {
    move |mut items: Vec<&'static str>| {
        items.push(item);
        items
    }
}

fn fetched(
    log: &Rc<RefCell<Vec<&'static str>>>,
    name: &'static str,
    delay_ms: u64,
) -> Pending<impl Fn(Vec<&'static str>) -> Vec<&'static str> + Clone + 'static> {
    let log = Rc::clone(log);
    async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        log.borrow_mut().push(name);
        push(name)
    }
    .boxed_local()
}

#[rstest]
#[tokio::test]
async fn awaits_arguments_sequentially_in_listed_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let folded: Pending<Endo<Vec<&str>>> = dual_fold_endo!(
        <= fetched(&log, "slow", 20),
        push("plain"),
        <= fetched(&log, "fast", 0),
    );
    assert!(log.borrow().is_empty());

    let endo = folded.await;
    assert_eq!(*log.borrow(), vec!["slow", "fast"]);
    assert_eq!(endo.apply(Vec::new()), vec!["slow", "plain", "fast"]);
}

#[rstest]
#[tokio::test]
async fn forward_fold_nests_first_argument_outermost() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let folded: Pending<Endo<Vec<&str>>> = fold_endo!(<= fetched(&log, "a", 0), <= fetched(&log, "b", 0));
    let endo = folded.await;
    assert_eq!(endo.apply(Vec::new()), vec!["b", "a"]);
}

#[rstest]
#[tokio::test]
async fn empty_fold_resolves_to_identity() {
    let folded: Pending<Endo<u32>> = fold_endo!();
    assert!(folded.await.is_identity());
}
