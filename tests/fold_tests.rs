//! Scenario tests for forward and dual folds.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

use endofold::endo::{AnEndo, Endo, Reverse, WrapIter, embed, embed_dual};
use endofold::fold::{self, FoldContext};
use endofold::typeclass::{Dual, Identity};
use endofold::{dual_fold_endo, fold_endo};
use rstest::{fixture, rstest};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{EnvFilter, Layer};

fn prepend(item: u8) -> impl Fn(Vec<u8>) -> Vec<u8> + Clone + 'static {
    move |mut items: Vec<u8>| {
        items.insert(0, item);
        items
    }
}

fn add(amount: i32) -> impl Fn(i32) -> i32 + Clone + 'static {
    move |value| value + amount
}

fn times(factor: i32) -> impl Fn(i32) -> i32 + Clone + 'static {
    move |value| value * factor
}

#[fixture]
fn logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
fn forward_order_lists_first_argument_first(_logging: ()) {
    let folded: Endo<Vec<u8>> = fold_endo!(prepend(1), prepend(2));
    assert_eq!(folded.apply(Vec::new()), vec![1, 2]);
}

#[rstest]
fn dual_order_lists_last_argument_first(_logging: ()) {
    let folded: Endo<Vec<u8>> = dual_fold_endo!(prepend(1), prepend(2));
    assert_eq!(folded.apply(Vec::new()), vec![2, 1]);
}

#[rstest]
#[case::forward(fold_endo!(add(1), add(2), times(3)), 6)]
#[case::dual(dual_fold_endo!(add(1), add(2), times(3)), 12)]
fn numeric_folds(#[case] folded: Endo<i32>, #[case] expected: i32) {
    assert_eq!(folded.apply(1), expected);
}

#[rstest]
fn heterogeneous_shapes_fold_together(_logging: ()) {
    let folded: Endo<Vec<u8>> = fold_endo!(
        prepend(1),
        Some(prepend(2)),
        None::<fn(Vec<u8>) -> Vec<u8>>,
        vec![prepend(3), prepend(4)],
        (prepend(5), Endo::new(prepend(6))),
        Identity::new(prepend(7)),
        (),
    );
    assert_eq!(folded.apply(Vec::new()), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[rstest]
fn dual_folds_nested_shapes_in_reverse(_logging: ()) {
    let folded: Endo<Vec<u8>> = dual_fold_endo!(
        prepend(1),
        VecDeque::from(vec![prepend(2), prepend(3)]),
        [prepend(4), prepend(5)],
    );
    assert_eq!(folded.apply(Vec::new()), vec![5, 4, 3, 2, 1]);
}

#[rstest]
fn dual_marker_flips_one_argument(_logging: ()) {
    let folded: Endo<Vec<u8>> = fold_endo!(prepend(1), Dual::new(vec![prepend(2), prepend(3)]));
    assert_eq!(folded.apply(Vec::new()), vec![1, 3, 2]);
}

#[rstest]
fn reverse_then_dual_equals_forward(_logging: ()) {
    let setters = vec![prepend(1), prepend(2), prepend(3)];
    let forward: Endo<Vec<u8>> = fold_endo!(WrapIter(setters.clone()));
    let reversed_dual: Endo<Vec<u8>> = dual_fold_endo!(Reverse(setters));
    assert_eq!(forward.apply(Vec::new()), reversed_dual.apply(Vec::new()));
}

#[rstest]
fn empty_collection_is_identity() {
    let folded: Endo<i32> = fold_endo!(Vec::<fn(i32) -> i32>::new());
    assert!(folded.is_identity());
    assert_eq!(folded.apply(5), 5);
}

#[rstest]
fn long_dual_fold_matches_long_forward_fold() {
    let count = 100_000;
    let forward = (0..count)
        .fold(fold::fold_endo::<Endo<i32>>(), |builder, _| builder.with(add(1)))
        .finish();
    let dual = (0..count)
        .fold(fold::dual_fold_endo::<Endo<i32>>(), |builder, _| builder.with(add(1)))
        .finish();
    assert_eq!(dual.step_count(), forward.step_count());
    assert_eq!(dual.apply(0), count);
    assert_eq!(forward.apply(0), count);
}

// =============================================================================
// Short-circuiting
// =============================================================================

#[rstest]
fn absent_option_gives_absent_result(_logging: ()) {
    let folded: Option<Endo<i32>> = fold_endo!(add(1), <= None::<fn(i32) -> i32>, <= Some(add(2)));
    assert!(folded.is_none());
}

#[rstest]
#[case::forward(fold_endo!(<= Ok(add(1)), <= Err::<fn(i32) -> i32, _>("first"), add(2), <= Err::<fn(i32) -> i32, _>("second")))]
#[case::dual(dual_fold_endo!(<= Ok(add(1)), <= Err::<fn(i32) -> i32, _>("first"), add(2), <= Err::<fn(i32) -> i32, _>("second")))]
fn first_error_wins(#[case] folded: Result<Endo<i32>, &'static str>) {
    assert_eq!(folded.err(), Some("first"));
}

#[rstest]
fn all_present_options_fold_normally(_logging: ()) {
    let folded: Option<Endo<i32>> = dual_fold_endo!(<= Some(add(1)), times(10), <= Some(add(2)));
    assert_eq!(folded.map(|endo| endo.apply(0)), Some(12));
}

#[rstest]
fn vec_context_enumerates_alternatives(_logging: ()) {
    let folded: Vec<Endo<i32>> = fold_endo!(<= vec![add(1), add(2)], times(10), <= vec![add(100), add(200)]);
    let results: Vec<i32> = folded.iter().map(|endo| endo.apply(0)).collect();
    assert_eq!(results, vec![1001, 2001, 1002, 2002]);
}

// =============================================================================
// Embedding
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
struct Settings {
    name: String,
    tags: Vec<&'static str>,
}

fn tag(value: &'static str) -> impl Fn(Settings) -> Settings + Clone + 'static {
    move |mut settings: Settings| {
        settings.tags.push(value);
        settings
    }
}

#[rstest]
fn embed_routes_any_shape_to_consumer() {
    let build = embed(|endo: Endo<Settings>| endo.apply(Settings::default()));
    let settings = build((tag("a"), tag("b")));
    assert_eq!(settings.tags, vec!["b", "a"]);
}

#[rstest]
fn embed_dual_routes_dual_form() {
    let build = embed_dual(|endo: Dual<Endo<Settings>>| endo.into_inner().apply(Settings::default()));
    let settings = build((tag("a"), tag("b")));
    assert_eq!(settings.tags, vec!["a", "b"]);
}

#[rstest]
fn builder_result_is_an_endo_argument() {
    let named = fold::fold_endo::<Endo<Settings>>()
        .with(|settings: Settings| Settings { name: "svc".into(), ..settings })
        .finish();
    let combined: Endo<Settings> = fold_endo!(named, tag("x"));
    let settings = combined.an_endo().apply(Settings::default());
    assert_eq!(settings, Settings { name: "svc".into(), tags: vec!["x"] });
}

// =============================================================================
// Tracing
// =============================================================================

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<String>>>);

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _context: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        if let Ok(mut messages) = self.0.lock() {
            messages.push(visitor.0);
        }
    }
}

fn recorded_messages(run: impl FnOnce()) -> Vec<String> {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    tracing::subscriber::with_default(subscriber, run);
    let messages = recorder.0.lock().map(|messages| messages.clone());
    messages.unwrap_or_default()
}

#[rstest]
fn short_circuit_is_logged_once() {
    let messages = recorded_messages(|| {
        let folded: Option<Endo<i32>> = fold_endo!(
            <= None::<fn(i32) -> i32>,
            <= None::<fn(i32) -> i32>,
            add(1),
        );
        assert!(folded.is_none());
    });
    let short_circuits = messages
        .iter()
        .filter(|message| message.contains("short-circuited"))
        .count();
    assert_eq!(short_circuits, 1);
}

#[rstest]
fn every_argument_and_finish_are_traced() {
    let messages = recorded_messages(|| {
        let folded: Endo<i32> = fold::dual_fold_endo()
            .with(add(1))
            .with(add(2))
            .finish();
        assert_eq!(folded.apply(0), 3);
    });
    assert_eq!(
        messages,
        vec!["fold argument", "fold argument", "fold finished"]
    );
}

#[rstest]
fn lifted_identity_is_the_empty_fold() {
    let lifted = <Result<Endo<i32>, String> as FoldContext>::lift(Endo::identity());
    let folded: Result<Endo<i32>, String> = fold_endo!();
    assert_eq!(
        lifted.map(|endo| endo.apply(4)),
        folded.map(|endo| endo.apply(4))
    );
}
