//! The `fold_endo!` and `dual_fold_endo!` macros.
//!
//! Both expand to a [`FoldEndo`](crate::fold::FoldEndo) chain, one call per
//! argument. An argument prefixed with `<=` is wrapped in the result
//! context's effect and goes through `with_effect`; any other argument goes
//! through `with`. The result context comes from the call site, usually a
//! `let` annotation.

/// Folds its arguments forward: the first-listed argument is outermost.
///
/// # Syntax
///
/// - `fold_endo!()` - the lifted identity
/// - `fold_endo!(a, b, c)` - plain representables
/// - `fold_endo!(a, <= wrapped, c)` - `wrapped` is effect-wrapped
///
/// # Examples
///
/// ```
/// use endofold::fold_endo;
/// use endofold::endo::Endo;
///
/// let add = |amount: i32| move |x: i32| x + amount;
///
/// let folded: Endo<i32> = fold_endo!(add(1), add(2), |x: i32| x * 3);
/// assert_eq!(folded.apply(1), 6);
///
/// let checked: Option<Endo<i32>> = fold_endo!(add(1), <= Some(add(2)));
/// assert_eq!(checked.map(|endo| endo.apply(0)), Some(3));
///
/// let missing: Option<Endo<i32>> = fold_endo!(add(1), <= None::<fn(i32) -> i32>, add(3));
/// assert!(missing.is_none());
/// ```
#[macro_export]
macro_rules! fold_endo {
    () => {
        $crate::fold::fold_endo().finish()
    };
    ($($arguments:tt)+) => {
        $crate::__fold_endo_chain!($crate::fold::fold_endo(); $($arguments)+)
    };
}

/// Folds its arguments dually: the last-listed argument is outermost.
///
/// Takes the same syntax as [`fold_endo!`].
///
/// # Examples
///
/// ```
/// use endofold::dual_fold_endo;
/// use endofold::endo::Endo;
///
/// let add = |amount: i32| move |x: i32| x + amount;
///
/// let folded: Endo<i32> = dual_fold_endo!(add(1), add(2), |x: i32| x * 3);
/// assert_eq!(folded.apply(1), 12);
///
/// let failed: Result<Endo<i32>, &str> = dual_fold_endo!(
///     add(1),
///     <= Err::<fn(i32) -> i32, _>("first"),
///     <= Err::<fn(i32) -> i32, _>("second"),
/// );
/// assert_eq!(failed.err(), Some("first"));
/// ```
#[macro_export]
macro_rules! dual_fold_endo {
    () => {
        $crate::fold::dual_fold_endo().finish()
    };
    ($($arguments:tt)+) => {
        $crate::__fold_endo_chain!($crate::fold::dual_fold_endo(); $($arguments)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fold_endo_chain {
    ($builder:expr;) => {
        $builder.finish()
    };

    // Effect-wrapped argument
    ($builder:expr; <= $effect:expr $(, $($rest:tt)*)?) => {
        $crate::__fold_endo_chain!($builder.with_effect($effect); $($($rest)*)?)
    };

    ($builder:expr; $argument:expr $(, $($rest:tt)*)?) => {
        $crate::__fold_endo_chain!($builder.with($argument); $($($rest)*)?)
    };
}
