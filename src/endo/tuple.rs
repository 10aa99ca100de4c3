//! Normalization of heterogeneous tuples of representables.
//!
//! Every position may hold a different shape as long as all positions agree
//! on the operand type. Positions are folded in declared order, exactly like
//! a collection: forward forms with [`Endo`]'s combine, dual forms with
//! [`Dual`]'s combine.
//!
//! # Examples
//!
//! ```rust
//! use endofold::endo::{AnEndo, Endo};
//!
//! let mixed = (|x: i32| x + 1, Some(Endo::new(|x: i32| x * 3)), ());
//! assert_eq!(mixed.clone().an_endo().apply(2), 7);
//! assert_eq!(mixed.a_dual_endo().into_inner().apply(2), 9);
//! ```

use super::{AnEndo, Endo};
use crate::typeclass::{Dual, Monoid};

macro_rules! impl_an_endo_for_tuples {
    ($(($($name:ident),+)),+ $(,)?) => {
        $(
            impl<T, $($name: AnEndo<T>),+> AnEndo<T> for ($($name,)+) {
                #[allow(non_snake_case)]
                fn an_endo(self) -> Endo<T> {
                    let ($($name,)+) = self;
                    Endo::combine_all([$($name.an_endo()),+])
                }

                #[allow(non_snake_case)]
                fn a_dual_endo(self) -> Dual<Endo<T>> {
                    let ($($name,)+) = self;
                    Dual::combine_all([$($name.a_dual_endo()),+])
                }
            }
        )+
    };
}

impl_an_endo_for_tuples!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
    (A, B, C, D, E, F, G, H, I),
    (A, B, C, D, E, F, G, H, I, J),
);
