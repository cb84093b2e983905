//! Testing utilities for code built on millrace
//!
//! - Assertion macros for inspecting pipeline results.
//! - Law checks that any [`Monad`] implementation can be run against.
//! - `proptest` strategies for every container (feature `proptest`).
//!
//! # Examples
//!
//! ```rust
//! use millrace::{assert_just, assert_nothing, Maybe, Monad};
//!
//! assert_just!(Maybe::just(2).bind(|x| Maybe::just(x * 2)), 4);
//! assert_nothing!(Maybe::<i32>::nothing().bind(|x| Maybe::just(x * 2)));
//! ```
//!
//! ```rust
//! use millrace::testing::{check_associativity, check_left_identity, check_right_identity};
//! use millrace::Record;
//!
//! let step = |x: i32| Record::logged(x + 1, format!("inc {}", x));
//! let double = |x: i32| Record::logged(x * 2, "double");
//!
//! assert!(check_left_identity(3, step));
//! assert!(check_right_identity(Record::logged(3, "start")));
//! assert!(check_associativity(Record::logged(3, "start"), step, double));
//! ```

use crate::Monad;

/// Assert that a `Maybe` is `Just`, optionally with a given payload.
///
/// # Example
///
/// ```rust
/// use millrace::{assert_just, Maybe};
///
/// assert_just!(Maybe::just("x"));
/// assert_just!(Maybe::just(1), 1);
/// ```
#[macro_export]
macro_rules! assert_just {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Just(_) => {}
            $crate::Maybe::Nothing => {
                panic!("Expected Just, got Nothing");
            }
        }
    };
    ($maybe:expr, $expected:expr) => {
        match $maybe {
            $crate::Maybe::Just(value) => {
                assert_eq!(value, $expected);
            }
            $crate::Maybe::Nothing => {
                panic!("Expected Just({:?}), got Nothing", $expected);
            }
        }
    };
}

/// Assert that a `Maybe` is `Nothing`.
///
/// # Example
///
/// ```rust
/// use millrace::{assert_nothing, Maybe};
///
/// assert_nothing!(Maybe::<u8>::nothing());
/// ```
#[macro_export]
macro_rules! assert_nothing {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Nothing => {}
            $crate::Maybe::Just(v) => {
                panic!("Expected Nothing, got Just({:?})", v);
            }
        }
    };
}

/// Assert that a `Record`'s log equals the given entries, in order.
///
/// # Example
///
/// ```rust
/// use millrace::{assert_log, Monad, Record};
///
/// let record = Record::logged(1, "a").bind(|x| Record::logged(x, "b"));
/// assert_log!(record, ["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_log {
    ($record:expr, [$($entry:expr),* $(,)?]) => {{
        let expected: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::String::from($entry)),*];
        assert_eq!($record.log(), &expected);
    }};
}

/// `unit(value).bind(f) == f(value)`
pub fn check_left_identity<M, T, F>(value: T, f: F) -> bool
where
    M: Monad<Value = T, With<T> = M> + PartialEq,
    T: Clone,
    F: Fn(T) -> M,
{
    M::unit(value.clone()).bind::<T, _>(&f) == f(value)
}

/// `m.bind(unit) == m`
pub fn check_right_identity<M, T>(m: M) -> bool
where
    M: Monad<Value = T, With<T> = M> + PartialEq + Clone,
{
    m.clone().bind::<T, _>(M::unit) == m
}

/// `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
pub fn check_associativity<M, T, F, G>(m: M, f: F, g: G) -> bool
where
    M: Monad<Value = T, With<T> = M> + PartialEq + Clone,
    F: Fn(T) -> M,
    G: Fn(T) -> M,
{
    let left = m.clone().bind::<T, _>(&f).bind::<T, _>(&g);
    let right = m.bind::<T, _>(|x| f(x).bind::<T, _>(&g));
    left == right
}

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;

    use crate::{EffectDiff, EffectUnit, Environment, Maybe, Record, IO};

    impl<T> Arbitrary for Maybe<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                any_with::<T>(args).prop_map(Maybe::just),
                Just(()).prop_map(|_| Maybe::nothing()),
            ]
            .boxed()
        }
    }

    impl<T, W> Arbitrary for Record<T, W>
    where
        T: Arbitrary + 'static,
        W: Arbitrary + 'static,
    {
        type Parameters = (T::Parameters, W::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (t_params, w_params) = args;
            (any_with::<T>(t_params), any_with::<W>(w_params))
                .prop_map(|(value, log)| Record::with_log(value, log))
                .boxed()
        }
    }

    impl Arbitrary for EffectUnit {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        // A small range, so that generated environments share units.
        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            (0u32..8).prop_map(EffectUnit).boxed()
        }
    }

    impl Arbitrary for EffectDiff {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            (any::<EffectUnit>(), "[a-z]{0,4}", "[a-z]{0,4}")
                .prop_map(|(unit, out, input)| {
                    EffectDiff::new(unit).with_output(out).with_input(input)
                })
                .boxed()
        }
    }

    impl Arbitrary for Environment {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop::collection::vec(any::<EffectDiff>(), 0..6)
                .prop_map(|diffs| diffs.into_iter().collect())
                .boxed()
        }
    }

    impl<T> Arbitrary for IO<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            (any_with::<T>(args), any::<Environment>())
                .prop_map(|(value, environment)| IO::with_environment(value, environment))
                .boxed()
        }
    }
}
