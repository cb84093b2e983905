//! Threading a value through an ordered list of steps
//!
//! [`sequence`] folds [`Monad::bind`] over a list of steps, left to right:
//!
//! ```text
//! sequence(m, [f1, f2, f3]) == m.bind(f1).bind(f2).bind(f3)
//! ```
//!
//! The fold never stops early. Each step is handed to `bind`, and it is the
//! context that decides what happens: a `Maybe` that has become `Nothing`
//! skips every remaining step, while a `Record` or an `IO` runs all of them.
//!
//! Steps in one list must share a type. Plain function items and a single
//! closure type work directly; mixed closures are boxed with [`steps!`] or
//! [`step`].
//!
//! # Example
//!
//! ```rust
//! use millrace::{sequence, steps, Maybe};
//!
//! fn halve(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() }
//! }
//!
//! let result = sequence(Maybe::just(12), steps![halve, |n: i32| Maybe::just(n + 1), halve]);
//! assert_eq!(result, Maybe::nothing());
//!
//! let result = sequence(Maybe::just(12), [halve, halve]);
//! assert_eq!(result, Maybe::just(3));
//! ```

use crate::Monad;

/// A boxed step that keeps the context type of `M`.
pub type Step<'a, M> = Box<dyn FnOnce(<M as Monad>::Value) -> M + 'a>;

/// Box a closure as a [`Step`].
pub fn step<'a, M, F>(f: F) -> Step<'a, M>
where
    M: Monad,
    F: FnOnce(M::Value) -> M + 'a,
{
    Box::new(f)
}

/// Bind every step in order, starting from `initial`.
///
/// Equivalent to `initial.bind(s1).bind(s2)...`; the fold itself keeps no
/// state besides the accumulator.
///
/// ```
/// use millrace::{sequence, Record};
///
/// let inc = |x: i32| Record::logged(x + 1, "inc");
/// let record = sequence(Record::new(2), [inc, inc]);
/// assert_eq!(record.value(), &4);
/// assert_eq!(record.log().len(), 2);
/// ```
pub fn sequence<M, T, I>(initial: M, steps: I) -> M
where
    M: Monad<Value = T, With<T> = M>,
    I: IntoIterator,
    I::Item: FnOnce(T) -> M,
{
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("sequence").entered();
    #[cfg(feature = "tracing")]
    tracing::debug!("sequence started");

    let mut _steps_run = 0usize;
    let result = steps.into_iter().fold(initial, |acc, step| {
        #[cfg(feature = "tracing")]
        tracing::trace!(step = _steps_run, "binding step");
        _steps_run += 1;
        acc.bind::<T, _>(step)
    });

    #[cfg(feature = "tracing")]
    tracing::debug!(steps = _steps_run, "sequence finished");

    result
}

/// Run [`sequence`] and store the result back into `monad`.
///
/// The steps receive a copy of the payload; `monad` is overwritten only once
/// every step has been bound.
///
/// ```
/// use millrace::{sequence_in_place, steps, IO};
///
/// let mut program = IO::new(());
/// sequence_in_place(&mut program, steps![|_| IO::write(1, "A"), |_| IO::write(1, "B")]);
/// assert_eq!(program.environment().get(1).map(|d| d.out_buffer()), Some("AB"));
/// ```
pub fn sequence_in_place<M, T, I>(monad: &mut M, steps: I)
where
    M: Monad<Value = T, With<T> = M> + Clone,
    I: IntoIterator,
    I::Item: FnOnce(T) -> M,
{
    *monad = sequence(monad.clone(), steps);
}

/// Build a `Vec` of boxed [`Step`]s from closures or functions.
///
/// ```
/// use millrace::{steps, Maybe};
/// use millrace::sequence::Step;
///
/// let list: Vec<Step<'_, Maybe<i32>>> = steps![|x: i32| Maybe::just(x + 1), |x: i32| Maybe::just(x * 2)];
/// assert_eq!(list.len(), 2);
/// ```
#[macro_export]
macro_rules! steps {
    ($($step:expr),* $(,)?) => {
        ::std::vec![$($crate::sequence::step($step)),*]
    };
}
