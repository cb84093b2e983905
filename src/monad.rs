//! The monad contract shared by every computational context
//!
//! [`Monad`] is the capability set a context implements: wrap a plain value
//! with [`unit`](Monad::unit), thread it through a step that produces a new
//! context with [`bind`](Monad::bind), or transform the payload alone with
//! [`fmap`](Monad::fmap).
//!
//! # Emulating the type constructor
//!
//! Rust has no higher-kinded types, so the trait names "the same context over a
//! different payload" through a generic associated type: for `Maybe<i32>`,
//! `With<String>` is `Maybe<String>`. A step bound to a `Maybe` must return a
//! `Maybe`, and a step bound to a `Record` must return a `Record` with the same
//! log type. A step with the wrong arity or the wrong return type does not
//! compile, so there is no runtime signature check.
//!
//! # Ownership
//!
//! `bind` and `fmap` consume their receiver. The payload is moved into the
//! step, which therefore cannot observe or mutate a caller's copy; keep the
//! original by cloning it first. [`MonadExt::bind_in_place`] is the mutating
//! convenience and is implemented on top of the pure form.
//!
//! # Laws
//!
//! ```text
//! unit(x).bind(f)            == f(x)                          (left identity)
//! m.bind(unit)               == m                             (right identity)
//! m.bind(f).bind(g)          == m.bind(|x| f(x).bind(g))      (associativity)
//! ```
//!
//! # Example
//!
//! ```
//! use millrace::{Maybe, Monad};
//!
//! fn halve(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() }
//! }
//!
//! assert_eq!(Maybe::unit(20).bind(halve).bind(halve), Maybe::just(5));
//! assert_eq!(Maybe::unit(20).bind(halve).bind(halve).bind(halve), Maybe::nothing());
//! assert_eq!(Maybe::unit(20).fmap(|n| n + 1), Maybe::just(21));
//! ```

/// A computational context with `unit`, `bind` and `fmap`.
///
/// Implementations must satisfy the three monad laws listed in the
/// [module documentation](self). New contexts implement this trait without
/// touching the existing ones.
pub trait Monad: Sized {
    /// The payload currently held by the context.
    type Value;

    /// The same context holding a payload of type `U`.
    type With<U>: Monad<Value = U>;

    /// Wrap a value in the context's success or neutral state.
    fn unit(value: Self::Value) -> Self;

    /// Feed the payload to `f` and combine the context of `self` with the
    /// context `f` returns.
    fn bind<U, F>(self, f: F) -> Self::With<U>
    where
        F: FnOnce(Self::Value) -> Self::With<U>;

    /// Transform the payload, leaving every other part of the context as it is.
    fn fmap<U, G>(self, g: G) -> Self::With<U>
    where
        G: FnOnce(Self::Value) -> U;

    /// Bind a step that ignores the payload.
    ///
    /// ```
    /// use millrace::{Monad, Record};
    ///
    /// let record = Record::logged(1, "first").then(Record::logged("done", "second"));
    /// assert_eq!(record.value(), &"done");
    /// assert_eq!(record.log(), &vec!["first".to_string(), "second".to_string()]);
    /// ```
    #[inline]
    fn then<U>(self, next: Self::With<U>) -> Self::With<U> {
        self.bind::<U, _>(move |_| next)
    }
}

/// Mutating conveniences for contexts whose steps keep the payload type.
///
/// Everything here is a thin wrapper over the pure operations of [`Monad`].
pub trait MonadExt: Monad + Clone {
    /// Replace `self` with the result of binding `f`.
    ///
    /// The payload handed to `f` is a copy; `self` is only overwritten once
    /// the step has returned.
    ///
    /// ```
    /// use millrace::{MonadExt, Record};
    ///
    /// let mut record = Record::new(5);
    /// record.bind_in_place(|x| Record::logged(x * x, format!("{} was squared to obtain {}", x, x * x)));
    /// assert_eq!(record.value(), &25);
    /// ```
    fn bind_in_place<F>(&mut self, f: F)
    where
        F: FnOnce(Self::Value) -> Self;
}

impl<M, T> MonadExt for M
where
    M: Monad<Value = T, With<T> = M> + Clone,
{
    #[inline]
    fn bind_in_place<F>(&mut self, f: F)
    where
        F: FnOnce(Self::Value) -> Self,
    {
        *self = self.clone().bind::<T, F>(f);
    }
}

/// Wrap a value in the context `M`.
///
/// ```
/// use millrace::{monad, Maybe};
///
/// let m: Maybe<i32> = monad::unit(3);
/// assert_eq!(m, Maybe::just(3));
/// ```
#[inline]
pub fn unit<M: Monad>(value: M::Value) -> M {
    M::unit(value)
}

/// Free-function form of [`Monad::bind`].
#[inline]
pub fn bind<M, U, F>(m: M, f: F) -> M::With<U>
where
    M: Monad,
    F: FnOnce(M::Value) -> M::With<U>,
{
    m.bind(f)
}

/// Free-function form of [`Monad::fmap`].
#[inline]
pub fn fmap<M, U, G>(m: M, g: G) -> M::With<U>
where
    M: Monad,
    G: FnOnce(M::Value) -> U,
{
    m.fmap(g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Maybe;

    // A context defined entirely outside the crate's variants.
    #[derive(Debug, Clone, PartialEq)]
    struct Identity<T>(T);

    impl<T> Monad for Identity<T> {
        type Value = T;
        type With<U> = Identity<U>;

        fn unit(value: T) -> Self {
            Identity(value)
        }

        fn bind<U, F>(self, f: F) -> Identity<U>
        where
            F: FnOnce(T) -> Identity<U>,
        {
            f(self.0)
        }

        fn fmap<U, G>(self, g: G) -> Identity<U>
        where
            G: FnOnce(T) -> U,
        {
            Identity(g(self.0))
        }
    }

    #[test]
    fn test_new_context_plugs_into_free_functions() {
        let m: Identity<i32> = unit(4);
        let m = bind(m, |x| Identity(x * 10));
        let m = fmap(m, |x| x.to_string());
        assert_eq!(m, Identity("40".to_string()));
    }

    #[test]
    fn test_bind_in_place_on_new_context() {
        let mut m = Identity(2);
        m.bind_in_place(|x| Identity(x + 1));
        m.bind_in_place(|x| Identity(x * 3));
        assert_eq!(m, Identity(9));
    }

    #[test]
    fn test_then_discards_payload() {
        let m = Identity(1).then(Identity("next"));
        assert_eq!(m, Identity("next"));
    }

    #[test]
    fn test_then_respects_short_circuit() {
        let m: Maybe<i32> = Maybe::nothing();
        assert_eq!(m.then(Maybe::just("next")), Maybe::nothing());
    }

    #[test]
    fn test_bind_changes_payload_type() {
        let m = Maybe::just(7).bind(|n| Maybe::just(format!("n={}", n)));
        assert_eq!(m, Maybe::just("n=7".to_string()));
    }

    #[test]
    fn test_caller_copy_is_untouched() {
        let original = Maybe::just(vec![1, 2, 3]);
        let extended = original.clone().bind(|mut v| {
            v.push(4);
            Maybe::just(v)
        });
        assert_eq!(original, Maybe::just(vec![1, 2, 3]));
        assert_eq!(extended, Maybe::just(vec![1, 2, 3, 4]));
    }
}
