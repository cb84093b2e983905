//! Monoid trait for accumulators with an identity element
//!
//! A `Monoid` is a [`Semigroup`] with an `empty` value. `unit` needs that
//! identity: wrapping a value must add no log entries and no pending effects,
//! otherwise the identity laws of the monad would fail.
//!
//! # Mathematical Properties
//!
//! ```text
//! a.combine(M::empty()) == a           (right identity)
//! M::empty().combine(a) == a           (left identity)
//! ```
//!
//! # Examples
//!
//! ```
//! use millrace::{Monoid, Semigroup};
//!
//! let log = vec!["started".to_string()];
//! let empty: Vec<String> = Monoid::empty();
//! assert_eq!(log.clone().combine(empty), log);
//! ```

use crate::Semigroup;

/// A [`Semigroup`] with an identity element.
///
/// # Laws
///
/// ```text
/// a.combine(M::empty()) == a
/// M::empty().combine(a) == a
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for [`Semigroup::combine`].
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

/// Fold a sequence of accumulators, starting from [`Monoid::empty`].
///
/// Entries are combined left to right, so the result keeps iteration order.
///
/// # Example
///
/// ```
/// use millrace::monoid::fold_all;
///
/// let buffers = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// assert_eq!(fold_all(buffers), "abc");
/// ```
pub fn fold_all<M, I>(items: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    items.into_iter().fold(M::empty(), M::combine)
}
