//! Optional computation that short-circuits on absence
//!
//! `Maybe<T>` is either `Just(value)` or `Nothing`. Binding a step to `Just`
//! runs the step; binding a step to `Nothing` skips it. `Nothing` is
//! absorbing, so once any step of a pipeline yields `Nothing`, the rest of the
//! pipeline is skipped and the result stays `Nothing`.
//!
//! Absence is not an error. It is an ordinary outcome the caller inspects
//! with [`Maybe::is_nothing`] after the pipeline has run.
//!
//! # Examples
//!
//! ```rust
//! use millrace::{Maybe, Monad};
//!
//! fn checked_sqrt(x: f64) -> Maybe<f64> {
//!     if x >= 0.0 { Maybe::just(x.sqrt()) } else { Maybe::nothing() }
//! }
//!
//! let root = Maybe::unit(16.0).bind(checked_sqrt);
//! assert_eq!(root, Maybe::just(4.0));
//!
//! let missing = Maybe::unit(-1.0).bind(checked_sqrt).bind(checked_sqrt);
//! assert!(missing.is_nothing());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{ContractViolation, Monad};

/// An optional value that short-circuits composition when absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value. Every later `bind` is skipped.
    Nothing,
}

/// The two states a [`Maybe`] can be in, without the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MaybeState {
    /// A value is present.
    Just,
    /// No value is present.
    Nothing,
}

impl MaybeState {
    /// The lowercase name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaybeState::Just => "just",
            MaybeState::Nothing => "nothing",
        }
    }
}

impl fmt::Display for MaybeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaybeState {
    type Err = ContractViolation;

    /// Parse `"just"` or `"nothing"`.
    ///
    /// ```
    /// use millrace::MaybeState;
    ///
    /// assert_eq!("just".parse::<MaybeState>(), Ok(MaybeState::Just));
    /// assert!("sometimes".parse::<MaybeState>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "just" => Ok(MaybeState::Just),
            "nothing" => Ok(MaybeState::Nothing),
            other => Err(ContractViolation::UnknownMaybeState(other.to_string())),
        }
    }
}

impl<T> Maybe<T> {
    // ========== Constructors ==========

    /// Create a present value.
    #[inline]
    pub fn just(value: T) -> Self {
        Maybe::Just(value)
    }

    /// Create an absent value.
    #[inline]
    pub fn nothing() -> Self {
        Maybe::Nothing
    }

    /// Build a `Maybe` from an explicit state and a candidate value.
    ///
    /// In the `Nothing` state the value is dropped, so a `Nothing` never
    /// carries a payload.
    ///
    /// ```
    /// use millrace::{Maybe, MaybeState};
    ///
    /// assert_eq!(Maybe::from_state(MaybeState::Just, 3), Maybe::just(3));
    /// assert_eq!(Maybe::from_state(MaybeState::Nothing, 3), Maybe::nothing());
    ///
    /// let parsed = "nothing".parse::<MaybeState>().map(|state| Maybe::from_state(state, 3));
    /// assert_eq!(parsed, Ok(Maybe::nothing()));
    /// ```
    pub fn from_state(state: MaybeState, value: T) -> Self {
        match state {
            MaybeState::Just => Maybe::Just(value),
            MaybeState::Nothing => Maybe::Nothing,
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Returns `true` if no value is present.
    ///
    /// This is how a pipeline's failure is detected; `Nothing` is never raised
    /// as an error.
    #[inline]
    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// The state of this value.
    #[inline]
    pub fn state(&self) -> MaybeState {
        match self {
            Maybe::Just(_) => MaybeState::Just,
            Maybe::Nothing => MaybeState::Nothing,
        }
    }

    // ========== Extractors ==========

    /// Borrow the payload if present.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }

    /// Convert into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Return the payload or `default` when absent.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => default,
        }
    }
}

impl<T> Monad for Maybe<T> {
    type Value = T;
    type With<U> = Maybe<U>;

    #[inline]
    fn unit(value: T) -> Self {
        Maybe::Just(value)
    }

    fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Just(value) => f(value),
            Maybe::Nothing => {
                #[cfg(feature = "tracing")]
                tracing::trace!("maybe is nothing, skipping bound step");
                Maybe::Nothing
            }
        }
    }

    #[inline]
    fn fmap<U, G>(self, g: G) -> Maybe<U>
    where
        G: FnOnce(T) -> U,
    {
        match self {
            Maybe::Just(value) => Maybe::Just(g(value)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Just(value),
            None => Maybe::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Just(value) => write!(f, "just {}", value),
            Maybe::Nothing => f.write_str("nothing"),
        }
    }
}
