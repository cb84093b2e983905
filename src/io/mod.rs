//! Deferred I/O: a value paired with the effects it still has to perform
//!
//! Nothing in this module touches a file, socket or terminal. An [`IO`] value
//! only *describes* effects as buffered [`EffectDiff`]s, one per
//! [`EffectUnit`], collected in an [`Environment`]. Binding a step merges the
//! step's environment into the running one, so effects on the same unit stay
//! in program order while effects on different units never interact.
//!
//! Executing the effects is left to the caller: read the final
//! [`IO::environment`] and replay it unit by unit.
//!
//! # Example
//!
//! ```rust
//! use millrace::{EffectUnit, IO, Monad};
//!
//! let program = IO::unit(())
//!     .bind(|_| IO::write(1, "A"))
//!     .bind(|_| IO::write(2, "to stderr"))
//!     .bind(|_| IO::write(1, "B"));
//!
//! let env = program.environment();
//! assert_eq!(env.len(), 2);
//! assert_eq!(env.get(EffectUnit(1)).map(|d| d.out_buffer()), Some("AB"));
//! ```

mod diff;
mod environment;

pub use diff::{EffectDiff, EffectUnit};
pub use environment::Environment;

use crate::Monad;

/// A value together with the effects recorded while computing it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IO<T> {
    value: T,
    environment: Environment,
}

impl<T> IO<T> {
    /// A value with no pending effects.
    #[inline]
    pub fn new(value: T) -> Self {
        IO {
            value,
            environment: Environment::new(),
        }
    }

    /// A value with an existing environment.
    #[inline]
    pub fn with_environment(value: T, environment: Environment) -> Self {
        IO { value, environment }
    }

    /// A value with a single pending diff.
    ///
    /// ```
    /// use millrace::{EffectDiff, IO};
    ///
    /// let line = IO::effect(42, EffectDiff::input(0, "42\n"));
    /// assert_eq!(line.value(), &42);
    /// assert_eq!(line.environment().len(), 1);
    /// ```
    pub fn effect(value: T, diff: EffectDiff) -> Self {
        IO {
            value,
            environment: Environment::from(diff),
        }
    }

    /// Borrow the payload.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The pending effects, sorted by unit.
    #[inline]
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Split into payload and environment.
    #[inline]
    pub fn into_parts(self) -> (T, Environment) {
        (self.value, self.environment)
    }
}

impl IO<()> {
    /// Queue `text` to be written to `unit`.
    pub fn write(unit: impl Into<EffectUnit>, text: impl Into<String>) -> Self {
        IO::effect((), EffectDiff::output(unit, text))
    }

    /// Queue `text` to be read from `unit`.
    pub fn read(unit: impl Into<EffectUnit>, text: impl Into<String>) -> Self {
        IO::effect((), EffectDiff::input(unit, text))
    }
}

impl<T> Monad for IO<T> {
    type Value = T;
    type With<U> = IO<U>;

    #[inline]
    fn unit(value: T) -> Self {
        IO::new(value)
    }

    fn bind<U, F>(self, f: F) -> IO<U>
    where
        F: FnOnce(T) -> IO<U>,
    {
        let next = f(self.value);
        IO {
            value: next.value,
            environment: self.environment.merge(next.environment),
        }
    }

    #[inline]
    fn fmap<U, G>(self, g: G) -> IO<U>
    where
        G: FnOnce(T) -> U,
    {
        IO {
            value: g(self.value),
            environment: self.environment,
        }
    }
}
