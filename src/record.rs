//! Writer context: a value paired with an append-only log
//!
//! A [`Record`] carries a payload together with everything the steps that
//! produced it chose to write down. Binding a step appends the step's entries
//! after the existing ones, so the log reads in composition order and earlier
//! entries are never reordered or dropped.
//!
//! The log type is any [`Monoid`]. It defaults to `Vec<String>`, one entry per
//! line, which is what [`Record::logged`] and the `Display` impl work with.
//!
//! # Example
//!
//! ```rust
//! use millrace::{Monad, Record};
//!
//! fn square(x: i64) -> Record<i64> {
//!     Record::logged(x * x, format!("{} was squared to obtain {}", x, x * x))
//! }
//!
//! fn multiply(x: i64, y: i64) -> Record<i64> {
//!     Record::logged(x * y, format!("{} and {} were multiplied to obtain {}", x, y, x * y))
//! }
//!
//! let record = Record::unit(5).bind(square).bind(|x| multiply(x, 12));
//!
//! assert_eq!(record.value(), &300);
//! assert_eq!(
//!     record.log(),
//!     &vec![
//!         "5 was squared to obtain 25".to_string(),
//!         "25 and 12 were multiplied to obtain 300".to_string(),
//!     ]
//! );
//! ```

use std::fmt;

use crate::{Monad, Monoid};

/// A value together with the log accumulated while computing it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record<T, W = Vec<String>> {
    value: T,
    log: W,
}

impl<T, W> Record<T, W> {
    /// Pair a value with an existing log.
    ///
    /// ```
    /// use millrace::Record;
    ///
    /// let record = Record::with_log(1, vec!["loaded".to_string()]);
    /// assert_eq!(record.log().len(), 1);
    /// ```
    #[inline]
    pub fn with_log(value: T, log: W) -> Self {
        Record { value, log }
    }

    /// Borrow the payload.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Borrow the accumulated log.
    #[inline]
    pub fn log(&self) -> &W {
        &self.log
    }

    /// Split into payload and log.
    #[inline]
    pub fn into_parts(self) -> (T, W) {
        (self.value, self.log)
    }

    /// Rewrite the accumulated log, keeping the payload.
    ///
    /// ```
    /// use millrace::Record;
    ///
    /// let record = Record::with_log(0, vec!["debug: a".to_string(), "info: b".to_string()])
    ///     .censor(|log| log.into_iter().filter(|l| !l.starts_with("debug")).collect());
    /// assert_eq!(record.log(), &vec!["info: b".to_string()]);
    /// ```
    pub fn censor<F>(self, f: F) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Record {
            value: self.value,
            log: f(self.log),
        }
    }

    /// Expose the log alongside the payload.
    pub fn listen(self) -> Record<(T, W), W>
    where
        W: Clone,
    {
        let log = self.log.clone();
        Record {
            value: (self.value, self.log),
            log,
        }
    }
}

impl<T, W: Monoid> Record<T, W> {
    /// A value with an empty log.
    #[inline]
    pub fn new(value: T) -> Self {
        Record {
            value,
            log: W::empty(),
        }
    }
}

impl<W> Record<(), W> {
    /// Write to the log without producing a payload.
    ///
    /// ```
    /// use millrace::{Monad, Record};
    ///
    /// let record = Record::tell(vec!["starting".to_string()]).then(Record::logged(7, "seven"));
    /// assert_eq!(record.log(), &vec!["starting".to_string(), "seven".to_string()]);
    /// ```
    #[inline]
    pub fn tell(log: W) -> Self {
        Record { value: (), log }
    }
}

impl<T> Record<T> {
    /// A value with a single log line.
    #[inline]
    pub fn logged(value: T, entry: impl Into<String>) -> Self {
        Record {
            value,
            log: vec![entry.into()],
        }
    }
}

impl<T, W: Monoid> Monad for Record<T, W> {
    type Value = T;
    type With<U> = Record<U, W>;

    #[inline]
    fn unit(value: T) -> Self {
        Record::new(value)
    }

    fn bind<U, F>(self, f: F) -> Record<U, W>
    where
        F: FnOnce(T) -> Record<U, W>,
    {
        let next = f(self.value);
        Record {
            value: next.value,
            log: self.log.combine(next.log),
        }
    }

    #[inline]
    fn fmap<U, G>(self, g: G) -> Record<U, W>
    where
        G: FnOnce(T) -> U,
    {
        Record {
            value: g(self.value),
            log: self.log,
        }
    }
}

impl<T: fmt::Display, S: fmt::Display> fmt::Display for Record<T, Vec<S>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Value:")?;
        writeln!(f, "    {}", self.value)?;
        write!(f, "Logs:")?;
        for entry in &self.log {
            write!(f, "\n    {}", entry)?;
        }
        Ok(())
    }
}
