//! Contract violations that survive to runtime
//!
//! Most of the monad contract is enforced by the type system: a step handed to
//! [`bind`](crate::Monad::bind) must be a one-argument function returning the
//! same monad, and the compiler rejects anything else. What is left are the
//! invariants that can only be checked when data arrives from outside, such as
//! a Maybe state spelled as a string or an effect environment assembled by
//! hand.
//!
//! # Examples
//!
//! ```
//! use millrace::{ContractViolation, EffectDiff, Environment};
//!
//! let diffs = vec![EffectDiff::output(2, "b"), EffectDiff::output(1, "a")];
//! let err = Environment::try_from(diffs).unwrap_err();
//!
//! assert!(matches!(err, ContractViolation::UnorderedUnits { .. }));
//! assert_eq!(err.to_string(), "effect unit 1 follows unit 2; environments must be sorted by unit");
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::io::EffectUnit;

/// A value that breaks one of the invariants the monad containers rely on.
///
/// This is a programmer or configuration error. It is reported at the
/// construction site and never produced by `bind` or `fmap` themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// A Maybe state name other than `"just"` or `"nothing"`.
    UnknownMaybeState(String),
    /// Two diffs in one environment address the same unit.
    DuplicateUnit(EffectUnit),
    /// An environment whose units are not in ascending order.
    UnorderedUnits {
        /// The unit seen first.
        previous: EffectUnit,
        /// The smaller unit that followed it.
        next: EffectUnit,
    },
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::UnknownMaybeState(state) => write!(
                f,
                "unknown maybe state {:?}; expected \"just\" or \"nothing\"",
                state
            ),
            ContractViolation::DuplicateUnit(unit) => {
                write!(f, "effect unit {} appears more than once in one environment", unit)
            }
            ContractViolation::UnorderedUnits { previous, next } => write!(
                f,
                "effect unit {} follows unit {}; environments must be sorted by unit",
                next, previous
            ),
        }
    }
}

impl StdError for ContractViolation {}
