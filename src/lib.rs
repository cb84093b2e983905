//! # Millrace
//!
//! > *A millrace is the channel that carries water to the wheel, one stage after another.*
//!
//! A small library of monadic combinators. Three computational contexts share
//! one contract, [`Monad`], made of `unit`, `bind` and `fmap`:
//!
//! - [`Maybe`] models optional computation and short-circuits on `Nothing`.
//! - [`Record`] pairs a value with an append-only log (the Writer monad).
//! - [`IO`] pairs a value with *deferred* effects, buffered per effect unit
//!   and merged in program order. Nothing is executed.
//!
//! [`sequence`] threads a starting value through an ordered list of steps by
//! folding `bind` over them.
//!
//! ## Quick Example
//!
//! ```rust
//! use millrace::{sequence, steps, EffectUnit, Maybe, Monad, Record, IO};
//!
//! // Writer: logs accumulate in composition order
//! let record = Record::unit(5)
//!     .bind(|x: i64| Record::logged(x * x, format!("{} was squared to obtain {}", x, x * x)))
//!     .bind(|x| Record::logged(x * 12, format!("{} and 12 were multiplied to obtain {}", x, x * 12)));
//! assert_eq!(record.value(), &300);
//! assert_eq!(record.log().len(), 2);
//!
//! // Maybe: a failed step skips the rest
//! let positive = |n: i32| if n > 0 { Maybe::just(n) } else { Maybe::nothing() };
//! let doubled = sequence(Maybe::just(21), steps![positive, |n: i32| Maybe::just(n * 2)]);
//! assert_eq!(doubled, Maybe::just(42));
//!
//! let skipped = sequence(Maybe::just(-1), steps![positive, |n: i32| Maybe::just(n * 2)]);
//! assert!(skipped.is_nothing());
//!
//! // IO: effects on the same unit are concatenated
//! let io = IO::write(1, "A").then(IO::write(1, "B"));
//! assert_eq!(io.environment().get(EffectUnit(1)).map(|d| d.out_buffer()), Some("AB"));
//! ```
//!
//! ## Cargo features
//!
//! - `tracing`: emit `tracing` events when steps are bound, skipped or merged.
//! - `serde`: `Serialize`/`Deserialize` for every container.
//! - `proptest`: `Arbitrary` implementations for every container.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod io;
pub mod maybe;
pub mod monad;
pub mod monoid;
pub mod record;
pub mod semigroup;
pub mod sequence;
pub mod testing;

// Re-exports
pub use error::ContractViolation;
pub use io::{EffectDiff, EffectUnit, Environment, IO};
pub use maybe::{Maybe, MaybeState};
pub use monad::{Monad, MonadExt};
pub use monoid::Monoid;
pub use record::Record;
pub use semigroup::Semigroup;
pub use sequence::{sequence, sequence_in_place, Step};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::ContractViolation;
    pub use crate::io::{EffectDiff, EffectUnit, Environment, IO};
    pub use crate::maybe::{Maybe, MaybeState};
    pub use crate::monad::{Monad, MonadExt};
    pub use crate::monoid::Monoid;
    pub use crate::record::Record;
    pub use crate::semigroup::Semigroup;
    pub use crate::sequence::{sequence, sequence_in_place, Step};
    pub use crate::steps;
}
