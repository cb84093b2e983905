//! Effect units and the buffered diffs recorded against them.

use std::fmt;

use super::Environment;

/// Identifier of one effect channel, such as a file handle or a device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EffectUnit(pub u32);

impl From<u32> for EffectUnit {
    fn from(id: u32) -> Self {
        EffectUnit(id)
    }
}

impl fmt::Display for EffectUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pending, unexecuted effect against a single unit.
///
/// `out_buffer` holds characters queued to be written to the unit and
/// `in_buffer` characters queued to be read from it, each in program order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectDiff {
    unit: EffectUnit,
    out_buffer: String,
    in_buffer: String,
}

impl EffectDiff {
    /// A diff with both buffers empty.
    pub fn new(unit: impl Into<EffectUnit>) -> Self {
        EffectDiff {
            unit: unit.into(),
            out_buffer: String::new(),
            in_buffer: String::new(),
        }
    }

    /// A diff that only writes `text` to `unit`.
    ///
    /// ```
    /// use millrace::{EffectDiff, EffectUnit};
    ///
    /// let diff = EffectDiff::output(1, "A");
    /// assert_eq!(diff.unit(), EffectUnit(1));
    /// assert_eq!(diff.out_buffer(), "A");
    /// assert_eq!(diff.in_buffer(), "");
    /// ```
    pub fn output(unit: impl Into<EffectUnit>, text: impl Into<String>) -> Self {
        Self::new(unit).with_output(text)
    }

    /// A diff that only reads `text` from `unit`.
    pub fn input(unit: impl Into<EffectUnit>, text: impl Into<String>) -> Self {
        Self::new(unit).with_input(text)
    }

    /// Queue more characters for writing.
    pub fn with_output(mut self, text: impl Into<String>) -> Self {
        self.out_buffer.push_str(&text.into());
        self
    }

    /// Queue more characters for reading.
    pub fn with_input(mut self, text: impl Into<String>) -> Self {
        self.in_buffer.push_str(&text.into());
        self
    }

    /// The unit this diff targets.
    #[inline]
    pub fn unit(&self) -> EffectUnit {
        self.unit
    }

    /// Characters queued for writing.
    #[inline]
    pub fn out_buffer(&self) -> &str {
        &self.out_buffer
    }

    /// Characters queued for reading.
    #[inline]
    pub fn in_buffer(&self) -> &str {
        &self.in_buffer
    }

    /// Returns `true` if neither buffer holds anything.
    pub fn is_empty(&self) -> bool {
        self.out_buffer.is_empty() && self.in_buffer.is_empty()
    }

    /// Combine this diff with one recorded after it.
    ///
    /// Diffs on different units are kept side by side in unit order. Diffs on
    /// the same unit collapse into one whose buffers hold `self`'s content
    /// first.
    ///
    /// ```
    /// use millrace::{EffectDiff, EffectUnit};
    ///
    /// let env = EffectDiff::output(1, "A").resolve(EffectDiff::output(1, "B"));
    /// assert_eq!(env.len(), 1);
    /// assert_eq!(env.get(EffectUnit(1)).map(|d| d.out_buffer()), Some("AB"));
    ///
    /// let env = EffectDiff::output(3, "x").resolve(EffectDiff::input(2, "y"));
    /// assert_eq!(env.units().collect::<Vec<_>>(), vec![EffectUnit(2), EffectUnit(3)]);
    /// ```
    pub fn resolve(self, later: EffectDiff) -> Environment {
        Environment::from(self).merge(Environment::from(later))
    }

    /// Append a later diff's buffers. Both diffs must target the same unit.
    pub(crate) fn append(&mut self, later: EffectDiff) {
        debug_assert_eq!(self.unit, later.unit);
        self.out_buffer.push_str(&later.out_buffer);
        self.in_buffer.push_str(&later.in_buffer);
    }
}
