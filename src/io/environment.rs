//! The effect environment: one buffered diff per unit, sorted by unit.

use std::cmp::Ordering;

use crate::{ContractViolation, Monoid, Semigroup};

use super::{EffectDiff, EffectUnit};

/// Pending effects, at most one [`EffectDiff`] per unit, in ascending unit
/// order.
///
/// An executor replays the environment front to back: each unit in ascending
/// order, each unit's buffers in the order they were recorded.
///
/// # Building an environment
///
/// - [`Environment::new`] is empty.
/// - Collecting diffs normalises them: they are sorted by unit and diffs on
///   the same unit are concatenated in iteration order.
/// - `TryFrom<Vec<EffectDiff>>` is strict and rejects input that is not
///   already sorted and unique.
///
/// ```
/// use millrace::{EffectDiff, EffectUnit, Environment};
///
/// let env: Environment = vec![
///     EffectDiff::output(2, "x"),
///     EffectDiff::output(1, "A"),
///     EffectDiff::output(1, "B"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(env.as_slice(), &[EffectDiff::output(1, "AB"), EffectDiff::output(2, "x")]);
/// assert!(Environment::try_from(vec![EffectDiff::new(1), EffectDiff::new(1)]).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<EffectDiff>", into = "Vec<EffectDiff>")
)]
pub struct Environment {
    diffs: Vec<EffectDiff>,
}

impl Environment {
    /// An environment with no pending effects.
    pub fn new() -> Self {
        Environment { diffs: Vec::new() }
    }

    /// Merge a later environment into this one.
    ///
    /// Both sides are walked together as in a merge-join. A unit present on
    /// one side only is copied unchanged. A unit present on both sides yields a
    /// single diff whose buffers hold `self`'s content followed by `later`'s.
    /// The result is sorted and unique by unit, and the cost is linear in the
    /// combined length.
    ///
    /// ```
    /// use millrace::{EffectDiff, Environment};
    ///
    /// let earlier = Environment::from(EffectDiff::output(1, "A"));
    /// let later: Environment = vec![EffectDiff::output(1, "B"), EffectDiff::input(4, "k")]
    ///     .into_iter()
    ///     .collect();
    ///
    /// let merged = earlier.merge(later);
    /// assert_eq!(merged.as_slice(), &[EffectDiff::output(1, "AB"), EffectDiff::input(4, "k")]);
    /// ```
    pub fn merge(self, later: Environment) -> Environment {
        if later.diffs.is_empty() {
            return self;
        }
        if self.diffs.is_empty() {
            return later;
        }

        #[cfg(feature = "tracing")]
        let (left_len, right_len) = (self.diffs.len(), later.diffs.len());

        let mut merged = Vec::with_capacity(self.diffs.len() + later.diffs.len());
        let mut left = self.diffs.into_iter().peekable();
        let mut right = later.diffs.into_iter().peekable();

        loop {
            let next = match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => match l.unit().cmp(&r.unit()) {
                    Ordering::Less => left.next(),
                    Ordering::Greater => right.next(),
                    Ordering::Equal => left.next().zip(right.next()).map(|(mut l, r)| {
                        l.append(r);
                        l
                    }),
                },
                (Some(_), None) => left.next(),
                (None, Some(_)) => right.next(),
                (None, None) => break,
            };
            merged.extend(next);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            left = left_len,
            right = right_len,
            merged = merged.len(),
            "merged effect environments"
        );

        Environment { diffs: merged }
    }

    /// The pending diff for `unit`, if any.
    pub fn get(&self, unit: impl Into<EffectUnit>) -> Option<&EffectDiff> {
        let unit = unit.into();
        self.diffs
            .binary_search_by_key(&unit, EffectDiff::unit)
            .ok()
            .map(|idx| &self.diffs[idx])
    }

    /// Iterate over the diffs in ascending unit order.
    pub fn iter(&self) -> std::slice::Iter<'_, EffectDiff> {
        self.diffs.iter()
    }

    /// The units with pending effects, ascending.
    pub fn units(&self) -> impl Iterator<Item = EffectUnit> + '_ {
        self.diffs.iter().map(EffectDiff::unit)
    }

    /// Number of units with pending effects.
    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    /// The diffs as a sorted slice.
    pub fn as_slice(&self) -> &[EffectDiff] {
        &self.diffs
    }

    /// Take the sorted diffs out of the environment.
    pub fn into_vec(self) -> Vec<EffectDiff> {
        self.diffs
    }
}

impl Semigroup for Environment {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.merge(other)
    }
}

impl Monoid for Environment {
    fn empty() -> Self {
        Environment::new()
    }
}

impl From<EffectDiff> for Environment {
    fn from(diff: EffectDiff) -> Self {
        Environment { diffs: vec![diff] }
    }
}

impl From<Environment> for Vec<EffectDiff> {
    fn from(env: Environment) -> Self {
        env.diffs
    }
}

impl TryFrom<Vec<EffectDiff>> for Environment {
    type Error = ContractViolation;

    fn try_from(diffs: Vec<EffectDiff>) -> Result<Self, Self::Error> {
        for pair in diffs.windows(2) {
            let (previous, next) = (pair[0].unit(), pair[1].unit());
            match previous.cmp(&next) {
                Ordering::Less => {}
                Ordering::Equal => return Err(ContractViolation::DuplicateUnit(next)),
                Ordering::Greater => {
                    return Err(ContractViolation::UnorderedUnits { previous, next })
                }
            }
        }
        Ok(Environment { diffs })
    }
}

impl FromIterator<EffectDiff> for Environment {
    fn from_iter<I: IntoIterator<Item = EffectDiff>>(iter: I) -> Self {
        let mut sorted: Vec<EffectDiff> = iter.into_iter().collect();
        // stable, so same-unit diffs keep iteration order
        sorted.sort_by_key(EffectDiff::unit);

        let mut diffs: Vec<EffectDiff> = Vec::with_capacity(sorted.len());
        for diff in sorted {
            match diffs.last_mut() {
                Some(last) if last.unit() == diff.unit() => last.append(diff),
                _ => diffs.push(diff),
            }
        }
        Environment { diffs }
    }
}

impl<'a> IntoIterator for &'a Environment {
    type Item = &'a EffectDiff;
    type IntoIter = std::slice::Iter<'a, EffectDiff>;

    fn into_iter(self) -> Self::IntoIter {
        self.diffs.iter()
    }
}

impl IntoIterator for Environment {
    type Item = EffectDiff;
    type IntoIter = std::vec::IntoIter<EffectDiff>;

    fn into_iter(self) -> Self::IntoIter {
        self.diffs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(diffs: Vec<EffectDiff>) -> Environment {
        diffs.into_iter().collect()
    }

    #[test]
    fn test_merge_same_unit_concatenates_in_order() {
        let merged = env(vec![EffectDiff::output(1, "A")]).merge(env(vec![EffectDiff::output(1, "B")]));
        assert_eq!(merged.as_slice(), &[EffectDiff::output(1, "AB")]);
    }

    #[test]
    fn test_merge_concatenates_both_buffers() {
        let left = env(vec![EffectDiff::output(3, "w1").with_input("r1")]);
        let right = env(vec![EffectDiff::output(3, "w2").with_input("r2")]);
        let merged = left.merge(right);
        let diff = merged.get(3).expect("unit 3 present");
        assert_eq!(diff.out_buffer(), "w1w2");
        assert_eq!(diff.in_buffer(), "r1r2");
    }

    #[test]
    fn test_merge_disjoint_units_interleaves() {
        let left = env(vec![EffectDiff::output(1, "a"), EffectDiff::output(5, "e")]);
        let right = env(vec![EffectDiff::output(2, "b"), EffectDiff::output(9, "i")]);
        let merged = left.merge(right);
        assert_eq!(
            merged.units().collect::<Vec<_>>(),
            vec![EffectUnit(1), EffectUnit(2), EffectUnit(5), EffectUnit(9)]
        );
        assert_eq!(merged.get(5), Some(&EffectDiff::output(5, "e")));
    }

    #[test]
    fn test_merge_mixed_overlap() {
        let left = env(vec![EffectDiff::output(1, "x"), EffectDiff::output(2, "y")]);
        let right = env(vec![EffectDiff::output(2, "z"), EffectDiff::output(3, "w")]);
        assert_eq!(
            left.merge(right).into_vec(),
            vec![
                EffectDiff::output(1, "x"),
                EffectDiff::output(2, "yz"),
                EffectDiff::output(3, "w"),
            ]
        );
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let e = env(vec![EffectDiff::output(1, "a"), EffectDiff::input(2, "b")]);
        assert_eq!(e.clone().merge(Environment::new()), e);
        assert_eq!(Environment::new().merge(e.clone()), e);
    }

    #[test]
    fn test_merge_not_commutative_in_content() {
        let a = env(vec![EffectDiff::output(1, "A")]);
        let b = env(vec![EffectDiff::output(1, "B")]);
        let ab = a.clone().merge(b.clone());
        let ba = b.merge(a);
        assert_eq!(ab.units().collect::<Vec<_>>(), ba.units().collect::<Vec<_>>());
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_collect_normalises() {
        let e = env(vec![
            EffectDiff::output(4, "d"),
            EffectDiff::output(2, "b1"),
            EffectDiff::input(4, "in"),
            EffectDiff::output(2, "b2"),
        ]);
        assert_eq!(
            e.into_vec(),
            vec![
                EffectDiff::output(2, "b1b2"),
                EffectDiff::output(4, "d").with_input("in"),
            ]
        );
    }

    #[test]
    fn test_try_from_accepts_sorted_unique() {
        let diffs = vec![EffectDiff::new(1), EffectDiff::new(2), EffectDiff::new(7)];
        let e = Environment::try_from(diffs.clone()).expect("sorted input");
        assert_eq!(e.into_vec(), diffs);
    }

    #[test]
    fn test_try_from_rejects_duplicates() {
        let result = Environment::try_from(vec![EffectDiff::new(1), EffectDiff::new(1)]);
        assert_eq!(result, Err(ContractViolation::DuplicateUnit(EffectUnit(1))));
    }

    #[test]
    fn test_try_from_rejects_unordered() {
        let result = Environment::try_from(vec![EffectDiff::new(3), EffectDiff::new(2)]);
        assert_eq!(
            result,
            Err(ContractViolation::UnorderedUnits {
                previous: EffectUnit(3),
                next: EffectUnit(2),
            })
        );
    }

    #[test]
    fn test_get_missing_unit() {
        let e = env(vec![EffectDiff::output(1, "a"), EffectDiff::output(3, "c")]);
        assert_eq!(e.get(2), None);
        assert!(e.get(3).is_some());
    }

    #[test]
    fn test_monoid_instance() {
        let e = env(vec![EffectDiff::output(1, "a")]);
        assert_eq!(Environment::empty().combine(e.clone()), e);
    }
}
