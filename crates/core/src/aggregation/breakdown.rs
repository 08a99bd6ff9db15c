//! Group-and-sum breakdowns keyed by a record dimension.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::currency::arithmetic;

/// Key used for records with a blank dimension, and for the empty extremum.
pub const PLACEHOLDER_KEY: &str = "—";

/// Summed values keyed by dimension, in first-seen key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Breakdown {
    entries: IndexMap<String, Decimal>,
}

/// One `(key, value)` pair taken out of a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    /// Dimension value.
    pub key: String,
    /// Summed value.
    pub value: Decimal,
}

/// Which end of a breakdown to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Largest value.
    Max,
    /// Smallest value.
    Min,
}

impl BreakdownEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(key: impl Into<String>, value: Decimal) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// The `("—", 0)` entry returned when there is nothing to rank.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_KEY, Decimal::ZERO)
    }

    /// Returns true if this is the placeholder entry.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.key == PLACEHOLDER_KEY && self.value.is_zero()
    }
}

/// Groups `records` by `key_fn` and sums `value_fn` per key.
///
/// Records are visited in input order, so key order and per-key summation
/// order are both deterministic. Blank keys are grouped under
/// [`PLACEHOLDER_KEY`].
pub fn breakdown_by<'a, T, I, K, V>(records: I, mut key_fn: K, mut value_fn: V) -> Breakdown
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    K: FnMut(&T) -> String,
    V: FnMut(&T) -> Decimal,
{
    let mut breakdown = Breakdown::default();
    for record in records {
        breakdown.add(&key_fn(record), value_fn(record));
    }
    breakdown
}

impl Breakdown {
    /// Adds `value` to `key`, inserting the key on first sight.
    pub fn add(&mut self, key: &str, value: Decimal) {
        let key = key.trim();
        let key = if key.is_empty() { PLACEHOLDER_KEY } else { key };
        match self.entries.get_mut(key) {
            Some(total) => *total = arithmetic::add(*total, value),
            None => {
                self.entries.insert(key.to_string(), value);
            }
        }
    }

    /// Summed value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.entries.get(key).copied()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no record was grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum over all keys.
    #[must_use]
    pub fn total(&self) -> Decimal {
        arithmetic::sum(self.entries.values().copied())
    }

    /// The `n` largest entries, descending by value.
    ///
    /// Equal values keep their first-seen order.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<BreakdownEntry> {
        let mut ranked: Vec<BreakdownEntry> = self
            .iter()
            .map(|(key, value)| BreakdownEntry::new(key, value))
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.value.cmp(&a.value));
        ranked.truncate(n);
        ranked
    }

    /// Best or worst entry; the first-seen key wins ties.
    ///
    /// Returns the placeholder entry when the breakdown is empty.
    #[must_use]
    pub fn extremum(&self, direction: Direction) -> BreakdownEntry {
        let mut best: Option<(&str, Decimal)> = None;
        for (key, value) in self.iter() {
            let better = match (best, direction) {
                (None, _) => true,
                (Some((_, current)), Direction::Max) => value > current,
                (Some((_, current)), Direction::Min) => value < current,
            };
            if better {
                best = Some((key, value));
            }
        }
        best.map_or_else(BreakdownEntry::placeholder, |(key, value)| {
            BreakdownEntry::new(key, value)
        })
    }
}

impl<'a> IntoIterator for &'a Breakdown {
    type Item = (&'a String, &'a Decimal);
    type IntoIter = indexmap::map::Iter<'a, String, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
