//! Lottery numbers and deduplicated number sets.

use std::collections::BTreeSet;
use std::fmt;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 90;

/// A drawable number, always in `MIN_NUMBER..=MAX_NUMBER`.
pub type Number = u8;

/// Returns the value as a [`Number`] if it lies in 1..90.
pub fn to_number(value: i64) -> Option<Number> {
    if (MIN_NUMBER as i64..=MAX_NUMBER as i64).contains(&value) {
        Some(value as Number)
    } else {
        None
    }
}

/// A set of unique numbers in 1..90, iterated in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberSet {
    numbers: BTreeSet<Number>,
}

impl NumberSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `n`, ignoring values outside 1..90. Returns whether it was added.
    pub fn insert(&mut self, n: Number) -> bool {
        if (MIN_NUMBER..=MAX_NUMBER).contains(&n) {
            self.numbers.insert(n)
        } else {
            false
        }
    }

    pub fn contains(&self, n: Number) -> bool {
        self.numbers.contains(&n)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Number> + '_ {
        self.numbers.iter().copied()
    }

    pub fn union(&self, other: &NumberSet) -> NumberSet {
        NumberSet {
            numbers: self.numbers.union(&other.numbers).copied().collect(),
        }
    }

    pub fn intersection_len(&self, other: &NumberSet) -> usize {
        self.numbers.intersection(&other.numbers).count()
    }

    pub fn to_vec(&self) -> Vec<Number> {
        self.iter().collect()
    }
}

impl FromIterator<Number> for NumberSet {
    fn from_iter<T: IntoIterator<Item = Number>>(iter: T) -> Self {
        let mut set = NumberSet::new();
        for n in iter {
            set.insert(n);
        }
        set
    }
}

impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}
