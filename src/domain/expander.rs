//! Neighbor expansion of a seed set on the cyclic 1..90 number line.

use crate::domain::number_set::{MAX_NUMBER, MIN_NUMBER, Number, NumberSet};

/// Seed numbers split from their ±1 neighbors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberGroup {
    pub direct: NumberSet,
    pub neighbors: NumberSet,
}

impl NumberGroup {
    /// `direct ∪ neighbors`, the set every later stage works on.
    pub fn analysis_set(&self) -> NumberSet {
        self.direct.union(&self.neighbors)
    }
}

/// n - 1, wrapping 1 to 90.
pub fn predecessor(n: Number) -> Number {
    if n > MIN_NUMBER { n - 1 } else { MAX_NUMBER }
}

/// n + 1, wrapping 90 to 1.
pub fn successor(n: Number) -> Number {
    if n < MAX_NUMBER { n + 1 } else { MIN_NUMBER }
}

pub fn expand(numbers: &NumberSet) -> NumberGroup {
    let neighbors = numbers
        .iter()
        .flat_map(|n| [predecessor(n), successor(n)])
        .collect();
    NumberGroup {
        direct: numbers.clone(),
        neighbors,
    }
}
