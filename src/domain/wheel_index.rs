//! Per-wheel appearance index: number → ascending dates it was drawn on.
//!
//! Built once per wheel per analysis so delay and occurrence lookups do not
//! rescan the whole dataset for every number.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::draw::DrawDataset;
use crate::domain::number_set::{Number, NumberSet};
use crate::domain::wheel::Wheel;

#[derive(Debug, Clone, Default)]
pub struct WheelIndex {
    appearances: BTreeMap<Number, Vec<NaiveDate>>,
}

impl WheelIndex {
    pub fn build(dataset: &DrawDataset, wheel: Wheel) -> Self {
        let appearances = dataset.records().iter().fold(
            BTreeMap::<Number, Vec<NaiveDate>>::new(),
            |mut acc, record| {
                for n in record.drawn(wheel).iter() {
                    acc.entry(n).or_default().push(record.date);
                }
                acc
            },
        );
        Self { appearances }
    }

    /// Number of records in which `n` was drawn.
    pub fn occurrences(&self, n: Number) -> usize {
        self.appearances.get(&n).map_or(0, Vec::len)
    }

    /// Total occurrences of any number in `set`.
    pub fn occurrences_of(&self, set: &NumberSet) -> usize {
        set.iter().map(|n| self.occurrences(n)).sum()
    }

    /// Most recent date on or before `as_of` on which `n` was drawn.
    pub fn last_seen_on_or_before(&self, n: Number, as_of: NaiveDate) -> Option<NaiveDate> {
        let dates = self.appearances.get(&n)?;
        let idx = dates.partition_point(|d| *d <= as_of);
        idx.checked_sub(1).map(|i| dates[i])
    }

    /// Most recent date on which `n` was drawn.
    pub fn last_seen(&self, n: Number) -> Option<NaiveDate> {
        self.appearances.get(&n).and_then(|dates| dates.last().copied())
    }
}
