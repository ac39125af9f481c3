//! Orders analysis-set numbers by historical strength on one wheel.
//!
//! Primary key: number of draws containing the number, descending.
//! Secondary key: days since last seen (relative to the newest record),
//! ascending. Remaining ties keep ascending number order.

use chrono::NaiveDate;

use crate::domain::draw::DrawDataset;
use crate::domain::error::RuotaError;
use crate::domain::number_set::{Number, NumberSet};
use crate::domain::wheel::Wheel;
use crate::domain::wheel_index::WheelIndex;

pub const MIN_PLAY_COUNT: usize = 5;
pub const MAX_PLAY_COUNT: usize = 15;
pub const DEFAULT_PLAY_COUNT: usize = 10;

/// How many numbers the player wants to play, in `MIN_PLAY_COUNT..=MAX_PLAY_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCount(usize);

impl PlayCount {
    pub fn new(count: usize) -> Result<Self, RuotaError> {
        if (MIN_PLAY_COUNT..=MAX_PLAY_COUNT).contains(&count) {
            Ok(Self(count))
        } else {
            Err(RuotaError::InvalidPlayCount {
                count,
                min: MIN_PLAY_COUNT,
                max: MAX_PLAY_COUNT,
            })
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for PlayCount {
    fn default() -> Self {
        Self(DEFAULT_PLAY_COUNT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedNumber {
    pub number: Number,
    pub occurrences: usize,
    pub last_seen_delay: i64,
}

/// Full ordering of `analysis_set` for `wheel`. Empty when the dataset is.
pub fn rank_numbers(dataset: &DrawDataset, analysis_set: &NumberSet, wheel: Wheel) -> Vec<SuggestedNumber> {
    let (Some(first), Some(last)) = (dataset.first_date(), dataset.last_date()) else {
        return Vec::new();
    };
    let index = WheelIndex::build(dataset, wheel);

    let mut ranked: Vec<SuggestedNumber> = analysis_set
        .iter()
        .map(|number| SuggestedNumber {
            number,
            occurrences: index.occurrences(number),
            last_seen_delay: delay_since(last, index.last_seen(number).unwrap_or(first)),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.occurrences
            .cmp(&a.occurrences)
            .then(a.last_seen_delay.cmp(&b.last_seen_delay))
    });
    ranked
}

/// Top `count` numbers of [`rank_numbers`].
pub fn suggest(
    dataset: &DrawDataset,
    analysis_set: &NumberSet,
    wheel: Wheel,
    count: PlayCount,
) -> Vec<SuggestedNumber> {
    let mut ranked = rank_numbers(dataset, analysis_set, wheel);
    ranked.truncate(count.get());
    ranked
}

fn delay_since(newest: NaiveDate, seen: NaiveDate) -> i64 {
    (newest - seen).num_days()
}
