//! Per-wheel statistics and the composite promise score.
//!
//! score = frequency × 0.4 + average delay (days) × 0.2 + recent repetitions × 1.5
//!
//! Frequency spans the whole dataset. Delay and recent repetitions are taken
//! relative to the as-of date: records dated after it are not considered.

use chrono::{Duration, NaiveDate};

use crate::domain::draw::{DrawDataset, DrawRecord};
use crate::domain::number_set::NumberSet;
use crate::domain::wheel::Wheel;
use crate::domain::wheel_index::WheelIndex;

pub const FREQUENCY_WEIGHT: f64 = 0.4;
pub const DELAY_WEIGHT: f64 = 0.2;
pub const REPETITION_WEIGHT: f64 = 1.5;
/// Recent repetitions look at records strictly newer than `as_of - RECENT_WINDOW_DAYS`.
pub const RECENT_WINDOW_DAYS: i64 = 60;
/// At most this many of the newest records count as recent.
pub const RECENT_DRAW_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub frequency_weight: f64,
    pub delay_weight: f64,
    pub repetition_weight: f64,
    pub recent_window_days: i64,
    pub recent_draw_limit: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            frequency_weight: FREQUENCY_WEIGHT,
            delay_weight: DELAY_WEIGHT,
            repetition_weight: REPETITION_WEIGHT,
            recent_window_days: RECENT_WINDOW_DAYS,
            recent_draw_limit: RECENT_DRAW_LIMIT,
        }
    }
}

impl ScoringConfig {
    pub fn combine(&self, frequency: usize, average_delay_days: f64, recent_repetitions: usize) -> f64 {
        frequency as f64 * self.frequency_weight
            + average_delay_days * self.delay_weight
            + recent_repetitions as f64 * self.repetition_weight
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelStatistic {
    pub wheel: Wheel,
    pub frequency: usize,
    /// Unrounded mean; use [`WheelStatistic::rounded_average_delay`] for display.
    pub average_delay_days: f64,
    pub recent_repetitions: usize,
    pub score: f64,
}

impl WheelStatistic {
    /// Average delay rounded to one decimal place.
    pub fn rounded_average_delay(&self) -> f64 {
        (self.average_delay_days * 10.0).round() / 10.0
    }
}

/// Scores every wheel in [`Wheel::ALL`] order.
pub fn score_all(
    dataset: &DrawDataset,
    analysis_set: &NumberSet,
    as_of: NaiveDate,
    config: &ScoringConfig,
) -> Vec<WheelStatistic> {
    let recent = recent_records(dataset, as_of, config);
    Wheel::ALL
        .iter()
        .map(|&wheel| score_with_recent(dataset, wheel, analysis_set, as_of, &recent, config))
        .collect()
}

pub fn score_wheel(
    dataset: &DrawDataset,
    wheel: Wheel,
    analysis_set: &NumberSet,
    as_of: NaiveDate,
    config: &ScoringConfig,
) -> WheelStatistic {
    let recent = recent_records(dataset, as_of, config);
    score_with_recent(dataset, wheel, analysis_set, as_of, &recent, config)
}

fn score_with_recent(
    dataset: &DrawDataset,
    wheel: Wheel,
    analysis_set: &NumberSet,
    as_of: NaiveDate,
    recent: &[&DrawRecord],
    config: &ScoringConfig,
) -> WheelStatistic {
    let index = WheelIndex::build(dataset, wheel);

    let frequency = index.occurrences_of(analysis_set);
    let average_delay_days = average_delay(&index, analysis_set, as_of, dataset.first_date());
    let recent_repetitions = recent
        .iter()
        .map(|record| record.drawn(wheel).intersection_len(analysis_set))
        .sum();

    WheelStatistic {
        wheel,
        frequency,
        average_delay_days,
        recent_repetitions,
        score: config.combine(frequency, average_delay_days, recent_repetitions),
    }
}

/// Mean days since each number was last drawn on or before `as_of`. A number
/// never drawn counts as overdue since the earliest record. Empty set → 0.
fn average_delay(
    index: &WheelIndex,
    analysis_set: &NumberSet,
    as_of: NaiveDate,
    earliest: Option<NaiveDate>,
) -> f64 {
    if analysis_set.is_empty() {
        return 0.0;
    }
    let total: i64 = analysis_set
        .iter()
        .map(|n| {
            let since = index.last_seen_on_or_before(n, as_of).or(earliest);
            since.map_or(0, |d| (as_of - d).num_days().max(0))
        })
        .sum();
    total as f64 / analysis_set.len() as f64
}

/// Newest records inside the recent window, capped at `recent_draw_limit`.
fn recent_records<'a>(
    dataset: &'a DrawDataset,
    as_of: NaiveDate,
    config: &ScoringConfig,
) -> Vec<&'a DrawRecord> {
    // A window too wide for chrono to represent is unbounded.
    let window_start = Duration::try_days(config.recent_window_days)
        .and_then(|window| as_of.checked_sub_signed(window));
    dataset
        .newest_first()
        .into_iter()
        .filter(|r| r.date <= as_of && window_start.is_none_or(|start| r.date > start))
        .take(config.recent_draw_limit)
        .collect()
}
