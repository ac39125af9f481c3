//! Wheel ranking by composite score.

use crate::domain::scorer::WheelStatistic;
use crate::domain::wheel::Wheel;

/// Sorts by score descending. The sort is stable: equal scores keep their
/// input order.
pub fn rank(mut statistics: Vec<WheelStatistic>) -> Vec<WheelStatistic> {
    statistics.sort_by(|a, b| b.score.total_cmp(&a.score));
    statistics
}

/// Wheel at the top of an already ranked list.
pub fn best_wheel(ranked: &[WheelStatistic]) -> Option<Wheel> {
    ranked.first().map(|s| s.wheel)
}
