//! End-to-end analysis: seed draw → neighbor expansion → wheel scoring →
//! ranking → number suggestions for the best wheel.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::draw::DrawDataset;
use crate::domain::expander::{self, NumberGroup};
use crate::domain::number_set::NumberSet;
use crate::domain::ranker;
use crate::domain::scorer::{self, ScoringConfig, WheelStatistic};
use crate::domain::suggester::{self, PlayCount, SuggestedNumber};
use crate::domain::wheel::Wheel;

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Wheel whose draw on `draw_date` provides the seed numbers.
    pub seed_wheel: Wheel,
    pub draw_date: NaiveDate,
    pub play_count: PlayCount,
    pub scoring: ScoringConfig,
    /// Reference date for delays and the recent window. Defaults to the
    /// newest record in the dataset.
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub seed_wheel: Wheel,
    pub draw_date: NaiveDate,
    pub as_of: NaiveDate,
    pub group: NumberGroup,
    pub analysis_set: NumberSet,
    /// Every wheel, best first.
    pub ranking: Vec<WheelStatistic>,
    /// `None` when the analysis set is empty.
    pub best_wheel: Option<Wheel>,
    pub suggestions: Vec<SuggestedNumber>,
}

impl AnalysisReport {
    /// True when the seed date/wheel had no draw to analyse.
    pub fn is_empty(&self) -> bool {
        self.analysis_set.is_empty()
    }
}

pub fn run_analysis(dataset: &DrawDataset, request: &AnalysisRequest) -> AnalysisReport {
    let seed = dataset.numbers_drawn(request.draw_date, request.seed_wheel);
    if seed.is_empty() {
        info!(
            wheel = %request.seed_wheel,
            date = %request.draw_date,
            "no draw found for seed wheel and date"
        );
    }

    let group = expander::expand(&seed);
    let analysis_set = group.analysis_set();
    debug!(numbers = %analysis_set, "analysis set");

    let as_of = request
        .as_of
        .or_else(|| dataset.last_date())
        .unwrap_or(request.draw_date);

    let ranking = ranker::rank(scorer::score_all(
        dataset,
        &analysis_set,
        as_of,
        &request.scoring,
    ));

    let best_wheel = if analysis_set.is_empty() {
        None
    } else {
        ranker::best_wheel(&ranking)
    };

    let suggestions = match best_wheel {
        Some(wheel) => suggester::suggest(dataset, &analysis_set, wheel, request.play_count),
        None => Vec::new(),
    };

    if let Some(wheel) = best_wheel {
        info!(best = %wheel, suggested = suggestions.len(), "analysis complete");
    }

    AnalysisReport {
        seed_wheel: request.seed_wheel,
        draw_date: request.draw_date,
        as_of,
        group,
        analysis_set,
        ranking,
        best_wheel,
        suggestions,
    }
}
