//! CSV export of the wheel ranking.

use crate::domain::analysis::AnalysisReport;
use crate::domain::error::RuotaError;
use crate::ports::report_port::ReportPort;

const HEADER: [&str; 6] = [
    "rank",
    "wheel",
    "frequency",
    "average_delay",
    "recent_repetitions",
    "score",
];

#[derive(Debug, Default)]
pub struct CsvReportAdapter;

impl CsvReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

fn write_error(reason: impl ToString) -> RuotaError {
    RuotaError::ReportWrite {
        path: "<csv>".to_string(),
        reason: reason.to_string(),
    }
}

impl ReportPort for CsvReportAdapter {
    fn render(&self, report: &AnalysisReport) -> Result<String, RuotaError> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(HEADER).map_err(write_error)?;

        for (i, stat) in report.ranking.iter().enumerate() {
            wtr.write_record([
                (i + 1).to_string(),
                stat.wheel.to_string(),
                stat.frequency.to_string(),
                format!("{:.1}", stat.rounded_average_delay()),
                stat.recent_repetitions.to_string(),
                format!("{:.2}", stat.score),
            ])
            .map_err(write_error)?;
        }

        let bytes = wtr.into_inner().map_err(write_error)?;
        String::from_utf8(bytes).map_err(write_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{AnalysisRequest, run_analysis};
    use crate::domain::draw::{DrawDataset, DrawRecord};
    use crate::domain::scorer::ScoringConfig;
    use crate::domain::suggester::PlayCount;
    use crate::domain::wheel::Wheel;
    use chrono::NaiveDate;

    #[test]
    fn rows_follow_ranking_order() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let ds = DrawDataset::new(vec![
            DrawRecord::new(day)
                .with_draw(Wheel::Roma, [1, 2, 3, 4, 5])
                .with_draw(Wheel::Torino, [1, 60, 61, 62, 63]),
        ]);
        let report = run_analysis(
            &ds,
            &AnalysisRequest {
                seed_wheel: Wheel::Roma,
                draw_date: day,
                play_count: PlayCount::default(),
                scoring: ScoringConfig::default(),
                as_of: None,
            },
        );

        let out = CsvReportAdapter::new().render(&report).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "rank,wheel,frequency,average_delay,recent_repetitions,score");
        assert_eq!(lines[1], "1,Roma,5,0.0,5,9.50");
        assert_eq!(lines[2], "2,Torino,1,0.0,1,1.90");
        assert_eq!(lines[3], "3,Bari,0,0.0,0,0.00");
    }
}
