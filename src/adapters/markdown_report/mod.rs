//! Markdown report generation.
//!
//! Reads a template (the built-in default or a custom file via
//! `[report] template_path`), resolves all `{{PLACEHOLDER}}` markers with
//! fragments from [`tables`], and returns the final Markdown.

pub mod default_template;
pub mod tables;

use std::fs;
use std::path::PathBuf;

use crate::domain::analysis::AnalysisReport;
use crate::domain::error::RuotaError;
use crate::ports::report_port::ReportPort;

/// Resolve all `{{PLACEHOLDER}}`s in `template` against `report`.
pub fn resolve(template: &str, report: &AnalysisReport) -> String {
    let best_wheel = report
        .best_wheel
        .map(|w| w.to_string())
        .unwrap_or_else(|| "no wheel".to_string());

    template
        .replace("{{SEED_WHEEL}}", report.seed_wheel.name())
        .replace("{{DRAW_DATE}}", &report.draw_date.to_string())
        .replace("{{AS_OF_DATE}}", &report.as_of.to_string())
        .replace("{{NUMBER_GROUP}}", &tables::render_number_group(&report.group))
        .replace("{{ANALYSIS_SET}}", &tables::format_numbers(&report.analysis_set))
        .replace("{{WHEEL_RANKING}}", &tables::render_ranking_table(&report.ranking))
        .replace("{{BEST_WHEEL}}", &best_wheel)
        .replace("{{SUGGESTIONS}}", &tables::render_suggestions(&report.suggestions))
}

#[derive(Default)]
pub struct MarkdownReportAdapter {
    template_path: Option<PathBuf>,
}

impl MarkdownReportAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(template_path: PathBuf) -> Self {
        Self {
            template_path: Some(template_path),
        }
    }
}

impl ReportPort for MarkdownReportAdapter {
    fn render(&self, report: &AnalysisReport) -> Result<String, RuotaError> {
        match &self.template_path {
            Some(path) => {
                let template = fs::read_to_string(path).map_err(|e| RuotaError::ReportWrite {
                    path: path.display().to_string(),
                    reason: format!("failed to read template: {}", e),
                })?;
                Ok(resolve(&template, report))
            }
            None => Ok(resolve(default_template::template(), report)),
        }
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
    use std::io::Write;

    fn sample_report(draw_day: u32) -> AnalysisReport {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let ds = DrawDataset::new(vec![
            DrawRecord::new(day).with_draw(Wheel::Roma, [1, 2, 3, 4, 5]),
        ]);
        run_analysis(
            &ds,
            &AnalysisRequest {
                seed_wheel: Wheel::Roma,
                draw_date: NaiveDate::from_ymd_opt(2024, 1, draw_day).unwrap(),
                play_count: PlayCount::new(5).unwrap(),
                scoring: ScoringConfig::default(),
                as_of: None,
            },
        )
    }

    #[test]
    fn default_template_resolves_everything() {
        let out = MarkdownReportAdapter::new().render(&sample_report(1)).unwrap();
        assert!(!out.contains("{{"));
        assert!(out.contains("Seed draw: Roma on 2024-01-01"));
        assert!(out.contains("**Analysis set:** 1, 2, 3, 4, 5, 6, 90"));
        assert!(out.contains("## Suggested numbers for Roma"));
        assert!(out.contains("**1, 2, 3, 4, 5**"));
    }

    #[test]
    fn empty_report_renders_placeholders_as_none() {
        let out = MarkdownReportAdapter::new().render(&sample_report(2)).unwrap();
        assert!(out.contains("**Analysis set:** _none_"));
        assert!(out.contains("Suggested numbers for no wheel"));
        assert!(out.contains("_No numbers to suggest._"));
    }

    #[test]
    fn custom_template_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "best={{{{BEST_WHEEL}}}} set={{{{ANALYSIS_SET}}}}").unwrap();
        let adapter = MarkdownReportAdapter::with_template(file.path().to_path_buf());
        let out = adapter.render(&sample_report(1)).unwrap();
        assert_eq!(out, "best=Roma set=1, 2, 3, 4, 5, 6, 90");
    }

    #[test]
    fn missing_template_file_is_an_error() {
        let adapter = MarkdownReportAdapter::with_template(PathBuf::from("/nonexistent/t.md"));
        assert!(matches!(
            adapter.render(&sample_report(1)),
            Err(RuotaError::ReportWrite { .. })
        ));
    }

    #[test]
    fn write_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.md");
        MarkdownReportAdapter::new()
            .write(&sample_report(1), &path)
            .unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Wheel analysis"));
    }
}
