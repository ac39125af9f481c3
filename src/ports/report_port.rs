//! Report output port.

use std::path::Path;

use crate::domain::analysis::AnalysisReport;
use crate::domain::error::RuotaError;

/// Port for writing analysis reports.
pub trait ReportPort {
    fn render(&self, report: &AnalysisReport) -> Result<String, RuotaError>;

    /// Default implementation: renders and writes the result to `output_path`.
    fn write(&self, report: &AnalysisReport, output_path: &Path) -> Result<(), RuotaError> {
        let content = self.render(report)?;
        std::fs::write(output_path, content).map_err(|e| RuotaError::ReportWrite {
            path: output_path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
