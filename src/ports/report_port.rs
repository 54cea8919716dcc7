//! Report generation port trait.

use crate::domain::error::ReconwatchError;
use crate::domain::reconcile::DiscrepancyReport;
use crate::domain::shortfall::ShortfallReport;
use crate::domain::stats::SummaryStatistics;

/// Port for writing run reports. Implementations consume the domain
/// structures read-only.
pub trait ReportPort {
    fn write_reconciliation(
        &self,
        report: &DiscrepancyReport,
        output_path: &str,
    ) -> Result<(), ReconwatchError>;

    fn write_monitor(
        &self,
        report: &ShortfallReport,
        stats: &SummaryStatistics,
        output_path: &str,
    ) -> Result<(), ReconwatchError>;

    fn write_combined(
        &self,
        discrepancies: &DiscrepancyReport,
        shortfalls: &ShortfallReport,
        stats: &SummaryStatistics,
        output_path: &str,
    ) -> Result<(), ReconwatchError>;
}
