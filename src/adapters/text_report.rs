//! Plain-text report adapter.
//!
//! Renders the discrepancy table, the shortfall table, and the summary
//! block as fixed-width text. Replaces the colored console tables and the
//! balance chart of the original tooling; renderers never mutate the
//! domain structures they are handed.

use crate::domain::error::ReconwatchError;
use crate::domain::reconcile::DiscrepancyReport;
use crate::domain::shortfall::ShortfallReport;
use crate::domain::stats::SummaryStatistics;
use crate::ports::report_port::ReportPort;
use std::fs;

#[derive(Debug, Default)]
pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn new() -> Self {
        TextReportAdapter
    }
}

impl ReportPort for TextReportAdapter {
    fn write_reconciliation(
        &self,
        report: &DiscrepancyReport,
        output_path: &str,
    ) -> Result<(), ReconwatchError> {
        fs::write(output_path, render_reconciliation(report))?;
        Ok(())
    }

    fn write_monitor(
        &self,
        report: &ShortfallReport,
        stats: &SummaryStatistics,
        output_path: &str,
    ) -> Result<(), ReconwatchError> {
        fs::write(output_path, render_monitor(report, stats))?;
        Ok(())
    }

    fn write_combined(
        &self,
        discrepancies: &DiscrepancyReport,
        shortfalls: &ShortfallReport,
        stats: &SummaryStatistics,
        output_path: &str,
    ) -> Result<(), ReconwatchError> {
        let mut content = render_reconciliation(discrepancies);
        content.push('\n');
        content.push_str(&render_monitor(shortfalls, stats));
        fs::write(output_path, content)?;
        Ok(())
    }
}

fn section(title: &str) -> String {
    format!("{}\n{}\n\n", title, "=".repeat(title.len()))
}

pub fn render_reconciliation(report: &DiscrepancyReport) -> String {
    let mut output = section("Trade Reconciliation");

    if report.is_clean() {
        output.push_str("No trade discrepancies found.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<10} {:<10} {:<14} {:<14}\n",
        "trade_id", "field", "expected", "actual"
    ));

    for entry in &report.entries {
        output.push_str(&format!(
            "{:<10} {:<10} {:<14} {:<14}\n",
            entry.trade_id,
            entry.diff.field_name(),
            entry.diff.expected_value(),
            entry.diff.actual_value()
        ));
    }

    output
}

pub fn render_monitor(report: &ShortfallReport, stats: &SummaryStatistics) -> String {
    let mut output = section("Margin Monitor");

    if report.is_clean() {
        output.push_str("No margin shortfalls detected.\n");
    } else {
        output.push_str(&format!(
            "{:<12} {:<14} {:<20} {:<14}\n",
            "account_id", "balance", "margin_requirement", "shortfall"
        ));
        for entry in &report.entries {
            output.push_str(&format!(
                "{:<12} {:<14.2} {:<20.2} {:<14.2}\n",
                entry.account_id, entry.balance, entry.margin_requirement, entry.shortfall
            ));
        }
    }

    let rounded = stats.rounded();
    output.push('\n');
    output.push_str(&section("Summary Report"));
    output.push_str(&format!(
        "Total Accounts:             {}\n",
        rounded.total_accounts
    ));
    output.push_str(&format!(
        "Shortfall Accounts:         {}\n",
        rounded.shortfall_accounts
    ));
    output.push_str(&format!(
        "Total Shortfall Amount:     {:.2}\n",
        rounded.total_shortfall
    ));
    output.push_str(&format!(
        "Average Balance:            {:.2}\n",
        rounded.mean_balance
    ));
    output.push_str(&format!(
        "Median Balance:             {:.2}\n",
        rounded.median_balance
    ));
    output.push_str(&format!(
        "Balance Standard Deviation: {:.2}\n",
        rounded.std_dev_balance
    ));

    output
}
