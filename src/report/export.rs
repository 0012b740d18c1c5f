//! CSV export of report tables
//!
//! Each exporter instance writes into its own timestamped directory so
//! successive runs never overwrite each other.

use chrono::Local;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::projection::CashFlowRow;

use super::{CostBreakdownRow, SummaryRow};

/// Summary table file name
pub const SUMMARY_FILE: &str = "summary.csv";

/// Cash-flow table file name
pub const CASH_FLOWS_FILE: &str = "cash_flows.csv";

/// Cost-breakdown table file name
pub const COST_BREAKDOWN_FILE: &str = "cost_breakdown.csv";

/// Writes report tables into a timestamped output directory
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    /// Create an exporter rooted at `base_dir/<timestamp>`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> io::Result<Self> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let output_dir = base_dir.as_ref().join(timestamp);
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Directory the tables are written into
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write all three report tables
    pub fn export_all(
        &self,
        summary: &[SummaryRow],
        cash_flows: &[CashFlowRow],
        breakdown: &[CostBreakdownRow],
    ) -> io::Result<()> {
        self.export_summary(summary)?;
        self.export_cash_flows(cash_flows)?;
        self.export_cost_breakdown(breakdown)?;
        Ok(())
    }

    /// Write the key/value summary table
    pub fn export_summary(&self, rows: &[SummaryRow]) -> io::Result<()> {
        let mut file = File::create(self.output_dir.join(SUMMARY_FILE))?;
        writeln!(file, "Metric,Value")?;

        for row in rows {
            match row.value {
                Some(value) => writeln!(file, "{},{:.4}", row.metric, value)?,
                None => writeln!(file, "{},", row.metric)?,
            }
        }

        Ok(())
    }

    /// Write the per-year cash-flow table
    pub fn export_cash_flows(&self, rows: &[CashFlowRow]) -> io::Result<()> {
        let mut file = File::create(self.output_dir.join(CASH_FLOWS_FILE))?;
        writeln!(
            file,
            "Year,Revenue,OperatingCosts,EBIT,Tax,NetCashFlow,Cumulative,Discounted"
        )?;

        for row in rows {
            writeln!(
                file,
                "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
                row.year,
                row.revenue,
                row.operating_costs,
                row.ebit,
                row.tax,
                row.nominal,
                row.cumulative,
                row.discounted
            )?;
        }

        Ok(())
    }

    /// Write the cost-breakdown table
    pub fn export_cost_breakdown(&self, rows: &[CostBreakdownRow]) -> io::Result<()> {
        let mut file = File::create(self.output_dir.join(COST_BREAKDOWN_FILE))?;
        writeln!(file, "Category,AnnualCost,PctOfTotal")?;

        for row in rows {
            writeln!(
                file,
                "{},{:.2},{:.2}",
                row.category, row.annual_amount, row.share_of_total_pct
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::ScenarioAssumptions;
    use crate::projection::evaluate_scenario;
    use crate::report::{build_cost_breakdown, build_summary};

    #[test]
    fn test_exports_all_three_tables() {
        let scenario = ScenarioAssumptions::lime_plant();
        let result = evaluate_scenario(&scenario);
        let summary = build_summary(&scenario, &result);
        let breakdown = build_cost_breakdown(scenario.operating_costs());

        let base = std::env::temp_dir().join("feasibility_export_test");
        let exporter = CsvExporter::new(&base).unwrap();
        exporter
            .export_all(&summary, &result.cash_flows, &breakdown)
            .unwrap();

        let summary_csv = fs::read_to_string(exporter.output_dir().join(SUMMARY_FILE)).unwrap();
        assert!(summary_csv.starts_with("Metric,Value"));
        assert!(summary_csv.contains("Initial Investment,"));

        let cash_flows_csv =
            fs::read_to_string(exporter.output_dir().join(CASH_FLOWS_FILE)).unwrap();
        // Header plus 11 projection rows
        assert_eq!(cash_flows_csv.lines().count(), 12);

        let breakdown_csv =
            fs::read_to_string(exporter.output_dir().join(COST_BREAKDOWN_FILE)).unwrap();
        assert!(breakdown_csv.contains("Raw Materials,"));

        fs::remove_dir_all(exporter.output_dir()).ok();
    }

    #[test]
    fn test_blank_cell_for_undefined_metric() {
        let summary = vec![SummaryRow {
            metric: "IRR".to_string(),
            value: None,
        }];

        let base = std::env::temp_dir().join("feasibility_export_blank_test");
        let exporter = CsvExporter::new(&base).unwrap();
        exporter.export_summary(&summary).unwrap();

        let csv = fs::read_to_string(exporter.output_dir().join(SUMMARY_FILE)).unwrap();
        assert!(csv.contains("IRR,\n"));

        fs::remove_dir_all(exporter.output_dir()).ok();
    }
}
