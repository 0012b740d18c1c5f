//! Report tables built from a scenario evaluation
//!
//! Three views: a key/value summary, the per-year cash-flow table, and an
//! operating-cost breakdown with percentage shares.

mod export;

pub use export::CsvExporter;

use serde::{Deserialize, Serialize};

use crate::assumptions::{CostSchedule, ScenarioAssumptions};
use crate::projection::EvaluationResult;

/// One key/value line of the summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub metric: String,

    /// None renders as an empty cell when the metric is undefined for the run
    pub value: Option<f64>,
}

/// One line of the cost-breakdown table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdownRow {
    pub category: String,
    pub annual_amount: f64,
    pub share_of_total_pct: f64,
}

/// Build the key/value summary table for an evaluation
pub fn build_summary(
    scenario: &ScenarioAssumptions,
    result: &EvaluationResult,
) -> Vec<SummaryRow> {
    let first_year_nopat = result.cash_flows.get(1).map(|row| row.ebit - row.tax);

    vec![
        SummaryRow {
            metric: "Initial Investment".to_string(),
            value: Some(scenario.investment().total()),
        },
        SummaryRow {
            metric: "Working Capital Required".to_string(),
            value: Some(scenario.working_capital()),
        },
        SummaryRow {
            metric: "Annual Revenue (Year 1)".to_string(),
            value: Some(scenario.production().annual_revenue()),
        },
        SummaryRow {
            metric: "Annual Operating Costs (Year 1)".to_string(),
            value: Some(scenario.operating_costs().total()),
        },
        SummaryRow {
            metric: "First Year Net Profit After Tax".to_string(),
            value: first_year_nopat,
        },
        SummaryRow {
            metric: "NPV".to_string(),
            value: Some(result.npv),
        },
        SummaryRow {
            metric: "IRR".to_string(),
            value: result.irr,
        },
        SummaryRow {
            metric: "Payback Period (Years)".to_string(),
            value: result.payback_years,
        },
    ]
}

/// Build the cost-breakdown table for a cost schedule
pub fn build_cost_breakdown(costs: &CostSchedule) -> Vec<CostBreakdownRow> {
    let total = costs.total();

    costs
        .items()
        .iter()
        .map(|item| CostBreakdownRow {
            category: item.category.clone(),
            annual_amount: item.amount,
            share_of_total_pct: if total > 0.0 {
                item.amount / total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}
