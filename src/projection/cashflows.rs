//! Cash-flow output structures for projections

use serde::{Deserialize, Serialize};

/// A single row of projection output for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowRow {
    /// Projection year (0 = investment year)
    pub year: u32,

    // Operating lines, inflation-indexed
    pub revenue: f64,
    pub operating_costs: f64,

    // Earnings
    pub ebit: f64,
    pub tax: f64,

    /// Net cash flow for the year; the year-0 row carries the outlay and the
    /// final row includes recovered working capital
    pub nominal: f64,

    /// Running sum of nominal cash flows through this year
    pub cumulative: f64,

    /// Nominal cash flow discounted to year 0
    pub discounted: f64,
}

/// Complete evaluation of one investment scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Year-by-year cash flows, year 0 through the horizon
    pub cash_flows: Vec<CashFlowRow>,

    /// Net present value at the configured discount rate
    pub npv: f64,

    /// Internal rate of return; None when no root exists in the search bracket
    pub irr: Option<f64>,

    /// Fractional years until the cumulative balance turns non-negative;
    /// None if recovery never happens within the horizon
    pub payback_years: Option<f64>,
}

impl EvaluationResult {
    /// Sum of all nominal cash flows over the horizon
    pub fn total_nominal(&self) -> f64 {
        self.cash_flows.iter().map(|r| r.nominal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EvaluationResult {
        EvaluationResult {
            cash_flows: vec![
                CashFlowRow {
                    year: 0,
                    revenue: 0.0,
                    operating_costs: 0.0,
                    ebit: 0.0,
                    tax: 0.0,
                    nominal: -1000.0,
                    cumulative: -1000.0,
                    discounted: -1000.0,
                },
                CashFlowRow {
                    year: 1,
                    revenue: 2000.0,
                    operating_costs: 800.0,
                    ebit: 1200.0,
                    tax: 360.0,
                    nominal: 840.0,
                    cumulative: -160.0,
                    discounted: 763.64,
                },
            ],
            npv: -236.36,
            irr: Some(-0.16),
            payback_years: None,
        }
    }

    #[test]
    fn test_total_nominal() {
        let result = sample();
        assert_eq!(result.total_nominal(), -160.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let result = sample();
        let json = serde_json::to_string(&result).unwrap();
        let back: EvaluationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
