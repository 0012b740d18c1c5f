//! Core projection engine for discounted cash-flow evaluations

use crate::assumptions::{FinancialParameters, ScenarioAssumptions};

use super::cashflows::{CashFlowRow, EvaluationResult};
use super::irr::calculate_irr;
use super::payback::payback_period;

/// Discounted cash-flow engine for a fixed set of financial parameters
pub struct DcfEngine {
    financial: FinancialParameters,
}

impl DcfEngine {
    /// Create a new engine with the given financial parameters
    pub fn new(financial: FinancialParameters) -> Self {
        Self { financial }
    }

    /// Project and evaluate one investment case.
    ///
    /// All monetary arguments share one currency unit. `annual_revenue` and
    /// `annual_operating_costs` are year-1 figures; later years index both by
    /// compound inflation. Working capital is tied up at year 0 and recovered
    /// in the final projection year.
    pub fn evaluate(
        &self,
        investment: f64,
        working_capital: f64,
        annual_revenue: f64,
        annual_operating_costs: f64,
    ) -> EvaluationResult {
        let horizon = self.financial.horizon_years();
        let mut rows = Vec::with_capacity(horizon as usize + 1);

        let outlay = -(investment + working_capital);
        let mut cumulative = outlay;
        rows.push(CashFlowRow {
            year: 0,
            revenue: 0.0,
            operating_costs: 0.0,
            ebit: 0.0,
            tax: 0.0,
            nominal: outlay,
            cumulative,
            discounted: outlay,
        });

        for year in 1..=horizon {
            let index = self.financial.inflation_index(year);
            let revenue = annual_revenue * index;
            let operating_costs = annual_operating_costs * index;
            let ebit = revenue - operating_costs;
            let tax = (ebit * self.financial.tax_rate()).max(0.0);

            let mut nominal = ebit - tax;
            if year == horizon {
                nominal += working_capital;
            }
            cumulative += nominal;

            rows.push(CashFlowRow {
                year,
                revenue,
                operating_costs,
                ebit,
                tax,
                nominal,
                cumulative,
                discounted: nominal * self.financial.discount_factor(year),
            });
        }

        let npv = rows.iter().map(|r| r.discounted).sum();
        let nominal: Vec<f64> = rows.iter().map(|r| r.nominal).collect();
        let irr = calculate_irr(&nominal);
        let payback_years = payback_period(&nominal);

        EvaluationResult {
            cash_flows: rows,
            npv,
            irr,
            payback_years,
        }
    }
}

/// Evaluate a complete scenario with its own financial parameters
pub fn evaluate_scenario(scenario: &ScenarioAssumptions) -> EvaluationResult {
    let engine = DcfEngine::new(*scenario.financial());
    engine.evaluate(
        scenario.investment().total(),
        scenario.working_capital(),
        scenario.production().annual_revenue(),
        scenario.operating_costs().total(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params(tax: f64, inflation: f64, discount: f64, horizon: u32) -> FinancialParameters {
        FinancialParameters::new(tax, inflation, discount, horizon).unwrap()
    }

    #[test]
    fn test_initial_outlay_is_exact() {
        let engine = DcfEngine::new(params(0.30, 0.05, 0.13, 10));
        let result = engine.evaluate(4_547_320_210.0, 1_935_607_141.77, 0.0, 0.0);

        assert_eq!(result.cash_flows.len(), 11);
        assert_eq!(
            result.cash_flows[0].nominal,
            -(4_547_320_210.0 + 1_935_607_141.77)
        );
        assert_eq!(result.cash_flows[0].discounted, result.cash_flows[0].nominal);
        // With no revenue the outlay is never recovered
        assert!(result.payback_years.is_none());
        assert!(result.irr.is_none() || result.irr.unwrap() < 0.0);
    }

    #[test]
    fn test_single_year_case() {
        // 1m in, one year of 500k revenue against 300k costs at 30% tax
        let engine = DcfEngine::new(params(0.30, 0.0, 0.10, 1));
        let result = engine.evaluate(1_000_000.0, 0.0, 500_000.0, 300_000.0);

        assert_eq!(result.cash_flows.len(), 2);
        assert_eq!(result.cash_flows[0].nominal, -1_000_000.0);
        assert_abs_diff_eq!(result.cash_flows[1].nominal, 140_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(result.npv, -872_727.27, epsilon = 0.01);
        assert_abs_diff_eq!(result.irr.unwrap(), -0.86, epsilon = 1e-6);
        assert!(result.payback_years.is_none());
    }

    #[test]
    fn test_second_year_is_inflation_indexed() {
        let engine = DcfEngine::new(params(0.30, 0.05, 0.10, 2));
        let result = engine.evaluate(1_000_000.0, 0.0, 500_000.0, 300_000.0);

        let year2 = &result.cash_flows[2];
        assert_abs_diff_eq!(year2.revenue, 551_250.0, epsilon = 1e-6);
        assert_abs_diff_eq!(year2.operating_costs, 330_750.0, epsilon = 1e-6);
        assert_abs_diff_eq!(year2.ebit, 220_500.0, epsilon = 1e-6);
        assert_abs_diff_eq!(year2.tax, 66_150.0, epsilon = 1e-6);
        assert_abs_diff_eq!(year2.nominal, 154_350.0, epsilon = 1e-6);
    }

    #[test]
    fn test_first_year_is_indexed_once() {
        let engine = DcfEngine::new(params(0.0, 0.10, 0.0, 1));
        let result = engine.evaluate(0.0, 0.0, 1000.0, 0.0);

        assert_abs_diff_eq!(result.cash_flows[1].revenue, 1100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_tax_credit_on_losses() {
        let engine = DcfEngine::new(params(0.30, 0.0, 0.10, 3));
        let result = engine.evaluate(100_000.0, 0.0, 200_000.0, 350_000.0);

        for row in &result.cash_flows[1..] {
            assert!(row.ebit < 0.0);
            assert_eq!(row.tax, 0.0);
            assert_eq!(row.nominal, row.ebit);
        }
    }

    #[test]
    fn test_windfall_return_has_undefined_irr() {
        // 50x revenue on a 1k outlay leaves no NPV root within the solver's
        // range; the metric stays undefined while NPV is still positive
        let engine = DcfEngine::new(params(0.30, 0.0, 0.10, 1));
        let result = engine.evaluate(1_000.0, 0.0, 50_000.0, 0.0);

        assert_eq!(result.cash_flows[1].nominal, 35_000.0);
        assert_eq!(result.irr, None);
        assert!(result.npv > 0.0);
    }

    #[test]
    fn test_working_capital_recovered_in_final_year() {
        let engine = DcfEngine::new(params(0.25, 0.02, 0.08, 5));
        let result = engine.evaluate(500_000.0, 120_000.0, 300_000.0, 200_000.0);

        let last = result.cash_flows.last().unwrap();
        assert_abs_diff_eq!(last.nominal, (last.ebit - last.tax) + 120_000.0, epsilon = 1e-9);

        // Recovery shows up only once, in the final row
        for row in &result.cash_flows[1..result.cash_flows.len() - 1] {
            assert_abs_diff_eq!(row.nominal, row.ebit - row.tax, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_cumulative_tracks_running_sum() {
        let engine = DcfEngine::new(params(0.30, 0.05, 0.13, 10));
        let result = engine.evaluate(1_000_000.0, 250_000.0, 400_000.0, 150_000.0);

        let mut running = 0.0;
        for row in &result.cash_flows {
            running += row.nominal;
            assert_eq!(row.cumulative, running);
        }
    }

    #[test]
    fn test_npv_at_zero_discount_equals_nominal_total() {
        let engine = DcfEngine::new(params(0.30, 0.05, 0.0, 4));
        let result = engine.evaluate(800_000.0, 50_000.0, 400_000.0, 250_000.0);

        assert_eq!(result.npv, result.total_nominal());
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let engine = DcfEngine::new(params(0.30, 0.05, 0.13, 10));
        let a = engine.evaluate(1_000_000.0, 250_000.0, 400_000.0, 150_000.0);
        let b = engine.evaluate(1_000_000.0, 250_000.0, 400_000.0, 150_000.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_lime_plant_scenario_is_viable() {
        let result = evaluate_scenario(&ScenarioAssumptions::lime_plant());

        assert_eq!(result.cash_flows.len(), 11);
        assert!(result.npv > 0.0);
        assert!(result.irr.unwrap() > 1.0);
        assert!(result.payback_years.unwrap() < 1.0);
    }
}
