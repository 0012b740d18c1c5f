//! Scenario runner for efficient batch evaluations
//!
//! Holds one validated scenario, then allows evaluating the base case or many
//! financial-parameter variants without re-reading input files.

use rayon::prelude::*;
use std::path::Path;

use crate::assumptions::{FinancialParameters, ScenarioAssumptions, ScenarioError};
use crate::projection::{evaluate_scenario, DcfEngine, EvaluationResult};

/// Pre-loaded scenario runner for batch evaluations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// // Sweep the discount rate over the same cost base
/// let variants: Vec<_> = [0.08, 0.10, 0.13]
///     .iter()
///     .map(|&d| FinancialParameters::new(0.30, 0.05, d, 10).unwrap())
///     .collect();
/// let results = runner.run_scenarios(&variants);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Pre-validated base scenario
    assumptions: ScenarioAssumptions,
}

impl ScenarioRunner {
    /// Create a runner over the built-in lime plant scenario
    pub fn new() -> Self {
        Self {
            assumptions: ScenarioAssumptions::lime_plant(),
        }
    }

    /// Create a runner with a pre-built scenario
    pub fn with_assumptions(assumptions: ScenarioAssumptions) -> Self {
        Self { assumptions }
    }

    /// Create a runner by loading a scenario definition from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self, ScenarioError> {
        Ok(Self {
            assumptions: ScenarioAssumptions::from_json_path(path)?,
        })
    }

    /// Get a reference to the base scenario for inspection
    pub fn assumptions(&self) -> &ScenarioAssumptions {
        &self.assumptions
    }

    /// Evaluate the scenario as configured
    pub fn run(&self) -> EvaluationResult {
        evaluate_scenario(&self.assumptions)
    }

    /// Evaluate one financial-parameter variant against the same cost base
    pub fn run_variant(&self, financial: FinancialParameters) -> EvaluationResult {
        let engine = DcfEngine::new(financial);
        engine.evaluate(
            self.assumptions.investment().total(),
            self.assumptions.working_capital(),
            self.assumptions.production().annual_revenue(),
            self.assumptions.operating_costs().total(),
        )
    }

    /// Evaluate many financial-parameter variants in parallel (costs and
    /// production unchanged); results come back in variant order
    pub fn run_scenarios(&self, variants: &[FinancialParameters]) -> Vec<EvaluationResult> {
        variants
            .par_iter()
            .map(|&financial| self.run_variant(financial))
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
