//! Scenario input loading
//!
//! Cost tables are `category,amount` CSV files; full scenario definitions are
//! JSON documents combining both cost schedules with production and financial
//! parameters.

use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

use super::{CostItem, CostSchedule, ValidationError};

/// Default path to the cost tables directory
pub const DEFAULT_COSTS_PATH: &str = "data/costs";

/// Investment line items table
pub const INVESTMENT_ITEMS_FILE: &str = "investment_items.csv";

/// Annual operating costs table
pub const OPERATING_COSTS_FILE: &str = "operating_costs.csv";

/// Errors raised while loading scenario inputs from disk
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario input: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed cost table: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed scenario file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Load a `category,amount` cost table from a CSV file
pub fn load_cost_table<P: AsRef<Path>>(path: P) -> Result<CostSchedule, ScenarioError> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut items = Vec::new();
    for result in reader.deserialize() {
        let item: CostItem = result?;
        items.push(item);
    }

    Ok(CostSchedule::new(items)?)
}

/// Load the investment items table from a costs directory
pub fn load_investment_items(dir: &Path) -> Result<CostSchedule, ScenarioError> {
    load_cost_table(dir.join(INVESTMENT_ITEMS_FILE))
}

/// Load the operating costs table from a costs directory
pub fn load_operating_costs(dir: &Path) -> Result<CostSchedule, ScenarioError> {
    load_cost_table(dir.join(OPERATING_COSTS_FILE))
}

/// Raw scenario definition as stored on disk, validated on conversion
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioFile {
    pub name: String,
    pub investment: Vec<CostItem>,
    pub operating_costs: Vec<CostItem>,
    pub production: ProductionFile,
    pub financial: FinancialFile,
    #[serde(default)]
    pub working_capital_months: f64,
}

/// Production section of a scenario file
#[derive(Debug, Clone, Deserialize)]
pub struct ProductionFile {
    pub daily_output: f64,
    pub unit_price: f64,
    pub working_days_per_year: f64,
    #[serde(default = "default_unit_conversion")]
    pub unit_conversion_factor: f64,
}

/// Financial section of a scenario file
#[derive(Debug, Clone, Deserialize)]
pub struct FinancialFile {
    pub tax_rate: f64,
    pub inflation_rate: f64,
    pub discount_rate: f64,
    pub horizon_years: u32,
}

fn default_unit_conversion() -> f64 {
    1.0
}

/// Load a raw scenario definition from a JSON file
pub fn load_scenario_file<P: AsRef<Path>>(path: P) -> Result<ScenarioFile, ScenarioError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}
