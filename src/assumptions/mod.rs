//! Scenario assumptions: cost schedules, production and financial parameters

mod costs;
mod financial;
mod production;
pub mod loader;

pub use costs::{CostItem, CostSchedule};
pub use financial::FinancialParameters;
pub use loader::{ScenarioError, ScenarioFile};
pub use production::ProductionParameters;

use std::path::Path;
use thiserror::Error;

/// Domain-validation failure raised when assumptions are constructed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("tax rate must lie within [0, 1], got {0}")]
    TaxRateOutOfRange(f64),
    #[error("inflation rate must lie within [0, 1), got {0}")]
    InflationRateOutOfRange(f64),
    #[error("discount rate must lie within [0, 1), got {0}")]
    DiscountRateOutOfRange(f64),
    #[error("projection horizon must be at least one year")]
    ZeroHorizon,
    #[error("cost amount for '{category}' must be a non-negative finite number, got {amount}")]
    InvalidAmount { category: String, amount: f64 },
    #[error("cost category name must not be blank")]
    EmptyCategory,
    #[error("duplicate cost category '{0}'")]
    DuplicateCategory(String),
    #[error("working capital months must be non-negative and finite, got {0}")]
    WorkingCapitalMonths(f64),
}

/// Everything a feasibility evaluation needs for one scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioAssumptions {
    name: String,
    investment: CostSchedule,
    operating_costs: CostSchedule,
    production: ProductionParameters,
    financial: FinancialParameters,
    working_capital_months: f64,
}

impl ScenarioAssumptions {
    /// Assemble a scenario from validated components
    pub fn new(
        name: impl Into<String>,
        investment: CostSchedule,
        operating_costs: CostSchedule,
        production: ProductionParameters,
        financial: FinancialParameters,
        working_capital_months: f64,
    ) -> Result<Self, ValidationError> {
        if !working_capital_months.is_finite() || working_capital_months < 0.0 {
            return Err(ValidationError::WorkingCapitalMonths(working_capital_months));
        }
        Ok(Self {
            name: name.into(),
            investment,
            operating_costs,
            production,
            financial,
            working_capital_months,
        })
    }

    /// Built-in lime granulation plant scenario matching the feasibility study
    pub fn lime_plant() -> Self {
        let investment = CostSchedule::from_pairs([
            ("Buildings", 820_000_000.0),
            ("Limestone Equipment", 451_185_381.0),
            ("Staff Salaries (Year 1)", 643_000_000.0),
            ("Laboratory Equipment", 156_639_720.0),
            ("Lime Granulation Equipment", 841_803_796.0),
            ("Training", 60_000_000.0),
            ("Utilities Setup", 184_500_000.0),
            ("Laboratory Installation", 20_136_005.0),
            ("Factory Installation", 34_716_250.0),
            ("Packaging (6 months)", 874_800_000.0),
            ("Fertilizer Plates", 30_000_000.0),
            ("Market Research", 214_000_000.0),
            ("Contingency (5%)", 216_539_058.0),
        ])
        .expect("lime plant investment items are valid");

        // 600 t/day at 103 per kg over 323.62 working days
        let production = ProductionParameters::new(600.0, 103.0, 323.62, 1000.0)
            .expect("lime plant production parameters are valid");

        // Raw material spend runs at 25% of revenue
        let raw_materials = production.annual_revenue() * 0.25;

        // Maintenance at 4% of installed processing equipment
        let equipment = investment.get("Limestone Equipment").unwrap_or(0.0)
            + investment.get("Lime Granulation Equipment").unwrap_or(0.0);
        let maintenance = equipment * 0.04;

        let operating_costs = CostSchedule::from_pairs([
            ("Raw Materials", raw_materials),
            ("Staff Salaries", 643_000_000.0),
            ("Utilities", 24_000_000.0),
            ("Packaging Materials", 1_749_600_000.0),
            ("Maintenance", maintenance),
            ("Marketing", 214_000_000.0),
            ("Other Operating", 60_180_000.0),
        ])
        .expect("lime plant operating costs are valid");

        let financial = FinancialParameters::new(0.30, 0.05, 0.13, 10)
            .expect("lime plant financial parameters are valid");

        Self::new(
            "Lime Plant",
            investment,
            operating_costs,
            production,
            financial,
            3.0,
        )
        .expect("lime plant scenario is valid")
    }

    /// Validate a raw scenario definition
    pub fn from_file(file: ScenarioFile) -> Result<Self, ValidationError> {
        let investment = CostSchedule::new(file.investment)?;
        let operating_costs = CostSchedule::new(file.operating_costs)?;
        let production = ProductionParameters::new(
            file.production.daily_output,
            file.production.unit_price,
            file.production.working_days_per_year,
            file.production.unit_conversion_factor,
        )?;
        let financial = FinancialParameters::new(
            file.financial.tax_rate,
            file.financial.inflation_rate,
            file.financial.discount_rate,
            file.financial.horizon_years,
        )?;
        Self::new(
            file.name,
            investment,
            operating_costs,
            production,
            financial,
            file.working_capital_months,
        )
    }

    /// Load and validate a scenario from a JSON file
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let file = loader::load_scenario_file(path)?;
        Ok(Self::from_file(file)?)
    }

    /// Replace both cost schedules from CSV tables in `dir`
    pub fn with_costs_from_dir(mut self, dir: &Path) -> Result<Self, ScenarioError> {
        self.investment = loader::load_investment_items(dir)?;
        self.operating_costs = loader::load_operating_costs(dir)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn investment(&self) -> &CostSchedule {
        &self.investment
    }

    pub fn operating_costs(&self) -> &CostSchedule {
        &self.operating_costs
    }

    pub fn production(&self) -> &ProductionParameters {
        &self.production
    }

    pub fn financial(&self) -> &FinancialParameters {
        &self.financial
    }

    pub fn working_capital_months(&self) -> f64 {
        self.working_capital_months
    }

    /// Working capital carried as months of annual operating costs,
    /// tied up at year 0 and recovered in the final projection year
    pub fn working_capital(&self) -> f64 {
        self.operating_costs.total() / 12.0 * self.working_capital_months
    }
}
