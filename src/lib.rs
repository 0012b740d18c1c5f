//! Feasibility System - discounted cash-flow evaluation for industrial plant projects
//!
//! This library provides:
//! - A deterministic DCF projection engine (cash-flow series, NPV, IRR, payback)
//! - Validated scenario assumptions with a built-in lime plant default
//! - Report tables (summary, per-year cash flows, cost breakdown) with CSV export
//! - A stateless schedule relay that republishes JSON schedules to a broker topic

pub mod assumptions;
pub mod projection;
pub mod relay;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{
    CostSchedule, FinancialParameters, ProductionParameters, ScenarioAssumptions,
};
pub use projection::{CashFlowRow, DcfEngine, EvaluationResult};
pub use scenario::ScenarioRunner;
