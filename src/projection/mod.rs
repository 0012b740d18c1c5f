//! Projection engine for single-scenario and batch evaluations

mod cashflows;
mod engine;
mod irr;
mod payback;

pub use cashflows::{CashFlowRow, EvaluationResult};
pub use engine::{evaluate_scenario, DcfEngine};
pub use irr::calculate_irr;
pub use payback::payback_period;
