//! Projection engine for rent-vs-buy wealth trajectories

mod engine;
mod snapshots;
mod state;

pub use engine::{calculate, first_month_costs, monthly_payment, MonthlyCostBreakdown};
pub use snapshots::{CalculationResult, Recommendation, YearlySnapshot};
pub use state::{SimulationState, SELLING_COST_PCT};
