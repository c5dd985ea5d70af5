//! Rent vs Buy - deterministic wealth projection engine for the own-vs-rent decision
//!
//! This library provides:
//! - A pure year-by-year projection of two wealth trajectories (own a home
//!   vs. rent and invest the difference)
//! - Fixed-rate fully-amortizing mortgage math with carrying costs
//! - Breakeven detection and a buy/rent recommendation
//! - Scenario loading (JSON and CSV batches) and sensitivity sweeps

pub mod error;
pub mod format;
pub mod inputs;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::LoadError;
pub use inputs::Inputs;
pub use projection::{calculate, CalculationResult, Recommendation, YearlySnapshot};
pub use scenario::ScenarioRunner;
