//! Scenario inputs and loaders

mod data;
pub mod loader;

pub use data::Inputs;
pub use loader::{load_inputs_json, load_scenarios_csv, NamedScenario};
