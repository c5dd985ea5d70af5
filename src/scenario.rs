//! Scenario runner for batch projections and sensitivity sweeps
//!
//! Holds a base input record once, then runs many projections with
//! single-field variations without the caller rebuilding records by hand.

use crate::inputs::Inputs;
use crate::projection::{calculate, CalculationResult};

/// Runner over a base scenario
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(inputs);
/// for (rate, result) in runner.sweep_mortgage_rate(&[5.5, 6.5, 7.5]) {
///     println!("{rate}: {}", result.recommendation);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: Inputs,
}

impl ScenarioRunner {
    /// Create a runner over the given base scenario
    pub fn new(base: Inputs) -> Self {
        Self { base }
    }

    /// Run the base scenario
    pub fn run(&self) -> CalculationResult {
        calculate(&self.base)
    }

    /// Run a batch of independent scenarios
    pub fn run_batch(&self, scenarios: &[Inputs]) -> Vec<CalculationResult> {
        scenarios.iter().map(calculate).collect()
    }

    /// Sweep the mortgage rate, everything else held at the base scenario
    pub fn sweep_mortgage_rate(&self, rates: &[f64]) -> Vec<(f64, CalculationResult)> {
        rates
            .iter()
            .map(|&mortgage_rate| {
                let inputs = Inputs {
                    mortgage_rate,
                    ..self.base.clone()
                };
                (mortgage_rate, calculate(&inputs))
            })
            .collect()
    }

    /// Sweep the investment return, everything else held at the base scenario
    pub fn sweep_investment_return(&self, returns: &[f64]) -> Vec<(f64, CalculationResult)> {
        returns
            .iter()
            .map(|&investment_return| {
                let inputs = Inputs {
                    investment_return,
                    ..self.base.clone()
                };
                (investment_return, calculate(&inputs))
            })
            .collect()
    }

    /// Sweep the projection horizon
    pub fn sweep_horizon(&self, horizons: &[u32]) -> Vec<(u32, CalculationResult)> {
        horizons
            .iter()
            .map(|&years_to_analyze| {
                let inputs = Inputs {
                    years_to_analyze,
                    ..self.base.clone()
                };
                (years_to_analyze, calculate(&inputs))
            })
            .collect()
    }

    /// Base scenario for inspection
    pub fn inputs(&self) -> &Inputs {
        &self.base
    }

    /// Mutable base scenario for customization
    pub fn inputs_mut(&mut self) -> &mut Inputs {
        &mut self.base
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(Inputs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Inputs {
        Inputs {
            home_price: 420_000.0,
            down_payment_pct: 13.0,
            mortgage_rate: 6.9,
            monthly_rent: 1_850.0,
            years_to_analyze: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_rate_sweep_ordering() {
        let runner = ScenarioRunner::new(base());
        let results = runner.sweep_mortgage_rate(&[4.0, 6.0, 8.0]);

        assert_eq!(results.len(), 3);
        // Higher rate means a higher level payment
        assert!(results[2].1.monthly_mortgage > results[1].1.monthly_mortgage);
        assert!(results[1].1.monthly_mortgage > results[0].1.monthly_mortgage);
        assert_eq!(results[0].0, 4.0);
    }

    #[test]
    fn test_return_sweep_favors_renting() {
        let runner = ScenarioRunner::new(base());
        let results = runner.sweep_investment_return(&[2.0, 12.0]);

        // A higher investment return can only help the rent path
        assert!(results[1].1.rent_net_worth_final > results[0].1.rent_net_worth_final);
    }

    #[test]
    fn test_horizon_sweep_lengths() {
        let runner = ScenarioRunner::new(base());
        for (years, result) in runner.sweep_horizon(&[1, 5, 25]) {
            assert_eq!(result.yearly_data.len(), years as usize);
        }
    }

    #[test]
    fn test_batch_matches_individual_runs() {
        let runner = ScenarioRunner::new(base());
        let other = Inputs {
            monthly_rent: 3_000.0,
            ..base()
        };

        let batch = runner.run_batch(&[base(), other.clone()]);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], runner.run());
        assert_eq!(batch[1], calculate(&other));
    }
}
