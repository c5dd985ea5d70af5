//! Simulation state threaded across the month/year loop

use crate::inputs::Inputs;

/// Fixed transaction-cost reserve assumed on a sale (6% of current value)
pub const SELLING_COST_PCT: f64 = 0.06;

/// Mutable state for one projection run
///
/// All fields are nominal currency amounts. The two savings pools are the
/// invested-differential accounts: whichever side is cheaper in a given month
/// invests the difference.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Outstanding mortgage balance, floored at 0
    pub remaining_balance: f64,

    /// Current (appreciated) home value
    pub current_home_value: f64,

    /// Current (escalated) monthly rent
    pub current_rent: f64,

    /// Invested monthly savings on the rent path
    pub rent_savings: f64,

    /// Invested monthly savings on the buy path
    pub buy_savings: f64,

    /// Running nominal buy-side outflow, seeded with the down payment
    pub cumulative_buy_cost: f64,

    /// Running nominal rent-side outflow
    pub cumulative_rent_cost: f64,

    /// Running unrecoverable buy-side spend (principal excluded)
    pub cumulative_true_buy_cost: f64,
}

impl SimulationState {
    /// Initialize state at the start of the projection
    pub fn from_inputs(inputs: &Inputs) -> Self {
        Self {
            remaining_balance: inputs.loan_amount(),
            current_home_value: inputs.home_price,
            current_rent: inputs.monthly_rent,
            rent_savings: 0.0,
            buy_savings: 0.0,
            // The down payment is an immediate outflow on the buy side
            cumulative_buy_cost: inputs.down_payment(),
            cumulative_rent_cost: 0.0,
            cumulative_true_buy_cost: 0.0,
        }
    }

    /// Reduce the balance by a principal payment, never below 0
    pub fn apply_principal(&mut self, principal_payment: f64) {
        self.remaining_balance = (self.remaining_balance - principal_payment).max(0.0);
    }

    /// Monthly maintenance against the *current* home value
    pub fn monthly_maintenance(&self, inputs: &Inputs) -> f64 {
        self.current_home_value * inputs.maintenance_pct / 100.0 / 12.0
    }

    /// Credit this month's cost difference to whichever side is cheaper.
    ///
    /// The contribution is scaled once by the partial monthly factor
    /// `(1 + annual_return/12)` at the moment of contribution; the whole pool
    /// then compounds annually in [`close_year`](Self::close_year).
    pub fn invest_difference(&mut self, diff: f64, monthly_factor: f64) {
        if diff > 0.0 {
            self.rent_savings += diff * monthly_factor;
        } else {
            self.buy_savings += -diff * monthly_factor;
        }
    }

    /// End-of-year transitions: appreciation, rent escalation, and the full
    /// annual compounding of both savings pools
    pub fn close_year(&mut self, inputs: &Inputs) {
        self.current_home_value *= 1.0 + inputs.home_appreciation / 100.0;
        self.current_rent *= 1.0 + inputs.rent_increase / 100.0;

        let annual_factor = 1.0 + inputs.investment_return / 100.0;
        self.rent_savings *= annual_factor;
        self.buy_savings *= annual_factor;
    }

    /// Home equity net of the fixed selling-cost reserve
    pub fn home_equity(&self) -> f64 {
        let closing_costs_sell = self.current_home_value * SELLING_COST_PCT;
        self.current_home_value - self.remaining_balance - closing_costs_sell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_inputs() -> Inputs {
        Inputs {
            home_price: 400_000.0,
            down_payment_pct: 20.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let inputs = test_inputs();
        let state = SimulationState::from_inputs(&inputs);

        assert_eq!(state.remaining_balance, 320_000.0);
        assert_eq!(state.current_home_value, 400_000.0);
        assert_eq!(state.cumulative_buy_cost, 80_000.0); // down payment up front
        assert_eq!(state.cumulative_rent_cost, 0.0);
        assert_eq!(state.rent_savings, 0.0);
        assert_eq!(state.buy_savings, 0.0);
    }

    #[test]
    fn test_balance_floored_at_zero() {
        let inputs = test_inputs();
        let mut state = SimulationState::from_inputs(&inputs);

        state.apply_principal(500_000.0);
        assert_eq!(state.remaining_balance, 0.0);
    }

    #[test]
    fn test_close_year_growth() {
        let inputs = Inputs {
            home_appreciation: 4.0,
            rent_increase: 3.5,
            investment_return: 7.0,
            monthly_rent: 2_000.0,
            ..test_inputs()
        };
        let mut state = SimulationState::from_inputs(&inputs);
        state.rent_savings = 1_000.0;
        state.buy_savings = 500.0;

        state.close_year(&inputs);

        assert_relative_eq!(state.current_home_value, 416_000.0, max_relative = 1e-12);
        assert_relative_eq!(state.current_rent, 2_070.0, max_relative = 1e-12);
        assert_relative_eq!(state.rent_savings, 1_070.0, max_relative = 1e-12);
        assert_relative_eq!(state.buy_savings, 535.0, max_relative = 1e-12);
    }

    #[test]
    fn test_home_equity_nets_selling_costs() {
        let inputs = test_inputs();
        let state = SimulationState::from_inputs(&inputs);

        // 400k value - 320k balance - 24k (6%) reserve
        assert_relative_eq!(state.home_equity(), 56_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_invest_difference_routes_by_sign() {
        let inputs = test_inputs();
        let mut state = SimulationState::from_inputs(&inputs);
        let factor = 1.0 + 0.07 / 12.0;

        state.invest_difference(100.0, factor);
        assert_eq!(state.rent_savings, 100.0 * factor);
        assert_eq!(state.buy_savings, 0.0);

        state.invest_difference(-50.0, factor);
        assert_eq!(state.buy_savings, 50.0 * factor);

        // Exact zero difference credits the buy side with nothing
        state.invest_difference(0.0, factor);
        assert_eq!(state.buy_savings, 50.0 * factor);
    }
}
