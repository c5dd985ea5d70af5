//! Core projection: fixed-rate amortization vs. rent-and-invest

use crate::inputs::Inputs;

use super::snapshots::{CalculationResult, Recommendation, YearlySnapshot};
use super::state::SimulationState;

/// Level monthly principal + interest payment for the scenario's loan.
///
/// Standard amortization formula; a zero-rate loan degenerates to straight
/// division.
pub fn monthly_payment(inputs: &Inputs) -> f64 {
    let loan_amount = inputs.loan_amount();
    let monthly_rate = inputs.monthly_rate();
    let num_payments = inputs.num_payments();

    if monthly_rate == 0.0 {
        loan_amount / num_payments as f64
    } else {
        let growth = (1.0 + monthly_rate).powi(num_payments as i32);
        loan_amount * monthly_rate * growth / (growth - 1.0)
    }
}

/// First-month buy-side carrying costs, for display.
///
/// Maintenance here is computed against the original price; inside the
/// simulation it tracks the appreciated value month by month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyCostBreakdown {
    pub mortgage: f64,
    pub property_tax: f64,
    pub insurance: f64,
    pub maintenance: f64,
    pub hoa: f64,
}

impl MonthlyCostBreakdown {
    pub fn total(&self) -> f64 {
        self.mortgage + self.property_tax + self.insurance + self.maintenance + self.hoa
    }
}

/// Recompute the first-month cost breakdown from the inputs
pub fn first_month_costs(inputs: &Inputs) -> MonthlyCostBreakdown {
    MonthlyCostBreakdown {
        mortgage: monthly_payment(inputs),
        property_tax: inputs.home_price * inputs.property_tax_rate / 100.0 / 12.0,
        insurance: inputs.home_insurance / 12.0,
        maintenance: inputs.home_price * inputs.maintenance_pct / 100.0 / 12.0,
        hoa: inputs.hoa_monthly,
    }
}

/// Run the full projection.
///
/// Pure and deterministic: identical inputs yield bit-identical results. The
/// engine performs no range validation; pathological values flow through the
/// arithmetic unchecked.
///
/// # Panics
///
/// Panics if `years_to_analyze` is 0, when the summary reads the final
/// snapshot of an empty sequence.
pub fn calculate(inputs: &Inputs) -> CalculationResult {
    let down_payment = inputs.down_payment();
    let monthly_rate = inputs.monthly_rate();
    let monthly_mortgage = monthly_payment(inputs);

    let monthly_property_tax = inputs.home_price * inputs.property_tax_rate / 100.0 / 12.0;
    let monthly_insurance = inputs.home_insurance / 12.0;
    // First-month summary figure only; the loop recomputes maintenance
    // against the appreciated value
    let initial_maintenance = inputs.home_price * inputs.maintenance_pct / 100.0 / 12.0;
    let monthly_buy_total = monthly_mortgage
        + monthly_property_tax
        + monthly_insurance
        + initial_maintenance
        + inputs.hoa_monthly;

    // Two-layer compounding: each contribution gets the pro-rated monthly
    // factor once, then the whole pool compounds annually in close_year
    let monthly_factor = 1.0 + inputs.investment_return / 100.0 / 12.0;
    let annual_factor = 1.0 + inputs.investment_return / 100.0;

    let mut state = SimulationState::from_inputs(inputs);
    let mut yearly_data = Vec::with_capacity(inputs.years_to_analyze as usize);
    let mut breakeven_year = None;

    for year in 1..=inputs.years_to_analyze {
        for _month in 1..=12 {
            let interest_payment = state.remaining_balance * monthly_rate;
            let principal_payment = monthly_mortgage - interest_payment;
            state.apply_principal(principal_payment);

            let maintenance = state.monthly_maintenance(inputs);
            let total_monthly_buy = monthly_mortgage
                + monthly_property_tax
                + monthly_insurance
                + maintenance
                + inputs.hoa_monthly;
            let total_monthly_rent = state.current_rent;

            state.cumulative_buy_cost += total_monthly_buy;
            state.cumulative_rent_cost += total_monthly_rent;

            // Unrecoverable spend: principal excluded
            let true_monthly_cost = interest_payment
                + monthly_property_tax
                + monthly_insurance
                + maintenance
                + inputs.hoa_monthly;
            state.cumulative_true_buy_cost += true_monthly_cost;

            state.invest_difference(total_monthly_buy - total_monthly_rent, monthly_factor);
        }

        state.close_year(inputs);

        let home_equity = state.home_equity();
        // The down payment compounds at the full annual rate from year 0,
        // independent of the savings pools
        let invested_down_payment = down_payment * annual_factor.powi(year as i32);
        let rent_net_worth = invested_down_payment + state.rent_savings;

        // Savings-adjusted composite. Tracked but never recorded: the
        // snapshot and the recommendation use home equity alone.
        let _buy_net_worth_adjusted = home_equity + state.buy_savings - invested_down_payment;

        // First crossing only, never retracted
        if breakeven_year.is_none() && home_equity > rent_net_worth {
            breakeven_year = Some(year);
        }

        yearly_data.push(YearlySnapshot {
            year,
            cumulative_buy_cost: state.cumulative_buy_cost,
            cumulative_rent_cost: state.cumulative_rent_cost,
            cumulative_true_buy_cost: state.cumulative_true_buy_cost,
            buy_net_worth: home_equity,
            rent_net_worth,
            remaining_balance: state.remaining_balance,
            home_value: state.current_home_value,
        });
    }

    let last = yearly_data
        .last()
        .expect("projection horizon must be at least one year");

    // Strict inequality: an exact tie favors rent
    let recommendation = if last.buy_net_worth > last.rent_net_worth {
        Recommendation::Buy
    } else {
        Recommendation::Rent
    };

    let total_buy_cost = last.cumulative_buy_cost;
    let total_rent_cost = last.cumulative_rent_cost;
    let buy_net_worth_final = last.buy_net_worth;
    let rent_net_worth_final = last.rent_net_worth;

    CalculationResult {
        monthly_mortgage,
        monthly_buy_total,
        monthly_rent_total: inputs.monthly_rent,
        breakeven_year,
        yearly_data,
        total_buy_cost,
        total_rent_cost,
        buy_net_worth_final,
        rent_net_worth_final,
        recommendation,
        down_payment,
    }
}
