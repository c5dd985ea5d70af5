//! Output structures for projections

use std::fmt;

use serde::{Deserialize, Serialize};

/// End-of-year snapshot of both wealth trajectories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySnapshot {
    /// Year index, 1-based
    pub year: u32,

    /// Running nominal buy-side outflow (includes the up-front down payment)
    pub cumulative_buy_cost: f64,

    /// Running nominal rent-side outflow
    pub cumulative_rent_cost: f64,

    /// Running unrecoverable buy-side spend: interest + tax + insurance +
    /// maintenance + HOA, principal excluded
    pub cumulative_true_buy_cost: f64,

    /// Home equity net of the selling-cost reserve
    pub buy_net_worth: f64,

    /// Invested down payment plus invested monthly savings
    pub rent_net_worth: f64,

    /// Outstanding mortgage balance at end of year (diagnostic)
    pub remaining_balance: f64,

    /// Appreciated home value at end of year (diagnostic)
    pub home_value: f64,
}

/// Which path ends up ahead.
///
/// `Neutral` is admitted by the type but never produced: the comparison is a
/// strict `>` on final net worth, so an exact tie resolves to `Rent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Buy,
    Rent,
    Neutral,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Buy => "buy",
            Recommendation::Rent => "rent",
            Recommendation::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Level monthly principal + interest payment, fixed for the loan's life
    pub monthly_mortgage: f64,

    /// First-month total buy-side carrying cost
    pub monthly_buy_total: f64,

    /// First-month rent (the original input, not the escalated rent)
    pub monthly_rent_total: f64,

    /// First year in which buy-side net worth exceeds rent-side net worth,
    /// if that happens within the horizon
    pub breakeven_year: Option<u32>,

    /// One snapshot per simulated year, length == horizon
    pub yearly_data: Vec<YearlySnapshot>,

    /// Final cumulative nominal outflows
    pub total_buy_cost: f64,
    pub total_rent_cost: f64,

    /// Net worth at the final simulated year
    pub buy_net_worth_final: f64,
    pub rent_net_worth_final: f64,

    /// Verdict from comparing final net worth
    pub recommendation: Recommendation,

    /// Derived down payment amount
    pub down_payment: f64,
}
