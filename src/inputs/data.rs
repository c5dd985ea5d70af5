//! Input record for a single rent-vs-buy scenario

use serde::{Deserialize, Serialize};

fn default_home_price() -> f64 {
    500_000.0
}

fn default_down_payment_pct() -> f64 {
    20.0
}

fn default_mortgage_rate() -> f64 {
    6.5
}

fn default_loan_term_years() -> u32 {
    30
}

fn default_property_tax_rate() -> f64 {
    1.2
}

fn default_home_insurance() -> f64 {
    1_800.0
}

fn default_maintenance_pct() -> f64 {
    1.0
}

fn default_home_appreciation() -> f64 {
    3.0
}

fn default_monthly_rent() -> f64 {
    2_500.0
}

fn default_rent_increase() -> f64 {
    3.0
}

fn default_investment_return() -> f64 {
    7.0
}

fn default_years_to_analyze() -> u32 {
    30
}

/// All parameters for one projection run.
///
/// Every field carries a serde default, so a partial JSON document restored
/// from storage merges over the hardcoded default record and fields added in
/// later versions degrade gracefully.
///
/// The engine does not validate ranges; callers are expected to clamp
/// user-entered values to sensible bounds before constructing this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inputs {
    /// Purchase price of the home
    pub home_price: f64,

    /// Down payment as a percent of the home price (3-50 in practice)
    pub down_payment_pct: f64,

    /// Nominal annual mortgage rate, percent
    pub mortgage_rate: f64,

    /// Loan term in years
    pub loan_term_years: u32,

    /// Annual property tax as a percent of the home price
    pub property_tax_rate: f64,

    /// Annual home insurance premium, currency
    pub home_insurance: f64,

    /// Annual maintenance as a percent of the *current* home value
    pub maintenance_pct: f64,

    /// HOA dues per month, currency
    pub hoa_monthly: f64,

    /// Annual home appreciation, percent
    pub home_appreciation: f64,

    /// Starting rent per month, currency
    pub monthly_rent: f64,

    /// Annual rent escalation, percent
    pub rent_increase: f64,

    /// Annual return on invested savings, percent
    pub investment_return: f64,

    /// Projection horizon in years
    pub years_to_analyze: u32,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            home_price: default_home_price(),
            down_payment_pct: default_down_payment_pct(),
            mortgage_rate: default_mortgage_rate(),
            loan_term_years: default_loan_term_years(),
            property_tax_rate: default_property_tax_rate(),
            home_insurance: default_home_insurance(),
            maintenance_pct: default_maintenance_pct(),
            hoa_monthly: 0.0,
            home_appreciation: default_home_appreciation(),
            monthly_rent: default_monthly_rent(),
            rent_increase: default_rent_increase(),
            investment_return: default_investment_return(),
            years_to_analyze: default_years_to_analyze(),
        }
    }
}

impl Inputs {
    /// Down payment amount derived from price and percent
    pub fn down_payment(&self) -> f64 {
        self.home_price * self.down_payment_pct / 100.0
    }

    /// Financed amount
    pub fn loan_amount(&self) -> f64 {
        self.home_price - self.down_payment()
    }

    /// Periodic (monthly) mortgage rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.mortgage_rate / 100.0 / 12.0
    }

    /// Total number of scheduled payments
    pub fn num_payments(&self) -> u32 {
        self.loan_term_years * 12
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_merges_over_defaults() {
        let inputs: Inputs =
            serde_json::from_str(r#"{"home_price": 420000.0, "hoa_monthly": 150.0}"#).unwrap();

        assert_eq!(inputs.home_price, 420_000.0);
        assert_eq!(inputs.hoa_monthly, 150.0);
        // Untouched fields come from the default record
        assert_eq!(inputs.loan_term_years, 30);
        assert_eq!(inputs.monthly_rent, 2_500.0);
    }

    #[test]
    fn test_derived_down_payment() {
        let inputs = Inputs {
            home_price: 420_000.0,
            down_payment_pct: 13.0,
            ..Default::default()
        };

        assert_eq!(inputs.down_payment(), 54_600.0);
        assert_eq!(inputs.loan_amount(), 365_400.0);
        assert_eq!(inputs.num_payments(), 360);
    }
}
