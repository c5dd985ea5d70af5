//! Load scenarios from JSON and CSV files

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use super::Inputs;
use crate::error::LoadError;

/// A scenario loaded from a CSV batch file
#[derive(Debug, Clone, PartialEq)]
pub struct NamedScenario {
    pub name: String,
    pub inputs: Inputs,
}

/// Raw CSV row for a scenario batch file
///
/// Every column except `Name` is optional; missing columns fall back to the
/// default record, mirroring the JSON merge-over-defaults behavior.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "HomePrice")]
    home_price: Option<f64>,
    #[serde(rename = "DownPaymentPct")]
    down_payment_pct: Option<f64>,
    #[serde(rename = "MortgageRate")]
    mortgage_rate: Option<f64>,
    #[serde(rename = "LoanTermYears")]
    loan_term_years: Option<u32>,
    #[serde(rename = "PropertyTaxRate")]
    property_tax_rate: Option<f64>,
    #[serde(rename = "HomeInsurance")]
    home_insurance: Option<f64>,
    #[serde(rename = "MaintenancePct")]
    maintenance_pct: Option<f64>,
    #[serde(rename = "HoaMonthly")]
    hoa_monthly: Option<f64>,
    #[serde(rename = "HomeAppreciation")]
    home_appreciation: Option<f64>,
    #[serde(rename = "MonthlyRent")]
    monthly_rent: Option<f64>,
    #[serde(rename = "RentIncrease")]
    rent_increase: Option<f64>,
    #[serde(rename = "InvestmentReturn")]
    investment_return: Option<f64>,
    #[serde(rename = "YearsToAnalyze")]
    years_to_analyze: Option<u32>,
}

impl CsvRow {
    fn into_scenario(self) -> Result<NamedScenario, LoadError> {
        if self.name.trim().is_empty() {
            return Err(LoadError::InvalidScenario {
                name: self.name,
                reason: "empty scenario name".to_string(),
            });
        }

        let defaults = Inputs::default();
        let inputs = Inputs {
            home_price: self.home_price.unwrap_or(defaults.home_price),
            down_payment_pct: self.down_payment_pct.unwrap_or(defaults.down_payment_pct),
            mortgage_rate: self.mortgage_rate.unwrap_or(defaults.mortgage_rate),
            loan_term_years: self.loan_term_years.unwrap_or(defaults.loan_term_years),
            property_tax_rate: self.property_tax_rate.unwrap_or(defaults.property_tax_rate),
            home_insurance: self.home_insurance.unwrap_or(defaults.home_insurance),
            maintenance_pct: self.maintenance_pct.unwrap_or(defaults.maintenance_pct),
            hoa_monthly: self.hoa_monthly.unwrap_or(defaults.hoa_monthly),
            home_appreciation: self.home_appreciation.unwrap_or(defaults.home_appreciation),
            monthly_rent: self.monthly_rent.unwrap_or(defaults.monthly_rent),
            rent_increase: self.rent_increase.unwrap_or(defaults.rent_increase),
            investment_return: self.investment_return.unwrap_or(defaults.investment_return),
            years_to_analyze: self.years_to_analyze.unwrap_or(defaults.years_to_analyze),
        };

        Ok(NamedScenario {
            name: self.name,
            inputs,
        })
    }
}

/// Load a single scenario from a JSON file.
///
/// Partial documents are merged over the default record via serde defaults,
/// so files written before a field existed still load.
pub fn load_inputs_json(path: &Path) -> Result<Inputs, LoadError> {
    let mut text = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut text))
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let inputs: Inputs = serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("loaded scenario from {}", path.display());
    Ok(inputs)
}

/// Load a batch of named scenarios from a CSV file (one row per scenario)
pub fn load_scenarios_csv(path: &Path) -> Result<Vec<NamedScenario>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut scenarios = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        let row = result.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        scenarios.push(row.into_scenario()?);
    }

    debug!(
        "loaded {} scenarios from {}",
        scenarios.len(),
        path.display()
    );
    Ok(scenarios)
}
