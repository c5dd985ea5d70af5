//! Sweep mortgage rate x investment return over a base scenario
//!
//! Outputs one CSV row per grid cell for sensitivity analysis.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::info;
use rayon::prelude::*;

use rent_vs_buy::inputs::load_inputs_json;
use rent_vs_buy::{calculate, Inputs};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let base = match std::env::args().nth(1) {
        Some(path) => load_inputs_json(Path::new(&path))
            .with_context(|| format!("loading scenario from {path}"))?,
        None => Inputs::default(),
    };

    let mortgage_rates: Vec<f64> = (0..=12).map(|i| 3.0 + 0.5 * i as f64).collect();
    let investment_returns: Vec<f64> = (3..=10).map(|i| i as f64).collect();

    let mut grid = Vec::with_capacity(mortgage_rates.len() * investment_returns.len());
    for &mortgage_rate in &mortgage_rates {
        for &investment_return in &investment_returns {
            grid.push(Inputs {
                mortgage_rate,
                investment_return,
                ..base.clone()
            });
        }
    }

    info!("sweeping {} scenarios", grid.len());
    let start = Instant::now();

    let results: Vec<_> = grid
        .par_iter()
        .map(|inputs| (inputs, calculate(inputs)))
        .collect();

    println!("Ran {} projections in {:?}", results.len(), start.elapsed());

    let output_path = "rate_sweep_output.csv";
    let mut file = File::create(output_path).context("creating sweep output file")?;
    writeln!(
        file,
        "MortgageRate,InvestmentReturn,MonthlyMortgage,BuyNetWorthFinal,RentNetWorthFinal,BreakevenYear,Recommendation"
    )?;
    for (inputs, result) in &results {
        writeln!(
            file,
            "{:.2},{:.2},{:.2},{:.2},{:.2},{},{}",
            inputs.mortgage_rate,
            inputs.investment_return,
            result.monthly_mortgage,
            result.buy_net_worth_final,
            result.rent_net_worth_final,
            result
                .breakeven_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
            result.recommendation,
        )?;
    }

    let buy_cells = results
        .iter()
        .filter(|(_, r)| r.recommendation == rent_vs_buy::Recommendation::Buy)
        .count();
    println!(
        "Buy wins in {}/{} cells; full grid written to {}",
        buy_cells,
        results.len(),
        output_path
    );

    Ok(())
}
