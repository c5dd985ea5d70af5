//! Rent vs Buy CLI
//!
//! Runs one projection and prints the yearly table, cost breakdown, and
//! recommendation. Optionally writes the yearly data to CSV.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use rent_vs_buy::format::{format_currency, format_currency_short};
use rent_vs_buy::inputs::load_inputs_json;
use rent_vs_buy::projection::first_month_costs;
use rent_vs_buy::{calculate, Inputs, Recommendation};

#[derive(Debug, Parser)]
#[command(name = "rent_vs_buy", about = "Project owning a home vs. renting and investing the difference")]
struct Cli {
    /// Scenario JSON file; omitted fields fall back to the default scenario
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override the projection horizon in years
    #[arg(long)]
    years: Option<u32>,

    /// Write the yearly table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut inputs = match &cli.scenario {
        Some(path) => load_inputs_json(path)
            .with_context(|| format!("loading scenario from {}", path.display()))?,
        None => Inputs::default(),
    };
    if let Some(years) = cli.years {
        inputs.years_to_analyze = years;
    }
    info!(
        "running projection: price={} rent={} horizon={}y",
        inputs.home_price, inputs.monthly_rent, inputs.years_to_analyze
    );

    println!("Rent vs Buy v{}", env!("CARGO_PKG_VERSION"));
    println!("=================\n");

    println!("Scenario:");
    println!("  Home price:        {}", format_currency_short(inputs.home_price));
    println!("  Down payment:      {:.1}%", inputs.down_payment_pct);
    println!("  Mortgage:          {:.2}% over {} years", inputs.mortgage_rate, inputs.loan_term_years);
    println!("  Monthly rent:      {}", format_currency_short(inputs.monthly_rent));
    println!("  Horizon:           {} years", inputs.years_to_analyze);
    println!();

    let result = calculate(&inputs);

    let costs = first_month_costs(&inputs);
    println!("First-month buy costs:");
    println!("  P&I payment:       {}", format_currency(costs.mortgage));
    println!("  Property tax:      {}", format_currency(costs.property_tax));
    println!("  Insurance:         {}", format_currency(costs.insurance));
    println!("  Maintenance:       {}", format_currency(costs.maintenance));
    println!("  HOA:               {}", format_currency(costs.hoa));
    println!("  Total:             {}  (rent: {})",
        format_currency(costs.total()),
        format_currency(result.monthly_rent_total));
    println!();

    println!("{:>4} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "Year", "Buy Cost", "Rent Cost", "True Buy Cost", "Buy NW", "Rent NW");
    println!("{}", "-".repeat(80));
    for row in &result.yearly_data {
        println!("{:>4} {:>14} {:>14} {:>14} {:>14} {:>14}",
            row.year,
            format_currency_short(row.cumulative_buy_cost),
            format_currency_short(row.cumulative_rent_cost),
            format_currency_short(row.cumulative_true_buy_cost),
            format_currency_short(row.buy_net_worth),
            format_currency_short(row.rent_net_worth),
        );
    }

    if let Some(path) = &cli.csv {
        let mut file = File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        writeln!(file, "Year,CumulativeBuyCost,CumulativeRentCost,CumulativeTrueBuyCost,BuyNetWorth,RentNetWorth,RemainingBalance,HomeValue")?;
        for row in &result.yearly_data {
            writeln!(file, "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
                row.year,
                row.cumulative_buy_cost,
                row.cumulative_rent_cost,
                row.cumulative_true_buy_cost,
                row.buy_net_worth,
                row.rent_net_worth,
                row.remaining_balance,
                row.home_value,
            )?;
        }
        println!("\nYearly data written to: {}", path.display());
    }

    println!("\nSummary:");
    println!("  Down payment:      {}", format_currency(result.down_payment));
    println!("  Monthly P&I:       {}", format_currency(result.monthly_mortgage));
    println!("  Total buy cost:    {}", format_currency(result.total_buy_cost));
    println!("  Total rent cost:   {}", format_currency(result.total_rent_cost));
    println!("  Final buy NW:      {}", format_currency(result.buy_net_worth_final));
    println!("  Final rent NW:     {}", format_currency(result.rent_net_worth_final));
    match result.breakeven_year {
        Some(year) => println!("  Breakeven:         year {}", year),
        None => println!("  Breakeven:         not within horizon"),
    }

    let verdict = match result.recommendation {
        Recommendation::Buy => "BUY - owning builds more wealth over this horizon",
        Recommendation::Rent => "RENT - renting and investing comes out ahead",
        Recommendation::Neutral => "NEUTRAL - the two paths end in a dead heat",
    };
    println!("\nRecommendation: {}", verdict);

    Ok(())
}
