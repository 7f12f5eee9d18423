// demos/leland_demo.rs

//! Prices the reference contract with and without Leland's correction, then
//! sweeps the hedging interval and writes the curve to CSV and SVG.
//!
//! Usage:
//!     cargo run --example leland_demo -- [config.toml] [put]
//!
//! Without a config file the built-in reference scenario is used.

use anyhow::Result;

use leland_lib::{
    default_configs, run_scenario, save_sweep_chart, save_sweep_csv, OptionSign, PricerConfig,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = match args.iter().find(|a| a.ends_with(".toml")) {
        Some(path) => PricerConfig::from_path(path)?,
        None => default_configs::reference(),
    };
    if args.iter().any(|a| a == "put") {
        config.scenario.option_type = OptionSign::Put;
    }

    println!("Leland Spread-Corrected Black-Scholes Demo");
    println!("==========================================");

    let s = &config.scenario;
    println!("  Spot:          {:.2}", s.spot);
    println!("  Strike:        {:.2}", s.strike);
    println!("  Days:          {:.0}", s.days_to_expiry);
    println!("  Volatility:    {:.1}%", s.volatility * 100.0);
    println!("  Rate:          {:.2}%", s.risk_free_rate * 100.0);
    println!("  Bid / Ask:     {:.2} / {:.2}", s.bid, s.ask);
    println!("  Option type:   {}", s.option_type);

    let report = run_scenario(&config)?;

    println!("\nSpread coefficient k:          {:.6}", report.pricing.spread_coefficient);
    println!(
        "Adjusted volatility:           {:.6}",
        report.pricing.adjusted_volatility
    );
    println!("Vanilla Black-Scholes:         {:.6}", report.pricing.vanilla_price);
    println!("With recalculated volatility:  {:.6}", report.pricing.adjusted_price);

    println!("\n{:<14} {:<14} {:<14}", "delta t", "adjusted vol", "price");
    println!("{}", "-".repeat(42));
    for point in &report.sweep {
        println!(
            "{:<14.6} {:<14.6} {:<14.6}",
            point.delta_t, point.adjusted_volatility, point.price
        );
    }

    save_sweep_chart(&report.sweep, report.inputs.sign, &config.chart)?;
    let csv_path = config.chart.csv_path();
    save_sweep_csv(&report.sweep, &csv_path)?;

    println!("\nChart saved to {}", config.chart.output);
    println!("Sweep saved to {}", csv_path.display());
    Ok(())
}
