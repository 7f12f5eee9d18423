// demos/chain_demo.rs

//! Prices every contract of an option chain with Leland's correction.
//!
//! Usage:
//!     cargo run --example chain_demo -- demos/data/sample_chain.json
//!     cargo run --example chain_demo --features fetch -- --fetch AAPL.US
//!
//! Fetching reads the API token from the variable named in the provider
//! configuration (EOD_API_TOKEN by default).

use anyhow::{Context, Result};
use leland_lib::{price_chain, LelandPricer, OptionChain, ProviderConfig};

fn load_chain(args: &[String], provider: &ProviderConfig) -> Result<OptionChain> {
    match args {
        [flag, symbol, ..] if flag == "--fetch" => fetch_chain(symbol, provider),
        [path, ..] => {
            let file =
                std::fs::File::open(path).with_context(|| format!("failed to open {}", path))?;
            Ok(OptionChain::from_reader(std::io::BufReader::new(file))?)
        }
        [] => anyhow::bail!("usage: chain_demo <chain.json> | --fetch <SYMBOL>"),
    }
}

#[cfg(feature = "fetch")]
fn fetch_chain(symbol: &str, provider: &ProviderConfig) -> Result<OptionChain> {
    leland_lib::chain::fetch::EodClient::from_config(provider)?.fetch_chain(symbol)
}

#[cfg(not(feature = "fetch"))]
fn fetch_chain(_symbol: &str, _provider: &ProviderConfig) -> Result<OptionChain> {
    anyhow::bail!("rebuild with --features fetch to download option chains")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let provider = ProviderConfig::default();
    let chain = load_chain(&args, &provider)?;

    println!(
        "Chain {}: spot {:?}, {} expirations, {} contracts",
        chain.symbol.as_deref().unwrap_or("?"),
        chain.spot,
        chain.expirations.len(),
        chain.len()
    );

    let delta_t = 1.0 / 365.0;
    let report = price_chain(&LelandPricer::new(), &chain, provider.risk_free_rate, delta_t)?;

    println!(
        "\n{:<12} {:<5} {:>8} {:>6} {:>10} {:>10} {:>10}",
        "Expiry", "Type", "Strike", "Days", "Intrinsic", "Vanilla", "Leland"
    );
    println!("{}", "-".repeat(67));
    for p in &report.priced {
        println!(
            "{:<12} {:<5} {:>8.2} {:>6.0} {:>10.4} {:>10.4} {:>10.4}",
            p.expiration,
            p.sign,
            p.strike,
            p.days_to_expiration,
            p.intrinsic_value,
            p.pricing.vanilla_price,
            p.pricing.adjusted_price
        );
    }

    if !report.skipped.is_empty() {
        println!("\nSkipped {} contracts:", report.skipped.len());
        for s in &report.skipped {
            println!("  {}", s.error);
        }
    }
    Ok(())
}
