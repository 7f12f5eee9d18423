//! # Leland-Lib: Black-Scholes Pricing with Bid-Ask Spread Correction
//!
//! `leland-lib` prices European calls and puts with the Black-Scholes closed form and
//! optionally inflates the volatility with Leland's model, which accounts for the cost
//! of hedging discretely against the bid-ask spread quoted in the market.
//!
//! ## Core Features
//!
//! - **Spread Coefficient**: relative bid-ask spread `k = 2 (ask - bid) / (ask + bid)`
//! - **Volatility Correction**: Leland's adjusted volatility for a hedging interval
//! - **Option Pricing**: one Black-Scholes formula for calls and puts, over a swappable
//!   standard normal CDF
//! - **Chain Pricing**: provider option chains reshaped, validated and priced per contract
//! - **Sweeps and Charts**: price curves over hedging intervals, exported to CSV and SVG
//!
//! ## Quick Start
//!
//! ```rust
//! use leland_lib::{price_with_leland, OptionInputs, OptionSign, Quote};
//!
//! let inputs = OptionInputs::new(49.46, 41.5, 8.0, 0.9, 0.055, OptionSign::Call)?;
//! let quote = Quote::new(0.32, 0.26);
//!
//! // Daily rebalancing
//! let pricing = price_with_leland(&inputs, &quote, 1.0 / 365.0)?;
//! assert!(pricing.adjusted_price > pricing.vanilla_price);
//! # Ok::<(), leland_lib::PricingError>(())
//! ```
//!
//! ## Errors
//!
//! The pricing core never returns NaN for bad inputs. Every failure is a
//! [`PricingError`]: `InvalidInput` for non-positive spot, strike, time or volatility
//! (or a sign other than +1/-1), `DivisionByZero` for a zero quote or base volatility,
//! and `DomainError` for a negative square-root argument.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod chain;
pub mod error;
pub mod models;
pub mod plot;
pub mod pricing;

// ================================================================================================
// IMPORTS
// ================================================================================================

use anyhow::{Context, Result};

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{LelandResult, PricingError};

// Core value types
pub use pricing::types::{
    LelandPricing, OptionInputs, OptionSign, PricingResult, Quote, SweepPoint,
};

// Pricing functions and engines
pub use models::bs::{bs_price, bs_price_with_cdf, BlackScholes};
pub use models::leland::{correct_volatility, spread_coefficient};
pub use models::normal::{CdfBackend, ErfNormalCdf, StatrsNormalCdf};
pub use models::traits::NormalCdf;
pub use pricing::pipeline::LelandPricer;
pub use pricing::sweep::{save_sweep_csv, write_sweep_csv};

// Configuration
pub use pricing::config::{
    CdfChoice, ChartConfig, PricerConfig, ProviderConfig, Scenario, SweepConfig,
};

// Option chains
pub use chain::{
    price_chain, price_contract, ChainError, ChainPricingReport, ContractRecord, OptionChain,
    PricedContract, SkippedContract, UNKNOWN_EXPIRATION,
};

// Charts
pub use plot::{render_sweep_svg, save_sweep_chart};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-built configurations.
pub mod default_configs {
    use crate::pricing::config::PricerConfig;

    /// The reference contract: spot 49.46, strike 41.5, 8 days, 90% volatility,
    /// 5.5% rate, quoted 0.26 / 0.32, hedged daily, swept over `dt / 3650` for
    /// `dt` in `0..10`.
    ///
    /// ```rust
    /// use leland_lib::default_configs;
    ///
    /// let config = default_configs::reference();
    /// assert_eq!(config.sweep.steps, 10);
    /// ```
    pub fn reference() -> PricerConfig {
        PricerConfig::reference()
    }
}

/// Prices a contract with and without Leland's correction using the default
/// erf-based normal CDF.
///
/// # Arguments
///
/// * `inputs` - contract and market inputs; `inputs.volatility` is the base volatility
/// * `quote` - bid/ask quote the spread coefficient is derived from
/// * `delta_t` - hedging interval in years (e.g. `1.0 / 365.0` for daily rebalancing)
///
/// # Errors
///
/// Any [`PricingError`] raised by the spread coefficient, the volatility correction or
/// the pricer, unchanged.
pub fn price_with_leland(
    inputs: &OptionInputs,
    quote: &Quote,
    delta_t: f64,
) -> LelandResult<LelandPricing> {
    LelandPricer::new().price(inputs, quote, delta_t)
}

/// Everything computed for one configured scenario
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub inputs: OptionInputs,
    pub quote: Quote,
    pub pricing: LelandPricing,
    pub sweep: Vec<SweepPoint>,
}

/// Prices the configured scenario and its hedging-interval sweep with the
/// configured CDF backend.
pub fn run_scenario(config: &PricerConfig) -> Result<ScenarioReport> {
    let pricer = LelandPricer::with_cdf(config.cdf.backend());
    run_scenario_with(&pricer, config)
}

/// [`run_scenario`] with an explicit pricer.
pub fn run_scenario_with<C: NormalCdf>(
    pricer: &LelandPricer<C>,
    config: &PricerConfig,
) -> Result<ScenarioReport> {
    let scenario = &config.scenario;
    let inputs = scenario.inputs().context("invalid scenario inputs")?;
    let quote = scenario.quote();

    let pricing = pricer
        .price(&inputs, &quote, scenario.hedging_interval)
        .context("failed to price scenario")?;
    let sweep = pricer
        .sweep(&inputs, &quote, &config.sweep)
        .context("hedging-interval sweep failed")?;

    tracing::info!(
        option_type = %inputs.sign,
        vanilla = pricing.vanilla_price,
        adjusted = pricing.adjusted_price,
        sweep_points = sweep.len(),
        "scenario priced"
    );

    Ok(ScenarioReport {
        inputs,
        quote,
        pricing,
        sweep,
    })
}
