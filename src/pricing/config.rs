use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::LelandResult;
use crate::models::normal::CdfBackend;
use crate::pricing::types::{OptionInputs, OptionSign, Quote};

/// One hand-entered contract: market inputs plus the quote used for the
/// spread correction.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub spot: f64,
    pub strike: f64,
    /// Calendar days until expiration
    pub days_to_expiry: f64,
    /// Base (annualized) volatility
    pub volatility: f64,
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,
    #[serde(default = "default_option_type")]
    pub option_type: OptionSign,
    pub ask: f64,
    pub bid: f64,
    /// Hedging interval in years used for the single-point correction
    #[serde(default = "default_hedging_interval")]
    pub hedging_interval: f64,
}

impl Scenario {
    /// Validated pricing inputs for this scenario
    pub fn inputs(&self) -> LelandResult<OptionInputs> {
        OptionInputs::new(
            self.spot,
            self.strike,
            self.days_to_expiry,
            self.volatility,
            self.risk_free_rate,
            self.option_type,
        )
    }

    pub fn quote(&self) -> Quote {
        Quote::new(self.ask, self.bid)
    }
}

/// Grid of hedging intervals `start + i * step` for `i in 0..steps`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SweepConfig {
    #[serde(default)]
    pub start: f64,
    #[serde(default = "default_sweep_step")]
    pub step: f64,
    #[serde(default = "default_sweep_steps")]
    pub steps: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            step: default_sweep_step(),
            steps: default_sweep_steps(),
        }
    }
}

impl SweepConfig {
    pub fn delta_ts(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.steps).map(move |i| self.start + i as f64 * self.step)
    }
}

/// Output settings for the sweep chart
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_chart_output")]
    pub output: String,
    #[serde(default = "default_chart_width")]
    pub width: u32,
    #[serde(default = "default_chart_height")]
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output: default_chart_output(),
            width: default_chart_width(),
            height: default_chart_height(),
        }
    }
}

impl ChartConfig {
    /// Sweep CSV path: the chart output with its extension replaced by `csv`
    pub fn csv_path(&self) -> PathBuf {
        Path::new(&self.output).with_extension("csv")
    }
}

/// Quote provider settings for option chain retrieval
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Name of the environment variable holding the API token
    #[serde(default = "default_token_env")]
    pub api_token_env: String,
    /// Rate applied to every contract of a fetched chain
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            symbol: default_symbol(),
            api_token_env: default_token_env(),
            risk_free_rate: default_risk_free_rate(),
        }
    }
}

/// Which standard normal CDF backs the pricer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CdfChoice {
    #[default]
    Erf,
    Statrs,
}

impl CdfChoice {
    pub fn backend(self) -> CdfBackend {
        match self {
            CdfChoice::Erf => CdfBackend::Erf,
            CdfChoice::Statrs => CdfBackend::statrs(),
        }
    }
}

/// Main configuration, usually read from a TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct PricerConfig {
    pub scenario: Scenario,

    #[serde(default)]
    pub sweep: SweepConfig,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub cdf: CdfChoice,
}

impl PricerConfig {
    /// The hand-entered example contract: 8 days to expiry, 90% volatility,
    /// quoted 0.26 / 0.32, hedged daily.
    pub fn reference() -> Self {
        Self {
            scenario: Scenario {
                spot: 49.46,
                strike: 41.5,
                days_to_expiry: 8.0,
                volatility: 0.9,
                risk_free_rate: default_risk_free_rate(),
                option_type: OptionSign::Call,
                ask: 0.32,
                bid: 0.26,
                hedging_interval: default_hedging_interval(),
            },
            sweep: SweepConfig::default(),
            chart: ChartConfig::default(),
            provider: ProviderConfig::default(),
            cdf: CdfChoice::default(),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse pricer configuration")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }
}

fn default_risk_free_rate() -> f64 {
    0.055
}

fn default_option_type() -> OptionSign {
    OptionSign::Call
}

fn default_hedging_interval() -> f64 {
    1.0 / 365.0
}

fn default_sweep_step() -> f64 {
    1.0 / 3650.0
}

fn default_sweep_steps() -> usize {
    10
}

fn default_chart_output() -> String {
    "leland_sweep.svg".to_string()
}

fn default_chart_width() -> u32 {
    1280
}

fn default_chart_height() -> u32 {
    768
}

fn default_base_url() -> String {
    "https://eodhistoricaldata.com/api/options".to_string()
}

fn default_symbol() -> String {
    "AAPL.US".to_string()
}

fn default_token_env() -> String {
    "EOD_API_TOKEN".to_string()
}
