//! Option chain client for the EOD Historical Data options endpoint
//!
//! Blocking HTTP; the API token is read from the environment, never from the
//! configuration file.

use anyhow::{Context, Result};

use crate::chain::types::{ChainResponse, OptionChain};
use crate::pricing::config::ProviderConfig;

pub struct EodClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_token: String,
}

impl EodClient {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("leland-lib/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to create HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_token: api_token.into(),
        })
    }

    /// Client for `config.base_url`, token taken from `config.api_token_env`
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let token = std::env::var(&config.api_token_env)
            .with_context(|| format!("environment variable {} is not set", config.api_token_env))?;
        Self::new(config.base_url.clone(), token)
    }

    /// Fetches the full option chain of `symbol` (e.g. "AAPL.US")
    pub fn fetch_chain(&self, symbol: &str) -> Result<OptionChain> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), symbol);
        tracing::info!(symbol, "fetching option chain");

        let response: ChainResponse = self
            .client
            .get(&url)
            .query(&[("api_token", self.api_token.as_str())])
            .send()
            .with_context(|| format!("request for {} failed", symbol))?
            .error_for_status()
            .with_context(|| format!("provider rejected request for {}", symbol))?
            .json()
            .with_context(|| format!("failed to parse option chain for {}", symbol))?;

        let chain = OptionChain::from_response(response);
        tracing::info!(
            symbol,
            expirations = chain.expirations.len(),
            contracts = chain.len(),
            "option chain received"
        );
        Ok(chain)
    }
}
