use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::chain::ChainError;
use crate::pricing::types::OptionSign;

// Provider wire format: every field is optional and missing values are common
// for illiquid contracts.

/// Stands in for the date of an expiration block the provider left undated.
/// Its contracts are still priced from `daysBeforeExpiration`.
pub const UNKNOWN_EXPIRATION: &str = "unknown";

/// Raw option chain response from the quote provider
#[derive(Debug, Clone, Deserialize)]
pub struct ChainResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(rename = "lastTradePrice", default)]
    pub last_trade_price: Option<f64>,
    #[serde(default)]
    pub data: Option<Vec<RawExpiration>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawExpiration {
    #[serde(rename = "expirationDate", default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub options: RawOptions,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOptions {
    #[serde(rename = "CALL", default)]
    pub calls: Vec<RawContract>,
    #[serde(rename = "PUT", default)]
    pub puts: Vec<RawContract>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawContract {
    #[serde(rename = "contractName", default)]
    pub contract_name: Option<String>,
    #[serde(default)]
    pub strike: Option<f64>,
    #[serde(rename = "daysBeforeExpiration", default)]
    pub days_before_expiration: Option<f64>,
    #[serde(rename = "impliedVolatility", default)]
    pub implied_volatility: Option<f64>,
    #[serde(default)]
    pub bid: Option<f64>,
    #[serde(default)]
    pub ask: Option<f64>,
    #[serde(rename = "lastTradeDateTime", default)]
    pub last_trade_date_time: Option<String>,
}

/// One contract of the chain, reshaped but not yet validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub contract_name: Option<String>,
    /// Expiration date as reported by the provider (e.g. "2024-01-19")
    pub expiration: String,
    pub sign: OptionSign,
    pub strike: Option<f64>,
    pub days_to_expiration: Option<f64>,
    /// Provider implied volatility, used as the base volatility
    pub implied_volatility: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub last_trade_date_time: Option<String>,
}

impl ContractRecord {
    fn from_raw(raw: RawContract, expiration: &str, sign: OptionSign) -> Self {
        Self {
            contract_name: raw.contract_name,
            expiration: expiration.to_string(),
            sign,
            strike: raw.strike,
            days_to_expiration: raw.days_before_expiration,
            implied_volatility: raw.implied_volatility,
            bid: raw.bid,
            ask: raw.ask,
            last_trade_date_time: raw.last_trade_date_time,
        }
    }

    /// Human-readable identifier used in error messages
    pub fn label(&self) -> String {
        match &self.contract_name {
            Some(name) => name.clone(),
            None => match self.strike {
                Some(strike) => format!("{} {} {}", self.expiration, self.sign, strike),
                None => format!("{} {} (no strike)", self.expiration, self.sign),
            },
        }
    }
}

/// Calls and puts sharing one expiration date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpirySlice {
    pub expiration: String,
    pub calls: Vec<ContractRecord>,
    pub puts: Vec<ContractRecord>,
}

/// Option chain grouped by expiration, in provider order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChain {
    pub symbol: Option<String>,
    /// Last trade price of the underlying
    pub spot: Option<f64>,
    pub expirations: Vec<ExpirySlice>,
}

impl OptionChain {
    pub fn from_response(response: ChainResponse) -> Self {
        let expirations = response
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|exp| {
                let date = exp.expiration_date.unwrap_or_else(|| {
                    tracing::warn!("expiration block without expirationDate");
                    UNKNOWN_EXPIRATION.to_string()
                });
                ExpirySlice {
                    calls: exp
                        .options
                        .calls
                        .into_iter()
                        .map(|raw| ContractRecord::from_raw(raw, &date, OptionSign::Call))
                        .collect(),
                    puts: exp
                        .options
                        .puts
                        .into_iter()
                        .map(|raw| ContractRecord::from_raw(raw, &date, OptionSign::Put))
                        .collect(),
                    expiration: date,
                }
            })
            .collect();

        Self {
            symbol: response.code,
            spot: response.last_trade_price,
            expirations,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ChainError> {
        let response: ChainResponse = serde_json::from_str(json)?;
        Ok(Self::from_response(response))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ChainError> {
        let response: ChainResponse = serde_json::from_reader(reader)?;
        Ok(Self::from_response(response))
    }

    /// Expiration dates in provider order
    pub fn expiration_dates(&self) -> Vec<&str> {
        self.expirations
            .iter()
            .map(|slice| slice.expiration.as_str())
            .collect()
    }

    /// Every contract, calls before puts within each expiration
    pub fn contracts(&self) -> impl Iterator<Item = &ContractRecord> {
        self.expirations
            .iter()
            .flat_map(|slice| slice.calls.iter().chain(slice.puts.iter()))
    }

    pub fn len(&self) -> usize {
        self.expirations
            .iter()
            .map(|slice| slice.calls.len() + slice.puts.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
