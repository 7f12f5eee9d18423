//! Option chain ingestion
//!
//! Reshapes a provider option chain (JSON) into per-contract records and
//! validates them into pricing inputs. Validation happens here, once, so the
//! pricing core only ever sees well-formed values.

pub mod ingest;
pub mod types;

#[cfg(feature = "fetch")]
pub mod fetch;

pub use ingest::*;
pub use types::{ContractRecord, ExpirySlice, OptionChain, UNKNOWN_EXPIRATION};

use thiserror::Error;

use crate::error::PricingError;

/// Reasons a chain or one of its contracts cannot be priced
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("failed to parse option chain: {0}")]
    Json(#[from] serde_json::Error),

    #[error("option chain has no underlying price (lastTradePrice)")]
    MissingSpot,

    #[error("contract {contract}: missing field {field}")]
    MissingField {
        contract: String,
        field: &'static str,
    },

    #[error("contract {contract}: malformed quote ask={ask} bid={bid} (expected ask >= bid > 0)")]
    MalformedQuote { contract: String, ask: f64, bid: f64 },

    #[error("contract {contract}: {source}")]
    Pricing {
        contract: String,
        #[source]
        source: PricingError,
    },
}
