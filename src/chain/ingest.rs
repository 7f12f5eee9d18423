use crate::chain::types::{ContractRecord, OptionChain};
use crate::chain::ChainError;
use crate::error::ensure_positive;
use crate::models::normal::NormalCdf;
use crate::models::utils::intrinsic_value;
use crate::pricing::pipeline::LelandPricer;
use crate::pricing::types::{LelandPricing, OptionInputs, OptionSign, Quote};

impl ContractRecord {
    fn require(&self, field: &'static str, value: Option<f64>) -> Result<f64, ChainError> {
        value.ok_or_else(|| ChainError::MissingField {
            contract: self.label(),
            field,
        })
    }

    /// Validated pricing inputs, with the provider implied volatility as the
    /// base volatility.
    pub fn to_inputs(&self, spot: f64, risk_free_rate: f64) -> Result<OptionInputs, ChainError> {
        let strike = self.require("strike", self.strike)?;
        let days = self.require("daysBeforeExpiration", self.days_to_expiration)?;
        let volatility = self.require("impliedVolatility", self.implied_volatility)?;

        OptionInputs::new(spot, strike, days, volatility, risk_free_rate, self.sign).map_err(
            |source| ChainError::Pricing {
                contract: self.label(),
                source,
            },
        )
    }

    /// Bid/ask quote, rejected unless `ask >= bid > 0`.
    pub fn quote(&self) -> Result<Quote, ChainError> {
        let bid = self.require("bid", self.bid)?;
        let ask = self.require("ask", self.ask)?;
        if !(bid > 0.0 && ask >= bid && ask.is_finite()) {
            return Err(ChainError::MalformedQuote {
                contract: self.label(),
                ask,
                bid,
            });
        }
        Ok(Quote::new(ask, bid))
    }
}

/// A contract priced with and without the spread correction
#[derive(Debug, Clone, PartialEq)]
pub struct PricedContract {
    pub contract: String,
    pub expiration: String,
    pub sign: OptionSign,
    pub strike: f64,
    pub days_to_expiration: f64,
    pub intrinsic_value: f64,
    pub pricing: LelandPricing,
}

/// A contract left out of the report and the reason why
#[derive(Debug)]
pub struct SkippedContract {
    pub record: ContractRecord,
    pub error: ChainError,
}

#[derive(Debug)]
pub struct ChainPricingReport {
    pub spot: f64,
    pub priced: Vec<PricedContract>,
    pub skipped: Vec<SkippedContract>,
}

impl ChainPricingReport {
    pub fn calls(&self) -> impl Iterator<Item = &PricedContract> {
        self.priced.iter().filter(|p| p.sign == OptionSign::Call)
    }

    pub fn puts(&self) -> impl Iterator<Item = &PricedContract> {
        self.priced.iter().filter(|p| p.sign == OptionSign::Put)
    }
}

/// Prices one contract of a chain.
pub fn price_contract<C: NormalCdf>(
    pricer: &LelandPricer<C>,
    record: &ContractRecord,
    spot: f64,
    risk_free_rate: f64,
    delta_t: f64,
) -> Result<PricedContract, ChainError> {
    let inputs = record.to_inputs(spot, risk_free_rate)?;
    let quote = record.quote()?;
    let pricing = pricer
        .price(&inputs, &quote, delta_t)
        .map_err(|source| ChainError::Pricing {
            contract: record.label(),
            source,
        })?;

    Ok(PricedContract {
        contract: record.label(),
        expiration: record.expiration.clone(),
        sign: record.sign,
        strike: inputs.strike,
        days_to_expiration: inputs.time_to_expiry_days,
        intrinsic_value: intrinsic_value(spot, inputs.strike, inputs.sign.value()),
        pricing,
    })
}

/// Prices every contract of `chain`. Contracts that fail validation or
/// pricing are skipped and reported; only a chain without an underlying price
/// fails as a whole.
pub fn price_chain<C: NormalCdf>(
    pricer: &LelandPricer<C>,
    chain: &OptionChain,
    risk_free_rate: f64,
    delta_t: f64,
) -> Result<ChainPricingReport, ChainError> {
    let spot = chain.spot.ok_or(ChainError::MissingSpot)?;
    ensure_positive("spot", spot).map_err(|source| ChainError::Pricing {
        contract: chain.symbol.clone().unwrap_or_else(|| "underlying".to_string()),
        source,
    })?;

    let mut priced = Vec::with_capacity(chain.len());
    let mut skipped = Vec::new();
    for record in chain.contracts() {
        match price_contract(pricer, record, spot, risk_free_rate, delta_t) {
            Ok(contract) => priced.push(contract),
            Err(error) => {
                tracing::warn!(contract = %record.label(), %error, "skipping contract");
                skipped.push(SkippedContract {
                    record: record.clone(),
                    error,
                });
            }
        }
    }

    tracing::debug!(
        priced = priced.len(),
        skipped = skipped.len(),
        "priced option chain"
    );
    Ok(ChainPricingReport {
        spot,
        priced,
        skipped,
    })
}
