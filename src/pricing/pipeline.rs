use crate::error::LelandResult;
use crate::models::bs::BlackScholes;
use crate::models::leland::correct_volatility;
use crate::models::normal::{ErfNormalCdf, NormalCdf};
use crate::pricing::types::{LelandPricing, OptionInputs, Quote};

/// Chains spread coefficient, volatility correction and Black-Scholes for one
/// contract.
///
/// The pricer is stateless apart from its CDF backend, so one instance can be
/// shared across any number of evaluations.
#[derive(Debug, Clone, Default)]
pub struct LelandPricer<C = ErfNormalCdf> {
    bs: BlackScholes<C>,
}

impl LelandPricer<ErfNormalCdf> {
    pub fn new() -> Self {
        Self {
            bs: BlackScholes::new(),
        }
    }
}

impl<C: NormalCdf> LelandPricer<C> {
    pub fn with_cdf(cdf: C) -> Self {
        Self {
            bs: BlackScholes::with_cdf(cdf),
        }
    }

    pub fn black_scholes(&self) -> &BlackScholes<C> {
        &self.bs
    }

    /// Black-Scholes price with the raw volatility
    pub fn vanilla(&self, inputs: &OptionInputs) -> LelandResult<f64> {
        self.bs.price(inputs)
    }

    /// Volatility of `inputs` corrected for the spread of `quote` over the
    /// hedging interval `delta_t` (years)
    pub fn adjusted_volatility(
        &self,
        inputs: &OptionInputs,
        quote: &Quote,
        delta_t: f64,
    ) -> LelandResult<f64> {
        let k = quote.spread_coefficient()?;
        correct_volatility(inputs.volatility, k, delta_t)
    }

    /// Prices the contract with and without Leland's correction.
    pub fn price(
        &self,
        inputs: &OptionInputs,
        quote: &Quote,
        delta_t: f64,
    ) -> LelandResult<LelandPricing> {
        let spread_coefficient = quote.spread_coefficient()?;
        let adjusted_volatility = correct_volatility(inputs.volatility, spread_coefficient, delta_t)?;

        let vanilla_price = self.bs.price(inputs)?;
        let adjusted_price = self.bs.price(&inputs.with_volatility(adjusted_volatility))?;

        tracing::debug!(
            sign = %inputs.sign,
            strike = inputs.strike,
            spread_coefficient,
            adjusted_volatility,
            vanilla_price,
            adjusted_price,
            "priced contract"
        );

        Ok(LelandPricing {
            spread_coefficient,
            adjusted_volatility,
            vanilla_price,
            adjusted_price,
        })
    }
}
