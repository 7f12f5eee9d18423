// Black-Scholes closed form for European options. Calls and puts share one
// formula; the option sign flips both the payoff legs and the CDF arguments.

use crate::error::{LelandResult, PricingError};
use crate::models::normal::{ErfNormalCdf, NormalCdf};
use crate::models::utils::{discount_factor, year_fraction};
use crate::pricing::types::{OptionInputs, OptionSign, PricingResult};

/// Black-Scholes pricer over an injectable standard normal CDF.
#[derive(Debug, Clone, Default)]
pub struct BlackScholes<C = ErfNormalCdf> {
    cdf: C,
}

impl BlackScholes<ErfNormalCdf> {
    pub fn new() -> Self {
        Self { cdf: ErfNormalCdf }
    }
}

impl<C: NormalCdf> BlackScholes<C> {
    pub fn with_cdf(cdf: C) -> Self {
        Self { cdf }
    }

    pub fn cdf(&self) -> &C {
        &self.cdf
    }

    /// Theoretical price of a European option.
    ///
    /// ```text
    /// t  = days / 365
    /// d1 = (ln(S/K) + (r + vol^2/2) t) / (vol sqrt(t))
    /// d2 = d1 - vol sqrt(t)
    /// price = s S Phi(s d1) - s K exp(-r t) Phi(s d2)     s = +1 call, -1 put
    /// ```
    ///
    /// # Errors
    ///
    /// * [`crate::PricingError::InvalidInput`] when spot, strike, time or
    ///   volatility is not strictly positive, the rate is not finite,
    ///   `vol * sqrt(t)` underflows to zero or the discount factor overflows
    /// * [`crate::PricingError::DomainError`] when the price itself is not finite
    pub fn price(&self, inputs: &OptionInputs) -> LelandResult<f64> {
        inputs.validate()?;

        let s = inputs.sign.value();
        let t = year_fraction(inputs.time_to_expiry_days);
        let vol = inputs.volatility;
        let r = inputs.risk_free_rate;
        let vol_sqrt_t = vol * t.sqrt();
        if !(vol_sqrt_t > 0.0) {
            return Err(PricingError::invalid_input(
                "volatility",
                vol,
                "vol * sqrt(t) underflows to zero",
            ));
        }

        let discounted_strike = inputs.strike * discount_factor(r, inputs.time_to_expiry_days);
        if !discounted_strike.is_finite() {
            return Err(PricingError::invalid_input(
                "risk_free_rate",
                r,
                "discount factor overflows over the time to expiry",
            ));
        }

        let d1 = ((inputs.spot / inputs.strike).ln() + (r + 0.5 * vol.powi(2)) * t) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        let price =
            s * inputs.spot * self.cdf.cdf(s * d1) - s * discounted_strike * self.cdf.cdf(s * d2);
        if !price.is_finite() {
            return Err(PricingError::domain("black-scholes price", price));
        }
        Ok(price)
    }

    pub fn evaluate(&self, inputs: &OptionInputs) -> LelandResult<PricingResult> {
        self.price(inputs).map(|price| PricingResult { price })
    }
}

/// Prices from loose arguments, as they arrive from hand-entered scenarios.
///
/// `sign` must be exactly `+1.0` (call) or `-1.0` (put).
pub fn bs_price_with_cdf<C: NormalCdf>(
    spot: f64,
    strike: f64,
    time_to_expiry_days: f64,
    volatility: f64,
    risk_free_rate: f64,
    sign: f64,
    cdf: C,
) -> LelandResult<f64> {
    let sign = OptionSign::try_from(sign)?;
    let inputs = OptionInputs::new(
        spot,
        strike,
        time_to_expiry_days,
        volatility,
        risk_free_rate,
        sign,
    )?;
    BlackScholes::with_cdf(cdf).price(&inputs)
}

/// [`bs_price_with_cdf`] with the default erf-based CDF.
pub fn bs_price(
    spot: f64,
    strike: f64,
    time_to_expiry_days: f64,
    volatility: f64,
    risk_free_rate: f64,
    sign: f64,
) -> LelandResult<f64> {
    bs_price_with_cdf(
        spot,
        strike,
        time_to_expiry_days,
        volatility,
        risk_free_rate,
        sign,
        ErfNormalCdf,
    )
}
