use std::f64::consts::FRAC_2_PI;

use crate::error::{LelandResult, PricingError};

/// Volatility adjusted for hedging costs under Leland's model.
///
/// ```text
/// adjusted = sqrt(base_vol^2 * (1 + sqrt(2/pi) * (k / base_vol) * sqrt(delta_t)))
/// ```
///
/// * `base_vol` - annualized volatility
/// * `k` - relative bid-ask spread, see [`super::spread_coefficient`]
/// * `delta_t` - hedging interval in years
///
/// With `k == 0` or `delta_t == 0` the base volatility is returned unchanged.
/// The result is a magnitude: a negative `base_vol` is not rejected and comes
/// back positive.
///
/// # Errors
///
/// * [`PricingError::DivisionByZero`] when `base_vol == 0`
/// * [`PricingError::InvalidInput`] when `base_vol` is not finite
/// * [`PricingError::DomainError`] when `delta_t < 0`, or when a negative `k`
///   drives the radicand below zero
pub fn correct_volatility(base_vol: f64, k: f64, delta_t: f64) -> LelandResult<f64> {
    if base_vol == 0.0 {
        return Err(PricingError::division_by_zero(
            "volatility correction",
            "base volatility",
        ));
    }
    if !base_vol.is_finite() {
        return Err(PricingError::invalid_input(
            "base volatility",
            base_vol,
            "must be finite",
        ));
    }
    if delta_t < 0.0 {
        return Err(PricingError::domain("hedging interval", delta_t));
    }

    let inflation = FRAC_2_PI.sqrt() * (k / base_vol) * delta_t.sqrt();
    let radicand = base_vol * base_vol * (1.0 + inflation);
    if radicand.is_nan() || radicand < 0.0 {
        return Err(PricingError::domain("volatility correction", radicand));
    }

    let adjusted = radicand.sqrt();
    tracing::debug!(base_vol, k, delta_t, adjusted, "leland volatility correction");
    Ok(adjusted)
}
