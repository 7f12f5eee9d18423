use crate::error::{LelandResult, PricingError};

/// Relative bid-ask spread `k = 2 (ask - bid) / (ask + bid)`.
///
/// Lies in `[0, 2)` for a well-formed quote (`ask >= bid > 0`), reaching 2
/// only with a zero bid. Malformed quotes are not rejected and produce values
/// outside that range.
///
/// # Errors
///
/// [`PricingError::DivisionByZero`] when `ask + bid == 0`.
pub fn spread_coefficient(ask: f64, bid: f64) -> LelandResult<f64> {
    let mid_twice = ask + bid;
    if mid_twice == 0.0 {
        return Err(PricingError::division_by_zero(
            "spread coefficient",
            "ask + bid",
        ));
    }
    Ok(2.0 * (ask - bid) / mid_twice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_quote() {
        let k = spread_coefficient(0.32, 0.26).unwrap();
        assert!((k - 0.206_897).abs() < 1e-6, "k = {}", k);
        assert!((k - 2.0 * 0.06 / 0.58).abs() < 1e-12);
    }

    #[test]
    fn test_locked_quote_has_zero_spread() {
        for price in [0.01, 0.26, 1.0, 250.0] {
            assert_eq!(spread_coefficient(price, price).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_zero_quote_is_division_by_zero() {
        assert!(matches!(
            spread_coefficient(0.0, 0.0),
            Err(PricingError::DivisionByZero { .. })
        ));
        // Opposite signs cancelling out hit the same guard
        assert!(spread_coefficient(0.5, -0.5).is_err());
    }

    #[test]
    fn test_crossed_quote_is_not_clamped() {
        let k = spread_coefficient(0.26, 0.32).unwrap();
        assert!(k < 0.0);
        // Zero bid is the widest well-formed spread
        assert_eq!(spread_coefficient(0.4, 0.0).unwrap(), 2.0);
    }
}
