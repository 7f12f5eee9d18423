use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ensure_positive, LelandResult, PricingError};

/// Call or put, carried as the sign applied throughout the Black-Scholes formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionSign {
    Call,
    Put,
}

impl OptionSign {
    /// +1.0 for calls, -1.0 for puts
    pub fn value(self) -> f64 {
        match self {
            OptionSign::Call => 1.0,
            OptionSign::Put => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            OptionSign::Call => OptionSign::Put,
            OptionSign::Put => OptionSign::Call,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionSign::Call => "call",
            OptionSign::Put => "put",
        }
    }
}

impl fmt::Display for OptionSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl TryFrom<f64> for OptionSign {
    type Error = PricingError;

    fn try_from(sign: f64) -> LelandResult<Self> {
        if sign == 1.0 {
            Ok(OptionSign::Call)
        } else if sign == -1.0 {
            Ok(OptionSign::Put)
        } else {
            Err(PricingError::invalid_input(
                "sign",
                sign,
                "must be +1 (call) or -1 (put)",
            ))
        }
    }
}

impl TryFrom<i32> for OptionSign {
    type Error = PricingError;

    fn try_from(sign: i32) -> LelandResult<Self> {
        OptionSign::try_from(f64::from(sign))
    }
}

/// Bid/ask quote of an option contract.
///
/// `ask >= bid > 0` is expected but not enforced; a crossed or negative quote
/// yields a spread coefficient outside `[0, 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub ask: f64,
    pub bid: f64,
}

impl Quote {
    pub fn new(ask: f64, bid: f64) -> Self {
        Self { ask, bid }
    }

    /// Relative bid-ask spread `k`, see [`crate::models::leland::spread_coefficient`].
    pub fn spread_coefficient(&self) -> LelandResult<f64> {
        crate::models::leland::spread_coefficient(self.ask, self.bid)
    }
}

/// Inputs of a single Black-Scholes evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionInputs {
    /// Underlying price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Calendar days until expiration (365-day year)
    pub time_to_expiry_days: f64,
    /// Annualized volatility as a decimal
    pub volatility: f64,
    /// Annualized risk-free rate as a decimal
    pub risk_free_rate: f64,
    pub sign: OptionSign,
}

impl OptionInputs {
    /// Builds validated inputs. Spot, strike, time and volatility must be
    /// finite and strictly positive; the rate must be finite.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry_days: f64,
        volatility: f64,
        risk_free_rate: f64,
        sign: OptionSign,
    ) -> LelandResult<Self> {
        let inputs = Self {
            spot,
            strike,
            time_to_expiry_days,
            volatility,
            risk_free_rate,
            sign,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    pub fn validate(&self) -> LelandResult<()> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_positive("time_to_expiry_days", self.time_to_expiry_days)?;
        ensure_positive("volatility", self.volatility)?;
        if !self.risk_free_rate.is_finite() {
            return Err(PricingError::invalid_input(
                "risk_free_rate",
                self.risk_free_rate,
                "must be finite",
            ));
        }
        Ok(())
    }

    /// Same contract priced with a different volatility.
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    pub fn with_sign(self, sign: OptionSign) -> Self {
        Self { sign, ..self }
    }

    pub fn with_days(self, time_to_expiry_days: f64) -> Self {
        Self {
            time_to_expiry_days,
            ..self
        }
    }
}

/// Theoretical price of one evaluation. Not clamped: a negative price flags
/// pathological inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub price: f64,
}

/// Result of pricing one contract with and without the spread correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LelandPricing {
    /// Relative bid-ask spread `k`
    pub spread_coefficient: f64,
    /// Volatility after Leland's correction
    pub adjusted_volatility: f64,
    /// Black-Scholes price with the raw volatility
    pub vanilla_price: f64,
    /// Black-Scholes price with the adjusted volatility
    pub adjusted_price: f64,
}

/// One point of a hedging-interval sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub delta_t: f64,
    pub adjusted_volatility: f64,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_conversion() {
        assert_eq!(OptionSign::try_from(1.0), Ok(OptionSign::Call));
        assert_eq!(OptionSign::try_from(-1), Ok(OptionSign::Put));
        assert!(matches!(
            OptionSign::try_from(0),
            Err(PricingError::InvalidInput { field: "sign", .. })
        ));
        assert!(OptionSign::try_from(0.5).is_err());
        assert!(OptionSign::try_from(f64::NAN).is_err());
        assert_eq!(OptionSign::Call.flipped().value(), -1.0);
    }

    #[test]
    fn test_inputs_validation() {
        assert!(OptionInputs::new(49.46, 41.5, 8.0, 0.9, 0.055, OptionSign::Call).is_ok());
        // negative rates are allowed
        assert!(OptionInputs::new(100.0, 100.0, 30.0, 0.2, -0.01, OptionSign::Put).is_ok());

        let err = OptionInputs::new(49.46, 0.0, 8.0, 0.9, 0.055, OptionSign::Call).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput { field: "strike", .. }));

        let err = OptionInputs::new(49.46, 41.5, 0.0, 0.9, 0.055, OptionSign::Call).unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidInput {
                field: "time_to_expiry_days",
                ..
            }
        ));

        let err = OptionInputs::new(49.46, 41.5, 8.0, 0.9, f64::INFINITY, OptionSign::Call)
            .unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidInput {
                field: "risk_free_rate",
                ..
            }
        ));
    }

    #[test]
    fn test_sign_serde_lowercase() {
        let json = serde_json::to_string(&OptionSign::Put).unwrap();
        assert_eq!(json, "\"put\"");
        let sign: OptionSign = serde_json::from_str("\"call\"").unwrap();
        assert_eq!(sign, OptionSign::Call);
    }
}
