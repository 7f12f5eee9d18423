//! Error types for the pricing core.

use thiserror::Error;

/// Failure of a single pricing evaluation.
///
/// Every variant names the input or operation that failed so callers can
/// report the exact constraint that was violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// An input is outside the domain the formula is defined on.
    #[error("invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A denominator evaluated to zero.
    #[error("division by zero in {operation}: {denominator} is zero")]
    DivisionByZero {
        operation: &'static str,
        denominator: &'static str,
    },

    /// A square root was requested of a negative number, or an intermediate
    /// value left the range the formula is defined on.
    #[error("domain error in {operation}: {radicand} is outside the valid range")]
    DomainError {
        operation: &'static str,
        radicand: f64,
    },
}

pub type LelandResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn invalid_input(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidInput {
            field,
            value,
            reason,
        }
    }

    pub fn division_by_zero(operation: &'static str, denominator: &'static str) -> Self {
        Self::DivisionByZero {
            operation,
            denominator,
        }
    }

    pub fn domain(operation: &'static str, radicand: f64) -> Self {
        Self::DomainError {
            operation,
            radicand,
        }
    }
}

/// Ensures `value` is finite and strictly positive.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> LelandResult<f64> {
    if !value.is_finite() {
        return Err(PricingError::invalid_input(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(PricingError::invalid_input(field, value, "must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PricingError::invalid_input("strike", 0.0, "must be > 0");
        assert_eq!(err.to_string(), "invalid input: strike = 0 (must be > 0)");

        let err = PricingError::division_by_zero("spread coefficient", "ask + bid");
        assert!(err.to_string().contains("ask + bid is zero"));

        let err = PricingError::domain("volatility correction", -0.25);
        assert!(err.to_string().contains("-0.25"));
    }

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("spot", 1.5), Ok(1.5));
        assert!(matches!(
            ensure_positive("spot", 0.0),
            Err(PricingError::InvalidInput { field: "spot", .. })
        ));
        assert!(matches!(
            ensure_positive("spot", -2.0),
            Err(PricingError::InvalidInput { field: "spot", .. })
        ));
        assert!(matches!(
            ensure_positive("spot", f64::NAN),
            Err(PricingError::InvalidInput {
                reason: "must be finite",
                ..
            })
        ));
    }
}
