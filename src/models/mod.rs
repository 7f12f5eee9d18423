pub mod bs;
pub mod leland;
pub mod normal;

/// Common traits used by the pricing models
pub mod traits {
    pub use super::normal::NormalCdf;
}

/// Utility functions shared by the pricing models
pub mod utils {
    /// Fixed day-count basis used to turn calendar days into a year fraction
    pub const DAYS_PER_YEAR: f64 = 365.0;

    /// Calendar days to a year fraction on a 365-day year
    pub fn year_fraction(days: f64) -> f64 {
        days / DAYS_PER_YEAR
    }

    /// Discount factor `exp(-r t)` for `days` calendar days
    pub fn discount_factor(rate: f64, days: f64) -> f64 {
        (-rate * year_fraction(days)).exp()
    }

    /// Payoff of the option at expiry: `max(s (spot - strike), 0)`
    pub fn intrinsic_value(spot: f64, strike: f64, sign: f64) -> f64 {
        (sign * (spot - strike)).max(0.0)
    }
}
