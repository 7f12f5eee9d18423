//! Standard normal CDF backends.
//!
//! The pricer only needs `Phi(x)`, so it is taken as a capability
//! ([`NormalCdf`]) rather than tied to one numeric library. Any accuracy of
//! 1e-6 absolute or better is enough for the pricing tests. The libm backend
//! is accurate to roughly machine precision, the statrs one to about 1e-12.

use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::FRAC_1_SQRT_2;

/// Cumulative distribution function of the standard normal distribution.
pub trait NormalCdf {
    /// Returns `Phi(x)` in `[0, 1]`.
    fn cdf(&self, x: f64) -> f64;
}

impl<F> NormalCdf for F
where
    F: Fn(f64) -> f64,
{
    fn cdf(&self, x: f64) -> f64 {
        self(x)
    }
}

/// `Phi(x) = erfc(-x / sqrt(2)) / 2` using libm.
///
/// The complementary form keeps full relative precision deep in the left tail.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErfNormalCdf;

impl NormalCdf for ErfNormalCdf {
    fn cdf(&self, x: f64) -> f64 {
        0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
    }
}

/// Standard normal CDF from statrs.
#[derive(Debug, Clone)]
pub struct StatrsNormalCdf {
    normal: Normal,
}

impl Default for StatrsNormalCdf {
    fn default() -> Self {
        Self {
            normal: Normal::new(0.0, 1.0).expect("standard normal parameters are valid"),
        }
    }
}

impl NormalCdf for StatrsNormalCdf {
    fn cdf(&self, x: f64) -> f64 {
        self.normal.cdf(x)
    }
}

/// Runtime-selectable backend, used where the choice comes from configuration.
#[derive(Debug, Clone, Default)]
pub enum CdfBackend {
    #[default]
    Erf,
    Statrs(StatrsNormalCdf),
}

impl CdfBackend {
    pub fn statrs() -> Self {
        CdfBackend::Statrs(StatrsNormalCdf::default())
    }
}

impl NormalCdf for CdfBackend {
    fn cdf(&self, x: f64) -> f64 {
        match self {
            CdfBackend::Erf => ErfNormalCdf.cdf(x),
            CdfBackend::Statrs(normal) => normal.cdf(x),
        }
    }
}
