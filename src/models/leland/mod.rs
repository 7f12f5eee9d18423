//! Leland's transaction-cost volatility adjustment
//!
//! Discrete-time delta hedging against a bid-ask spread costs money on every
//! rebalance. Leland's model folds that cost into the Black-Scholes volatility:
//! the relative spread `k` is derived from the quote, then used to inflate the
//! base volatility for a given hedging interval `delta_t` (in years).

pub mod correction;
pub mod spread;

pub use correction::*;
pub use spread::*;
