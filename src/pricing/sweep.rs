//! Hedging-interval sweeps
//!
//! Prices one contract over a grid of hedging intervals to show how the
//! spread correction moves the price as rebalancing gets less frequent.

use anyhow::{Context, Result};
use std::io;
use std::path::Path;

use crate::error::LelandResult;
use crate::models::leland::correct_volatility;
use crate::models::normal::NormalCdf;
use crate::pricing::config::SweepConfig;
use crate::pricing::pipeline::LelandPricer;
use crate::pricing::types::{OptionInputs, Quote, SweepPoint};

impl<C: NormalCdf> LelandPricer<C> {
    /// Evaluates the adjusted price at every hedging interval of `sweep`, in
    /// order. The first failing point aborts the sweep with its error.
    pub fn sweep(
        &self,
        inputs: &OptionInputs,
        quote: &Quote,
        sweep: &SweepConfig,
    ) -> LelandResult<Vec<SweepPoint>> {
        let k = quote.spread_coefficient()?;

        let mut points = Vec::with_capacity(sweep.steps);
        for delta_t in sweep.delta_ts() {
            let adjusted_volatility = correct_volatility(inputs.volatility, k, delta_t)?;
            let price = self
                .black_scholes()
                .price(&inputs.with_volatility(adjusted_volatility))?;
            tracing::debug!(delta_t, adjusted_volatility, price, "sweep point");
            points.push(SweepPoint {
                delta_t,
                adjusted_volatility,
                price,
            });
        }
        Ok(points)
    }
}

/// Writes sweep points as CSV with a `delta_t,adjusted_volatility,price` header.
pub fn write_sweep_csv<W: io::Write>(points: &[SweepPoint], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in points {
        wtr.serialize(point).context("failed to serialize sweep point")?;
    }
    wtr.flush().context("failed to flush sweep CSV")?;
    Ok(())
}

/// Writes sweep points to a CSV file at `path`.
pub fn save_sweep_csv(points: &[SweepPoint], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_sweep_csv(points, file)?;
    tracing::info!(path = %path.display(), points = points.len(), "sweep CSV written");
    Ok(())
}
