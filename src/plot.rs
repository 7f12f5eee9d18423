//! SVG chart of a hedging-interval sweep.

use anyhow::{bail, Context, Result};
use plotters::prelude::*;

use crate::pricing::config::ChartConfig;
use crate::pricing::types::{OptionSign, SweepPoint};

const CHART_TITLE: &str = "Change of Black-Scholes price with hedging interval";

/// Axis range covering `values`, widened by `padding` of the span on each side.
/// A zero span is widened to a small non-empty interval.
fn padded_range(values: impl Iterator<Item = f64>, padding: f64) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;
    if span > 0.0 {
        (min - span * padding, max + span * padding)
    } else {
        let pad = (min.abs() * 0.05).max(1e-6);
        (min - pad, max + pad)
    }
}

/// Renders price against hedging interval as an SVG document.
pub fn render_sweep_svg(
    points: &[SweepPoint],
    sign: OptionSign,
    size: (u32, u32),
) -> Result<String> {
    if points.is_empty() {
        bail!("cannot chart an empty sweep");
    }

    let (x_min, x_max) = padded_range(points.iter().map(|p| p.delta_t), 0.0);
    let (y_min, y_max) = padded_range(points.iter().map(|p| p.price), 0.05);
    let line: Vec<(f64, f64)> = points.iter().map(|p| (p.delta_t, p.price)).collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(CHART_TITLE, ("sans-serif", 30))
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc("hedging interval (years)")
            .y_desc("Black-Scholes price")
            .draw()?;

        chart
            .draw_series(std::iter::once(PathElement::new(line.clone(), MAGENTA)))?
            .label(format!("value of {} option", sign))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MAGENTA));

        chart.draw_series(
            line.iter()
                .map(|pt| Circle::new(*pt, 3, MAGENTA.filled())),
        )?;

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
    }
    Ok(svg)
}

/// Renders the sweep and writes it to `config.output`.
pub fn save_sweep_chart(
    points: &[SweepPoint],
    sign: OptionSign,
    config: &ChartConfig,
) -> Result<()> {
    let svg = render_sweep_svg(points, sign, (config.width, config.height))?;
    std::fs::write(&config.output, svg)
        .with_context(|| format!("failed to write chart to {}", config.output))?;
    tracing::info!(path = %config.output, "sweep chart saved");
    Ok(())
}
