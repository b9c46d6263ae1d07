//! # Isoquant
//!
//! Evaluates `Q = 5·K^0.34·L^0.66` over a capital and labor grid and opens
//! two figures in turn: the 3D production surface, then the filled isoquant
//! map. Close the first window to see the second.
//!
//! ```sh
//! cargo run --release
//! ```
//!
//! Set `RUST_LOG=debug` for grid and contour details.

use std::{env, error::Error};

use isoquant_core::{Analysis, Params};
use isoquant_plot::{FigureConfig, IsoquantFigure, SurfaceFigure};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Initial surface window size, in points.
const SURFACE_SIZE: [f32; 2] = [1100.0, 800.0];

/// Initial isoquant window size, in points.
const ISOQUANT_SIZE: [f32; 2] = [800.0, 600.0];

fn main() -> Result<(), Box<dyn Error>> {
    let directives = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .init();

    let analysis = Analysis::run(&Params::default())?;

    if let Some([lowest, highest]) = analysis.extremes() {
        info!(
            capital = lowest.input.capital,
            labor = lowest.input.labor,
            output = lowest.output,
            "lowest output"
        );
        info!(
            capital = highest.input.capital,
            labor = highest.input.labor,
            output = highest.output,
            "highest output"
        );
    }

    let [width, height] = SURFACE_SIZE;
    SurfaceFigure::new(&analysis)
        .show(FigureConfig::new("Production Surface").size(width, height))?;

    let [width, height] = ISOQUANT_SIZE;
    IsoquantFigure::new(&analysis).show(FigureConfig::new("Isoquant Map").size(width, height))?;

    Ok(())
}

/// Parses `RUST_LOG`-style directives, falling back to `info` when none are
/// given.
fn log_filter(directives: &str) -> EnvFilter {
    if directives.trim().is_empty() {
        EnvFilter::new(LevelFilter::INFO.to_string())
    } else {
        EnvFilter::new(directives)
    }
}
