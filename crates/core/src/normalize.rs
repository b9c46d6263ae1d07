//! Shared value-to-color scale for every chart element.
//!
//! A [`Normalization`] is computed once from an [`OutputGrid`] and handed to
//! all renderers, so the surface, the floor contours, and the isoquant map agree
//! on both the color scale and the level boundaries.

use thiserror::Error;

use crate::OutputGrid;

/// Errors that can occur when normalizing an output grid.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum NormalizeError {
    #[error("need at least 2 contour levels, got {0}")]
    TooFewLevels(usize),

    #[error("output range [{min}, {max}] is empty or non-finite")]
    DegenerateRange { min: f64, max: f64 },
}

/// Output extrema and evenly spaced contour level boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalization {
    min: f64,
    max: f64,
    levels: Vec<f64>,
}

impl Normalization {
    /// Derives the scale from the grid's extrema with `level_count` boundaries.
    ///
    /// # Errors
    ///
    /// Returns an error if `level_count < 2` or if the grid has no finite,
    /// non-empty value range.
    pub fn new(grid: &OutputGrid, level_count: usize) -> Result<Self, NormalizeError> {
        Self::from_range(grid.min(), grid.max(), level_count)
    }

    /// Builds the scale from explicit extrema.
    ///
    /// # Errors
    ///
    /// Returns an error if `level_count < 2`, if either bound is non-finite, or
    /// if `max <= min`.
    pub fn from_range(min: f64, max: f64, level_count: usize) -> Result<Self, NormalizeError> {
        if level_count < 2 {
            return Err(NormalizeError::TooFewLevels(level_count));
        }
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(NormalizeError::DegenerateRange { min, max });
        }

        let last = level_count - 1;
        let step = (max - min) / last as f64;
        let levels = (0..level_count)
            .map(|i| if i == last { max } else { min + step * i as f64 })
            .collect();

        Ok(Self { min, max, levels })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the level boundaries, from `min` to `max` inclusive.
    #[must_use]
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Returns the interior boundaries, excluding `min` and `max`.
    ///
    /// Isolines at the extrema collapse onto single grid points, so these are
    /// the levels worth tracing as lines.
    #[must_use]
    pub fn interior_levels(&self) -> &[f64] {
        &self.levels[1..self.levels.len() - 1]
    }

    /// Returns the number of filled bands between boundaries.
    #[must_use]
    pub fn band_count(&self) -> usize {
        self.levels.len() - 1
    }

    /// Returns the position of `value` on `[min, max]`, clamped to `[0, 1]`.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Returns the band containing `value`.
    ///
    /// Band `b` covers `levels[b] <= value < levels[b + 1]`; `max` itself falls
    /// in the last band. Values outside `[min, max]` or `NaN` return `None`.
    #[must_use]
    pub fn band(&self, value: f64) -> Option<usize> {
        if !(self.min..=self.max).contains(&value) {
            return None;
        }
        let upper = self.levels.partition_point(|&level| level <= value);
        Some(upper.saturating_sub(1).min(self.band_count() - 1))
    }

    /// Returns the colormap position used to fill band `band`.
    ///
    /// This is the band midpoint, so filled regions sample the same palette as
    /// the continuous surface.
    #[must_use]
    pub fn band_fraction(&self, band: usize) -> f64 {
        let band = band.min(self.band_count() - 1);
        let mid = 0.5 * (self.levels[band] + self.levels[band + 1]);
        self.fraction(mid)
    }
}
