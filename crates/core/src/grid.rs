//! Sample ranges and the capital/labor mesh they span.

use ndarray::{Array1, Array2, ArrayView1};
use thiserror::Error;

/// Errors that can occur when building an [`InputRange`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("range bounds must be finite, got [{start}, {end}]")]
    NonFinite { start: f64, end: f64 },

    #[error("range end {end} must be greater than start {start}")]
    Empty { start: f64, end: f64 },

    #[error("range needs at least 2 samples, got {0}")]
    TooFewSamples(usize),
}

/// Evenly spaced samples over a closed interval.
///
/// The first sample is exactly `start` and the last is exactly `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRange {
    values: Array1<f64>,
}

impl InputRange {
    /// Creates `count` evenly spaced samples from `start` to `end` inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite, if `end <= start`, or if
    /// `count < 2`.
    pub fn linspace(start: f64, end: f64, count: usize) -> Result<Self, GridError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(GridError::NonFinite { start, end });
        }
        if end <= start {
            return Err(GridError::Empty { start, end });
        }
        if count < 2 {
            return Err(GridError::TooFewSamples(count));
        }

        let last = count - 1;
        let step = (end - start) / last as f64;
        let values = Array1::from_shape_fn(count, |i| {
            if i == last {
                end
            } else {
                start + step * i as f64
            }
        });

        Ok(Self { values })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; a range holds at least two samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.values[0]
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Returns the nominal spacing between consecutive samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.end() - self.start()) / (self.len() - 1) as f64
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    #[must_use]
    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    /// Maps a fractional sample index onto the range.
    ///
    /// `0.0` is `start` and `len() - 1` is `end`; values in between are
    /// interpolated linearly.
    #[must_use]
    pub fn at_fraction(&self, index: f64) -> f64 {
        let t = index / (self.len() - 1) as f64;
        self.start() * (1.0 - t) + self.end() * t
    }
}

/// Full cross product of a labor range and a capital range.
///
/// Follows `meshgrid` conventions: labor varies along columns and capital
/// along rows, so both grids have shape `(capital.len(), labor.len())` and
/// cell `[i, j]` pairs capital sample `i` with labor sample `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    labor_range: InputRange,
    capital_range: InputRange,
    labor: Array2<f64>,
    capital: Array2<f64>,
}

impl Mesh {
    #[must_use]
    pub fn new(labor: &InputRange, capital: &InputRange) -> Self {
        let shape = (capital.len(), labor.len());
        let labor_grid = Array2::from_shape_fn(shape, |(_, j)| labor.values[j]);
        let capital_grid = Array2::from_shape_fn(shape, |(i, _)| capital.values[i]);

        Self {
            labor_range: labor.clone(),
            capital_range: capital.clone(),
            labor: labor_grid,
            capital: capital_grid,
        }
    }

    /// Returns `(rows, cols)`, i.e. `(capital samples, labor samples)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.labor.dim()
    }

    #[must_use]
    pub fn labor(&self) -> &Array2<f64> {
        &self.labor
    }

    #[must_use]
    pub fn capital(&self) -> &Array2<f64> {
        &self.capital
    }

    #[must_use]
    pub fn labor_range(&self) -> &InputRange {
        &self.labor_range
    }

    #[must_use]
    pub fn capital_range(&self) -> &InputRange {
        &self.capital_range
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn capital_range_has_exact_endpoints_and_uniform_spacing() {
        let range = InputRange::linspace(1.0, 5.0, 200).unwrap();

        assert_eq!(range.len(), 200);
        assert_eq!(range.start(), 1.0);
        assert_eq!(range.end(), 5.0);

        let step = 4.0 / 199.0;
        for pair in range.view().windows(2) {
            assert!(pair[1] > pair[0]);
            assert_relative_eq!(pair[1] - pair[0], step, epsilon = 1e-12);
        }
    }

    #[test]
    fn rejects_bad_ranges() {
        assert_eq!(
            InputRange::linspace(1.0, 5.0, 1),
            Err(GridError::TooFewSamples(1))
        );
        assert_eq!(
            InputRange::linspace(1.0, 5.0, 0),
            Err(GridError::TooFewSamples(0))
        );
        assert_eq!(
            InputRange::linspace(5.0, 1.0, 10),
            Err(GridError::Empty {
                start: 5.0,
                end: 1.0
            })
        );
        assert!(matches!(
            InputRange::linspace(f64::NAN, 1.0, 10),
            Err(GridError::NonFinite { .. })
        ));
    }

    #[test]
    fn fractional_index_interpolates() {
        let range = InputRange::linspace(0.0, 10.0, 11).unwrap();
        assert_relative_eq!(range.at_fraction(2.5), 2.5);
        assert_relative_eq!(range.at_fraction(10.0), 10.0);
    }

    #[test]
    fn mesh_follows_meshgrid_layout() {
        let labor = InputRange::linspace(1.0, 10.0, 4).unwrap();
        let capital = InputRange::linspace(1.0, 5.0, 3).unwrap();
        let mesh = Mesh::new(&labor, &capital);

        assert_eq!(mesh.shape(), (3, 4));
        assert_eq!(mesh.capital().dim(), mesh.labor().dim());

        for ((i, j), &l) in mesh.labor().indexed_iter() {
            assert_eq!(l, labor.get(j).unwrap());
            assert_eq!(mesh.capital()[[i, j]], capital.get(i).unwrap());
        }
    }

    #[test]
    fn mesh_covers_every_combination_once() {
        let labor = InputRange::linspace(1.0, 10.0, 200).unwrap();
        let capital = InputRange::linspace(1.0, 5.0, 200).unwrap();
        let mesh = Mesh::new(&labor, &capital);

        assert_eq!(mesh.shape(), (200, 200));

        let mut pairs: Vec<(u64, u64)> = mesh
            .capital()
            .iter()
            .zip(mesh.labor())
            .map(|(k, l)| (k.to_bits(), l.to_bits()))
            .collect();
        pairs.sort_unstable();
        pairs.dedup();
        assert_eq!(pairs.len(), 200 * 200);
    }
}
