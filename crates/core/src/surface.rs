//! Output values evaluated over a [`Mesh`].

use ndarray::{Array2, Zip};

use crate::{Mesh, production::CobbDouglas};

/// Production function output at every mesh cell.
///
/// `values[[i, j]]` is the output of capital sample `i` and labor sample `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputGrid {
    values: Array2<f64>,
}

impl OutputGrid {
    /// Evaluates `function` at every cell of `mesh`, row by row.
    #[must_use]
    pub fn evaluate(function: &CobbDouglas, mesh: &Mesh) -> Self {
        let values = Zip::from(mesh.capital())
            .and(mesh.labor())
            .map_collect(|&capital, &labor| function.output(capital, labor));

        Self { values }
    }

    /// Wraps precomputed values.
    #[must_use]
    pub fn from_values(values: Array2<f64>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get([row, col]).copied()
    }

    /// Returns the smallest value, or `NaN` if the grid is empty.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.argmin().map_or(f64::NAN, |index| self.values[index])
    }

    /// Returns the largest value, or `NaN` if the grid is empty.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.argmax().map_or(f64::NAN, |index| self.values[index])
    }

    /// Returns the index of the first smallest value.
    #[must_use]
    pub fn argmin(&self) -> Option<[usize; 2]> {
        self.extreme_by(|candidate, best| candidate < best)
    }

    /// Returns the index of the first largest value.
    #[must_use]
    pub fn argmax(&self) -> Option<[usize; 2]> {
        self.extreme_by(|candidate, best| candidate > best)
    }

    fn extreme_by(&self, better: impl Fn(f64, f64) -> bool) -> Option<[usize; 2]> {
        let mut best: Option<([usize; 2], f64)> = None;
        for ((row, col), &value) in self.values.indexed_iter() {
            if value.is_nan() {
                continue;
            }
            match best {
                Some((_, current)) if !better(value, current) => {}
                _ => best = Some(([row, col], value)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Bilinearly interpolates between cells at a fractional `(row, col)`.
    ///
    /// Positions are clamped to the grid. Returns `None` for an empty grid.
    #[must_use]
    pub fn sample(&self, row: f64, col: f64) -> Option<f64> {
        let (rows, cols) = self.shape();
        if rows == 0 || cols == 0 {
            return None;
        }

        let row = row.clamp(0.0, (rows - 1) as f64);
        let col = col.clamp(0.0, (cols - 1) as f64);

        let r0 = row.floor() as usize;
        let c0 = col.floor() as usize;
        let r1 = (r0 + 1).min(rows - 1);
        let c1 = (c0 + 1).min(cols - 1);
        let tr = row - r0 as f64;
        let tc = col - c0 as f64;

        let v = &self.values;
        let top = v[[r0, c0]] + (v[[r0, c1]] - v[[r0, c0]]) * tc;
        let bottom = v[[r1, c0]] + (v[[r1, c1]] - v[[r1, c0]]) * tc;
        Some(top + (bottom - top) * tr)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;
    use crate::InputRange;

    fn default_grid() -> (Mesh, OutputGrid) {
        let labor = InputRange::linspace(1.0, 10.0, 200).unwrap();
        let capital = InputRange::linspace(1.0, 5.0, 200).unwrap();
        let mesh = Mesh::new(&labor, &capital);
        let grid = OutputGrid::evaluate(&CobbDouglas::default(), &mesh);
        (mesh, grid)
    }

    #[test]
    fn matches_mesh_shape_and_formula() {
        let (mesh, grid) = default_grid();
        let q = CobbDouglas::default();

        assert_eq!(grid.shape(), mesh.shape());
        for ((i, j), &value) in grid.values().indexed_iter() {
            let expected = q.output(mesh.capital()[[i, j]], mesh.labor()[[i, j]]);
            assert_eq!(value.to_bits(), expected.to_bits());
            assert!(value.is_finite() && value >= 0.0);
        }
    }

    #[test]
    fn extremes_sit_at_opposite_corners() {
        let (_, grid) = default_grid();

        assert_eq!(grid.argmin(), Some([0, 0]));
        assert_eq!(grid.argmax(), Some([199, 199]));
        assert_eq!(grid.min(), 5.0);
        assert_relative_eq!(grid.max(), 39.502_065_593, epsilon = 1e-6);
    }

    #[test]
    fn bilinear_sample_hits_nodes_and_midpoints() {
        let grid = OutputGrid::from_values(array![[0.0, 2.0], [4.0, 6.0]]);

        assert_eq!(grid.sample(0.0, 0.0), Some(0.0));
        assert_eq!(grid.sample(1.0, 1.0), Some(6.0));
        assert_relative_eq!(grid.sample(0.5, 0.5).unwrap(), 3.0);
        assert_relative_eq!(grid.sample(0.0, 0.25).unwrap(), 0.5);
        assert_eq!(grid.sample(-3.0, 9.0), Some(2.0));
    }

    #[test]
    fn extremes_skip_nan() {
        let grid = OutputGrid::from_values(array![[f64::NAN, 2.0], [-1.0, 6.0]]);
        assert_eq!(grid.argmin(), Some([1, 0]));
        assert_eq!(grid.max(), 6.0);
    }
}
