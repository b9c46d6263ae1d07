//! Isoquant tracing with marching squares.
//!
//! Each grid cell is classified by which corners lie at or above the level.
//! Crossing points are linearly interpolated along cell edges, and segments
//! from neighboring cells are chained into polylines through the edges they
//! share.

use std::collections::HashMap;

use tracing::debug;

use crate::{Mesh, OutputGrid};

/// A cell edge, identified by its lower grid node.
///
/// `Row { row, col }` joins `(row, col)` and `(row, col + 1)`;
/// `Col { row, col }` joins `(row, col)` and `(row + 1, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Edge {
    Row { row: usize, col: usize },
    Col { row: usize, col: usize },
}

/// All polylines of constant output at a single level.
///
/// Points are `[labor, capital]` in data coordinates. A closed path repeats
/// its first point at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Isoline {
    level: f64,
    paths: Vec<Vec<[f64; 2]>>,
}

impl Isoline {
    #[must_use]
    pub fn level(&self) -> f64 {
        self.level
    }

    #[must_use]
    pub fn paths(&self) -> &[Vec<[f64; 2]>] {
        &self.paths
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Returns where to place the inline value label.
    ///
    /// This is the vertex closest to the middle, by arc length, of the longest
    /// path.
    #[must_use]
    pub fn label_anchor(&self) -> Option<[f64; 2]> {
        let path = self
            .paths
            .iter()
            .max_by(|a, b| path_length(a).total_cmp(&path_length(b)))?;

        let half = path_length(path) / 2.0;
        let mut walked = 0.0;
        for pair in path.windows(2) {
            walked += distance(pair[0], pair[1]);
            if walked >= half {
                return Some(pair[1]);
            }
        }
        path.first().copied()
    }
}

fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    (b[0] - a[0]).hypot(b[1] - a[1])
}

fn path_length(path: &[[f64; 2]]) -> f64 {
    path.windows(2).map(|pair| distance(pair[0], pair[1])).sum()
}

/// Traces an isoline for each of `levels`.
#[must_use]
pub fn trace_all(grid: &OutputGrid, mesh: &Mesh, levels: &[f64]) -> Vec<Isoline> {
    levels.iter().map(|&level| trace(grid, mesh, level)).collect()
}

/// Traces the isoline of `grid` at `level`.
///
/// `mesh` must be the mesh `grid` was evaluated on; it maps grid indices back
/// to labor and capital values.
#[must_use]
pub fn trace(grid: &OutputGrid, mesh: &Mesh, level: f64) -> Isoline {
    debug_assert_eq!(grid.shape(), mesh.shape(), "grid and mesh shapes differ");

    let segments = march(grid, level);
    let chains = chain(&segments);

    let paths: Vec<Vec<[f64; 2]>> = chains
        .iter()
        .map(|edges| {
            edges
                .iter()
                .map(|&edge| crossing(grid, mesh, edge, level))
                .collect()
        })
        .collect();

    debug!(
        level,
        segments = segments.len(),
        paths = paths.len(),
        "traced isoline"
    );

    Isoline { level, paths }
}

/// Returns one segment, as a pair of crossed edges, per contour piece in
/// each cell.
fn march(grid: &OutputGrid, level: f64) -> Vec<[Edge; 2]> {
    let (rows, cols) = grid.shape();
    let values = grid.values();
    let mut segments = Vec::new();

    for row in 0..rows.saturating_sub(1) {
        for col in 0..cols.saturating_sub(1) {
            let corners = [
                values[[row, col]],
                values[[row, col + 1]],
                values[[row + 1, col + 1]],
                values[[row + 1, col]],
            ];
            if corners.iter().any(|v| v.is_nan()) {
                continue;
            }

            let above = corners.map(|v| v >= level);

            // Edges in winding order: bottom, right, top, left. Edge `k` joins
            // corner `k` and corner `k + 1`.
            let edges = [
                Edge::Row { row, col },
                Edge::Col { row, col: col + 1 },
                Edge::Row { row: row + 1, col },
                Edge::Col { row, col },
            ];
            let crossed: Vec<Edge> = (0..4)
                .filter(|&k| above[k] != above[(k + 1) % 4])
                .map(|k| edges[k])
                .collect();

            match crossed.as_slice() {
                [a, b] => segments.push([*a, *b]),
                [bottom, right, top, left] => {
                    // Saddle: the center average decides which diagonal connects.
                    let center = corners.iter().sum::<f64>() / 4.0;
                    if above[0] == (center >= level) {
                        segments.push([*bottom, *right]);
                        segments.push([*top, *left]);
                    } else {
                        segments.push([*left, *bottom]);
                        segments.push([*right, *top]);
                    }
                }
                _ => {}
            }
        }
    }

    segments
}

/// Chains segments that share an edge into ordered edge paths.
fn chain(segments: &[[Edge; 2]]) -> Vec<Vec<Edge>> {
    let mut by_edge: HashMap<Edge, Vec<usize>> = HashMap::new();
    for (index, segment) in segments.iter().enumerate() {
        for edge in segment {
            by_edge.entry(*edge).or_default().push(index);
        }
    }

    let mut used = vec![false; segments.len()];
    let mut chains = Vec::new();

    for start in 0..segments.len() {
        if used[start] {
            continue;
        }
        used[start] = true;

        let [first, second] = segments[start];
        let ahead = walk(second, segments, &by_edge, &mut used);
        let behind = walk(first, segments, &by_edge, &mut used);

        let mut path: Vec<Edge> = behind.into_iter().rev().collect();
        path.push(first);
        path.push(second);
        path.extend(ahead);
        chains.push(path);
    }

    chains
}

/// Follows unused segments from `from`, returning the edges visited after it.
fn walk(
    from: Edge,
    segments: &[[Edge; 2]],
    by_edge: &HashMap<Edge, Vec<usize>>,
    used: &mut [bool],
) -> Vec<Edge> {
    let mut path = Vec::new();
    let mut current = from;

    while let Some(next) = by_edge
        .get(&current)
        .and_then(|indices| indices.iter().copied().find(|&i| !used[i]))
    {
        used[next] = true;
        let [a, b] = segments[next];
        current = if a == current { b } else { a };
        path.push(current);
    }

    path
}

/// Returns the `[labor, capital]` point where the level crosses `edge`.
fn crossing(grid: &OutputGrid, mesh: &Mesh, edge: Edge, level: f64) -> [f64; 2] {
    let values = grid.values();
    let (start, end) = match edge {
        Edge::Row { row, col } => ([row, col], [row, col + 1]),
        Edge::Col { row, col } => ([row, col], [row + 1, col]),
    };

    let (va, vb) = (values[start], values[end]);
    let t = if vb == va { 0.5 } else { (level - va) / (vb - va) };

    let row = start[0] as f64 + t * (end[0] as f64 - start[0] as f64);
    let col = start[1] as f64 + t * (end[1] as f64 - start[1] as f64);

    [
        mesh.labor_range().at_fraction(col),
        mesh.capital_range().at_fraction(row),
    ]
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;
    use crate::{CobbDouglas, InputRange};

    fn unit_mesh(rows: usize, cols: usize) -> Mesh {
        let labor = InputRange::linspace(0.0, (cols - 1) as f64, cols).unwrap();
        let capital = InputRange::linspace(0.0, (rows - 1) as f64, rows).unwrap();
        Mesh::new(&labor, &capital)
    }

    #[test]
    fn peak_traces_a_single_closed_loop() {
        let grid = OutputGrid::from_values(array![
            [0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0],
            [0.0, 0.0, 0.0],
        ]);
        let line = trace(&grid, &unit_mesh(3, 3), 1.0);

        assert_eq!(line.paths().len(), 1);
        let path = &line.paths()[0];
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), path.last());

        for point in &path[..4] {
            let offset = distance(*point, [1.0, 1.0]);
            assert_relative_eq!(offset, 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn saddle_splits_into_two_paths() {
        let grid = OutputGrid::from_values(array![[2.0, 0.0], [0.0, 2.0]]);
        let line = trace(&grid, &unit_mesh(2, 2), 1.0);

        assert_eq!(line.paths().len(), 2);
        assert!(line.paths().iter().all(|path| path.len() == 2));
    }

    #[test]
    fn level_outside_range_is_empty() {
        let grid = OutputGrid::from_values(array![[0.0, 1.0], [1.0, 2.0]]);
        let mesh = unit_mesh(2, 2);

        assert!(trace(&grid, &mesh, 5.0).is_empty());
        assert!(trace(&grid, &mesh, -1.0).is_empty());
        assert_eq!(trace(&grid, &mesh, -1.0).label_anchor(), None);
    }

    #[test]
    fn production_isoquants_stay_on_level() {
        let labor = InputRange::linspace(1.0, 10.0, 40).unwrap();
        let capital = InputRange::linspace(1.0, 5.0, 30).unwrap();
        let mesh = Mesh::new(&labor, &capital);
        let grid = OutputGrid::evaluate(&CobbDouglas::default(), &mesh);

        for level in [8.0, 15.0, 30.0] {
            let line = trace(&grid, &mesh, level);

            // Monotone surfaces give one open isoquant per level.
            assert_eq!(line.paths().len(), 1, "level {level}");

            for &[l, k] in &line.paths()[0] {
                assert!((1.0..=10.0).contains(&l));
                assert!((1.0..=5.0).contains(&k));

                let col = (l - labor.start()) / labor.step();
                let row = (k - capital.start()) / capital.step();
                assert_relative_eq!(grid.sample(row, col).unwrap(), level, epsilon = 1e-9);
            }

            let anchor = line.label_anchor().unwrap();
            assert!(line.paths()[0].contains(&anchor));
        }
    }
}
