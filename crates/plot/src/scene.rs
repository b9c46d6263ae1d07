//! Projected geometry for the 3D surface figure.
//!
//! The scene is built once from an [`Analysis`] and a [`Camera`]. Data is
//! scaled into a box spanning `[-0.5, 0.5]` along labor and capital and
//! `[-0.5, 0.5] * Z_ASPECT` along output, then projected. Painting only maps
//! the projected coordinates onto the window.

use eframe::egui::{Align2, Color32, Pos2, Rect, Vec2, pos2, vec2};
use isoquant_core::Analysis;
use tracing::debug;

use crate::{
    Camera, Palette,
    camera::Projected,
    ticks::{format_tick, nice_step, nice_ticks},
};

/// Height of the output axis relative to the floor's side length.
const Z_ASPECT: f64 = 0.75;

/// Opacity of the surface and the floor contours.
const FILL_ALPHA: f32 = 0.95;

/// Upper bound on ticks per axis.
const MAX_TICKS: usize = 8;

/// Box-space distance between an axis edge and its tick labels.
const TICK_OFFSET: f64 = 0.07;

/// Box-space distance between an axis edge and its title.
const TITLE_OFFSET: f64 = 0.2;

/// A filled quadrilateral in projected coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    pub corners: [Pos2; 4],
    pub depth: f64,
    pub color: Color32,
}

/// Text anchored to a projected point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: Pos2,
    /// Extra screen-space shift, in points.
    pub offset: Vec2,
    pub anchor: Align2,
    pub text: String,
    pub title: bool,
}

/// The projected surface, floor contours, axes, and labels.
#[derive(Debug, Clone)]
pub struct SurfaceScene {
    floor: Vec<Facet>,
    surface: Vec<Facet>,
    edges: Vec<[Pos2; 2]>,
    labels: Vec<Label>,
    bounds: Rect,
}

/// Maps data coordinates into the unit box.
struct BoxScale {
    labor: [f64; 2],
    capital: [f64; 2],
    output: [f64; 2],
}

impl BoxScale {
    fn unit(value: f64, [lo, hi]: [f64; 2]) -> f64 {
        (value - lo) / (hi - lo) - 0.5
    }

    fn x(&self, labor: f64) -> f64 {
        Self::unit(labor, self.labor)
    }

    fn y(&self, capital: f64) -> f64 {
        Self::unit(capital, self.capital)
    }

    fn z(&self, output: f64) -> f64 {
        Self::unit(output, self.output) * Z_ASPECT
    }
}

impl SurfaceScene {
    /// Projects the surface and its floor contours.
    ///
    /// The floor sits at the minimum output and is banded by the shared
    /// contour levels. The surface is colored continuously on the same scale
    /// and sorted back to front.
    #[must_use]
    pub fn build(analysis: &Analysis, camera: &Camera) -> Self {
        let mesh = analysis.mesh();
        let values = analysis.output().values();
        let norm = analysis.normalization();
        let palette = Palette::new(norm).alpha(FILL_ALPHA);

        let (labor, capital) = (mesh.labor_range(), mesh.capital_range());
        let scale = BoxScale {
            labor: [labor.start(), labor.end()],
            capital: [capital.start(), capital.end()],
            output: [norm.min(), norm.max()],
        };
        let floor_z = scale.z(norm.min());

        let (rows, cols) = mesh.shape();
        let mut surface_points = Vec::with_capacity(rows * cols);
        let mut floor_points = Vec::with_capacity(rows * cols);
        for ((row, col), &q) in values.indexed_iter() {
            let x = scale.x(mesh.labor()[[row, col]]);
            let y = scale.y(mesh.capital()[[row, col]]);
            surface_points.push(camera.project([x, y, scale.z(q)]));
            floor_points.push(camera.project([x, y, floor_z]));
        }

        let cells = rows.saturating_sub(1) * cols.saturating_sub(1);
        let mut floor = Vec::with_capacity(cells);
        let mut surface = Vec::with_capacity(cells);

        for row in 0..rows.saturating_sub(1) {
            for col in 0..cols.saturating_sub(1) {
                let nodes = [
                    [row, col],
                    [row, col + 1],
                    [row + 1, col + 1],
                    [row + 1, col],
                ];
                let center = nodes.iter().map(|&node| values[node]).sum::<f64>() / 4.0;
                let index = |[r, c]: [usize; 2]| r * cols + c;

                let floor_color = palette
                    .banded(center)
                    .unwrap_or_else(|| palette.continuous(center));
                floor.push(facet(nodes.map(|n| floor_points[index(n)]), floor_color));
                surface.push(facet(
                    nodes.map(|n| surface_points[index(n)]),
                    palette.continuous(center),
                ));
            }
        }

        surface.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        let (edges, labels) = axes(camera, &scale);
        let bounds = edges
            .iter()
            .flatten()
            .chain(labels.iter().map(|label| &label.position))
            .fold(Rect::NOTHING, |rect, &p| rect.union(Rect::from_min_max(p, p)));

        debug!(
            floor = floor.len(),
            surface = surface.len(),
            labels = labels.len(),
            "built surface scene"
        );

        Self {
            floor,
            surface,
            edges,
            labels,
            bounds,
        }
    }

    /// Returns the floor contour facets.
    #[must_use]
    pub fn floor(&self) -> &[Facet] {
        &self.floor
    }

    /// Returns the surface facets, farthest first.
    #[must_use]
    pub fn surface(&self) -> &[Facet] {
        &self.surface
    }

    /// Returns the box outline and axis lines.
    #[must_use]
    pub fn edges(&self) -> &[[Pos2; 2]] {
        &self.edges
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns the extent of the axes and labels in projected coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

fn facet(points: [Projected; 4], color: Color32) -> Facet {
    Facet {
        corners: points.map(to_pos),
        depth: points.iter().map(|p| p.depth).sum::<f64>() / 4.0,
        color,
    }
}

fn to_pos(p: Projected) -> Pos2 {
    pos2(p.x as f32, p.y as f32)
}

/// Returns the box coordinates `[x, y]` of the floor edges facing the viewer.
///
/// `x` is the constant-labor edge nearer the eye and `y` the constant-capital
/// edge nearer the eye, each `-0.5` or `0.5`.
fn front_edges(camera: &Camera, floor_z: f64) -> [f64; 2] {
    let depth = |x: f64, y: f64| camera.project([x, y, floor_z]).depth;
    let front_x: f64 = if depth(0.5, 0.0) >= depth(-0.5, 0.0) { 0.5 } else { -0.5 };
    let front_y: f64 = if depth(0.0, -0.5) >= depth(0.0, 0.5) { -0.5 } else { 0.5 };
    [front_x, front_y]
}

/// Builds the floor outline, the vertical output axis, ticks, and titles.
///
/// Labor and capital ticks run along whichever floor edges face the viewer;
/// the output axis stands at the leftmost floor corner.
fn axes(camera: &Camera, scale: &BoxScale) -> (Vec<[Pos2; 2]>, Vec<Label>) {
    let [q0, q1] = scale.output;
    let floor_z = scale.z(q0);
    let top_z = scale.z(q1);
    let project = |x: f64, y: f64, z: f64| to_pos(camera.project([x, y, z]));

    let corners = [[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]];
    let mut edges: Vec<[Pos2; 2]> = (0..4)
        .map(|i| {
            let [ax, ay] = corners[i];
            let [bx, by] = corners[(i + 1) % 4];
            [project(ax, ay, floor_z), project(bx, by, floor_z)]
        })
        .collect();

    let mut labels = Vec::new();
    let mut label = |position: Pos2, offset: Vec2, anchor: Align2, text: String, title: bool| {
        labels.push(Label {
            position,
            offset,
            anchor,
            text,
            title,
        });
    };

    let [front_x, front_y] = front_edges(camera, floor_z);

    // Labor varies along x; ticks sit on the nearer of the two y edges.
    let out_y = front_y.signum();
    let [l0, l1] = scale.labor;
    if let Some(step) = nice_step(l0, l1, MAX_TICKS) {
        for value in nice_ticks(l0, l1, MAX_TICKS) {
            let position = project(scale.x(value), front_y + out_y * TICK_OFFSET, floor_z);
            label(position, Vec2::ZERO, Align2::CENTER_CENTER, format_tick(value, step), false);
        }
    }
    label(
        project(0.0, front_y + out_y * TITLE_OFFSET, floor_z),
        Vec2::ZERO,
        Align2::CENTER_CENTER,
        "Labor (L)".to_owned(),
        true,
    );

    // Capital varies along y; ticks sit on the nearer of the two x edges.
    let out_x = front_x.signum();
    let [k0, k1] = scale.capital;
    if let Some(step) = nice_step(k0, k1, MAX_TICKS) {
        for value in nice_ticks(k0, k1, MAX_TICKS) {
            let position = project(front_x + out_x * TICK_OFFSET, scale.y(value), floor_z);
            label(position, Vec2::ZERO, Align2::CENTER_CENTER, format_tick(value, step), false);
        }
    }
    label(
        project(front_x + out_x * TITLE_OFFSET, 0.0, floor_z),
        Vec2::ZERO,
        Align2::CENTER_CENTER,
        "Capital (K)".to_owned(),
        true,
    );

    // Output stands at the leftmost floor corner on screen.
    let [zx, zy] = corners
        .into_iter()
        .min_by(|a, b| {
            let xa = camera.project([a[0], a[1], floor_z]).x;
            let xb = camera.project([b[0], b[1], floor_z]).x;
            xa.total_cmp(&xb)
        })
        .unwrap_or(corners[0]);
    edges.push([project(zx, zy, floor_z), project(zx, zy, top_z)]);

    if let Some(step) = nice_step(q0, q1, MAX_TICKS) {
        for value in nice_ticks(q0, q1, MAX_TICKS) {
            let position = project(zx, zy, scale.z(value));
            edges.push([position, position + vec2(-0.015, 0.0)]);
            label(
                position,
                vec2(-8.0, 0.0),
                Align2::RIGHT_CENTER,
                format_tick(value, step),
                false,
            );
        }
    }
    label(
        project(zx, zy, 0.5 * (floor_z + top_z)),
        vec2(-44.0, 0.0),
        Align2::RIGHT_CENTER,
        "Output (Q)".to_owned(),
        true,
    );

    (edges, labels)
}
