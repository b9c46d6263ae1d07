use eframe::egui::{self, Color32, FontId, Mesh, Painter, Pos2, Rect, Sense, Shape, Stroke, vec2};
use isoquant_core::Analysis;

use crate::{Camera, Colorbar, FigureConfig, SurfaceScene, figure, scene::Facet};

/// Fraction of the drawing area the scene may fill.
const FILL: f32 = 0.85;

const COLORBAR_WIDTH: f32 = 90.0;

/// A 3D production surface with filled floor contours.
///
/// The surface and the floor share the analysis [`Normalization`], and a
/// single colorbar describes both.
///
/// [`Normalization`]: isoquant_core::Normalization
pub struct SurfaceFigure {
    scene: SurfaceScene,
    colorbar: Colorbar,
    title: String,
    subtitle: String,
}

impl SurfaceFigure {
    /// Builds the figure with the default camera.
    #[must_use]
    pub fn new(analysis: &Analysis) -> Self {
        Self::with_camera(analysis, &Camera::default())
    }

    #[must_use]
    pub fn with_camera(analysis: &Analysis, camera: &Camera) -> Self {
        Self {
            scene: SurfaceScene::build(analysis, camera),
            colorbar: Colorbar::new(analysis.normalization()).label("Output (Q)"),
            title: format!("Production Function: {}", analysis.function()),
            subtitle: "with Filled Floor Contours (Matching Surface Colors)".to_owned(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn scene(&self) -> &SurfaceScene {
        &self.scene
    }

    /// Opens a blocking window showing the figure.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: FigureConfig) -> Result<(), eframe::Error> {
        figure::show(config, self)
    }
}

impl eframe::App for SurfaceFigure {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("surface-title").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&self.title);
                ui.label(&self.subtitle);
            });
        });

        egui::SidePanel::right("surface-colorbar")
            .resizable(false)
            .exact_width(COLORBAR_WIDTH)
            .show(ctx, |ui| self.colorbar.show(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
            let text_color = ui.visuals().text_color();
            paint(&self.scene, &painter, response.rect, text_color);
        });
    }
}

/// Paints the scene into `rect`, floor first and labels last.
fn paint(scene: &SurfaceScene, painter: &Painter, rect: Rect, text_color: Color32) {
    let bounds = scene.bounds();
    if !bounds.is_positive() || !rect.is_positive() {
        return;
    }

    let scale = FILL * (rect.width() / bounds.width()).min(rect.height() / bounds.height());
    let center = bounds.center();
    let to_screen = |p: Pos2| {
        rect.center() + vec2((p.x - center.x) * scale, (center.y - p.y) * scale)
    };

    painter.add(Shape::mesh(facet_mesh(scene.floor(), &to_screen)));

    let stroke = Stroke::new(1.0, Color32::from_gray(90));
    for &[a, b] in scene.edges() {
        painter.line_segment([to_screen(a), to_screen(b)], stroke);
    }

    painter.add(Shape::mesh(facet_mesh(scene.surface(), &to_screen)));

    for label in scene.labels() {
        let size = if label.title { 14.0 } else { 11.0 };
        painter.text(
            to_screen(label.position) + label.offset,
            label.anchor,
            &label.text,
            FontId::proportional(size),
            text_color,
        );
    }
}

/// Triangulates facets in order, two triangles per quad.
fn facet_mesh(facets: &[Facet], to_screen: &impl Fn(Pos2) -> Pos2) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.reserve_vertices(facets.len() * 4);
    mesh.reserve_triangles(facets.len() * 2);

    for facet in facets {
        let base = mesh.vertices.len() as u32;
        for corner in facet.corners {
            mesh.colored_vertex(to_screen(corner), facet.color);
        }
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;
    use isoquant_core::Params;

    use super::*;

    #[test]
    fn title_names_the_formula() {
        let params = Params::default().with_samples(8).unwrap();
        let analysis = Analysis::run(&params).unwrap();
        let figure = SurfaceFigure::new(&analysis);

        assert_eq!(figure.title(), "Production Function: Q = 5·K^0.34·L^0.66");
        assert_eq!(figure.scene().surface().len(), 49);
    }

    #[test]
    fn mesh_has_two_triangles_per_facet() {
        let facet = Facet {
            corners: [
                pos2(0.0, 0.0),
                pos2(1.0, 0.0),
                pos2(1.0, 1.0),
                pos2(0.0, 1.0),
            ],
            depth: 0.0,
            color: Color32::RED,
        };
        let mesh = facet_mesh(&[facet, facet], &|p| p);

        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.indices.len(), 12);
        assert_eq!(&mesh.indices[6..9], &[4, 5, 6]);
    }
}
