use eframe::egui::{self, Color32, RichText, TextureHandle, TextureOptions, vec2};
use egui_plot::{Line, Plot, PlotImage, PlotPoint, PlotPoints, Text};
use isoquant_core::{Analysis, CobbDouglas, Isoline};

use crate::{BandRaster, Colorbar, FigureConfig, figure};

/// Resolution of the filled band raster, in pixels.
const RASTER_SIZE: [usize; 2] = [480, 360];

/// Band texture sampling. Nearest keeps every scaled pixel a band color.
const BAND_TEXTURE: TextureOptions = TextureOptions::NEAREST;

const COLORBAR_WIDTH: f32 = 90.0;
const LINE_WIDTH: f32 = 0.5;
const LABEL_SIZE: f32 = 10.0;

/// A 2D map of filled isoquant bands with labeled contour lines.
pub struct IsoquantFigure {
    raster: BandRaster,
    texture: Option<TextureHandle>,
    isolines: Vec<Isoline>,
    colorbar: Colorbar,
    function: CobbDouglas,
    labor: [f64; 2],
    capital: [f64; 2],
    title: String,
}

impl IsoquantFigure {
    #[must_use]
    pub fn new(analysis: &Analysis) -> Self {
        let mesh = analysis.mesh();
        let (labor, capital) = (mesh.labor_range(), mesh.capital_range());

        Self {
            raster: BandRaster::render(analysis, RASTER_SIZE),
            texture: None,
            isolines: analysis.isoquants(),
            colorbar: Colorbar::new(analysis.normalization())
                .label("Output (Q)")
                .banded(),
            function: *analysis.function(),
            labor: [labor.start(), labor.end()],
            capital: [capital.start(), capital.end()],
            title: format!("Filled Isoquants (Contours): {}", analysis.function()),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn isolines(&self) -> &[Isoline] {
        &self.isolines
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

impl eframe::App for IsoquantFigure {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("isoquant-title").show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading(&self.title));
        });

        egui::SidePanel::right("isoquant-colorbar")
            .resizable(false)
            .exact_width(COLORBAR_WIDTH)
            .show(ctx, |ui| self.colorbar.show(ui));

        let texture_id = self
            .texture
            .get_or_insert_with(|| {
                ctx.load_texture(
                    "isoquant-bands",
                    self.raster.to_image(),
                    BAND_TEXTURE,
                )
            })
            .id();

        let [l0, l1] = self.labor;
        let [k0, k1] = self.capital;
        let function = self.function;

        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("isoquant-map")
                .x_axis_label("Labor (L)")
                .y_axis_label("Capital (K)")
                .include_x(l0)
                .include_x(l1)
                .include_y(k0)
                .include_y(k1)
                .show_grid(false)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .label_formatter(move |_name, point| hover_text(&function, point))
                .show(ui, |plot_ui| {
                    plot_ui.image(PlotImage::new(
                        texture_id,
                        PlotPoint::new(0.5 * (l0 + l1), 0.5 * (k0 + k1)),
                        vec2((l1 - l0) as f32, (k1 - k0) as f32),
                    ));

                    for isoline in &self.isolines {
                        for path in isoline.paths() {
                            plot_ui.line(
                                Line::new(PlotPoints::from(path.clone()))
                                    .color(Color32::BLACK)
                                    .width(LINE_WIDTH),
                            );
                        }

                        if let Some([x, y]) = isoline.label_anchor() {
                            plot_ui.text(Text::new(
                                PlotPoint::new(x, y),
                                RichText::new(level_label(isoline.level()))
                                    .size(LABEL_SIZE)
                                    .color(Color32::BLACK),
                            ));
                        }
                    }
                });
        });
    }
}

/// Formats a contour level for its inline label.
fn level_label(level: f64) -> String {
    format!("{level:.2}")
}

/// Describes the inputs under the cursor.
fn hover_text(function: &CobbDouglas, point: &PlotPoint) -> String {
    let (labor, capital) = (point.x, point.y);
    if labor <= 0.0 || capital <= 0.0 {
        return format!("L = {labor:.2}\nK = {capital:.2}");
    }

    format!(
        "L = {labor:.2}\nK = {capital:.2}\nQ = {:.2}\nMRTS = {:.3}",
        function.output(capital, labor),
        function.mrts(capital, labor),
    )
}
