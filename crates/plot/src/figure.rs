use eframe::egui;
use tracing::info;

/// Window settings for a figure.
///
/// Construct with [`FigureConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// figure.show(FigureConfig::new("Isoquants").size(800.0, 600.0))?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FigureConfig {
    title: String,
    size: [f32; 2],
}

impl FigureConfig {
    /// Creates a config with the given window title and an 800×600 window.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            size: [800.0, 600.0],
        }
    }

    /// Sets the initial inner window size, in points.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = [width, height];
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn inner_size(&self) -> [f32; 2] {
        self.size
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self::new("Figure")
    }
}

/// Opens a blocking native window running `app`.
///
/// Returns once the window is closed.
pub(crate) fn show<A>(config: FigureConfig, app: A) -> Result<(), eframe::Error>
where
    A: eframe::App + 'static,
{
    info!(title = %config.title, size = ?config.size, "opening figure");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.size),
        ..Default::default()
    };

    let result = eframe::run_native(
        &config.title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(app))
        }),
    );

    info!(title = %config.title, "figure closed");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_title_and_size() {
        let config = FigureConfig::new("Surface").size(1100.0, 800.0);
        assert_eq!(config.title(), "Surface");
        assert_eq!(config.inner_size(), [1100.0, 800.0]);
    }

    #[test]
    fn default_is_a_small_window() {
        assert_eq!(FigureConfig::default().inner_size(), [800.0, 600.0]);
    }
}
