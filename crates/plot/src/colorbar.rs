use std::f32::consts::FRAC_PI_2;

use eframe::egui::{Align2, Color32, FontId, Rect, Sense, Stroke, Ui, epaint::TextShape, pos2};
use isoquant_core::Normalization;

use crate::{
    Palette,
    ticks::{format_tick, nice_step, nice_ticks},
};

/// Number of stripes used to draw a continuous colorbar.
const CONTINUOUS_STRIPES: usize = 128;

const BAR_WIDTH: f32 = 18.0;
const MARGIN: f32 = 16.0;
const MAX_TICKS: usize = 8;

/// A vertical colorbar for a shared [`Normalization`].
///
/// Draws a smooth gradient by default, or one stripe per contour band when
/// [`banded`](Colorbar::banded) is set.
#[derive(Debug, Clone)]
pub struct Colorbar {
    normalization: Normalization,
    label: String,
    banded: bool,
}

impl Colorbar {
    #[must_use]
    pub fn new(normalization: &Normalization) -> Self {
        Self {
            normalization: normalization.clone(),
            label: String::new(),
            banded: false,
        }
    }

    /// Sets the text drawn alongside the bar.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Draws one stripe per contour band instead of a gradient.
    #[must_use]
    pub fn banded(mut self) -> Self {
        self.banded = true;
        self
    }

    /// Returns `(low, high, color)` stripes, with `low` and `high` as fractions
    /// of the bar height measured from the bottom.
    pub(crate) fn stripes(&self) -> Vec<(f64, f64, Color32)> {
        let palette = Palette::new(&self.normalization);
        let norm = &self.normalization;

        if self.banded {
            norm.levels()
                .windows(2)
                .enumerate()
                .map(|(band, pair)| {
                    (
                        norm.fraction(pair[0]),
                        norm.fraction(pair[1]),
                        palette.band(band),
                    )
                })
                .collect()
        } else {
            let n = CONTINUOUS_STRIPES as f64;
            (0..CONTINUOUS_STRIPES)
                .map(|i| {
                    let (lo, hi) = (i as f64 / n, (i + 1) as f64 / n);
                    (lo, hi, palette.at_fraction(0.5 * (lo + hi)))
                })
                .collect()
        }
    }

    /// Paints the colorbar into the remaining space of `ui`.
    pub fn show(&self, ui: &mut Ui) {
        let (rect, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let painter = ui.painter_at(rect);
        let text_color = ui.visuals().text_color();
        let outline = Stroke::new(0.5, text_color);

        let bar = Rect::from_min_max(
            pos2(rect.left() + MARGIN * 0.5, rect.top() + MARGIN),
            pos2(rect.left() + MARGIN * 0.5 + BAR_WIDTH, rect.bottom() - MARGIN),
        );
        let y_at = |fraction: f64| bar.bottom() - fraction as f32 * bar.height();

        for (lo, hi, color) in self.stripes() {
            let stripe =
                Rect::from_min_max(pos2(bar.left(), y_at(hi)), pos2(bar.right(), y_at(lo)));
            painter.rect_filled(stripe, 0.0, color);
        }

        let corners = [bar.left_top(), bar.right_top(), bar.right_bottom(), bar.left_bottom()];
        for i in 0..4 {
            painter.line_segment([corners[i], corners[(i + 1) % 4]], outline);
        }

        let (min, max) = (self.normalization.min(), self.normalization.max());
        if let Some(step) = nice_step(min, max, MAX_TICKS) {
            for value in nice_ticks(min, max, MAX_TICKS) {
                let y = y_at(self.normalization.fraction(value));
                painter.line_segment([pos2(bar.right(), y), pos2(bar.right() + 4.0, y)], outline);
                painter.text(
                    pos2(bar.right() + 6.0, y),
                    Align2::LEFT_CENTER,
                    format_tick(value, step),
                    FontId::proportional(11.0),
                    text_color,
                );
            }
        }

        if !self.label.is_empty() {
            let galley = painter.layout_no_wrap(
                self.label.clone(),
                FontId::proportional(13.0),
                text_color,
            );
            let size = galley.size();
            let anchor = pos2(rect.right() - size.y - 4.0, bar.center().y + size.x / 2.0);
            painter.add(TextShape::new(anchor, galley, text_color).with_angle(-FRAC_PI_2));
        }
    }
}
