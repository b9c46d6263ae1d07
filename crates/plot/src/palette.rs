use eframe::egui::Color32;
use isoquant_core::{Colormap, Normalization, Rgb};

/// Maps output values to colors through a shared [`Normalization`].
///
/// Every figure element colors through a `Palette`, so continuous and banded
/// fills agree on which color belongs to which output value.
#[derive(Debug, Clone, Copy)]
pub struct Palette<'a> {
    normalization: &'a Normalization,
    colormap: Colormap,
    alpha: f32,
}

impl<'a> Palette<'a> {
    #[must_use]
    pub fn new(normalization: &'a Normalization) -> Self {
        Self {
            normalization,
            colormap: Colormap::default(),
            alpha: 1.0,
        }
    }

    /// Sets the opacity applied to every color, clamped to `[0, 1]`.
    #[must_use]
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn normalization(&self) -> &'a Normalization {
        self.normalization
    }

    /// Returns the color of `value` on the continuous scale.
    #[must_use]
    pub fn continuous(&self, value: f64) -> Color32 {
        self.at_fraction(self.normalization.fraction(value))
    }

    /// Returns the fill color of the band containing `value`.
    ///
    /// Values outside the normalized range return `None`.
    #[must_use]
    pub fn banded(&self, value: f64) -> Option<Color32> {
        self.normalization
            .band(value)
            .map(|band| self.band(band))
    }

    /// Returns the fill color of band `band`.
    #[must_use]
    pub fn band(&self, band: usize) -> Color32 {
        self.at_fraction(self.normalization.band_fraction(band))
    }

    /// Returns the color at position `t` on the colormap.
    #[must_use]
    pub fn at_fraction(&self, t: f64) -> Color32 {
        let Rgb([r, g, b]) = self.colormap.color(t);
        let a = (self.alpha * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banded_and_continuous_share_the_colormap() {
        let norm = Normalization::from_range(0.0, 10.0, 3).unwrap();
        let palette = Palette::new(&norm);

        // Band 0 covers [0, 5) and is filled with the color at 2.5.
        assert_eq!(palette.banded(1.0), Some(palette.continuous(2.5)));
        assert_eq!(palette.banded(10.0), Some(palette.continuous(7.5)));
        assert_eq!(palette.banded(11.0), None);
    }

    #[test]
    fn endpoints_are_viridis_extremes() {
        let norm = Normalization::from_range(0.0, 1.0, 2).unwrap();
        let palette = Palette::new(&norm);

        assert_eq!(palette.continuous(0.0), Color32::from_rgb(68, 1, 84));
        assert_eq!(palette.continuous(1.0), Color32::from_rgb(253, 231, 37));
    }

    #[test]
    fn alpha_is_applied() {
        let norm = Normalization::from_range(0.0, 1.0, 2).unwrap();
        let color = Palette::new(&norm).alpha(0.5).continuous(1.0);
        assert_eq!(color.a(), 128);
    }
}
