use eframe::egui::{Color32, ColorImage};
use isoquant_core::Analysis;
use tracing::debug;

use crate::Palette;

/// Filled contour bands rasterized over the mesh extent.
///
/// Row 0 is the top of the image, at the largest capital value. Column 0 is
/// the smallest labor value. Each pixel is colored by the band containing the
/// bilinearly interpolated output at its center.
#[derive(Debug, Clone, PartialEq)]
pub struct BandRaster {
    size: [usize; 2],
    pixels: Vec<Color32>,
}

impl BandRaster {
    /// Renders `analysis` into a `[width, height]` raster.
    #[must_use]
    pub fn render(analysis: &Analysis, [width, height]: [usize; 2]) -> Self {
        let output = analysis.output();
        let palette = Palette::new(analysis.normalization());
        let (rows, cols) = output.shape();
        let last_row = rows.saturating_sub(1) as f64;
        let last_col = cols.saturating_sub(1) as f64;

        let mut pixels = Vec::with_capacity(width * height);
        for py in 0..height {
            let row = (1.0 - (py as f64 + 0.5) / height as f64) * last_row;
            for px in 0..width {
                let col = (px as f64 + 0.5) / width as f64 * last_col;
                let color = output
                    .sample(row, col)
                    .and_then(|value| palette.banded(value))
                    .unwrap_or(Color32::TRANSPARENT);
                pixels.push(color);
            }
        }

        debug!(width, height, "rasterized contour bands");

        Self {
            size: [width, height],
            pixels,
        }
    }

    /// Returns `[width, height]`.
    #[must_use]
    pub fn size(&self) -> [usize; 2] {
        self.size
    }

    /// Returns the pixel at column `x`, row `y` (from the top).
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color32> {
        let [width, height] = self.size;
        (x < width && y < height).then(|| self.pixels[y * width + x])
    }

    /// Converts to an image for uploading as a texture.
    #[must_use]
    pub fn to_image(&self) -> ColorImage {
        let rgba: Vec<u8> = self
            .pixels
            .iter()
            .flat_map(|pixel| pixel.to_srgba_unmultiplied())
            .collect();
        ColorImage::from_rgba_unmultiplied(self.size, &rgba)
    }
}

#[cfg(test)]
mod tests {
    use isoquant_core::Params;

    use super::*;

    fn raster() -> (Analysis, BandRaster) {
        let params = Params::default().with_samples(40).unwrap();
        let analysis = Analysis::run(&params).unwrap();
        let raster = BandRaster::render(&analysis, [64, 48]);
        (analysis, raster)
    }

    #[test]
    fn corners_take_the_extreme_bands() {
        let (analysis, raster) = raster();
        let palette = Palette::new(analysis.normalization());
        let last_band = analysis.normalization().band_count() - 1;

        // Bottom-left is (L min, K min); top-right is (L max, K max).
        assert_eq!(raster.pixel(0, 47), Some(palette.band(0)));
        assert_eq!(raster.pixel(63, 0), Some(palette.band(last_band)));
        assert_eq!(raster.pixel(64, 0), None);
    }

    #[test]
    fn bands_never_decrease_toward_more_inputs() {
        let (analysis, raster) = raster();
        let palette = Palette::new(analysis.normalization());
        let bands: Vec<Color32> = (0..analysis.normalization().band_count())
            .map(|band| palette.band(band))
            .collect();
        let band_of = |x, y| {
            let pixel = raster.pixel(x, y).unwrap();
            bands.iter().position(|&c| c == pixel).unwrap()
        };

        for y in 0..48 {
            for x in 1..64 {
                assert!(band_of(x, y) >= band_of(x - 1, y));
            }
        }
    }

    #[test]
    fn image_matches_raster_size() {
        let (_, raster) = raster();
        let image = raster.to_image();
        assert_eq!(image.size, [64, 48]);
        assert_eq!(image.pixels.len(), 64 * 48);
    }
}
