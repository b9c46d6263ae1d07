//! Perceptually ordered color ramps.

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

/// A color ramp sampled on `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    /// Dark purple through teal to yellow.
    #[default]
    Viridis,
}

impl Colormap {
    const VIRIDIS: [[u8; 3]; 9] = [
        [68, 1, 84],
        [71, 44, 122],
        [59, 81, 139],
        [44, 113, 142],
        [33, 144, 141],
        [39, 173, 129],
        [92, 200, 99],
        [170, 220, 50],
        [253, 231, 37],
    ];

    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            Self::Viridis => &Self::VIRIDIS,
        }
    }

    /// Returns the color at `t`, clamped to `[0, 1]`. `NaN` maps to the low end.
    #[must_use]
    pub fn color(self, t: f64) -> Rgb {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let x = t * (stops.len() - 1) as f64;
        let i = x.floor() as usize;
        if i >= stops.len() - 1 {
            return Rgb(stops[stops.len() - 1]);
        }

        let f = x - i as f64;
        let lerp = |a: u8, b: u8| (f64::from(a) + f * (f64::from(b) - f64::from(a))).round() as u8;
        let [r0, g0, b0] = stops[i];
        let [r1, g1, b1] = stops[i + 1];
        Rgb([lerp(r0, r1), lerp(g0, g1), lerp(b0, b1)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_first_and_last_stop() {
        assert_eq!(Colormap::Viridis.color(0.0), Rgb([68, 1, 84]));
        assert_eq!(Colormap::Viridis.color(1.0), Rgb([253, 231, 37]));
    }

    #[test]
    fn clamps_out_of_range_input() {
        assert_eq!(Colormap::Viridis.color(-2.0), Colormap::Viridis.color(0.0));
        assert_eq!(Colormap::Viridis.color(7.0), Colormap::Viridis.color(1.0));
        assert_eq!(Colormap::Viridis.color(f64::NAN), Colormap::Viridis.color(0.0));
    }

    #[test]
    fn interpolates_between_stops() {
        // Halfway between the first two stops.
        assert_eq!(Colormap::Viridis.color(1.0 / 16.0), Rgb([70, 23, 103]));
        // Exactly on the middle stop.
        assert_eq!(Colormap::Viridis.color(0.5), Rgb([33, 144, 141]));
    }
}
