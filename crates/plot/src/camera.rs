/// An orthographic camera orbiting the origin.
///
/// Azimuth is measured in the floor plane from `+x` toward `+y`; elevation is
/// measured up from the floor plane. Both are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    elevation: f64,
    azimuth: f64,
}

/// A point after projection.
///
/// `x` grows to the right and `y` grows upward on screen. Larger `depth` is
/// closer to the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

impl Default for Camera {
    /// Looks down 28° from an azimuth of −55°.
    fn default() -> Self {
        Self::new(28.0, -55.0)
    }
}

impl Camera {
    #[must_use]
    pub fn new(elevation: f64, azimuth: f64) -> Self {
        Self {
            elevation,
            azimuth,
        }
    }

    #[must_use]
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    #[must_use]
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Returns the unit vector from the origin toward the viewer.
    #[must_use]
    pub fn eye(&self) -> [f64; 3] {
        let (sin_el, cos_el) = self.elevation.to_radians().sin_cos();
        let (sin_az, cos_az) = self.azimuth.to_radians().sin_cos();
        [cos_el * cos_az, cos_el * sin_az, sin_el]
    }

    #[must_use]
    pub fn project(&self, [x, y, z]: [f64; 3]) -> Projected {
        let (sin_el, cos_el) = self.elevation.to_radians().sin_cos();
        let (sin_az, cos_az) = self.azimuth.to_radians().sin_cos();

        let right = [-sin_az, cos_az, 0.0];
        let up = [-sin_el * cos_az, -sin_el * sin_az, cos_el];
        let eye = self.eye();

        let dot = |v: [f64; 3]| v[0] * x + v[1] * y + v[2] * z;
        Projected {
            x: dot(right),
            y: dot(up),
            depth: dot(eye),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn vertical_axis_points_up() {
        let p = Camera::default().project([0.0, 0.0, 1.0]);

        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 28.0_f64.to_radians().cos());
        assert!(p.depth > 0.0);
    }

    #[test]
    fn projection_preserves_length_in_view_plane() {
        let camera = Camera::default();
        let point = [0.3, -0.7, 0.2];
        let p = camera.project(point);

        let length = point.iter().map(|v| v * v).sum::<f64>();
        assert_relative_eq!(
            p.x * p.x + p.y * p.y + p.depth * p.depth,
            length,
            epsilon = 1e-12
        );
    }

    #[test]
    fn nearest_floor_corner_faces_the_eye() {
        let camera = Camera::default();
        let corners = [[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]];

        let nearest = corners
            .iter()
            .max_by(|a, b| {
                let da = camera.project([a[0], a[1], 0.0]).depth;
                let db = camera.project([b[0], b[1], 0.0]).depth;
                da.total_cmp(&db)
            })
            .unwrap();

        assert_eq!(*nearest, [0.5, -0.5]);
    }

    #[test]
    fn eye_is_unit_length() {
        let eye = Camera::new(10.0, 130.0).eye();
        let length = eye.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert_relative_eq!(length, 1.0, epsilon = 1e-12);
    }
}
