use crate::error::ConfigError;
use crate::geometry::{BezierCurve, LineSegment};
use crate::math::Point2;

/// A configured peel path the position can be driven along by time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PeelPath {
    Line(LineSegment),
    Bezier(BezierCurve),
}

impl PeelPath {
    /// Builds a straight path between two points.
    #[must_use]
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::Line(LineSegment::new(Point2::new(x1, y1), Point2::new(x2, y2)))
    }

    /// Builds a cubic bezier path from start, two controls, and end.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn bezier(x1: f64, y1: f64, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x2: f64, y2: f64) -> Self {
        Self::Bezier(BezierCurve::new(
            Point2::new(x1, y1),
            Point2::new(c1x, c1y),
            Point2::new(c2x, c2y),
            Point2::new(x2, y2),
        ))
    }

    /// Builds a path from a flat coordinate slice: 4 values for a line,
    /// 8 for a bezier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPathCoordinates`] for any other length.
    pub fn from_coords(coords: &[f64]) -> Result<Self, ConfigError> {
        match *coords {
            [x1, y1, x2, y2] => Ok(Self::line(x1, y1, x2, y2)),
            [x1, y1, c1x, c1y, c2x, c2y, x2, y2] => {
                Ok(Self::bezier(x1, y1, c1x, c1y, c2x, c2y, x2, y2))
            }
            _ => Err(ConfigError::InvalidPathCoordinates {
                count: coords.len(),
            }),
        }
    }

    /// Evaluates the path position for a time in `[0, 1]`.
    #[must_use]
    pub fn point_for_time(&self, t: f64) -> Point2 {
        match self {
            Self::Line(segment) => segment.point_for_time(t),
            Self::Bezier(curve) => curve.point_for_time(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn line_path_interpolates() {
        let path = PeelPath::line(0.0, 0.0, 100.0, 50.0);
        let p = path.point_for_time(0.5);
        assert_relative_eq!(p.x, 50.0);
        assert_relative_eq!(p.y, 25.0);
    }

    #[test]
    fn from_coords_selects_the_path_kind() {
        assert!(matches!(
            PeelPath::from_coords(&[0.0, 0.0, 1.0, 1.0]),
            Ok(PeelPath::Line(_))
        ));
        assert!(matches!(
            PeelPath::from_coords(&[0.0, 0.0, 1.0, 0.0, 2.0, 1.0, 3.0, 1.0]),
            Ok(PeelPath::Bezier(_))
        ));
    }

    #[test]
    fn from_coords_rejects_other_lengths() {
        let err = PeelPath::from_coords(&[0.0; 6]);
        assert!(matches!(
            err,
            Err(ConfigError::InvalidPathCoordinates { count: 6 })
        ));
    }
}
