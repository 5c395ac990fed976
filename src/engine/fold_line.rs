use crate::geometry::LineSegment;
use crate::math::vector_2d::rotate_deg;
use crate::math::{Point2, TOLERANCE};

/// The oriented fold separating the flat region from the peeled-back region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldLine {
    segment: LineSegment,
    rotation: f64,
}

impl FoldLine {
    /// Builds the fold for an anchor corner and a clamped peel position.
    ///
    /// The fold is the perpendicular bisector of corner and position,
    /// extended far past the container so downstream intersection and
    /// half-plane tests can treat it as an infinite line. When the position
    /// coincides with the corner the bisector direction degenerates; the
    /// vector from the container center to the position stands in, keeping
    /// the midpoint at the corner.
    #[must_use]
    pub fn build(corner: Point2, position: Point2, width: f64, height: f64) -> Self {
        let mut half_to_corner = (corner - position) * 0.5;
        let midpoint = position + half_to_corner;
        if half_to_corner.norm() < TOLERANCE {
            let center = Point2::new(width / 2.0, height / 2.0);
            half_to_corner = position - center;
        }
        let multiplier = (width.max(height) / half_to_corner.norm()) * 10.0;
        let half = rotate_deg(&half_to_corner, -90.0) * multiplier;
        let segment = LineSegment::new(midpoint + half, midpoint - half);
        let rotation = segment.angle();
        Self { segment, rotation }
    }

    /// Returns the extended fold segment.
    #[must_use]
    pub fn segment(&self) -> &LineSegment {
        &self.segment
    }

    /// Returns the fold's rotation in degrees, `[0, 360)`.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }
}
