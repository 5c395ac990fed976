use crate::math::vector_2d::angle_deg;
use crate::math::{Point2, Vector2, DETERMINANT_EPSILON, TOLERANCE};

use super::Side;

/// A directed 2D line segment.
///
/// The direction vector `p2 - p1` is computed once at construction. A
/// degenerate segment (`p1 == p2`) is a legal value but has no meaningful
/// direction or angle; fold lines must never be built degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    p1: Point2,
    p2: Point2,
    direction: Vector2,
}

impl LineSegment {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self {
            p1,
            p2,
            direction: p2 - p1,
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn p1(&self) -> Point2 {
        self.p1
    }

    /// Returns the end point.
    #[must_use]
    pub fn p2(&self) -> Point2 {
        self.p2
    }

    /// Returns the cached direction vector `p2 - p1`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction.norm()
    }

    /// Evaluates `p1 + direction * t`.
    #[must_use]
    pub fn point_for_time(&self, t: f64) -> Point2 {
        self.p1 + self.direction * t
    }

    /// Returns a segment whose endpoints are each pushed `n` spans past the
    /// opposite endpoint: `p1' = p1 + (p2 - p1) * n`, `p2' = p2 + (p1 - p2) * n`.
    ///
    /// Used to extend a segment far beyond a bounding box so it acts as an
    /// infinite line in intersection tests, and to lengthen a reference
    /// diagonal for distance measurement.
    #[must_use]
    pub fn scale(&self, n: f64) -> Self {
        Self::new(self.p1 + self.direction * n, self.p2 - self.direction * n)
    }

    /// 2D cross product of the direction against `p - p1`.
    ///
    /// Values within `DETERMINANT_EPSILON` of zero are snapped to exactly 0.
    #[must_use]
    pub fn point_determinant(&self, p: &Point2) -> f64 {
        let rel = p - self.p1;
        let det = self.direction.x * rel.y - self.direction.y * rel.x;
        if det.abs() <= DETERMINANT_EPSILON {
            0.0
        } else {
            det
        }
    }

    /// Classifies a point against the directed line through this segment.
    ///
    /// Determinant <= 0 is the front side, >= 0 the back side; exactly 0 is
    /// on the line and belongs to both.
    #[must_use]
    pub fn side_of(&self, p: &Point2) -> Side {
        let det = self.point_determinant(p);
        if det == 0.0 {
            Side::On
        } else if det < 0.0 {
            Side::Front
        } else {
            Side::Back
        }
    }

    /// Parametric segment-segment intersection.
    ///
    /// Returns `None` when the directions are parallel (collinear overlap
    /// included), or when the intersection parameters fall outside `[0, 1]`
    /// on either segment.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Point2> {
        let d1 = self.direction;
        let d2 = other.direction;
        let cross = d1.x * d2.y - d1.y * d2.x;
        if cross.abs() < TOLERANCE {
            return None;
        }
        let rel = other.p1 - self.p1;
        let t = (rel.x * d2.y - rel.y * d2.x) / cross;
        let u = (rel.x * d1.y - rel.y * d1.x) / cross;
        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            Some(self.point_for_time(t))
        } else {
            None
        }
    }

    /// Returns the angle of the direction vector in degrees, `[0, 360)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        angle_deg(&self.direction)
    }
}
