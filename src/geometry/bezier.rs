use crate::math::Point2;

/// A cubic bezier curve over four control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierCurve {
    p1: Point2,
    c1: Point2,
    c2: Point2,
    p2: Point2,
}

impl BezierCurve {
    /// Creates a curve from its start point, two control points, and end point.
    #[must_use]
    pub fn new(p1: Point2, c1: Point2, c2: Point2, p2: Point2) -> Self {
        Self { p1, c1, c2, p2 }
    }

    /// Evaluates the curve in the cubic Bernstein basis.
    ///
    /// `t` is expected in `[0, 1]` but is not clamped; values outside the
    /// range extrapolate.
    #[must_use]
    pub fn point_for_time(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point2::new(
            b0 * self.p1.x + b1 * self.c1.x + b2 * self.c2.x + b3 * self.p2.x,
            b0 * self.p1.y + b1 * self.c1.y + b2 * self.c2.y + b3 * self.p2.y,
        )
    }
}
