use crate::math::vector_2d::{angle_deg, from_polar};
use crate::math::Point2;

/// A hinge constraint circle: a fixed center and a radius frozen at the
/// moment the constraint was added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HingeCircle {
    center: Point2,
    radius: f64,
}

impl HingeCircle {
    /// Creates a circle with a non-negative radius.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Returns the center.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Boundary-inclusive containment test.
    ///
    /// Rejects via the bounding box first, then compares squared distances to
    /// avoid the square root.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        if (p.x - self.center.x).abs() > self.radius || (p.y - self.center.y).abs() > self.radius {
            return false;
        }
        let rel = p - self.center;
        rel.x * rel.x + rel.y * rel.y <= self.radius * self.radius
    }

    /// Clamps a point into the circle.
    ///
    /// Points outside are projected onto the circumference at the same angle
    /// from the center; points inside (boundary included) pass through
    /// unchanged.
    #[must_use]
    pub fn constrain_point(&self, p: &Point2) -> Point2 {
        if self.contains_point(p) {
            return *p;
        }
        let rel = p - self.center;
        self.center + from_polar(angle_deg(&rel), self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn boundary_point_is_contained() {
        let c = HingeCircle::new(Point2::new(0.0, 0.0), 10.0);
        assert!(c.contains_point(&Point2::new(10.0, 0.0)));
        assert!(!c.contains_point(&Point2::new(11.0, 0.0)));
    }

    #[test]
    fn bounding_box_rejects_without_distance_check() {
        let c = HingeCircle::new(Point2::new(5.0, 5.0), 3.0);
        assert!(!c.contains_point(&Point2::new(9.0, 5.0)));
        assert!(!c.contains_point(&Point2::new(5.0, 12.0)));
    }

    #[test]
    fn constrain_leaves_inside_points_alone() {
        let c = HingeCircle::new(Point2::new(0.0, 0.0), 10.0);
        let p = c.constrain_point(&Point2::new(10.0, 0.0));
        assert_relative_eq!(p.x, 10.0);
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn constrain_projects_onto_circumference() {
        let c = HingeCircle::new(Point2::new(0.0, 0.0), 10.0);
        let p = c.constrain_point(&Point2::new(11.0, 0.0));
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn constrain_preserves_direction() {
        let c = HingeCircle::new(Point2::new(1.0, 1.0), 5.0);
        let p = c.constrain_point(&Point2::new(1.0 + 30.0, 1.0 + 40.0));
        assert_relative_eq!(p.x, 4.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 5.0, epsilon = 1e-9);
    }
}
