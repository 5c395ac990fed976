use crate::geometry::HingeCircle;
use crate::math::vector_2d::{angle_deg, rotate_deg};
use crate::math::{Point2, TOLERANCE};

/// Ordered hinge constraints plus the flip-smoothing selection.
///
/// Clamping applies every circle sequentially in insertion order, so the
/// configured order is an observable part of behavior. The flip constraint
/// is the one whose center's y-coordinate sits closest to the corner's
/// y-coordinate; it alone receives the flip-smoothing radius offset.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    circles: Vec<HingeCircle>,
    flip_index: Option<usize>,
}

impl ConstraintSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the constraint circles in insertion order.
    #[must_use]
    pub fn circles(&self) -> &[HingeCircle] {
        &self.circles
    }

    /// Returns the index of the current flip constraint, if any.
    #[must_use]
    pub fn flip_index(&self) -> Option<usize> {
        self.flip_index
    }

    /// Adds a hinge at `point`, freezing the radius to its distance from the
    /// corner, and reselects the flip constraint.
    pub fn add(&mut self, point: Point2, corner: Point2) {
        let radius = (corner - point).norm();
        self.circles.push(HingeCircle::new(point, radius));
        self.recompute_flip(corner);
    }

    /// Reselects the constraint whose center y is numerically closest to the
    /// corner y. Ties keep the earliest entry.
    fn recompute_flip(&mut self, corner: Point2) {
        let mut best: Option<(usize, f64)> = None;
        for (i, circle) in self.circles.iter().enumerate() {
            let dist = (circle.center().y - corner.y).abs();
            match best {
                Some((_, d)) if dist >= d => {}
                _ => best = Some((i, dist)),
            }
        }
        self.flip_index = best.map(|(i, _)| i);
    }

    /// Clamps a candidate position against every constraint in order.
    ///
    /// The flip constraint is shrunk by the smoothing offset for this call
    /// only; stored radii never change.
    #[must_use]
    pub fn clamp(
        &self,
        position: Point2,
        corner: Point2,
        container_center: Point2,
        flip_offset_px: f64,
    ) -> Point2 {
        let mut pos = position;
        for (i, circle) in self.circles.iter().enumerate() {
            let offset = if Some(i) == self.flip_index && flip_offset_px != 0.0 {
                flip_smoothing_offset(circle, &pos, corner, container_center, flip_offset_px)
            } else {
                0.0
            };
            let effective = if offset > 0.0 {
                HingeCircle::new(circle.center(), circle.radius() - offset)
            } else {
                *circle
            };
            pos = effective.constrain_point(&pos);
        }
        pos
    }
}

/// Smoothing offset that eases the radius down as the position approaches
/// the quadrant where the fold would otherwise snap through 180 degrees.
///
/// The position is expressed in the constraint's local frame (x axis toward
/// the corner). When the corner sits diagonally opposite the container
/// center the local y flips so the critical quadrant is always the positive
/// one. Inside it, the offset ramps linearly from zero at 45 degrees to the
/// full configured value at 0.
fn flip_smoothing_offset(
    circle: &HingeCircle,
    position: &Point2,
    corner: Point2,
    container_center: Point2,
    offset_px: f64,
) -> f64 {
    let corner_to_center = corner - container_center;
    let corner_to_constraint = corner - circle.center();
    if corner_to_constraint.norm() < TOLERANCE {
        return 0.0;
    }
    let base_angle = angle_deg(&corner_to_constraint);
    let mut local = rotate_deg(&(position - circle.center()), -base_angle);
    if corner_to_center.x * corner_to_center.y < 0.0 {
        local.y = -local.y;
    }
    if local.x > 0.0 && local.y > 0.0 {
        let local_angle = angle_deg(&local);
        ((45.0 - local_angle) / 45.0).clamp(0.0, 1.0) * offset_px
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn radius_is_frozen_to_corner_distance() {
        let mut set = ConstraintSet::new();
        set.add(Point2::new(0.0, 100.0), Point2::new(0.0, 0.0));
        assert_relative_eq!(set.circles()[0].radius(), 100.0);
    }

    #[test]
    fn flip_constraint_tracks_closest_corner_y() {
        let corner = Point2::new(200.0, 100.0);
        let mut set = ConstraintSet::new();
        set.add(Point2::new(0.0, 0.0), corner);
        assert_eq!(set.flip_index(), Some(0));
        set.add(Point2::new(0.0, 100.0), corner);
        assert_eq!(set.flip_index(), Some(1));
    }

    #[test]
    fn flip_constraint_tie_keeps_the_earliest() {
        let corner = Point2::new(200.0, 50.0);
        let mut set = ConstraintSet::new();
        set.add(Point2::new(0.0, 20.0), corner);
        set.add(Point2::new(50.0, 80.0), corner);
        // Both centers are 30 away from the corner y; the first wins.
        assert_eq!(set.flip_index(), Some(0));
    }

    #[test]
    fn clamping_is_order_dependent() {
        let corner = Point2::new(0.0, 0.0);
        let center = Point2::new(50.0, 50.0);
        let a = Point2::new(80.0, 0.0);
        let b = Point2::new(0.0, 60.0);
        let position = Point2::new(120.0, 90.0);

        let mut ab = ConstraintSet::new();
        ab.add(a, corner);
        ab.add(b, corner);
        let mut ba = ConstraintSet::new();
        ba.add(b, corner);
        ba.add(a, corner);

        // Flip smoothing disabled so only the ordering matters.
        let first = ab.clamp(position, corner, center, 0.0);
        let second = ba.clamp(position, corner, center, 0.0);
        assert!((first - second).norm() > 1.0);
    }

    #[test]
    fn clamp_inside_all_circles_is_identity() {
        let corner = Point2::new(0.0, 0.0);
        let mut set = ConstraintSet::new();
        set.add(Point2::new(80.0, 0.0), corner);
        let pos = set.clamp(
            Point2::new(40.0, 10.0),
            corner,
            Point2::new(50.0, 50.0),
            0.0,
        );
        assert_relative_eq!(pos.x, 40.0);
        assert_relative_eq!(pos.y, 10.0);
    }

    #[test]
    fn smoothing_shrinks_only_near_the_critical_axis() {
        let corner = Point2::new(0.0, 100.0);
        let circle = HingeCircle::new(Point2::new(0.0, 0.0), 100.0);
        let center = Point2::new(100.0, 50.0);
        // Position along the corner axis: full offset.
        let on_axis = flip_smoothing_offset(&circle, &Point2::new(1e-9, 150.0), corner, center, 5.0);
        assert_relative_eq!(on_axis, 5.0, epsilon = 1e-6);
        // 45 degrees off the axis: offset fully decayed.
        let off_axis =
            flip_smoothing_offset(&circle, &Point2::new(150.0, 150.0), corner, center, 5.0);
        assert_relative_eq!(off_axis, 0.0, epsilon = 1e-6);
    }
}
