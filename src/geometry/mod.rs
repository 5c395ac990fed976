mod bezier;
mod circle;
mod polygon;
mod segment;

pub use bezier::BezierCurve;
pub use circle::HingeCircle;
pub use polygon::Polygon;
pub use segment::LineSegment;

/// Which side of a directed line a point falls on.
///
/// A point whose determinant snaps to exactly zero lies on the line and
/// satisfies both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
    On,
}
