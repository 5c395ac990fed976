use super::{normalize_deg, Point2, Vector2};

/// Returns the angle of a vector in degrees, normalized into `[0, 360)`.
///
/// The zero vector has no meaningful direction; `atan2(0, 0)` is 0, so this
/// returns 0 for it. Callers that care must check the length themselves.
#[must_use]
pub fn angle_deg(v: &Vector2) -> f64 {
    normalize_deg(v.y.atan2(v.x).to_degrees())
}

/// Builds a vector from a polar pair (angle in degrees, length).
#[must_use]
pub fn from_polar(angle: f64, length: f64) -> Vector2 {
    let rad = angle.to_radians();
    Vector2::new(rad.cos() * length, rad.sin() * length)
}

/// Returns a vector with the same length rotated by `deg` degrees.
///
/// Implemented as reconstruction from (angle, length) rather than a rotation
/// matrix. The zero vector maps to itself.
#[must_use]
pub fn rotate_deg(v: &Vector2, deg: f64) -> Vector2 {
    from_polar(angle_deg(v) + deg, v.norm())
}

/// Returns a vector with the same length and the given absolute angle.
#[must_use]
pub fn with_angle_deg(v: &Vector2, deg: f64) -> Vector2 {
    from_polar(deg, v.norm())
}

/// Mirrors a point horizontally about the vertical line `x = width / 2`.
#[must_use]
pub fn mirror_x(p: &Point2, width: f64) -> Point2 {
    Point2::new(width - p.x, p.y)
}
