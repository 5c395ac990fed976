pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Epsilon under which a point determinant is snapped to exactly zero,
/// so points numerically on the fold line land in both regions.
pub const DETERMINANT_EPSILON: f64 = 1e-6;

/// Normalizes an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_deg(mut deg: f64) -> f64 {
    while deg < 0.0 {
        deg += 360.0;
    }
    while deg >= 360.0 {
        deg -= 360.0;
    }
    deg
}
