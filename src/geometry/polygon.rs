use crate::math::vector_2d::mirror_x;
use crate::math::Point2;

/// An ordered vertex list forming a simple polygon boundary.
///
/// Insertion order encodes the winding direction and therefore the sign of
/// the area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    /// Creates an empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex.
    pub fn add_point(&mut self, p: Point2) {
        self.points.push(p);
    }

    /// Returns the vertices in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns whether the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed area via the shoelace formula.
    ///
    /// Positive or negative depending on winding; callers that want a
    /// magnitude take the absolute value themselves.
    #[must_use]
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            sum += self.points[i].x * self.points[j].y - self.points[j].x * self.points[i].y;
        }
        sum / 2.0
    }

    /// Returns a copy with every vertex mirrored about `x = width / 2`.
    #[must_use]
    pub fn mirrored_x(&self, width: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| mirror_x(p, width)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect(w: f64, h: f64) -> Polygon {
        let mut poly = Polygon::new();
        poly.add_point(Point2::new(0.0, 0.0));
        poly.add_point(Point2::new(w, 0.0));
        poly.add_point(Point2::new(w, h));
        poly.add_point(Point2::new(0.0, h));
        poly
    }

    #[test]
    fn rectangle_area_matches_dimensions() {
        assert_relative_eq!(rect(200.0, 100.0).area(), 20000.0);
    }

    #[test]
    fn reversed_winding_flips_the_sign() {
        let mut poly = Polygon::new();
        poly.add_point(Point2::new(0.0, 100.0));
        poly.add_point(Point2::new(200.0, 100.0));
        poly.add_point(Point2::new(200.0, 0.0));
        poly.add_point(Point2::new(0.0, 0.0));
        assert_relative_eq!(poly.area(), -20000.0);
    }

    #[test]
    fn degenerate_polygons_have_zero_area() {
        let mut poly = Polygon::new();
        poly.add_point(Point2::new(1.0, 1.0));
        poly.add_point(Point2::new(2.0, 2.0));
        assert_relative_eq!(poly.area(), 0.0);
    }

    #[test]
    fn mirroring_preserves_area_magnitude() {
        let poly = rect(200.0, 100.0);
        let mirrored = poly.mirrored_x(200.0);
        assert_relative_eq!(mirrored.area(), -20000.0);
        assert_relative_eq!(mirrored.points()[0].x, 200.0);
    }
}
