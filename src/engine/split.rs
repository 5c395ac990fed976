use crate::geometry::{LineSegment, Polygon, Side};
use crate::math::vector_2d::mirror_x;
use crate::math::Point2;

use super::fold_line::FoldLine;

/// An axis-aligned reference box expressed as its four boundary segments.
///
/// Scale 1 is the exact container rectangle (the element box, used to
/// measure clipped-area progress). Larger scales grow the box outward from
/// the container origin so clip outlines keep covering shadow and
/// decoration geometry that spills past the container.
#[derive(Debug, Clone)]
pub struct BoundaryBox {
    segments: [LineSegment; 4],
}

impl BoundaryBox {
    /// Derives a box from the container extents and a scale factor.
    ///
    /// The top-left corner lands at `(-w*(s-1), -h*(s-1))` and the
    /// bottom-right at `(w*s, h*s)`.
    #[must_use]
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        let x0 = -width * (scale - 1.0);
        let y0 = -height * (scale - 1.0);
        let x1 = width * scale;
        let y1 = height * scale;
        let tl = Point2::new(x0, y0);
        let tr = Point2::new(x1, y0);
        let br = Point2::new(x1, y1);
        let bl = Point2::new(x0, y1);
        Self {
            segments: [
                LineSegment::new(tl, tr),
                LineSegment::new(tr, br),
                LineSegment::new(br, bl),
                LineSegment::new(bl, tl),
            ],
        }
    }

    /// Returns the boundary segments in top, right, bottom, left order.
    #[must_use]
    pub fn segments(&self) -> &[LineSegment; 4] {
        &self.segments
    }
}

/// The two polygons a fold line cuts a boundary box into.
///
/// Front vertices keep their coordinates; back vertices are mirrored
/// horizontally about the container's vertical center line, matching the
/// mirrored back layer they clip.
#[derive(Debug, Clone)]
pub struct RegionSplit {
    pub front: Polygon,
    pub back: Polygon,
}

/// Partitions a box boundary into front and back polygons using the fold
/// line as a half-plane divider.
///
/// For each boundary segment, the start point and the fold intersection (if
/// any) are classified by the fold's point determinant; points exactly on
/// the fold belong to both polygons.
#[must_use]
pub fn split_box(bounds: &BoundaryBox, fold: &FoldLine, width: f64) -> RegionSplit {
    let mut front = Polygon::new();
    let mut back = Polygon::new();
    for segment in bounds.segments() {
        collect(fold, &segment.p1(), width, &mut front, &mut back);
        if let Some(hit) = segment.intersect(fold.segment()) {
            collect(fold, &hit, width, &mut front, &mut back);
        }
    }
    RegionSplit { front, back }
}

fn collect(fold: &FoldLine, p: &Point2, width: f64, front: &mut Polygon, back: &mut Polygon) {
    match fold.segment().side_of(p) {
        Side::Front => front.add_point(*p),
        Side::Back => back.add_point(mirror_x(p, width)),
        Side::On => {
            front.add_point(*p);
            back.add_point(mirror_x(p, width));
        }
    }
}
