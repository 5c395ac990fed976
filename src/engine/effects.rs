use crate::config::{BandOptions, BottomShadowOptions, Corner, TopShadowOptions};
use crate::geometry::LineSegment;
use crate::math::{normalize_deg, Point2};
use crate::output::{BackTransform, Gradient, GradientColor, GradientStop, ShadowStyle};

use super::fold_line::FoldLine;

/// Progress value returned when the fold has moved past the reachable range
/// of its diagonal.
pub const DISTANCE_OVERFLOW: f64 = 2.0;

/// Normalized distance the fold has advanced along the relevant diagonal.
///
/// The fold rotation selects one of four 90-degree buckets, each naming a
/// corner and its diagonal opposite. The diagonal is lengthened (one span
/// past each end) before intersecting so it still meets the fold as the
/// fold approaches or passes the far corner. The result is normalized by
/// half the diagonal: the fold is the perpendicular bisector of corner and
/// position, so its intersection advances at half the position's rate. That
/// makes the value 0 with the position at the corner, 1 at the opposite
/// corner, and greater than 1 beyond it.
#[must_use]
pub fn peel_line_distance(fold: &FoldLine, width: f64, height: f64) -> f64 {
    let near = corner_for_rotation(fold.rotation());
    let corner = near.point(width, height);
    let opposite = near.opposite().point(width, height);
    let diagonal = LineSegment::new(corner, opposite).scale(2.0);
    let Some(hit) = diagonal.intersect(fold.segment()) else {
        return DISTANCE_OVERFLOW;
    };
    (hit - corner).norm() / ((opposite - corner).norm() / 2.0)
}

fn corner_for_rotation(rotation: f64) -> Corner {
    if rotation < 90.0 {
        Corner::TopRight
    } else if rotation < 180.0 {
        Corner::BottomRight
    } else if rotation < 270.0 {
        Corner::BottomLeft
    } else {
        Corner::TopLeft
    }
}

/// Top shadow intensity: near zero for a resting fold, rising steeply and
/// saturating as the peel advances.
#[must_use]
pub fn top_shadow_alpha(t: f64, configured_alpha: f64) -> f64 {
    configured_alpha * ((1.0 + t).powi(5) - 1.0).clamp(0.0, 1.0)
}

/// Builds the top shadow descriptor, or `None` when disabled.
///
/// A drop-shadow filter is emitted when a custom clip shape is active (or
/// the shadow is configured to create its own shape); otherwise a
/// box-shadow with zero spread.
#[must_use]
pub fn top_shadow(t: f64, options: &TopShadowOptions, has_clip_shape: bool) -> Option<ShadowStyle> {
    if !options.enabled {
        return None;
    }
    let alpha = top_shadow_alpha(t, options.alpha);
    let style = if has_clip_shape || options.creates_shape {
        ShadowStyle::Drop {
            offset_x: options.offset_x,
            offset_y: options.offset_y,
            blur: options.blur,
            alpha,
        }
    } else {
        ShadowStyle::Box {
            offset_x: options.offset_x,
            offset_y: options.offset_y,
            blur: options.blur,
            spread: 0.0,
            alpha,
        }
    };
    Some(style)
}

/// Bell-curve or linear effect sizing.
///
/// The bell peaks at `t = 0.5` and falls off symmetrically to zero at both
/// ends; the linear form just scales `t`.
#[must_use]
pub fn distribute_or_linear(t: f64, use_bell_curve: bool, mult: f64) -> f64 {
    if use_bell_curve {
        mult * 2.0 * (0.5 - (t - 0.5).abs())
    } else {
        t * mult
    }
}

/// Four-stop band gradient shared by the back reflection (white) and back
/// shadow (black).
///
/// Stop positions are percentages; the band trails the fold at
/// `p = 100 t - offset` with width `size'` from `distribute_or_linear`.
#[must_use]
pub fn band_gradient(
    t: f64,
    fold_rotation: f64,
    options: &BandOptions,
    color: GradientColor,
) -> Gradient {
    if !options.enabled || t <= 0.0 {
        return Gradient::none();
    }
    let size = distribute_or_linear(t, options.distribute, options.size);
    let p = 100.0 * t - options.offset;
    Gradient {
        rotation: 180.0 - fold_rotation,
        stops: vec![
            GradientStop {
                color,
                alpha: 0.0,
                position: 0.0,
            },
            GradientStop {
                color,
                alpha: 0.0,
                position: p - 2.0 * size,
            },
            GradientStop {
                color,
                alpha: options.alpha,
                position: p - size,
            },
            GradientStop {
                color,
                alpha: 0.0,
                position: p,
            },
        ],
    }
}

/// Five-stop bottom shadow: a soft light band easing into a dark crease
/// band that cuts off at the fold.
#[must_use]
pub fn bottom_shadow_gradient(
    t: f64,
    fold_rotation: f64,
    options: &BottomShadowOptions,
) -> Gradient {
    if !options.enabled || t <= 0.0 {
        return Gradient::none();
    }
    let size = distribute_or_linear(t, options.distribute, options.size);
    let p = 100.0 * t - options.offset;
    let black = GradientColor::Black;
    Gradient {
        rotation: 180.0 - fold_rotation,
        stops: vec![
            GradientStop {
                color: black,
                alpha: 0.0,
                position: p - 2.0 * size,
            },
            GradientStop {
                color: black,
                alpha: options.light_alpha,
                position: p - size,
            },
            GradientStop {
                color: black,
                alpha: options.dark_alpha,
                position: p - size / 2.0,
            },
            GradientStop {
                color: black,
                alpha: options.dark_alpha,
                position: p,
            },
            GradientStop {
                color: black,
                alpha: 0.0,
                position: p,
            },
        ],
    }
}

/// Transform placing the mirrored back layer onto the physical fold.
///
/// The back layer content is the page mirrored about the vertical center
/// line (M); the physical flip is the reflection F across the fold line.
/// Composing the two reflections gives a rotation by `2 * rotation - 180`
/// degrees; the translation pins it down as the image of the mirrored
/// origin, `F((width, 0))`. Applied as translate-then-rotate about the
/// layer origin, and shared with the bottom shadow layer.
#[must_use]
pub fn back_transform(fold: &FoldLine, width: f64) -> BackTransform {
    let translated = reflect_across(fold.segment(), &Point2::new(width, 0.0));
    BackTransform {
        translate_x: translated.x,
        translate_y: translated.y,
        rotate_deg: normalize_deg(2.0 * fold.rotation() - 180.0),
    }
}

fn reflect_across(line: &LineSegment, q: &Point2) -> Point2 {
    let d = line.direction().normalize();
    let v = q - line.p1();
    let reflected = d * (2.0 * v.dot(&d)) - v;
    line.p1() + reflected
}

/// Uniform fade opacity once progress `n` passes the threshold.
///
/// Ramps linearly from 1 at the threshold to 0 at `n = 1`; a threshold of 0
/// disables fading entirely.
#[must_use]
pub fn fade_opacity(n: f64, threshold: f64) -> f64 {
    if threshold <= 0.0 || n <= threshold {
        return 1.0;
    }
    ((1.0 - n) / (1.0 - threshold)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fold_at(fraction: f64) -> FoldLine {
        let corner = Point2::new(200.0, 100.0);
        let opposite = Point2::new(0.0, 0.0);
        let position = corner + (opposite - corner) * fraction;
        FoldLine::build(corner, position, 200.0, 100.0)
    }

    #[test]
    fn distance_is_zero_at_the_corner() {
        assert_relative_eq!(
            peel_line_distance(&fold_at(0.0), 200.0, 100.0),
            0.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn distance_is_one_at_the_opposite_corner() {
        assert_relative_eq!(
            peel_line_distance(&fold_at(1.0), 200.0, 100.0),
            1.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn distance_grows_monotonically_along_the_diagonal() {
        let mut last = -1.0;
        for step in 0..=20 {
            let t = peel_line_distance(&fold_at(f64::from(step) / 20.0), 200.0, 100.0);
            assert!(t > last - 1e-9, "distance regressed at step {step}");
            last = t;
        }
    }

    #[test]
    fn distance_tracks_the_diagonal_from_every_anchor_corner() {
        // Each anchor drives the fold rotation into a different quadrant
        // bucket; the distance must follow the position fraction for all
        // four corner/opposite pairings.
        let (w, h) = (200.0, 100.0);
        for anchor in [
            Corner::TopLeft,
            Corner::TopRight,
            Corner::BottomLeft,
            Corner::BottomRight,
        ] {
            let corner = anchor.point(w, h);
            let opposite = anchor.opposite().point(w, h);
            for fraction in [0.25, 0.5, 1.0] {
                let position = corner + (opposite - corner) * fraction;
                let fold = FoldLine::build(corner, position, w, h);
                let t = peel_line_distance(&fold, w, h);
                assert_relative_eq!(t, fraction, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn distance_exceeds_one_past_the_opposite_corner() {
        let t = peel_line_distance(&fold_at(1.5), 200.0, 100.0);
        assert_relative_eq!(t, 1.5, epsilon = 1e-9);
    }

    #[test]
    fn distance_overflows_past_the_reachable_range() {
        // Far enough that the fold no longer meets even the lengthened
        // diagonal.
        let t = peel_line_distance(&fold_at(4.5), 200.0, 100.0);
        assert_relative_eq!(t, DISTANCE_OVERFLOW);
    }

    #[test]
    fn top_shadow_rises_and_saturates() {
        assert_relative_eq!(top_shadow_alpha(0.0, 0.5), 0.0);
        assert!(top_shadow_alpha(0.05, 0.5) < top_shadow_alpha(0.1, 0.5));
        assert_relative_eq!(top_shadow_alpha(1.0, 0.5), 0.5);
    }

    #[test]
    fn bell_curve_peaks_at_the_midpoint() {
        assert_relative_eq!(distribute_or_linear(0.5, true, 4.0), 4.0);
        assert_relative_eq!(distribute_or_linear(0.0, true, 4.0), 0.0);
        assert_relative_eq!(distribute_or_linear(1.0, true, 4.0), 0.0);
        assert_relative_eq!(distribute_or_linear(0.25, true, 4.0), 2.0);
    }

    #[test]
    fn linear_distribution_scales_t() {
        assert_relative_eq!(distribute_or_linear(0.25, false, 4.0), 1.0);
    }

    #[test]
    fn band_gradient_lays_out_four_trailing_stops() {
        let options = BandOptions {
            enabled: true,
            size: 4.0,
            offset: 1.0,
            alpha: 0.15,
            distribute: false,
        };
        let g = band_gradient(0.5, 120.0, &options, GradientColor::White);
        assert_relative_eq!(g.rotation, 60.0);
        let positions: Vec<f64> = g.stops.iter().map(|s| s.position).collect();
        // p = 50 - 1 = 49, size' = 2.
        assert_relative_eq!(positions[0], 0.0);
        assert_relative_eq!(positions[1], 45.0);
        assert_relative_eq!(positions[2], 47.0);
        assert_relative_eq!(positions[3], 49.0);
        assert_relative_eq!(g.stops[2].alpha, 0.15);
    }

    #[test]
    fn disabled_or_resting_band_is_empty() {
        let options = BandOptions {
            enabled: true,
            size: 4.0,
            offset: 0.0,
            alpha: 0.15,
            distribute: true,
        };
        assert!(band_gradient(0.0, 90.0, &options, GradientColor::Black).is_empty());
        let disabled = BandOptions {
            enabled: false,
            ..options
        };
        assert!(band_gradient(0.5, 90.0, &disabled, GradientColor::Black).is_empty());
    }

    #[test]
    fn bottom_shadow_ends_hard_at_the_fold() {
        let options = BottomShadowOptions::default();
        let g = bottom_shadow_gradient(0.5, 90.0, &options);
        assert_eq!(g.stops.len(), 5);
        let last = g.stops[4];
        let crease = g.stops[3];
        assert_relative_eq!(last.position, crease.position);
        assert_relative_eq!(last.alpha, 0.0);
        assert_relative_eq!(crease.alpha, 0.7);
    }

    #[test]
    fn vertical_fold_on_the_center_line_is_the_identity_transform() {
        // Position at (0, height) with the corner at (width, height) folds
        // about the vertical center line, which is exactly the mirror the
        // back layer already carries.
        let fold = FoldLine::build(
            Point2::new(200.0, 100.0),
            Point2::new(0.0, 100.0),
            200.0,
            100.0,
        );
        let transform = back_transform(&fold, 200.0);
        assert_relative_eq!(transform.rotate_deg, 0.0, epsilon = 1e-9);
        assert_relative_eq!(transform.translate_x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(transform.translate_y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn fade_ramps_to_zero() {
        assert_relative_eq!(fade_opacity(0.5, 0.9), 1.0);
        assert_relative_eq!(fade_opacity(0.95, 0.9), 0.5, epsilon = 1e-9);
        assert_relative_eq!(fade_opacity(1.0, 0.9), 0.0);
        // Threshold 0 disables fading.
        assert_relative_eq!(fade_opacity(1.0, 0.0), 1.0);
    }
}
