use crate::math::Point2;

/// Rounds a renderer-facing value to 2 decimal places.
///
/// Applied to every numeric output before it leaves the engine; the rule is
/// fixed and visible to tests.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A clip polygon vertex list plus the unique region name it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipOutline {
    pub region: String,
    pub points: Vec<Point2>,
}

/// Translate-then-rotate transform shared by the back layer and the shadow
/// layer paired with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_deg: f64,
}

/// Top shadow descriptor; the drop-shadow form is used when a custom clip
/// shape is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadowStyle {
    Box {
        offset_x: f64,
        offset_y: f64,
        blur: f64,
        spread: f64,
        alpha: f64,
    },
    Drop {
        offset_x: f64,
        offset_y: f64,
        blur: f64,
        alpha: f64,
    },
}

/// Gradient stop colors; peel gradients only ever use these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientColor {
    White,
    Black,
}

/// One gradient stop: color, alpha, and percent position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub color: GradientColor,
    pub alpha: f64,
    pub position: f64,
}

/// A linear gradient descriptor. An empty stop list tells the renderer to
/// clear any existing gradient.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gradient {
    pub rotation: f64,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// The empty "clear this layer" gradient.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns whether there is anything to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// The complete renderer-facing bundle for one position update.
#[derive(Debug, Clone, PartialEq)]
pub struct PeelFrame {
    pub front_clip: ClipOutline,
    pub back_clip: ClipOutline,
    pub transform: BackTransform,
    pub top_shadow: Option<ShadowStyle>,
    pub back_reflection: Gradient,
    pub back_shadow: Gradient,
    pub bottom_shadow: Gradient,
    /// Uniform fade opacity for the front, back, and bottom-shadow layers;
    /// 1.0 when fading is disabled or below threshold.
    pub opacity: f64,
}
