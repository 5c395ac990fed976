use std::collections::HashMap;

use crate::error::ConfigError;
use crate::math::Point2;

/// The four container corners, encoded as a 2-bit id: bit 0 selects
/// `x = width`, bit 1 selects `y = height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Corner {
    /// Decodes the corner into container coordinates.
    #[must_use]
    pub fn point(self, width: f64, height: f64) -> Point2 {
        let id = self as u8;
        let x = if id & 1 == 1 { width } else { 0.0 };
        let y = if id & 2 == 2 { height } else { 0.0 };
        Point2::new(x, y)
    }

    /// Returns the diagonally opposite corner.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }
}

/// A peel position input, resolved once at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PeelTarget {
    Corner(Corner),
    Point(Point2),
}

impl PeelTarget {
    /// Resolves the target into container coordinates.
    #[must_use]
    pub fn resolve(self, width: f64, height: f64) -> Point2 {
        match self {
            Self::Corner(corner) => corner.point(width, height),
            Self::Point(p) => p,
        }
    }
}

impl From<Corner> for PeelTarget {
    fn from(corner: Corner) -> Self {
        Self::Corner(corner)
    }
}

impl From<Point2> for PeelTarget {
    fn from(p: Point2) -> Self {
        Self::Point(p)
    }
}

/// Kind tag for a custom clip shape descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipShapeKind {
    Rectangle,
    Circle,
    Polygon,
    Path,
}

/// An opaque clip shape passed through to the renderer unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipShape {
    pub kind: ClipShapeKind,
    pub attributes: HashMap<String, String>,
}

/// Macro presets over the constraint engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Hinges at bottom-left then top-left; back reflection and back/bottom
    /// shadow distribution off.
    Book,
    /// Hinges at top-right then top-left.
    Calendar,
}

/// Top shadow options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopShadowOptions {
    pub enabled: bool,
    pub blur: f64,
    pub alpha: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Forces the drop-shadow filter form even without a custom clip shape.
    pub creates_shape: bool,
}

impl Default for TopShadowOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            blur: 5.0,
            alpha: 0.5,
            offset_x: 0.0,
            offset_y: 1.0,
            creates_shape: false,
        }
    }
}

/// Options shared by the back reflection and back shadow gradient bands.
///
/// `size` and `offset` are in gradient percent points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandOptions {
    pub enabled: bool,
    pub size: f64,
    pub offset: f64,
    pub alpha: f64,
    pub distribute: bool,
}

/// Bottom shadow options: a light band behind a dark crease band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BottomShadowOptions {
    pub enabled: bool,
    pub size: f64,
    pub offset: f64,
    pub dark_alpha: f64,
    pub light_alpha: f64,
    pub distribute: bool,
}

impl Default for BottomShadowOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            size: 6.0,
            offset: 0.0,
            dark_alpha: 0.7,
            light_alpha: 0.1,
            distribute: true,
        }
    }
}

/// The static configuration record for one peel instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PeelOptions {
    pub corner: PeelTarget,
    /// Progress past which layers fade out; 0 disables fading.
    pub fade_threshold: f64,
    pub top_shadow: TopShadowOptions,
    pub back_reflection: BandOptions,
    pub back_shadow: BandOptions,
    pub bottom_shadow: BottomShadowOptions,
    pub set_peel_on_init: bool,
    pub clipping_box_scale: f64,
    pub flip_constraint_offset: f64,
    /// Consumed by the embedding pointer layer, not the engine.
    pub drag_prevents_default: bool,
    pub preset: Option<Preset>,
    /// At most one may be configured.
    pub clip_shapes: Vec<ClipShape>,
}

impl Default for PeelOptions {
    fn default() -> Self {
        Self {
            corner: PeelTarget::Corner(Corner::BottomRight),
            fade_threshold: 0.0,
            top_shadow: TopShadowOptions::default(),
            back_reflection: BandOptions {
                enabled: false,
                size: 4.0,
                offset: 0.0,
                alpha: 0.15,
                distribute: true,
            },
            back_shadow: BandOptions {
                enabled: true,
                size: 4.0,
                offset: 0.0,
                alpha: 0.1,
                distribute: true,
            },
            bottom_shadow: BottomShadowOptions::default(),
            set_peel_on_init: true,
            clipping_box_scale: 4.0,
            flip_constraint_offset: 5.0,
            drag_prevents_default: true,
            preset: None,
            clip_shapes: Vec::new(),
        }
    }
}

impl PeelOptions {
    /// Validates the record before any peel state is built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MultipleClipShapes`] when more than one custom
    /// clip shape is configured, or [`ConfigError::InvalidClippingBoxScale`]
    /// when the scale is not positive (a non-positive scale would turn the
    /// clipping boundary inside out).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clip_shapes.len() > 1 {
            return Err(ConfigError::MultipleClipShapes {
                count: self.clip_shapes.len(),
            });
        }
        if self.clipping_box_scale <= 0.0 {
            return Err(ConfigError::InvalidClippingBoxScale {
                scale: self.clipping_box_scale,
            });
        }
        Ok(())
    }

    /// Returns the single active clip shape, if any.
    #[must_use]
    pub fn clip_shape(&self) -> Option<&ClipShape> {
        self.clip_shapes.first()
    }
}
