use log::{debug, trace};

use crate::config::{Corner, PeelOptions, PeelTarget, Preset};
use crate::engine::effects::{
    back_transform, band_gradient, bottom_shadow_gradient, fade_opacity, peel_line_distance,
    top_shadow,
};
use crate::engine::{split_box, BoundaryBox, ConstraintSet, FoldLine, PeelPath};
use crate::error::{ConfigError, Result, StateError};
use crate::geometry::Polygon;
use crate::math::Point2;
use crate::output::{
    round2, BackTransform, ClipOutline, Gradient, GradientColor, GradientStop, PeelFrame,
    ShadowStyle,
};
use crate::registry::{ClipRegionId, ClipRegionStore, IdGenerator, SequentialIds};

/// Owns the mutable state of one peel instance and orchestrates the
/// geometry and effects engines on every position update.
///
/// Updates are synchronous and deterministic: each one runs the full
/// pipeline (constraint clamp, fold construction, region splitting, effect
/// derivation) and emits a complete [`PeelFrame`] before returning.
#[derive(Debug)]
pub struct PeelController {
    width: f64,
    height: f64,
    corner: Point2,
    options: PeelOptions,
    constraints: ConstraintSet,
    path: Option<PeelPath>,
    time_along_path: Option<f64>,
    fold: Option<FoldLine>,
    amount_clipped: f64,
    element_box: BoundaryBox,
    clipping_box: BoundaryBox,
    regions: ClipRegionStore,
    front_region: ClipRegionId,
    back_region: ClipRegionId,
    frame: Option<PeelFrame>,
}

impl PeelController {
    /// Builds a controller for a container of the given extents.
    ///
    /// Dimensions are captured once; the engine never re-measures. Presets
    /// are applied here, and when `set_peel_on_init` is on the first update
    /// runs immediately with the position resting at the anchor corner.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for non-positive dimensions, a non-positive
    /// clipping box scale, or more than one configured clip shape.
    pub fn new(width: f64, height: f64, options: PeelOptions) -> Result<Self> {
        Self::with_ids(width, height, options, Box::<SequentialIds>::default())
    }

    /// Like [`PeelController::new`] with an injected clip-region id
    /// generator.
    ///
    /// # Errors
    ///
    /// Same as [`PeelController::new`].
    pub fn with_ids(
        width: f64,
        height: f64,
        options: PeelOptions,
        ids: Box<dyn IdGenerator>,
    ) -> Result<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidDimensions { width, height }.into());
        }
        options.validate()?;

        let corner = options.corner.resolve(width, height);
        debug!("peel setup: {width} x {height}, corner ({}, {})", corner.x, corner.y);

        let mut regions = ClipRegionStore::new(ids);
        let front_region = regions.create("peel-clip");
        let back_region = regions.create("peel-clip");

        let mut controller = Self {
            width,
            height,
            corner,
            element_box: BoundaryBox::new(width, height, 1.0),
            clipping_box: BoundaryBox::new(width, height, options.clipping_box_scale),
            constraints: ConstraintSet::new(),
            path: None,
            time_along_path: None,
            fold: None,
            amount_clipped: 0.0,
            regions,
            front_region,
            back_region,
            frame: None,
            options,
        };
        if let Some(preset) = controller.options.preset {
            controller.apply_preset(preset);
        }
        if controller.options.set_peel_on_init {
            controller.update_position(controller.corner);
        }
        Ok(controller)
    }

    fn apply_preset(&mut self, preset: Preset) {
        debug!("applying preset {preset:?}");
        match preset {
            Preset::Book => {
                self.add_constraint(Corner::BottomLeft);
                self.add_constraint(Corner::TopLeft);
                self.options.back_reflection.enabled = false;
                self.options.back_shadow.distribute = false;
                self.options.bottom_shadow.distribute = false;
            }
            Preset::Calendar => {
                self.add_constraint(Corner::TopRight);
                self.add_constraint(Corner::TopLeft);
            }
        }
    }

    /// Adds a hinge constraint; the circle radius freezes to the current
    /// distance between the hinge and the anchor corner.
    pub fn add_constraint(&mut self, target: impl Into<PeelTarget>) {
        let point = target.into().resolve(self.width, self.height);
        debug!("adding constraint at ({}, {})", point.x, point.y);
        self.constraints.add(point, self.corner);
    }

    /// Configures the path that [`PeelController::set_time_along_path`]
    /// drives the position along.
    pub fn set_path(&mut self, path: PeelPath) {
        self.path = Some(path);
        self.time_along_path = None;
    }

    /// Sets the peel position directly or by corner id and runs the update
    /// pipeline, returning the emitted frame.
    pub fn set_peel_position(&mut self, target: impl Into<PeelTarget>) -> &PeelFrame {
        let position = target.into().resolve(self.width, self.height);
        self.time_along_path = None;
        self.update_position(position)
    }

    /// Clamps `t` to `[0, 1]`, evaluates the configured path there, and
    /// feeds the result through the position pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::PathNotConfigured`] when no path is set.
    pub fn set_time_along_path(&mut self, t: f64) -> Result<&PeelFrame> {
        let Some(path) = self.path else {
            return Err(StateError::PathNotConfigured.into());
        };
        let t = t.clamp(0.0, 1.0);
        self.time_along_path = Some(t);
        Ok(self.update_position(path.point_for_time(t)))
    }

    /// Normalized clipped-area progress from the last update: 0 with the
    /// position resting at the corner, 1 with the page folded fully in half.
    #[must_use]
    pub fn amount_clipped(&self) -> f64 {
        self.amount_clipped
    }

    /// Returns the frame emitted by the last update, if any.
    #[must_use]
    pub fn frame(&self) -> Option<&PeelFrame> {
        self.frame.as_ref()
    }

    /// Returns the current fold line, if an update has run.
    #[must_use]
    pub fn fold(&self) -> Option<&FoldLine> {
        self.fold.as_ref()
    }

    /// Resolved anchor corner point.
    #[must_use]
    pub fn corner(&self) -> Point2 {
        self.corner
    }

    /// Read access to the clip-region registry.
    #[must_use]
    pub fn regions(&self) -> &ClipRegionStore {
        &self.regions
    }

    fn update_position(&mut self, position: Point2) -> &PeelFrame {
        let center = Point2::new(self.width / 2.0, self.height / 2.0);
        let clamped = self.constraints.clamp(
            position,
            self.corner,
            center,
            self.options.flip_constraint_offset,
        );
        trace!("update: position ({}, {})", clamped.x, clamped.y);

        let fold = FoldLine::build(self.corner, clamped, self.width, self.height);

        // Element box: front polygon only, for progress measurement. The
        // maximum front region is half the page, folded corner to corner.
        let element = split_box(&self.element_box, &fold, self.width);
        self.amount_clipped = element.front.area().abs() / (self.width * self.height / 2.0);

        let clip = split_box(&self.clipping_box, &fold, self.width);
        let t = peel_line_distance(&fold, self.width, self.height);

        let progress = self.time_along_path.unwrap_or(self.amount_clipped);
        let opacity = fade_opacity(progress, self.options.fade_threshold);

        let rotation = fold.rotation();
        let has_shape = self.options.clip_shape().is_some();
        let frame = PeelFrame {
            front_clip: self.publish_outline(self.front_region, &clip.front),
            back_clip: self.publish_outline(self.back_region, &clip.back),
            transform: rounded_transform(back_transform(&fold, self.width)),
            top_shadow: top_shadow(t, &self.options.top_shadow, has_shape).map(rounded_shadow),
            back_reflection: rounded_gradient(band_gradient(
                t,
                rotation,
                &self.options.back_reflection,
                GradientColor::White,
            )),
            back_shadow: rounded_gradient(band_gradient(
                t,
                rotation,
                &self.options.back_shadow,
                GradientColor::Black,
            )),
            bottom_shadow: rounded_gradient(bottom_shadow_gradient(
                t,
                rotation,
                &self.options.bottom_shadow,
            )),
            opacity: round2(opacity),
        };

        self.fold = Some(fold);
        self.frame.insert(frame)
    }

    fn publish_outline(&mut self, id: ClipRegionId, polygon: &Polygon) -> ClipOutline {
        let mut rounded = Polygon::new();
        for p in polygon.points() {
            rounded.add_point(Point2::new(round2(p.x), round2(p.y)));
        }
        let points = rounded.points().to_vec();
        self.regions.set_outline(id, rounded);
        let name = self
            .regions
            .get(id)
            .map(|region| region.name().to_owned())
            .unwrap_or_default();
        ClipOutline {
            region: name,
            points,
        }
    }
}

fn rounded_transform(t: BackTransform) -> BackTransform {
    BackTransform {
        translate_x: round2(t.translate_x),
        translate_y: round2(t.translate_y),
        rotate_deg: round2(t.rotate_deg),
    }
}

fn rounded_shadow(s: ShadowStyle) -> ShadowStyle {
    match s {
        ShadowStyle::Box {
            offset_x,
            offset_y,
            blur,
            spread,
            alpha,
        } => ShadowStyle::Box {
            offset_x: round2(offset_x),
            offset_y: round2(offset_y),
            blur: round2(blur),
            spread: round2(spread),
            alpha: round2(alpha),
        },
        ShadowStyle::Drop {
            offset_x,
            offset_y,
            blur,
            alpha,
        } => ShadowStyle::Drop {
            offset_x: round2(offset_x),
            offset_y: round2(offset_y),
            blur: round2(blur),
            alpha: round2(alpha),
        },
    }
}

fn rounded_gradient(g: Gradient) -> Gradient {
    Gradient {
        rotation: round2(g.rotation),
        stops: g
            .stops
            .into_iter()
            .map(|stop| GradientStop {
                color: stop.color,
                alpha: round2(stop.alpha),
                position: round2(stop.position),
            })
            .collect(),
    }
}
