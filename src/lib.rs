//! A 2D page-peel effect geometry engine.
//!
//! Given a container's extents, an anchor corner, optional hinge
//! constraints, and a peel position, the engine computes the fold line, the
//! front/back clip polygons, and the shadow, gradient, transform, and fade
//! parameters a renderer needs to draw a plausible page peel. It never
//! touches a rendering surface itself; every update emits a complete
//! [`output::PeelFrame`] of values for one to consume.

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod math;
pub mod output;
pub mod registry;

pub use config::{Corner, PeelOptions, PeelTarget, Preset};
pub use controller::PeelController;
pub use engine::PeelPath;
pub use error::{PeelError, Result};
pub use output::PeelFrame;
