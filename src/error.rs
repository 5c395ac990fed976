use thiserror::Error;

/// Top-level error type for the pagepeel engine.
#[derive(Debug, Error)]
pub enum PeelError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    State(#[from] StateError),
}

/// Errors raised while validating configuration at setup time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("container dimensions must be positive, got {width} x {height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("at most one custom clip shape may be configured, got {count}")]
    MultipleClipShapes { count: usize },

    #[error("clipping box scale must be positive, got {scale}")]
    InvalidClippingBoxScale { scale: f64 },

    #[error("a peel path takes 4 (line) or 8 (bezier) coordinates, got {count}")]
    InvalidPathCoordinates { count: usize },
}

/// Errors raised when an operation is invalid for the current peel state.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("no peel path configured; set a path before driving it by time")]
    PathNotConfigured,
}

/// Convenience type alias for results using [`PeelError`].
pub type Result<T> = std::result::Result<T, PeelError>;
