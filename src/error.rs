//! Crate-wide error type.
//!
//! Every failure is surfaced to the caller as-is; nothing is retried or
//! partially recovered. Channel arithmetic that leaves `[0, 255]` is not an
//! error (see [`crate::transform::blend`]).
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Header or channel token could not be parsed as an integer.
    #[error("malformed pixel map: {0}")]
    Format(String),

    #[error("pixel map truncated: expected {expected} channel values, found {found}")]
    TruncatedInput { expected: usize, found: usize },

    /// Dimensions are reported as `(width, height)`.
    #[error("dimension mismatch: {}x{} vs {}x{}", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("invalid dimensions {width}x{height}: width and height must be >= 1")]
    InvalidDimension { width: usize, height: usize },

    #[error("invalid step count {0}: a morph needs at least 2 frames")]
    InvalidStepCount(usize),

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Renderer used out of order, e.g. drawing before the canvas is sized.
    #[error("render error: {0}")]
    Render(String),

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
