use std::io;
use std::path::PathBuf;

/// Errors produced by the raster, PPM, and sample-loading modules.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("invalid raster dimensions {width}x{height}: width and height must be positive")]
    InvalidDimension { width: i64, height: i64 },

    /// Declared raster size and actual byte count disagree. This is a
    /// programming defect in the caller, not a recoverable condition.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("{}: {token:?} is not a grayscale sample value", path.display())]
    BadSample { path: PathBuf, token: String },

    #[error("sample data is empty")]
    EmptySamples,

    #[error("{count} samples do not form a square image (nearest square is {side}x{side} = {nearest})")]
    NotSquare {
        count: usize,
        side: u32,
        nearest: usize,
    },

    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}
