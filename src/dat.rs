use std::fs;
use std::path::Path;

use crate::error::RasterError;

/// Square 8-bit grayscale raster, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayMap {
    side: u32,
    samples: Vec<u8>,
}

impl GrayMap {
    /// Reshape a flat sample buffer into a square map. The length must be a
    /// perfect square; anything else is rejected rather than truncated or
    /// padded.
    pub fn from_samples(samples: Vec<u8>) -> Result<Self, RasterError> {
        if samples.is_empty() {
            return Err(RasterError::EmptySamples);
        }

        let count = samples.len();
        let side = (count as u64).isqrt();
        if side * side != count as u64 {
            return Err(RasterError::NotSquare {
                count,
                side: side as u32,
                nearest: (side * side) as usize,
            });
        }

        Ok(Self {
            side: side as u32,
            samples,
        })
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    /// Output dimensions, `(width, height)`. Always square.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.side, self.side)
    }

    /// Raw sample bytes, `side * side` of them.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Sample at column `x`, row `y`.
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        assert!(
            x < self.side && y < self.side,
            "sample ({x}, {y}) out of bounds for {0}x{0}",
            self.side
        );
        self.samples[y as usize * self.side as usize + x as usize]
    }
}

/// Read a whitespace-delimited text file of grayscale sample values.
///
/// Values outside [0, 255] are clamped into range; a token that is not an
/// integer at all is an error naming the token and the file.
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<u8>, RasterError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| RasterError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut samples = Vec::new();
    for token in text.split_whitespace() {
        let value: i64 = token.parse().map_err(|_| RasterError::BadSample {
            path: path.to_path_buf(),
            token: token.to_string(),
        })?;
        samples.push(value.clamp(0, 255) as u8);
    }
    Ok(samples)
}
