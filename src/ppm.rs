use std::io::Write;
use std::path::Path;

use crate::error::RasterError;
use crate::raster::Raster;

// http://netpbm.sourceforge.net/doc/ppm.html

/// Serialize a pixel buffer into the binary PPM (P6) wire form: the ASCII
/// header `P6\n<width> <height>\n255\n` followed immediately by the raw RGB
/// bytes, no padding, no trailing data.
pub fn encode(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>, RasterError> {
    let expected = u64::from(width) * u64::from(height) * 3;
    if pixels.len() as u64 != expected {
        return Err(RasterError::DimensionMismatch {
            expected: expected as usize,
            actual: pixels.len(),
        });
    }

    let header = format!("P6\n{} {}\n255\n", width, height);
    let mut bytes = Vec::with_capacity(header.len() + pixels.len());
    bytes.extend_from_slice(header.as_bytes());
    bytes.extend_from_slice(pixels);
    Ok(bytes)
}

/// Write a raster to `path` as a P6 file.
///
/// The write is atomic from the caller's perspective: bytes go to a
/// temporary file in the destination directory and are renamed into place
/// once fully flushed, so no partial file is ever observable at `path`.
pub fn write(path: impl AsRef<Path>, raster: &Raster) -> Result<(), RasterError> {
    write_bytes(path, raster.width(), raster.height(), raster.pixels())
}

/// Same as [`write`], for callers holding raw parts instead of a [`Raster`].
pub fn write_bytes(
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<(), RasterError> {
    let path = path.as_ref();
    let bytes = encode(width, height, pixels)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|source| RasterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tmp.write_all(&bytes).map_err(|source| RasterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tmp.persist(path).map_err(|e| RasterError::Io {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
