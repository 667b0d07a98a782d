use std::path::Path;
use std::process::Command;

use image::GrayImage;

use crate::dat::GrayMap;

/// Narrow seam over the external image codec so the conversion path can be
/// exercised against a stub instead of a real encoder.
pub trait GrayscaleCodec: Send + Sync {
    /// Encode the map as an 8-bit grayscale image and write it to `path`.
    fn save(&self, map: &GrayMap, path: &Path) -> anyhow::Result<()>;

    /// Open an on-screen preview of the map.
    fn show(&self, map: &GrayMap) -> anyhow::Result<()>;

    /// Human-readable codec name (used in verbose output)
    fn name(&self) -> &str;
}

/// Production codec backed by the `image` crate.
pub struct PngCodec;

impl GrayscaleCodec for PngCodec {
    fn save(&self, map: &GrayMap, path: &Path) -> anyhow::Result<()> {
        let img = to_gray_image(map)?;
        img.save(path)
            .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", path.display(), e))?;
        Ok(())
    }

    fn show(&self, map: &GrayMap) -> anyhow::Result<()> {
        let img = to_gray_image(map)?;
        let file = tempfile::Builder::new().suffix(".png").tempfile()?;
        img.save_with_format(file.path(), image::ImageFormat::Png)
            .map_err(|e| anyhow::anyhow!("Failed to save preview image: {}", e))?;

        // The viewer is launched asynchronously, so the preview file has to
        // outlive this call.
        let (_file, path) = file.keep()?;
        open_viewer(&path)
    }

    fn name(&self) -> &str {
        "png"
    }
}

fn to_gray_image(map: &GrayMap) -> anyhow::Result<GrayImage> {
    GrayImage::from_raw(map.side(), map.side(), map.samples().to_vec())
        .ok_or_else(|| anyhow::anyhow!("grayscale buffer does not match {0}x{0}", map.side()))
}

fn open_viewer(path: &Path) -> anyhow::Result<()> {
    let status = if cfg!(target_os = "macos") {
        Command::new("open").arg(path).status()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", ""]).arg(path).status()
    } else {
        Command::new("xdg-open").arg(path).status()
    }
    .map_err(|e| anyhow::anyhow!("Failed to launch image viewer: {}", e))?;

    if !status.success() {
        anyhow::bail!("image viewer exited with {}", status);
    }
    Ok(())
}
