use clap::Parser;
use std::path::PathBuf;

use rastergen::error::RasterError;
use rastergen::ppm;
use rastergen::raster::Raster;

#[derive(Parser)]
#[command(name = "rastergen")]
#[command(about = "Generate a small binary PPM (P6) gradient test image")]
struct Cli {
    /// Output PPM path (e.g., sample_color.ppm)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 8, allow_negative_numbers = true)]
    width: i64,

    /// Image height in pixels
    #[arg(long, default_value_t = 8, allow_negative_numbers = true)]
    height: i64,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // The library models dimensions as u32; reject non-positive values here
    // so `--width -3` reports the same failure as `--width 0`.
    let (Ok(width), Ok(height)) = (u32::try_from(args.width), u32::try_from(args.height)) else {
        return Err(RasterError::InvalidDimension {
            width: args.width,
            height: args.height,
        }
        .into());
    };

    let raster = Raster::gradient(width, height)?;
    ppm::write(&args.output, &raster)?;

    println!(
        "Wrote {} ({}x{})",
        args.output.display(),
        raster.width(),
        raster.height()
    );
    Ok(())
}
