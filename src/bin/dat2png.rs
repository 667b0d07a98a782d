use clap::Parser;
use std::path::PathBuf;

use rastergen::codec::PngCodec;
use rastergen::convert::Converter;

#[derive(Parser)]
#[command(name = "dat2png")]
#[command(about = "Convert a whitespace-delimited grayscale sample file to a PNG image")]
struct Cli {
    /// Path to the input sample file (e.g., lena.dat)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output image path (default: the input path with a .png extension)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Open an on-screen preview after saving
    #[arg(long)]
    show: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("png"));

    let converter = Converter::new()
        .with_show(args.show)
        .with_verbose(args.verbose);
    let (width, height) = converter.convert(&args.input, &output, &PngCodec)?;

    println!("Saved {} ({}x{})", output.display(), width, height);
    Ok(())
}
