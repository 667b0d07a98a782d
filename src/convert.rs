use std::path::Path;

use anyhow::Context;

use crate::codec::GrayscaleCodec;
use crate::dat::{self, GrayMap};

/// Orchestrates the grayscale conversion path: load a sample file, reshape
/// it into a square map, hand it to the codec.
pub struct Converter {
    show: bool,
    verbose: bool,
}

impl Converter {
    pub fn new() -> Self {
        Self {
            show: false,
            verbose: false,
        }
    }

    /// Open an on-screen preview after saving
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the conversion. Returns the dimensions of the written image.
    pub fn convert(
        &self,
        input: &Path,
        output: &Path,
        codec: &dyn GrayscaleCodec,
    ) -> anyhow::Result<(u32, u32)> {
        if self.verbose {
            println!("Loading samples: {}", input.display());
        }
        let samples = dat::load_samples(input)?;

        if self.verbose {
            println!("Read {} samples", samples.len());
        }
        let map = GrayMap::from_samples(samples)
            .with_context(|| format!("Invalid sample data in {}", input.display()))?;

        if self.verbose {
            println!(
                "Reshaped to {0}x{0}, encoding with {1} codec",
                map.side(),
                codec.name()
            );
        }
        codec.save(&map, output)?;

        if self.show {
            if self.verbose {
                println!("Opening preview...");
            }
            codec.show(&map)?;
        }

        Ok(map.dimensions())
    }
}
