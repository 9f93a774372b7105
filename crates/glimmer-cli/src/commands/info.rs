use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use glimmer_core::consts::CHANNELS;
use glimmer_core::io::image_io::load_image;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let buffer = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", buffer.width(), buffer.height());
    println!("Pixels:      {}", buffer.pixel_count());
    println!("Channels:    {} (RGBA, 8-bit)", CHANNELS);
    println!("Samples:     {}", buffer.as_raw().len());

    let size_kb = buffer.as_raw().len() as f64 / 1024.0;
    println!("Decoded:     {:.1} KB", size_kb);

    Ok(())
}
