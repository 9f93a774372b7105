use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use glimmer_core::config::AdjustConfig;
use glimmer_core::io::image_io::load_image;
use glimmer_core::session::Session;

use crate::summary::print_adjust_summary;

#[derive(Args)]
pub struct ApplyArgs {
    /// Input image file (any format the decoder understands)
    pub file: Option<PathBuf>,

    /// Preset file (TOML); command-line flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Brightness offset added to R, G, B (-255 to 255)
    #[arg(long, allow_hyphen_values = true)]
    pub brightness: Option<i32>,

    /// Contrast amount (-255 to 255, 0 = no change)
    #[arg(long, allow_hyphen_values = true)]
    pub contrast: Option<i32>,

    /// Opacity multiplier for alpha (0.0 to 1.0)
    #[arg(long)]
    pub opacity: Option<f64>,

    /// Output file path (png, tiff or bmp)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ApplyArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let input = config
        .input
        .clone()
        .context("No input image given (pass a file or set `input` in the preset)")?;

    print_adjust_summary(&config);

    let source =
        load_image(&input).with_context(|| format!("Failed to load {}", input.display()))?;
    println!("Loaded {}x{} image", source.width(), source.height());

    let mut session = Session::new();
    session.set_params(config.params);

    let start = Instant::now();
    session
        .load(source)
        .with_context(|| format!("Failed to apply {}", config.params))?;
    tracing::debug!(elapsed_ms = start.elapsed().as_millis() as u64, "adjusted");

    session
        .export(&config.output)
        .with_context(|| format!("Failed to save {}", config.output.display()))?;
    println!("Saved to {}", config.output.display());

    Ok(())
}

fn resolve_config(args: &ApplyArgs) -> Result<AdjustConfig> {
    let mut config = if let Some(ref path) = args.config {
        AdjustConfig::load(path)
            .with_context(|| format!("Failed to read preset {}", path.display()))?
    } else {
        AdjustConfig::default()
    };

    if let Some(ref file) = args.file {
        config.input = Some(file.clone());
    }
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }
    if let Some(b) = args.brightness {
        config.params.brightness = b;
    }
    if let Some(c) = args.contrast {
        config.params.contrast = c;
    }
    if let Some(o) = args.opacity {
        config.params.opacity = o;
    }

    Ok(config)
}
