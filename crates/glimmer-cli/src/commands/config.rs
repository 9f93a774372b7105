use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use glimmer_core::config::AdjustConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the preset to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a default AdjustConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = AdjustConfig {
        input: Some(PathBuf::from("input.png")),
        ..AdjustConfig::default()
    };
    let toml_str = config.to_toml_string()?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write preset to {}", path.display()))?;
        println!("Default preset saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
