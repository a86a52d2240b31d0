use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pavemap_core::detection::classify;
use pavemap_core::io::save_mask;

use super::ClassifyArgs;

#[derive(Args)]
pub struct PixelsArgs {
    #[command(flatten)]
    pub input: ClassifyArgs,

    /// Output mask image (PNG)
    #[arg(short, long, default_value = "map-pixels.png")]
    pub output: PathBuf,
}

pub fn run(args: &PixelsArgs) -> Result<()> {
    let image = args.input.load()?;
    let config = args.input.classifier_config();

    crate::summary::print_classifier_summary(&config);

    let mask = classify(&image, &config)?;
    let foreground = mask.iter().filter(|&&v| v).count();
    println!(
        "{} of {} pixels classified {}",
        foreground,
        mask.len(),
        config.hue
    );

    save_mask(&mask, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
