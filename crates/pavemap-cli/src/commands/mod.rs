pub mod components;
pub mod config;
pub mod pixels;
pub mod rank;
pub mod run;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use pavemap_core::consts::{DEFAULT_LOWER_THRESHOLD, DEFAULT_UPPER_THRESHOLD};
use pavemap_core::detection::{ClassifierConfig, Hue};
use pavemap_core::io::load_raster;
use pavemap_core::raster::RasterImage;

#[derive(Clone, Copy, ValueEnum)]
pub enum HueArg {
    Red,
    Cyan,
}

/// Input image and classification options shared by the analysis commands.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Input image file (PNG, JPEG, TIFF, ...)
    pub file: PathBuf,

    /// Hue treated as foreground
    #[arg(long, value_enum, default_value = "red")]
    pub hue: HueArg,

    /// Value (0-255) the dominant channel(s) must exceed
    #[arg(long, default_value_t = DEFAULT_UPPER_THRESHOLD)]
    pub upper: i32,

    /// Value (0-255) the remaining channel(s) must stay below
    #[arg(long, default_value_t = DEFAULT_LOWER_THRESHOLD)]
    pub lower: i32,
}

impl ClassifyArgs {
    pub fn classifier_config(&self) -> ClassifierConfig {
        let hue = match self.hue {
            HueArg::Red => Hue::Red,
            HueArg::Cyan => Hue::Cyan,
        };
        ClassifierConfig {
            hue,
            upper_threshold: self.upper,
            lower_threshold: self.lower,
        }
    }

    pub fn load(&self) -> Result<RasterImage> {
        load_image(&self.file)
    }
}

fn load_image(path: &Path) -> Result<RasterImage> {
    let image =
        load_raster(path).with_context(|| format!("Failed to load {}", path.display()))?;
    println!("Loaded {}x{} image", image.width(), image.height());
    Ok(image)
}
