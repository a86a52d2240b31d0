use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use ndarray::Array3;

use crate::consts::{MASK_FOREGROUND_LEVEL, MIN_CHANNEL_COUNT};
use crate::error::{PavemapError, Result};
use crate::raster::{BinaryMask, RasterImage};

/// Load an image file into an RGB raster with values in [0.0, 1.0].
///
/// Grayscale sources (with or without alpha) are rejected, since they carry
/// fewer than three color channels. Alpha is dropped.
pub fn load_raster(path: &Path) -> Result<RasterImage> {
    let img = image::open(path)?;
    if !img.color().has_color() {
        // Luma images report 1 channel, LumaA 2.
        return Err(PavemapError::MissingChannels {
            found: img.color().channel_count() as usize,
            required: MIN_CHANNEL_COUNT,
        });
    }

    let rgb = img.to_rgb32f();
    let (w, h) = rgb.dimensions();
    let mut data = Array3::<f32>::zeros((h as usize, w as usize, 3));

    for row in 0..h as usize {
        for col in 0..w as usize {
            let pixel = rgb.get_pixel(col as u32, row as u32);
            for ch in 0..3 {
                data[[row, col, ch]] = pixel.0[ch].clamp(0.0, 1.0);
            }
        }
    }

    Ok(RasterImage::new(data))
}

/// Save a binary mask as an 8-bit grayscale PNG (foreground white, background black).
pub fn save_mask(mask: &BinaryMask, path: &Path) -> Result<()> {
    let (h, w) = mask.dim();

    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let val = if mask[[row, col]] { MASK_FOREGROUND_LEVEL } else { 0 };
            img.put_pixel(col as u32, row as u32, Luma([val]));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Write a rendered report to a text file.
pub fn save_report(report: &str, path: &Path) -> Result<()> {
    std::fs::write(path, report)?;
    Ok(())
}
