use ndarray::Array2;
use tracing::debug;

use crate::consts::{CHANNEL_MAX, MIN_CHANNEL_COUNT};
use crate::error::{PavemapError, Result};
use crate::raster::{BinaryMask, RasterImage};

use super::config::{ClassifierConfig, Hue};

/// Classify every pixel of `image` as foreground (true) or background (false).
///
/// Channel values are rescaled from [0.0, 1.0] to the integer range 0..=255
/// before being compared with the thresholds. All comparisons are strict, so a
/// channel sitting exactly on a threshold never counts as foreground.
pub fn classify(image: &RasterImage, config: &ClassifierConfig) -> Result<BinaryMask> {
    let (h, w) = (image.height(), image.width());
    if h == 0 || w == 0 {
        return Err(PavemapError::InvalidDimensions {
            width: w,
            height: h,
        });
    }
    if image.channels() < MIN_CHANNEL_COUNT {
        return Err(PavemapError::MissingChannels {
            found: image.channels(),
            required: MIN_CHANNEL_COUNT,
        });
    }
    config.validate()?;

    let data = &image.data;
    let mask = Array2::from_shape_fn((h, w), |(row, col)| {
        let r = to_channel_scale(data[[row, col, 0]]);
        let g = to_channel_scale(data[[row, col, 1]]);
        let b = to_channel_scale(data[[row, col, 2]]);
        is_foreground(config, r, g, b)
    });

    debug!(
        hue = %config.hue,
        foreground = mask.iter().filter(|&&v| v).count(),
        "Pixel classification complete"
    );
    Ok(mask)
}

/// Hue predicate on channel values already on the 0..=255 scale.
pub fn is_foreground(config: &ClassifierConfig, r: i32, g: i32, b: i32) -> bool {
    let upper = config.upper_threshold;
    let lower = config.lower_threshold;
    match config.hue {
        Hue::Red => r > upper && g < lower && b < lower,
        Hue::Cyan => r < lower && g > upper && b > upper,
    }
}

/// Map a normalized channel value onto the integer threshold scale.
pub fn to_channel_scale(value: f32) -> i32 {
    let scaled = (value.clamp(0.0, 1.0) * CHANNEL_MAX as f32).round();
    scaled as i32
}
