/// Default threshold a dominant channel must exceed (on the 0..=255 scale).
pub const DEFAULT_UPPER_THRESHOLD: i32 = 100;

/// Default threshold the remaining channels must stay below (on the 0..=255 scale).
pub const DEFAULT_LOWER_THRESHOLD: i32 = 50;

/// Default number of largest components kept in the visualization.
pub const DEFAULT_TOP_N: usize = 2;

/// Largest value on the integer channel scale that thresholds are compared on.
pub const CHANNEL_MAX: i32 = 255;

/// Minimum channel count (R, G, B) a raster must carry to be classified.
pub const MIN_CHANNEL_COUNT: usize = 3;

/// Number of progress checkpoints emitted while labeling (one per 10% of rows).
pub const LABEL_PROGRESS_CHECKPOINTS: usize = 10;

/// Gray level written for foreground cells when saving a mask image.
pub const MASK_FOREGROUND_LEVEL: u8 = 255;
