use serde::{Deserialize, Serialize};

use crate::consts::{CHANNEL_MAX, DEFAULT_LOWER_THRESHOLD, DEFAULT_UPPER_THRESHOLD};
use crate::error::{PavemapError, Result};

/// Which color the classifier treats as foreground.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    /// Strong red, weak green and blue.
    #[default]
    Red,
    /// Weak red, strong green and blue.
    Cyan,
}

impl std::fmt::Display for Hue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "Red"),
            Self::Cyan => write!(f, "Cyan"),
        }
    }
}

/// Thresholds for pixel classification, on the 0..=255 channel scale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub hue: Hue,
    /// A dominant channel must be strictly above this value.
    #[serde(default = "default_upper_threshold")]
    pub upper_threshold: i32,
    /// The other channels must be strictly below this value.
    #[serde(default = "default_lower_threshold")]
    pub lower_threshold: i32,
}

fn default_upper_threshold() -> i32 {
    DEFAULT_UPPER_THRESHOLD
}
fn default_lower_threshold() -> i32 {
    DEFAULT_LOWER_THRESHOLD
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            hue: Hue::default(),
            upper_threshold: DEFAULT_UPPER_THRESHOLD,
            lower_threshold: DEFAULT_LOWER_THRESHOLD,
        }
    }
}

impl ClassifierConfig {
    pub fn new(hue: Hue) -> Self {
        Self {
            hue,
            ..Default::default()
        }
    }

    /// Reject thresholds outside the channel scale.
    ///
    /// `lower_threshold >= upper_threshold` is accepted; it only makes the
    /// classifier unlikely to flag anything.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("upper_threshold", self.upper_threshold),
            ("lower_threshold", self.lower_threshold),
        ] {
            if !(0..=CHANNEL_MAX).contains(&value) {
                return Err(PavemapError::InvalidConfig(format!(
                    "{name} = {value} is outside 0..={CHANNEL_MAX}"
                )));
            }
        }
        Ok(())
    }
}
