use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_TOP_N;
use crate::detection::ClassifierConfig;
use crate::error::Result;

/// Full configuration for one analysis run, loadable from TOML.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Image to analyse.
    pub input: PathBuf,
    /// Number of largest components shown in the visualization.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub outputs: OutputConfig,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl AnalysisConfig {
    pub fn new(input: PathBuf, classifier: ClassifierConfig) -> Self {
        Self {
            input,
            top_n: DEFAULT_TOP_N,
            classifier,
            outputs: OutputConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.classifier.validate()
    }
}

/// Artifacts written by [`run_analysis`](super::run_analysis). Unset paths are skipped.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Classified pixel mask (PNG).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<PathBuf>,
    /// Components in discovery order (text).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components_report: Option<PathBuf>,
    /// Components by descending size (text).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranked_report: Option<PathBuf>,
    /// Top-N component mask (PNG).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualization: Option<PathBuf>,
}
