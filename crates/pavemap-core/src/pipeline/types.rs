use crate::detection::{ComponentTable, RankedComponents};
use crate::raster::{BinaryMask, LabelGrid};

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Reading,
    Classifying,
    Labeling,
    Ranking,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => write!(f, "Reading image"),
            Self::Classifying => write!(f, "Classifying pixels"),
            Self::Labeling => write!(f, "Labeling components"),
            Self::Ranking => write!(f, "Ranking components"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Everything produced by one run of the analysis pipeline.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// Foreground mask from the classifier.
    pub mask: BinaryMask,
    /// Component label per cell.
    pub labels: LabelGrid,
    /// Number of components found (equal to the largest label).
    pub component_count: u32,
    /// Pixel count per label, in discovery order.
    pub table: ComponentTable,
    /// Components by descending size.
    pub ranked: RankedComponents,
    /// Cells belonging to the top-N components.
    pub visualization: BinaryMask,
}

/// Progress observation for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. Reporters only observe; they cannot stop a stage. All methods
/// have default no-op implementations.
pub trait ProgressReporter {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (e.g., image rows), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// `items_done` work items within the current stage have completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// Reporter that ignores every event.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
