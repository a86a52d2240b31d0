pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{analyze, run_analysis, run_analysis_reported};
pub use types::{Analysis, NoOpReporter, PipelineStage, ProgressReporter};
