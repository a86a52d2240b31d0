use tracing::info;

use crate::detection::{classify, label_components_reported, rank_table, tabulate};
use crate::error::Result;
use crate::io::image_io::{load_raster, save_mask, save_report};
use crate::raster::RasterImage;
use crate::report::{render_report, render_table, visualize};

use super::config::AnalysisConfig;
use super::types::{Analysis, NoOpReporter, PipelineStage, ProgressReporter};

/// Classify, label, rank and visualize an already-decoded image.
pub fn analyze(
    image: &RasterImage,
    config: &AnalysisConfig,
    reporter: &dyn ProgressReporter,
) -> Result<Analysis> {
    config.validate()?;

    reporter.begin_stage(PipelineStage::Classifying, None);
    let mask = classify(image, &config.classifier)?;
    reporter.finish_stage();

    let (labels, component_count) = label_components_reported(&mask, reporter)?;
    info!(components = component_count, "Components labeled");

    reporter.begin_stage(PipelineStage::Ranking, None);
    let table = tabulate(&labels);
    let ranked = rank_table(&table);
    let visualization = visualize(&labels, &ranked, config.top_n);
    reporter.finish_stage();

    Ok(Analysis {
        mask,
        labels,
        component_count,
        table,
        ranked,
        visualization,
    })
}

/// Run the full pipeline without progress reporting.
pub fn run_analysis(config: &AnalysisConfig) -> Result<Analysis> {
    run_analysis_reported(config, &NoOpReporter)
}

/// Load the configured input, analyse it and write every configured output.
pub fn run_analysis_reported(
    config: &AnalysisConfig,
    reporter: &dyn ProgressReporter,
) -> Result<Analysis> {
    reporter.begin_stage(PipelineStage::Reading, None);
    let image = load_raster(&config.input)?;
    reporter.finish_stage();
    info!(
        input = %config.input.display(),
        width = image.width(),
        height = image.height(),
        hue = %config.classifier.hue,
        "Image loaded"
    );

    let analysis = analyze(&image, config, reporter)?;

    let outputs = &config.outputs;
    reporter.begin_stage(PipelineStage::Writing, None);
    if let Some(ref path) = outputs.mask {
        save_mask(&analysis.mask, path)?;
        info!(output = %path.display(), "Mask saved");
    }
    if let Some(ref path) = outputs.components_report {
        save_report(&render_table(&analysis.table), path)?;
        info!(output = %path.display(), "Component report saved");
    }
    if let Some(ref path) = outputs.ranked_report {
        save_report(&render_report(&analysis.ranked), path)?;
        info!(output = %path.display(), "Ranked report saved");
    }
    if let Some(ref path) = outputs.visualization {
        save_mask(&analysis.visualization, path)?;
        info!(output = %path.display(), top_n = config.top_n, "Visualization saved");
    }
    reporter.finish_stage();

    Ok(analysis)
}
