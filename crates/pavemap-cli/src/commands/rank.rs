use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pavemap_core::consts::DEFAULT_TOP_N;
use pavemap_core::detection::{classify, label_components_reported, rank};
use pavemap_core::io::{save_mask, save_report};
use pavemap_core::report::{render_report, visualize};

use super::ClassifyArgs;
use crate::progress::BarReporter;

#[derive(Args)]
pub struct RankArgs {
    #[command(flatten)]
    pub input: ClassifyArgs,

    /// Number of largest components to visualize
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Output report file
    #[arg(short, long, default_value = "cc-output-2b.txt")]
    pub output: PathBuf,

    /// Visualization of the largest components (PNG)
    #[arg(long)]
    pub visualization: Option<PathBuf>,
}

pub fn run(args: &RankArgs) -> Result<()> {
    let image = args.input.load()?;
    let config = args.input.classifier_config();

    crate::summary::print_classifier_summary(&config);

    let mask = classify(&image, &config)?;
    let reporter = BarReporter::new();
    let (labels, _count) = label_components_reported(&mask, &reporter)?;
    drop(reporter);
    let ranked = rank(&labels);

    let report = render_report(&ranked);
    println!("\n{}", report);

    save_report(&report, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("\nReport saved to {}", args.output.display());

    if let Some(ref path) = args.visualization {
        let top = visualize(&labels, &ranked, args.top);
        save_mask(&top, path).with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            "Top {} component(s) saved to {}",
            args.top.min(ranked.len()),
            path.display()
        );
    }

    Ok(())
}
