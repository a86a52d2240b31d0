use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pavemap_core::detection::{classify, label_components_reported, tabulate};
use pavemap_core::io::save_report;
use pavemap_core::report::render_table;

use super::ClassifyArgs;
use crate::progress::BarReporter;

#[derive(Args)]
pub struct ComponentsArgs {
    #[command(flatten)]
    pub input: ClassifyArgs,

    /// Output report file
    #[arg(short, long, default_value = "cc-output-2a.txt")]
    pub output: PathBuf,
}

pub fn run(args: &ComponentsArgs) -> Result<()> {
    let image = args.input.load()?;
    let config = args.input.classifier_config();

    crate::summary::print_classifier_summary(&config);

    let mask = classify(&image, &config)?;
    let reporter = BarReporter::new();
    let (labels, _count) = label_components_reported(&mask, &reporter)?;
    drop(reporter);

    let report = render_table(&tabulate(&labels));
    println!("\n{}", report);

    save_report(&report, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("\nReport saved to {}", args.output.display());

    Ok(())
}
