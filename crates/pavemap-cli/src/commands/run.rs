use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pavemap_core::pipeline::config::AnalysisConfig;
use pavemap_core::pipeline::run_analysis_reported;
use tracing::debug;

use crate::progress::BarReporter;

#[derive(Args)]
pub struct RunArgs {
    /// Analysis config file (TOML)
    #[arg(long)]
    pub config: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read config {}", args.config.display()))?;
    let config: AnalysisConfig = toml::from_str(&contents).context("Invalid analysis config")?;
    debug!(config = ?config, "Analysis config loaded");

    crate::summary::print_analysis_summary(&config);

    let reporter = BarReporter::new();
    let analysis = run_analysis_reported(&config, &reporter)?;
    drop(reporter);

    println!(
        "\nTotal number of connected components = {}",
        analysis.component_count
    );
    for (rank, component) in analysis.ranked.iter().take(config.top_n).enumerate() {
        println!(
            "  #{} Connected Component {}, number of pixels = {}",
            rank + 1,
            component.label,
            component.pixels
        );
    }

    Ok(())
}
