use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pavemap_core::detection::ClassifierConfig;
use pavemap_core::pipeline::config::{AnalysisConfig, OutputConfig};

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a full default AnalysisConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let mut config = AnalysisConfig::new(PathBuf::from("map.png"), ClassifierConfig::default());
    config.outputs = OutputConfig {
        mask: Some(PathBuf::from("map-red-pixels.png")),
        components_report: Some(PathBuf::from("cc-output-2a.txt")),
        ranked_report: Some(PathBuf::from("cc-output-2b.txt")),
        visualization: Some(PathBuf::from("top-components.png")),
    };
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
