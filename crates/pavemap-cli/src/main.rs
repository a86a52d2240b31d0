mod commands;
mod progress;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pavemap", about = "Color-threshold component analysis for map images")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify pixels by hue and save the binary mask
    Pixels(commands::pixels::PixelsArgs),
    /// Label connected components and list them in discovery order
    Components(commands::components::ComponentsArgs),
    /// Rank connected components by size and visualize the largest
    Rank(commands::rank::RankArgs),
    /// Run the full analysis from a config file
    Run(commands::run::RunArgs),
    /// Print or save a default analysis config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Pixels(args) => commands::pixels::run(args),
        Commands::Components(args) => commands::components::run(args),
        Commands::Rank(args) => commands::rank::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
