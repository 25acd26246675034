// src/bin/skillscope.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use skillscope_core::config::PipelineConfig;
use skillscope_core::pipeline;
use skillscope_core::seniority::Level;

#[derive(Parser)]
#[command(name = "skillscope")]
#[command(about = "Skill extraction and seniority analysis over job-description corpora")]
struct Cli {
    /// Corpus input: a ###END###-delimited dump file or a directory of .txt/.md files
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Skill taxonomy JSON (group -> canonical -> aliases)
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    /// Seniority keyword override JSON (tuned defaults apply otherwise)
    #[arg(long)]
    keywords: Option<PathBuf>,

    /// Output directory for universe.json and the CSV exports
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Minimum occurrences for a node/edge to survive filtering
    #[arg(long)]
    threshold: Option<u32>,

    /// Leading/trailing line window for title detection
    #[arg(long)]
    window: Option<usize>,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn apply_overrides(config: &mut PipelineConfig, cli: &Cli) {
    if let Some(input) = &cli.input {
        config.input = input.clone();
    }
    if let Some(taxonomy) = &cli.taxonomy {
        config.taxonomy = taxonomy.clone();
    }
    if let Some(keywords) = &cli.keywords {
        config.keywords = Some(keywords.clone());
    }
    if let Some(output) = &cli.output {
        config.output_dir = output.clone();
    }
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }
    if let Some(window) = cli.window {
        config.search_window = window;
    }
}

fn print_summary(summary: &pipeline::RunSummary, config: &PipelineConfig) {
    println!("---------------------------------------------------");
    println!(
        "{}",
        format!(
            "Done! Processed {} documents into {} skills and {} edges (threshold: {}).",
            summary.documents, summary.nodes, summary.edges, config.threshold
        )
        .green()
        .bold()
    );
    println!("Seniority distribution:");
    for level in Level::ALL {
        let count = summary.level_counts[level.index()];
        println!("  - {}: {}", level.as_str().cyan(), count);
    }
    println!("Outputs written to {}", config.output_dir.display());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = PipelineConfig::load();
    apply_overrides(&mut config, &cli);

    match pipeline::run(&config)? {
        Some(summary) => {
            print_summary(&summary, &config);
            Ok(())
        }
        None => {
            println!(
                "{}",
                "No documents to analyze. Nothing was written.".yellow()
            );
            process::exit(0);
        }
    }
}
