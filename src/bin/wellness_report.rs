//! CLI for u-wellness.
//!
//! Generates the synthetic sample, runs the scoring/ranking/recommendation
//! pipeline, prints the top rows and writes the CSV report.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use u_wellness::knapsack::Catalog;
use u_wellness::pipeline::{Pipeline, PipelineConfig};
use u_wellness::rank::SortOrder;
use u_wellness::recommend::RecommendConfig;
use u_wellness::report;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of synthetic records to generate
    #[arg(long, default_value = "22")]
    records: usize,

    /// Base time budget per person, in minutes
    #[arg(long, default_value = "30")]
    budget: u32,

    /// Rank lowest stress first instead of highest
    #[arg(long)]
    ascending: bool,

    /// Path of the CSV report
    #[arg(long, default_value = "wellness_report.csv")]
    output: PathBuf,

    /// Skip writing the CSV report
    #[arg(long)]
    no_save: bool,

    /// Number of rows to print
    #[arg(long, default_value = "5")]
    top: usize,

    /// Build recommendations in parallel (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let order = if cli.ascending {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    };
    let config = PipelineConfig::default()
        .with_n_records(cli.records)
        .with_sort_order(order)
        .with_recommend(
            RecommendConfig::default()
                .with_base_time_budget(cli.budget)
                .with_parallel(cli.parallel),
        );

    let out = Pipeline::run_generated(&Catalog::default_interventions(), &config)
        .context("pipeline failed")?;

    println!("Top {} people by stress index (with recommendations):", cli.top);
    print!("{}", report::render_table(&out.rows, cli.top));

    if !cli.no_save {
        report::save_csv(&out.rows, &cli.output)
            .with_context(|| format!("failed to write {}", cli.output.display()))?;
        println!("\nReport saved to: {}", cli.output.display());
    }

    Ok(())
}
