// In app/src/main.rs (REPLACE ENTIRE FILE)

use std::path::Path;

use anyhow::{Context, Result};
use app_config::Settings;
use clap::{Parser, Subcommand};
use pipeline::{AnalysisReport, Pipeline};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

mod summary;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Moving-average trend analysis over a daily price series."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs the whole pipeline: load prices, analyze, print the summary,
    /// export the table and render the chart.
    Run,

    /// Loads prices and prints the analysis summary without writing any files.
    Summary,
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = app_config::load_settings().context("Failed to load settings")?;
    init_tracing(&settings.app.log_level);

    tracing::info!("Starting trend analyzer");

    match cli.command {
        Commands::Run => handle_run(&settings)?,
        Commands::Summary => handle_summary(&settings)?,
    }

    tracing::info!("Trend analyzer has finished successfully.");

    Ok(())
}

fn init_tracing(log_level: &str) {
    let level = log_level.parse::<tracing::Level>().unwrap_or(tracing::Level::INFO);
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();
}

/// Loads the configured price file and runs the pipeline over it.
fn analyze(settings: &Settings) -> Result<AnalysisReport> {
    let prices = reporting::load_prices(&settings.io.input_path)
        .with_context(|| format!("Failed to load prices from {}", settings.io.input_path.display()))?;

    let pipeline = Pipeline::new(settings.analysis)?;
    let report = pipeline.run(&prices).context("Trend analysis failed")?;
    Ok(report)
}

// --- "Run" Subcommand Logic ---

fn handle_run(settings: &Settings) -> Result<()> {
    // --- 1. Analysis ---
    let report = analyze(settings)?;
    summary::print_summary(&report);

    // --- 2. Table export ---
    let output_path = &settings.io.output_path;
    ensure_parent_dir(output_path)?;
    reporting::export_table(output_path, &report)?;
    println!("Analysis exported to {}", output_path.display());

    // --- 3. Chart ---
    let chart_path = &settings.io.chart_path;
    ensure_parent_dir(chart_path)?;
    reporting::render_chart(chart_path, &report)?;
    println!("Chart rendered to {}", chart_path.display());

    Ok(())
}

// --- "Summary" Subcommand Logic ---

fn handle_summary(settings: &Settings) -> Result<()> {
    let report = analyze(settings)?;
    summary::print_summary(&report);
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display())),
        _ => Ok(()),
    }
}
