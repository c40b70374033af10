// ─────────────────────────────────────────────────────────────────────
// SCPN Decay Lab — CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Command-line front end: scenario runs, chart rendering, table checks.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use decay_chart::svg::{render_chart, ChartStyle};
use decay_core::driver::run_scenario;
use decay_types::scenario::Scenario;
use decay_types::table::IsotopeTable;
use tracing::info;

/// SCPN decay-chain simulator.
#[derive(Parser)]
#[command(name = "decay-cli")]
#[command(version, about = "Deterministic radioactive decay chain simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario and render the recorded series.
    Run(RunArgs),
    /// Validate a reference table and scenarios without running them.
    Check(CheckArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Path to the isotope reference table.
    #[arg(short, long, default_value = "isotopes.json")]
    table: String,

    /// Path to the scenario file.
    #[arg(short, long)]
    scenario: String,

    /// Output path for the SVG chart.
    #[arg(short, long, default_value = "decay_chart.svg")]
    chart: String,

    /// Optional output path for the recorded series as JSON.
    #[arg(short, long)]
    json: Option<String>,
}

#[derive(Args)]
struct CheckArgs {
    /// Path to the isotope reference table.
    #[arg(short, long, default_value = "isotopes.json")]
    table: String,

    /// Scenario files to vet against the table (repeatable).
    #[arg(short, long)]
    scenario: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Check(args) => check(args),
    }
}

/// Simulate one scenario, write the chart and optional series dump.
fn run(args: RunArgs) -> Result<()> {
    let table = IsotopeTable::from_file(&args.table)
        .with_context(|| format!("Failed to load reference table: {}", args.table))?;
    info!(table = %args.table, isotopes = table.len(), "reference table loaded");

    let scenario = Scenario::from_file(&args.scenario)
        .with_context(|| format!("Failed to load scenario: {}", args.scenario))?;
    info!(scenario = %scenario.name, divisions = scenario.divisions, "scenario loaded");

    let history = run_scenario(&table, &scenario)
        .with_context(|| format!("Scenario '{}' failed", scenario.name))?;

    let svg = render_chart(&history, &ChartStyle::default());
    std::fs::write(&args.chart, svg)
        .with_context(|| format!("Failed to write chart: {}", args.chart))?;
    info!(chart = %args.chart, "chart written");

    if let Some(json_path) = &args.json {
        let dump = serde_json::to_string_pretty(&history)
            .context("Failed to serialize recorded series")?;
        std::fs::write(json_path, dump)
            .with_context(|| format!("Failed to write series dump: {}", json_path))?;
        info!(json = %json_path, "series dump written");
    }

    println!("\n=== RUN COMPLETE ===");
    println!("Scenario:  {}", scenario.name);
    println!(
        "Timespan:  {} {} in {} steps",
        scenario.duration.0, scenario.duration.1, scenario.divisions
    );
    println!("Species:   {}", history.series.len());
    println!("\nFinal recorded fractions:");
    for identifier in history.isotopes() {
        if let Some((_, fraction)) = history
            .series_for(identifier)
            .and_then(|samples| samples.last())
        {
            println!("  {:<10} {:.6}", identifier, fraction);
        }
    }
    println!("\nChart: {}", args.chart);
    Ok(())
}

/// Load and validate the table, report its entries, then vet scenarios.
fn check(args: CheckArgs) -> Result<()> {
    let table = IsotopeTable::from_file(&args.table)
        .with_context(|| format!("Failed to load reference table: {}", args.table))?;

    println!("=== REFERENCE TABLE OK ===");
    println!("Table: {} ({} isotopes)", args.table, table.len());
    for (identifier, spec) in table.iter() {
        println!("  {:<10} half-life {:.4e} s", identifier, spec.half_life_s);
        for (daughter, fraction) in &spec.daughters {
            let note = if table.contains(daughter) {
                ""
            } else {
                "  (stable, chain ends)"
            };
            println!("    -> {:<10} branch {:.4}{}", daughter, fraction, note);
        }
    }

    for path in &args.scenario {
        let scenario = Scenario::from_file(path)
            .with_context(|| format!("Failed to load scenario: {}", path))?;
        println!("\n=== SCENARIO OK: {} ===", scenario.name);
        println!("File: {}", path);
        println!(
            "Timespan: {} {} in {} steps",
            scenario.duration.0, scenario.duration.1, scenario.divisions
        );
        for (identifier, fraction) in &scenario.seeds {
            let note = if table.contains(identifier) {
                ""
            } else {
                "  (not in table: treated as stable)"
            };
            println!("  seed {:<10} {:.4}{}", identifier, fraction, note);
        }
    }
    Ok(())
}
