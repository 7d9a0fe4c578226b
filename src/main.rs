//! `esg-riskr` — classify investment and fraud risk from ESG metrics.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Load and clean the reference dataset ([`dataset`]).
//! 4. Compute dataset averages, optionally per sector.
//! 5. Collect the four scores from flags or interactive prompts ([`input`]).
//! 6. Classify ([`risk::classifier`]).
//! 7. Render the requested report ([`report`]), plus an optional PNG chart.

mod cli;
mod config;
mod dataset;
mod input;
mod models;
mod report;
mod risk;

use anyhow::{anyhow, Result};
use clap::Parser;
use colored::Colorize;

use cli::{Cli, ReportFormat};
use config::{load_config, Config};
use dataset::Dataset;
use models::ScoreInput;
use report::Report;
use risk::classifier::classify_input;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    // One-time synchronous dataset load; failure aborts startup.
    let dataset_path = cli
        .dataset
        .clone()
        .unwrap_or_else(|| config.dataset.path.clone());
    let dataset = Dataset::load(&dataset_path)?;

    if !cli.quiet {
        eprintln!(
            "  {} {} records from {} ({} incomplete rows dropped)",
            "→".cyan(),
            dataset.records.len(),
            dataset_path.display(),
            dataset.dropped
        );
    }

    let averages = dataset.averages(cli.sector.as_deref()).ok_or_else(|| {
        anyhow!(
            "no records for sector `{}` (known sectors: {})",
            cli.sector.as_deref().unwrap_or(""),
            dataset.sectors().join(", ")
        )
    })?;

    let scores = collect_scores(&cli, &config)?;
    let assessment = classify_input(&scores);

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(
                &scores,
                &assessment,
                &averages,
                cli.sector.as_deref(),
                cli.quiet,
            )?;
        }
        ReportFormat::Json => {
            let payload = Report {
                input: &scores,
                assessment: &assessment,
                averages: &averages,
                sector: cli.sector.as_deref(),
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    if let Some(chart_path) = &cli.chart {
        report::chart::render(&scores, &averages, cli.sector.as_deref(), chart_path)?;
    }

    Ok(())
}

/// Resolve the four scores: flags win, anything missing is prompted for with
/// the configured default. The result is clamped to the slider ranges.
fn collect_scores(cli: &Cli, config: &Config) -> Result<ScoreInput> {
    let defaults = &config.defaults;

    let environment = resolve(
        cli.environment,
        "Environment Risk Score",
        ScoreInput::ESG_RANGE,
        defaults.environment,
    )?;
    let social = resolve(
        cli.social,
        "Social Risk Score",
        ScoreInput::ESG_RANGE,
        defaults.social,
    )?;
    let governance = resolve(
        cli.governance,
        "Governance Risk Score",
        ScoreInput::ESG_RANGE,
        defaults.governance,
    )?;
    let controversy = resolve(
        cli.controversy,
        "Controversy Score",
        ScoreInput::CONTROVERSY_RANGE,
        defaults.controversy,
    )?;

    Ok(ScoreInput::clamped(
        environment,
        social,
        governance,
        controversy,
    ))
}

fn resolve(flag: Option<f64>, label: &str, range: (f64, f64), default: f64) -> Result<f64> {
    match flag {
        Some(value) => Ok(value),
        None => input::score(label, range, default),
    }
}
