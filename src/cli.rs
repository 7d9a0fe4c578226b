use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "esg-riskr",
    about = "Classify investment and fraud risk from ESG metrics",
    version
)]
pub struct Cli {
    /// Reference dataset CSV [default: path from config]
    pub dataset: Option<PathBuf>,

    /// Environment risk score, 0-50; prompted for when omitted
    #[arg(long, value_name = "SCORE")]
    pub environment: Option<f64>,

    /// Social risk score, 0-50; prompted for when omitted
    #[arg(long, value_name = "SCORE")]
    pub social: Option<f64>,

    /// Governance risk score, 0-50; prompted for when omitted
    #[arg(long, value_name = "SCORE")]
    pub governance: Option<f64>,

    /// Controversy score, 0-5; prompted for when omitted
    #[arg(long, value_name = "SCORE")]
    pub controversy: Option<f64>,

    /// Compare against one sector's averages instead of the whole dataset
    #[arg(long, value_name = "NAME")]
    pub sector: Option<String>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// PNG chart output path; use without value to default to esg-comparison.png
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = "esg-comparison.png")]
    pub chart: Option<PathBuf>,

    /// Config file [default: ./.esg-riskr/config.toml, fallback ~/.config/esg-riskr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only print the one-line assessment summary
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
