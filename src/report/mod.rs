pub mod chart;
pub mod terminal;

use serde::Serialize;

use crate::models::{DatasetAverages, RiskAssessment, ScoreInput};

/// Payload for the JSON report.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub input: &'a ScoreInput,
    pub assessment: &'a RiskAssessment,
    pub averages: &'a DatasetAverages,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<&'a str>,
}
