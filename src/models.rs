use serde::{Deserialize, Serialize};

/// The four user-supplied scores.
///
/// Construct via [`ScoreInput::clamped`] so each score is held to the range
/// the original slider controls guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub environment: f64,
    pub social: f64,
    pub governance: f64,
    pub controversy: f64,
}

impl ScoreInput {
    /// Valid range for the three ESG sub-scores.
    pub const ESG_RANGE: (f64, f64) = (0.0, 50.0);
    /// Valid range for the controversy score.
    pub const CONTROVERSY_RANGE: (f64, f64) = (0.0, 5.0);

    /// Build an input with every score clamped to its valid range.
    pub fn clamped(environment: f64, social: f64, governance: f64, controversy: f64) -> Self {
        let (lo, hi) = Self::ESG_RANGE;
        let (c_lo, c_hi) = Self::CONTROVERSY_RANGE;
        Self {
            environment: environment.clamp(lo, hi),
            social: social.clamp(lo, hi),
            governance: governance.clamp(lo, hi),
            controversy: controversy.clamp(c_lo, c_hi),
        }
    }
}

/// Result of classifying one [`ScoreInput`]. Read-only, no identity beyond
/// the single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub total_score: f64,
    pub risk_level: RiskLevel,
    pub controversy_level: ControversyLevel,
    pub fraud_chance: FraudChance,
    pub recommendation: Recommendation,
}

/// Bucketed label over the summed ESG sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Negligible,
    Low,
    Medium,
    High,
    Severe,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Negligible => write!(f, "Negligible"),
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Severe => write!(f, "Severe"),
        }
    }
}

/// Bucketed label over the controversy score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControversyLevel {
    Low,
    Moderate,
    Elevated,
    High,
    Severe,
}

impl std::fmt::Display for ControversyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControversyLevel::Low => write!(f, "Low"),
            ControversyLevel::Moderate => write!(f, "Moderate"),
            ControversyLevel::Elevated => write!(f, "Elevated"),
            ControversyLevel::High => write!(f, "High"),
            ControversyLevel::Severe => write!(f, "Severe"),
        }
    }
}

/// Heuristic fraud likelihood, derived jointly with [`ControversyLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FraudChance {
    VeryLow,
    Moderate,
    High,
    VeryHigh,
    ExtremelyHigh,
}

impl std::fmt::Display for FraudChance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FraudChance::VeryLow => write!(f, "Very Low"),
            FraudChance::Moderate => write!(f, "Moderate"),
            FraudChance::High => write!(f, "High"),
            FraudChance::VeryHigh => write!(f, "Very High"),
            FraudChance::ExtremelyHigh => write!(f, "Extremely High"),
        }
    }
}

/// Canned investment advice derived from risk level and controversy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    StrongBuy,
    HoldModerateBuy,
    Avoid,
    HighRiskInvestment,
}

impl Recommendation {
    /// Short headline label.
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "Strong Buy",
            Recommendation::HoldModerateBuy => "Hold / Moderate Buy",
            Recommendation::Avoid => "Avoid",
            Recommendation::HighRiskInvestment => "High Risk Investment",
        }
    }

    /// One-line explanation shown next to the label.
    pub fn detail(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "Excellent ESG profile and low fraud risk.",
            Recommendation::HoldModerateBuy => {
                "Medium sustainability risk, but manageable fraud risk."
            }
            Recommendation::Avoid => "Elevated risk due to poor ESG or controversy signals.",
            Recommendation::HighRiskInvestment => {
                "ESG or controversy scores indicate high exposure."
            }
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One cleaned row of the reference dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsgRecord {
    pub total_esg: f64,
    pub environment: f64,
    pub social: f64,
    pub governance: f64,
    pub controversy: f64,
    pub normal_risk: String,
    pub controversy_level: String,
    pub sector: String,
}

/// Per-metric dataset means used for the comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetAverages {
    pub environment: f64,
    pub social: f64,
    pub governance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_holds_slider_ranges() {
        let input = ScoreInput::clamped(-3.0, 75.0, 20.0, 9.5);
        assert_eq!(input.environment, 0.0);
        assert_eq!(input.social, 50.0);
        assert_eq!(input.governance, 20.0);
        assert_eq!(input.controversy, 5.0);
    }

    #[test]
    fn test_fraud_chance_labels() {
        assert_eq!(FraudChance::VeryLow.to_string(), "Very Low");
        assert_eq!(FraudChance::ExtremelyHigh.to_string(), "Extremely High");
    }

    #[test]
    fn test_recommendation_label_and_detail() {
        assert_eq!(Recommendation::StrongBuy.label(), "Strong Buy");
        assert!(Recommendation::Avoid.detail().contains("controversy"));
    }
}
