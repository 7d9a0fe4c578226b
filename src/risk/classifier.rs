use crate::models::{
    ControversyLevel, FraudChance, Recommendation, RiskAssessment, RiskLevel, ScoreInput,
};

/// Classify four scores into a full [`RiskAssessment`].
///
/// Total function over the numeric domain: every comparison below is a
/// strict/inclusive upper bound and anything that matches no bound (including
/// NaN or out-of-range values) lands in the final, most severe bucket.
/// Deterministic, no side effects.
pub fn classify(env: f64, soc: f64, gov: f64, contro: f64) -> RiskAssessment {
    let total_score = env + soc + gov;

    let risk_level = risk_level(total_score);
    let (controversy_level, fraud_chance) = controversy_buckets(contro);
    let recommendation = recommend(risk_level, controversy_level);

    RiskAssessment {
        total_score,
        risk_level,
        controversy_level,
        fraud_chance,
        recommendation,
    }
}

/// Convenience wrapper taking a clamped [`ScoreInput`].
pub fn classify_input(input: &ScoreInput) -> RiskAssessment {
    classify(
        input.environment,
        input.social,
        input.governance,
        input.controversy,
    )
}

/// Bucket the summed ESG score.
///
/// Strict `<` on every upper bound: a total of exactly 10 is Low, not
/// Negligible.
fn risk_level(total: f64) -> RiskLevel {
    if total < 10.0 {
        RiskLevel::Negligible
    } else if total < 20.0 {
        RiskLevel::Low
    } else if total < 30.0 {
        RiskLevel::Medium
    } else if total < 40.0 {
        RiskLevel::High
    } else {
        RiskLevel::Severe
    }
}

/// Bucket the controversy score; level and fraud chance move together.
/// Inclusive `<=` on every upper bound: exactly 1.0 is still Low.
fn controversy_buckets(contro: f64) -> (ControversyLevel, FraudChance) {
    if contro <= 1.0 {
        (ControversyLevel::Low, FraudChance::VeryLow)
    } else if contro <= 2.0 {
        (ControversyLevel::Moderate, FraudChance::Moderate)
    } else if contro <= 3.0 {
        (ControversyLevel::Elevated, FraudChance::High)
    } else if contro <= 4.0 {
        (ControversyLevel::High, FraudChance::VeryHigh)
    } else {
        (ControversyLevel::Severe, FraudChance::ExtremelyHigh)
    }
}

/// Derive the investment recommendation.
///
/// Evaluated top-down, first match wins. The rules overlap, so the order is
/// part of the contract: Severe controversy is absent from rule 3's
/// controversy set, which is how Medium risk + Severe controversy reaches
/// the fallback instead of Avoid.
fn recommend(risk: RiskLevel, contro: ControversyLevel) -> Recommendation {
    use ControversyLevel as C;
    use RiskLevel as R;

    let contro_calm = matches!(contro, C::Low | C::Moderate);

    if matches!(risk, R::Negligible | R::Low) && contro_calm {
        Recommendation::StrongBuy
    } else if risk == R::Medium && contro_calm {
        Recommendation::HoldModerateBuy
    } else if matches!(risk, R::High | R::Severe) || matches!(contro, C::Elevated | C::High) {
        Recommendation::Avoid
    } else {
        Recommendation::HighRiskInvestment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_esg_scores() {
        let a = classify(5.25, 3.5, 2.25, 0.0);
        assert_eq!(a.total_score, 5.25 + 3.5 + 2.25);
        // Controversy never contributes to the total.
        let b = classify(5.25, 3.5, 2.25, 5.0);
        assert_eq!(b.total_score, a.total_score);
    }

    #[test]
    fn test_risk_level_boundaries() {
        assert_eq!(classify(9.999, 0.0, 0.0, 0.0).risk_level, RiskLevel::Negligible);
        assert_eq!(classify(10.0, 0.0, 0.0, 0.0).risk_level, RiskLevel::Low);
        assert_eq!(classify(19.999, 0.0, 0.0, 0.0).risk_level, RiskLevel::Low);
        assert_eq!(classify(20.0, 0.0, 0.0, 0.0).risk_level, RiskLevel::Medium);
        assert_eq!(classify(29.999, 0.0, 0.0, 0.0).risk_level, RiskLevel::Medium);
        assert_eq!(classify(30.0, 0.0, 0.0, 0.0).risk_level, RiskLevel::High);
        assert_eq!(classify(39.999, 0.0, 0.0, 0.0).risk_level, RiskLevel::High);
        assert_eq!(classify(40.0, 0.0, 0.0, 0.0).risk_level, RiskLevel::Severe);
    }

    #[test]
    fn test_controversy_boundaries() {
        let buckets = |c: f64| {
            let a = classify(0.0, 0.0, 0.0, c);
            (a.controversy_level, a.fraud_chance)
        };
        assert_eq!(buckets(1.0), (ControversyLevel::Low, FraudChance::VeryLow));
        assert_eq!(buckets(1.001), (ControversyLevel::Moderate, FraudChance::Moderate));
        assert_eq!(buckets(2.0), (ControversyLevel::Moderate, FraudChance::Moderate));
        assert_eq!(buckets(3.0), (ControversyLevel::Elevated, FraudChance::High));
        assert_eq!(buckets(4.0), (ControversyLevel::High, FraudChance::VeryHigh));
        assert_eq!(buckets(4.001), (ControversyLevel::Severe, FraudChance::ExtremelyHigh));
    }

    #[test]
    fn test_strong_buy_scenario() {
        let a = classify(5.0, 3.0, 2.0, 0.5);
        assert_eq!(a.total_score, 10.0);
        assert_eq!(a.risk_level, RiskLevel::Low);
        assert_eq!(a.controversy_level, ControversyLevel::Low);
        assert_eq!(a.recommendation, Recommendation::StrongBuy);
    }

    #[test]
    fn test_hold_for_medium_risk_calm_controversy() {
        let a = classify(10.0, 8.0, 7.0, 1.5);
        assert_eq!(a.risk_level, RiskLevel::Medium);
        assert_eq!(a.recommendation, Recommendation::HoldModerateBuy);
    }

    #[test]
    fn test_avoid_via_risk_level_clause() {
        let a = classify(10.0, 10.0, 10.0, 1.5);
        assert_eq!(a.total_score, 30.0);
        assert_eq!(a.risk_level, RiskLevel::High);
        assert_eq!(a.controversy_level, ControversyLevel::Moderate);
        assert_eq!(a.recommendation, Recommendation::Avoid);
    }

    #[test]
    fn test_avoid_via_controversy_clause() {
        // Medium risk, High controversy: the OR clause fires on the
        // controversy side even though the risk level alone would not.
        let a = classify(8.0, 8.0, 9.0, 3.5);
        assert_eq!(a.total_score, 25.0);
        assert_eq!(a.risk_level, RiskLevel::Medium);
        assert_eq!(a.controversy_level, ControversyLevel::High);
        assert_eq!(a.recommendation, Recommendation::Avoid);
    }

    #[test]
    fn test_fallback_for_medium_risk_severe_controversy() {
        // Severe controversy is not in the Avoid clause's controversy set,
        // so Medium risk falls through to the fallback label.
        let a = classify(8.0, 8.0, 9.0, 4.5);
        assert_eq!(a.risk_level, RiskLevel::Medium);
        assert_eq!(a.controversy_level, ControversyLevel::Severe);
        assert_eq!(a.recommendation, Recommendation::HighRiskInvestment);
    }

    #[test]
    fn test_fallback_for_low_risk_severe_controversy() {
        let a = classify(2.0, 2.0, 2.0, 5.0);
        assert_eq!(a.risk_level, RiskLevel::Negligible);
        assert_eq!(a.controversy_level, ControversyLevel::Severe);
        assert_eq!(a.recommendation, Recommendation::HighRiskInvestment);
    }

    #[test]
    fn test_severe_risk_severe_controversy_is_avoid() {
        // The risk-level side of the OR clause catches this before the
        // fallback can.
        let a = classify(20.0, 20.0, 10.0, 5.0);
        assert_eq!(a.risk_level, RiskLevel::Severe);
        assert_eq!(a.recommendation, Recommendation::Avoid);
    }

    #[test]
    fn test_nan_falls_to_most_severe_buckets() {
        let a = classify(f64::NAN, 0.0, 0.0, f64::NAN);
        assert_eq!(a.risk_level, RiskLevel::Severe);
        assert_eq!(a.controversy_level, ControversyLevel::Severe);
        assert_eq!(a.fraud_chance, FraudChance::ExtremelyHigh);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let a = classify(12.0, 9.0, 4.0, 2.5);
        let b = classify(12.0, 9.0, 4.0, 2.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_classify_input_matches_classify() {
        let input = ScoreInput::clamped(12.0, 9.0, 4.0, 2.5);
        assert_eq!(classify_input(&input), classify(12.0, 9.0, 4.0, 2.5));
    }
}
