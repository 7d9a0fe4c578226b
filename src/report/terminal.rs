use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{
    ControversyLevel, DatasetAverages, FraudChance, Recommendation, RiskAssessment, RiskLevel,
    ScoreInput,
};

const BAR_WIDTH: usize = 40;

/// Render the colored terminal report.
pub fn render(
    input: &ScoreInput,
    assessment: &RiskAssessment,
    averages: &DatasetAverages,
    sector: Option<&str>,
    quiet: bool,
) -> Result<()> {
    if quiet {
        println!(
            "Total: {:.2}  Risk: {}  Controversy: {}  Fraud: {}  Recommendation: {}",
            assessment.total_score,
            assessment.risk_level,
            assessment.controversy_level,
            assessment.fraud_chance,
            assessment.recommendation,
        );
        return Ok(());
    }

    println!("\n {} v{}", "esg-riskr".bold(), env!("CARGO_PKG_VERSION"));

    println!("\n {}\n", "Risk Analysis Results".bold());
    render_assessment_table(assessment);

    println!("\n {}\n", "Investment Recommendation".bold());
    let label = match assessment.recommendation {
        Recommendation::StrongBuy => assessment.recommendation.label().green().bold(),
        Recommendation::HoldModerateBuy => assessment.recommendation.label().yellow().bold(),
        Recommendation::Avoid | Recommendation::HighRiskInvestment => {
            assessment.recommendation.label().red().bold()
        }
    };
    println!("   {} — {}", label, assessment.recommendation.detail());

    let baseline = match sector {
        Some(name) => format!("{name} average"),
        None => "dataset average".to_string(),
    };
    println!("\n {}\n", format!("Comparison to {baseline}").bold());
    render_comparison(input, averages);
    println!();

    Ok(())
}

fn render_assessment_table(assessment: &RiskAssessment) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

    let risk_color = match assessment.risk_level {
        RiskLevel::Negligible | RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High | RiskLevel::Severe => Color::Red,
    };
    let contro_color = match assessment.controversy_level {
        ControversyLevel::Low => Color::Green,
        ControversyLevel::Moderate => Color::Yellow,
        ControversyLevel::Elevated => Color::DarkYellow,
        ControversyLevel::High | ControversyLevel::Severe => Color::Red,
    };
    let fraud_color = match assessment.fraud_chance {
        FraudChance::VeryLow => Color::Green,
        FraudChance::Moderate => Color::Yellow,
        FraudChance::High => Color::DarkYellow,
        FraudChance::VeryHigh | FraudChance::ExtremelyHigh => Color::Red,
    };

    table.add_row(vec![
        Cell::new("Total ESG Risk Score"),
        Cell::new(format!("{:.2}", assessment.total_score)),
    ]);
    table.add_row(vec![
        Cell::new("Risk Level"),
        Cell::new(assessment.risk_level.to_string()).fg(risk_color),
    ]);
    table.add_row(vec![
        Cell::new("Controversy Level"),
        Cell::new(assessment.controversy_level.to_string()).fg(contro_color),
    ]);
    table.add_row(vec![
        Cell::new("Predicted Fraud Risk"),
        Cell::new(assessment.fraud_chance.to_string()).fg(fraud_color),
    ]);

    println!("{table}");
}

fn render_comparison(input: &ScoreInput, averages: &DatasetAverages) {
    let rows = [
        ("Environment", input.environment, averages.environment),
        ("Social", input.social, averages.social),
        ("Governance", input.governance, averages.governance),
    ];

    // One scale for every bar so lengths stay comparable across metrics.
    let max = rows
        .iter()
        .flat_map(|(_, user, avg)| [*user, *avg])
        .fold(1.0_f64, f64::max);

    for (name, user, avg) in rows {
        println!(" {name:<12} {:<5} {} {user:>6.2}", "you", bar(user, max).cyan());
        println!(" {:<12} {:<5} {} {avg:>6.2}", "", "avg", bar(avg, max).white().dimmed());
    }
}

fn bar(value: f64, max: f64) -> String {
    let filled = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}
