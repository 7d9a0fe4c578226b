use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::models::{DatasetAverages, ScoreInput};

const CHART_SIZE: (u32, u32) = (800, 500);
const USER_COLOR: RGBColor = RGBColor(32, 117, 242);
const AVG_COLOR: RGBColor = RGBColor(133, 77, 242);
const BAR_HALF_WIDTH: f64 = 0.3;

/// Render the grouped comparison bar chart as a PNG: three categories, two
/// series (user input vs. dataset average).
pub fn render(
    input: &ScoreInput,
    averages: &DatasetAverages,
    sector: Option<&str>,
    output_path: &Path,
) -> Result<()> {
    let groups = [
        ("Environment", input.environment, averages.environment),
        ("Social", input.social, averages.social),
        ("Governance", input.governance, averages.governance),
    ];

    let y_max = groups
        .iter()
        .flat_map(|(_, user, avg)| [*user, *avg])
        .fold(1.0_f64, f64::max)
        * 1.15;

    let baseline = match sector {
        Some(name) => format!("{name} average"),
        None => "dataset average".to_string(),
    };

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    // Groups are centered on the integers 0, 1, 2; the half-unit padding on
    // each side keeps the outer bars off the chart border.
    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Your input vs {baseline}"), ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d(-0.5f64..2.5f64, 0.0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(4)
        .x_label_formatter(&|x| {
            let idx = x.round();
            if (x - idx).abs() > 1e-6 {
                return String::new();
            }
            groups
                .get(idx as usize)
                .map(|(name, _, _)| name.to_string())
                .unwrap_or_default()
        })
        .y_desc("Risk score")
        .draw()?;

    chart
        .draw_series(groups.iter().enumerate().map(|(i, (_, user, _))| {
            let x = i as f64;
            Rectangle::new([(x - BAR_HALF_WIDTH, 0.0), (x - 0.02, *user)], USER_COLOR.filled())
        }))?
        .label("Your input")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 10, y + 4)], USER_COLOR.filled()));

    chart
        .draw_series(groups.iter().enumerate().map(|(i, (_, _, avg))| {
            let x = i as f64;
            Rectangle::new([(x + 0.02, 0.0), (x + BAR_HALF_WIDTH, *avg)], AVG_COLOR.filled())
        }))?
        .label(baseline)
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 10, y + 4)], AVG_COLOR.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .draw()?;

    root.present()
        .with_context(|| format!("failed to write chart to {}", output_path.display()))?;

    println!("Comparison chart written to: {}", output_path.display());
    Ok(())
}
