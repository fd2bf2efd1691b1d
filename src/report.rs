//! Result rendering: text summary, projection bar chart, JSON output.
//!
//! This is the presentation side of the calculation. Conversion from
//! canonical kilograms to the user's display unit happens here and nowhere
//! else; it never feeds back into the engine.

use crate::engine::CalculationResult;
use crate::units::WeightUnit;

/// Maximum bar width in characters.
const CHART_WIDTH: usize = 40;

/// Formats the two headline numbers of the result.
pub fn render_summary(result: &CalculationResult) -> String {
    format!(
        "Daily caloric intake: {:.0} kcal\nEstimated date to reach target weight: {}",
        result.daily_caloric_intake,
        result.estimated_completion_date.format("%b %d, %Y")
    )
}

/// Renders the weekly projection as a horizontal bar chart, one row per
/// week, weights labeled in the user's display unit.
///
/// Bars are scaled between the target weight (zero length) and the starting
/// weight (full width), mirroring the chart's y-axis domain. Returns `None`
/// for an empty projection, so callers offer no chart at all when there is
/// nothing to plot.
pub fn render_chart(result: &CalculationResult, unit: WeightUnit) -> Option<String> {
    let first = result.weekly_projection.first()?;
    let initial_kg = first.weight_kg;

    // The projection stops one step short of the target; extrapolate the
    // axis floor from the last entry so the final bar keeps visible length.
    let last_kg = result.weekly_projection.last()?.weight_kg;
    let floor_kg = last_kg - crate::engine::WEEKLY_LOSS_RATE_KG;
    let span_kg = (initial_kg - floor_kg).max(f64::EPSILON);

    let mut out = String::from("Weekly weight projection\n");
    for point in &result.weekly_projection {
        let fraction = ((point.weight_kg - floor_kg) / span_kg).clamp(0.0, 1.0);
        let bar_len = (fraction * CHART_WIDTH as f64).round() as usize;
        out.push_str(&format!(
            "{}  {:bar_width$}  {:.1} {}\n",
            point.date.format("%b %d"),
            "#".repeat(bar_len.max(1)),
            unit.from_kg(point.weight_kg),
            unit.label(),
            bar_width = CHART_WIDTH,
        ));
    }
    Some(out)
}

/// Serializes the result as pretty-printed JSON (canonical kilograms).
pub fn render_json(result: &CalculationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
