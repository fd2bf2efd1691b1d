mod domain;
mod engine;
mod error;
mod formulas;
mod input;
mod report;
mod units;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use crate::domain::Sex;
use crate::input::RawInput;
use crate::units::{HeightUnit, WeightUnit};

/// Daily caloric intake and weight-loss projection calculator.
#[derive(Parser, Debug)]
#[command(name = "caltarget")]
#[command(about = "Computes a daily caloric target and weekly weight projection")]
#[command(version)]
struct Args {
    /// Age in years.
    #[arg(long, env = "CALTARGET_AGE")]
    age: String,

    /// Biological sex (female/male).
    #[arg(long, env = "CALTARGET_SEX")]
    sex: Sex,

    /// Height in the selected height unit.
    #[arg(long, env = "CALTARGET_HEIGHT")]
    height: String,

    /// Height unit (cm or ft/in).
    #[arg(long, env = "CALTARGET_HEIGHT_UNIT", default_value = "cm")]
    height_unit: HeightUnit,

    /// Current weight in the selected weight unit.
    #[arg(long, env = "CALTARGET_WEIGHT")]
    weight: String,

    /// Weight unit (kg or lb), applied to weight and target weight alike.
    #[arg(long, env = "CALTARGET_WEIGHT_UNIT", default_value = "kg")]
    weight_unit: WeightUnit,

    /// Target weight in the selected weight unit.
    #[arg(long, env = "CALTARGET_TARGET_WEIGHT")]
    target_weight: String,

    /// Optional target date (YYYY-MM-DD). Without it the default
    /// 0.45 kg/week loss rate determines the completion date.
    #[arg(long, env = "CALTARGET_TARGET_DATE")]
    target_date: Option<String>,

    /// Activity level label (e.g. "Sedentary", "Lightly active").
    /// Unrecognized labels fall back to "Lightly active".
    #[arg(long, env = "CALTARGET_ACTIVITY", default_value = "Lightly active")]
    activity: String,

    /// Emit the result as JSON instead of a text report.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let raw = RawInput {
        age: args.age,
        sex: args.sex,
        height: args.height,
        height_unit: args.height_unit,
        weight: args.weight,
        weight_unit: args.weight_unit,
        target_weight: args.target_weight,
        target_date: args.target_date,
        activity: args.activity,
    };

    let (profile, goal) = raw
        .parse()
        .context("Please enter valid numbers for age, height, weight, and target weight")?;

    log::debug!("profile: {:?}, goal: {:?}", profile, goal);

    let today = Local::now().date_naive();
    let result = engine::compute(&profile, &goal, today).context("Calculation failed")?;

    if args.json {
        println!("{}", report::render_json(&result)?);
        return Ok(());
    }

    println!("{}", report::render_summary(&result));

    if let Some(chart) = report::render_chart(&result, profile.weight_unit) {
        println!();
        println!("{}", chart);
    }

    Ok(())
}
