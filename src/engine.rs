//! Caloric-target calculation engine.
//!
//! Maps a biometric profile and a weight goal into a daily caloric intake
//! target, an estimated completion date, and a weekly weight projection.
//! The engine is a pure function of its inputs plus an explicit `now`
//! parameter, so results are reproducible in tests.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::domain::{Goal, UserProfile};
use crate::error::InvalidInput;
use crate::formulas::{calculate_bmr, calculate_tdee};

// === Constants ===

/// Assumed sustainable weight-loss rate (kg per week), corresponding to the
/// default 500 kcal/day deficit.
pub const WEEKLY_LOSS_RATE_KG: f64 = 0.45;

/// Default daily caloric deficit below TDEE (kcal).
pub const DEFAULT_DEFICIT_KCAL: f64 = 500.0;

const DAYS_PER_WEEK: i64 = 7;

// === Data Structures ===

/// One entry of the weekly weight projection.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionPoint {
    pub date: NaiveDate,
    /// Projected weight in kilograms. Display-unit conversion is the
    /// renderer's job.
    pub weight_kg: f64,
}

/// Engine output: intake target, completion estimate, and projection series.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResult {
    /// Recommended daily caloric intake in kcal.
    pub daily_caloric_intake: f64,
    /// The goal's target date if one was set, otherwise the date implied by
    /// the default weekly loss rate.
    pub estimated_completion_date: NaiveDate,
    /// Projected weight per week from `now` until the goal is reached.
    /// Empty when the goal is less than one week away or already met.
    pub weekly_projection: Vec<ProjectionPoint>,
}

// === Main Calculation ===

/// Computes the caloric-intake recommendation and weight projection.
///
/// All formulas run in canonical units (kg, cm); the profile's raw values
/// are normalized first. With a target date set, the required weekly loss is
/// derived from the number of *whole* weeks remaining (days floor-divided by
/// 7 first, then used as the divisor), and the deficit is scaled up when
/// that rate exceeds [`WEEKLY_LOSS_RATE_KG`]. The deficit is never relaxed
/// below the default when the deadline is generous.
///
/// A target date less than one whole week away (including past dates) leaves
/// the default deficit in place rather than solving for an impossible rate.
///
/// # Errors
/// Returns [`InvalidInput::NonPositive`] if age, height, weight, or target
/// weight is zero or negative.
pub fn compute(
    profile: &UserProfile,
    goal: &Goal,
    now: NaiveDate,
) -> Result<CalculationResult, InvalidInput> {
    validate_positive(profile, goal)?;

    let height_cm = profile.height_cm();
    let weight_kg = profile.weight_kg();
    let target_weight_kg = profile.weight_unit.to_kg(goal.target_weight);

    let bmr = calculate_bmr(profile.sex, weight_kg, height_cm, profile.age);
    let tdee = calculate_tdee(bmr, profile.activity);

    let total_loss_kg = weight_kg - target_weight_kg;
    let weeks_to_goal = total_loss_kg / WEEKLY_LOSS_RATE_KG;

    let mut daily_caloric_intake = tdee - DEFAULT_DEFICIT_KCAL;

    if let Some(target_date) = goal.target_date {
        let remaining_days = (target_date - now).num_days();
        let whole_weeks = remaining_days / DAYS_PER_WEEK;

        if whole_weeks > 0 {
            let target_weekly_loss = total_loss_kg / whole_weeks as f64;
            if target_weekly_loss > WEEKLY_LOSS_RATE_KG {
                daily_caloric_intake =
                    tdee - DEFAULT_DEFICIT_KCAL * (target_weekly_loss / WEEKLY_LOSS_RATE_KG);
            }
        } else {
            log::warn!(
                "target date {} is less than a week away, keeping default deficit",
                target_date
            );
        }
    }

    let projection_weeks = (weeks_to_goal.trunc() as i64).max(0);

    let weekly_projection: Vec<ProjectionPoint> = (0..projection_weeks)
        .map(|week| ProjectionPoint {
            date: now + Duration::days(week * DAYS_PER_WEEK),
            weight_kg: weight_kg - week as f64 * WEEKLY_LOSS_RATE_KG,
        })
        .collect();

    let estimated_completion_date = goal
        .target_date
        .unwrap_or_else(|| now + Duration::days(projection_weeks * DAYS_PER_WEEK));

    Ok(CalculationResult {
        daily_caloric_intake,
        estimated_completion_date,
        weekly_projection,
    })
}

/// Defensive positivity check on the numeric inputs. Values are already
/// type-parsed; this rejects zero and negative magnitudes before they flow
/// through the formulas silently.
fn validate_positive(profile: &UserProfile, goal: &Goal) -> Result<(), InvalidInput> {
    if profile.age == 0 {
        return Err(InvalidInput::NonPositive {
            field: "age",
            value: 0.0,
        });
    }
    if profile.height <= 0.0 {
        return Err(InvalidInput::NonPositive {
            field: "height",
            value: profile.height,
        });
    }
    if profile.weight <= 0.0 {
        return Err(InvalidInput::NonPositive {
            field: "weight",
            value: profile.weight,
        });
    }
    if goal.target_weight <= 0.0 {
        return Err(InvalidInput::NonPositive {
            field: "target weight",
            value: goal.target_weight,
        });
    }
    Ok(())
}

// === Unit Tests ===
