//! BMR and TDEE formulas.

use crate::domain::{ActivityLevel, Sex};

/// Coefficients of the Mifflin-St Jeor equation.
mod mifflin {
    pub const WEIGHT_COEFF: f64 = 10.0;
    pub const HEIGHT_COEFF: f64 = 6.25;
    pub const AGE_COEFF: f64 = 5.0;
    pub const FEMALE_OFFSET: f64 = -161.0;
    pub const MALE_OFFSET: f64 = 5.0;
}

/// Calculates Basal Metabolic Rate using the Mifflin-St Jeor equation.
///
/// Formula:
/// ```text
/// Female: BMR = 10·weight + 6.25·height − 5·age − 161
/// Male:   BMR = 10·weight + 6.25·height − 5·age + 5
/// ```
///
/// # Arguments
/// * `sex` - Selects the formula branch
/// * `weight_kg` - Bodyweight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age_years` - Age in years
///
/// # Returns
/// Estimated resting energy expenditure in kcal/day.
pub fn calculate_bmr(sex: Sex, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    let offset = match sex {
        Sex::Female => mifflin::FEMALE_OFFSET,
        Sex::Male => mifflin::MALE_OFFSET,
    };

    mifflin::WEIGHT_COEFF * weight_kg + mifflin::HEIGHT_COEFF * height_cm
        - mifflin::AGE_COEFF * f64::from(age_years)
        + offset
}

/// Calculates Total Daily Energy Expenditure by scaling BMR with the
/// activity multiplier.
pub fn calculate_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to check floating point equality with tolerance.
    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_bmr_female_reference() {
        // 10·75 + 6.25·150 − 5·33 − 161 = 1361.5
        let bmr = calculate_bmr(Sex::Female, 75.0, 150.0, 33);
        assert!(approx_eq(bmr, 1361.5, 1e-9), "BMR = {}", bmr);
    }

    #[test]
    fn test_bmr_male_reference() {
        // 10·80 + 6.25·180 − 5·40 + 5 = 1730
        let bmr = calculate_bmr(Sex::Male, 80.0, 180.0, 40);
        assert!(approx_eq(bmr, 1730.0, 1e-9), "BMR = {}", bmr);
    }

    #[test]
    fn test_bmr_sex_offset_difference() {
        // Same biometrics, male is always 166 kcal above female
        let female = calculate_bmr(Sex::Female, 70.0, 165.0, 30);
        let male = calculate_bmr(Sex::Male, 70.0, 165.0, 30);
        assert!(approx_eq(male - female, 166.0, 1e-9));
    }

    #[test]
    fn test_tdee_lightly_active() {
        // 1361.5 × 1.375 = 1872.0625
        let tdee = calculate_tdee(1361.5, ActivityLevel::LightlyActive);
        assert!(approx_eq(tdee, 1872.0625, 1e-9), "TDEE = {}", tdee);
    }

    #[test]
    fn test_tdee_scales_with_activity() {
        let bmr = 1500.0;
        let sedentary = calculate_tdee(bmr, ActivityLevel::Sedentary);
        let super_active = calculate_tdee(bmr, ActivityLevel::SuperActive);
        assert!(approx_eq(sedentary, 1800.0, 1e-9));
        assert!(approx_eq(super_active, 2850.0, 1e-9));
    }
}
