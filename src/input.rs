//! Raw form-value parsing into domain types.
//!
//! The presentation side collects free text; this module owns the
//! text-to-number step so the engine only ever sees typed values. Each field
//! that fails to parse maps to its own `InvalidInput` variant so the caller
//! can tell the user which field to correct.

use chrono::NaiveDate;
use std::str::FromStr;

use crate::domain::{ActivityLevel, Goal, Sex, UserProfile};
use crate::error::InvalidInput;
use crate::units::{HeightUnit, WeightUnit};

/// Raw input values as entered, before any numeric parsing.
#[derive(Debug, Clone)]
pub struct RawInput {
    pub age: String,
    pub sex: Sex,
    pub height: String,
    pub height_unit: HeightUnit,
    pub weight: String,
    pub weight_unit: WeightUnit,
    pub target_weight: String,
    /// Optional deadline as YYYY-MM-DD.
    pub target_date: Option<String>,
    /// Free-form activity label; unknown labels fall back to Lightly active.
    pub activity: String,
}

impl RawInput {
    /// Parses the raw values into a typed profile and goal.
    ///
    /// # Errors
    /// Returns the `InvalidInput` variant for the first field that fails to
    /// parse. The activity label never fails (see
    /// [`ActivityLevel::from_label`]).
    pub fn parse(&self) -> Result<(UserProfile, Goal), InvalidInput> {
        let age: u32 =
            self.age
                .trim()
                .parse()
                .map_err(|_| InvalidInput::InvalidAge {
                    value: self.age.clone(),
                })?;

        let height: f64 =
            self.height
                .trim()
                .parse()
                .map_err(|_| InvalidInput::InvalidHeight {
                    value: self.height.clone(),
                })?;

        let weight: f64 =
            self.weight
                .trim()
                .parse()
                .map_err(|_| InvalidInput::InvalidWeight {
                    value: self.weight.clone(),
                })?;

        let target_weight: f64 =
            self.target_weight
                .trim()
                .parse()
                .map_err(|_| InvalidInput::InvalidTargetWeight {
                    value: self.target_weight.clone(),
                })?;

        let target_date = match &self.target_date {
            Some(s) => Some(NaiveDate::from_str(s.trim()).map_err(|_| {
                InvalidInput::InvalidTargetDate { value: s.clone() }
            })?),
            None => None,
        };

        let profile = UserProfile {
            age,
            sex: self.sex,
            height,
            height_unit: self.height_unit,
            weight,
            weight_unit: self.weight_unit,
            activity: ActivityLevel::from_label(&self.activity),
        };

        let goal = Goal {
            target_weight,
            target_date,
        };

        Ok((profile, goal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RawInput {
        RawInput {
            age: "33".into(),
            sex: Sex::Female,
            height: "150".into(),
            height_unit: HeightUnit::Centimeters,
            weight: "75".into(),
            weight_unit: WeightUnit::Kilograms,
            target_weight: "62".into(),
            target_date: None,
            activity: "Lightly active".into(),
        }
    }

    #[test]
    fn test_parse_valid_input() {
        let (profile, goal) = valid_input().parse().unwrap();
        assert_eq!(profile.age, 33);
        assert_eq!(profile.sex, Sex::Female);
        assert_eq!(profile.height, 150.0);
        assert_eq!(profile.weight, 75.0);
        assert_eq!(profile.activity, ActivityLevel::LightlyActive);
        assert_eq!(goal.target_weight, 62.0);
        assert!(goal.target_date.is_none());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let input = RawInput {
            age: " 33 ".into(),
            weight: " 75.5 ".into(),
            ..valid_input()
        };
        let (profile, _) = input.parse().unwrap();
        assert_eq!(profile.age, 33);
        assert_eq!(profile.weight, 75.5);
    }

    #[test]
    fn test_parse_target_date() {
        let input = RawInput {
            target_date: Some("2026-06-15".into()),
            ..valid_input()
        };
        let (_, goal) = input.parse().unwrap();
        assert_eq!(
            goal.target_date,
            Some(NaiveDate::from_ymd_opt(2026, 6, 15).unwrap())
        );
    }

    #[test]
    fn test_non_numeric_age_rejected() {
        let input = RawInput {
            age: "thirty-three".into(),
            ..valid_input()
        };
        assert!(matches!(
            input.parse(),
            Err(InvalidInput::InvalidAge { .. })
        ));
    }

    #[test]
    fn test_fractional_age_rejected() {
        // Age must parse as an integer
        let input = RawInput {
            age: "33.5".into(),
            ..valid_input()
        };
        assert!(matches!(
            input.parse(),
            Err(InvalidInput::InvalidAge { .. })
        ));
    }

    #[test]
    fn test_non_numeric_fields_rejected() {
        let bad_height = RawInput {
            height: "tall".into(),
            ..valid_input()
        };
        assert!(matches!(
            bad_height.parse(),
            Err(InvalidInput::InvalidHeight { .. })
        ));

        let bad_weight = RawInput {
            weight: "".into(),
            ..valid_input()
        };
        assert!(matches!(
            bad_weight.parse(),
            Err(InvalidInput::InvalidWeight { .. })
        ));

        let bad_target = RawInput {
            target_weight: "62kg".into(),
            ..valid_input()
        };
        assert!(matches!(
            bad_target.parse(),
            Err(InvalidInput::InvalidTargetWeight { .. })
        ));
    }

    #[test]
    fn test_malformed_target_date_rejected() {
        let input = RawInput {
            target_date: Some("June 15".into()),
            ..valid_input()
        };
        assert!(matches!(
            input.parse(),
            Err(InvalidInput::InvalidTargetDate { .. })
        ));
    }

    #[test]
    fn test_unknown_activity_label_accepted() {
        let input = RawInput {
            activity: "extremely lazy".into(),
            ..valid_input()
        };
        let (profile, _) = input.parse().unwrap();
        assert_eq!(profile.activity, ActivityLevel::LightlyActive);
    }
}
