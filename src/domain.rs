//! Domain types for biometric profiles and weight goals.

use chrono::NaiveDate;
use std::str::FromStr;

use crate::error::InvalidInput;
use crate::units::{HeightUnit, WeightUnit};

/// Biological sex, selecting the Mifflin-St Jeor formula branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

impl FromStr for Sex {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" => Ok(Sex::Female),
            "male" | "m" => Ok(Sex::Male),
            _ => Err(InvalidInput::UnknownUnit {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Activity levels and their TDEE multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    SuperActive,
}

impl ActivityLevel {
    /// Returns all activity level variants.
    pub fn all() -> &'static [ActivityLevel] {
        &[
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
            ActivityLevel::SuperActive,
        ]
    }

    /// Returns the TDEE multiplier for this level.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::SuperActive => 1.9,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly active",
            ActivityLevel::ModeratelyActive => "Moderately active",
            ActivityLevel::VeryActive => "Very active",
            ActivityLevel::SuperActive => "Super active",
        }
    }

    /// Looks up an activity level from a label, falling back to
    /// `LightlyActive` for anything unrecognized.
    ///
    /// The fallback keeps the caller robust to an unset or default selection
    /// state; an unknown label is never an error.
    pub fn from_label(s: &str) -> ActivityLevel {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "lightly active" => ActivityLevel::LightlyActive,
            "moderately active" => ActivityLevel::ModeratelyActive,
            "very active" => ActivityLevel::VeryActive,
            "super active" => ActivityLevel::SuperActive,
            _ => ActivityLevel::LightlyActive,
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Immutable biometric profile, constructed at call time and passed by value
/// into the engine. Height and weight carry their input units; the engine
/// normalizes to cm/kg before applying any formula.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub age: u32,
    pub sex: Sex,
    pub height: f64,
    pub height_unit: HeightUnit,
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub activity: ActivityLevel,
}

impl UserProfile {
    /// Current weight normalized to kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight_unit.to_kg(self.weight)
    }

    /// Height normalized to centimeters.
    pub fn height_cm(&self) -> f64 {
        self.height_unit.to_cm(self.height)
    }
}

/// Target weight and optional deadline. The target weight shares the
/// profile's weight unit.
#[derive(Debug, Clone)]
pub struct Goal {
    pub target_weight: f64,
    pub target_date: Option<NaiveDate>,
}
