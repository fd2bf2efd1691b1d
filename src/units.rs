//! Measurement units and canonical-unit conversion.
//!
//! All formulas in the engine operate on centimeters and kilograms. Raw
//! inputs arrive in whatever unit the user selected and are normalized here
//! before any calculation; conversion back to the display unit happens only
//! at render time in `report`.

use std::str::FromStr;

use crate::error::InvalidInput;

/// Centimeters per unit of "ft/in" height input.
///
/// The height field is a single decimal number scaled by the feet-to-cm
/// factor, so an input like 5.9 is treated as 5.9 feet, not 5'9".
pub const CM_PER_FOOT: f64 = 30.48;

/// Kilograms per pound.
pub const KG_PER_LB: f64 = 0.453592;

/// Pounds per kilogram, used for display conversion only.
pub const LB_PER_KG: f64 = 2.20462;

/// Height input units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightUnit {
    #[default]
    Centimeters,
    FeetInches,
}

impl HeightUnit {
    /// Converts a raw height value in this unit to centimeters.
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Centimeters => value,
            HeightUnit::FeetInches => value * CM_PER_FOOT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HeightUnit::Centimeters => "cm",
            HeightUnit::FeetInches => "ft/in",
        }
    }
}

impl FromStr for HeightUnit {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" => Ok(HeightUnit::Centimeters),
            "ft/in" | "ft" | "ftin" => Ok(HeightUnit::FeetInches),
            _ => Err(InvalidInput::UnknownUnit {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Weight input units. Applies uniformly to current and target weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightUnit {
    #[default]
    Kilograms,
    Pounds,
}

impl WeightUnit {
    /// Converts a raw weight value in this unit to kilograms.
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kilograms => value,
            WeightUnit::Pounds => value * KG_PER_LB,
        }
    }

    /// Converts a canonical kilogram value to this unit for display.
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kilograms => kg,
            WeightUnit::Pounds => kg * LB_PER_KG,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kg",
            WeightUnit::Pounds => "lb",
        }
    }
}

impl FromStr for WeightUnit {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Ok(WeightUnit::Kilograms),
            "lb" | "lbs" => Ok(WeightUnit::Pounds),
            _ => Err(InvalidInput::UnknownUnit {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
