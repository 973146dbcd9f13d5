//! Weight unit system and the unit-specific constants derived from it.

use serde::{Deserialize, Serialize};

/// Calories stored in one kilogram of body fat.
pub const KCAL_PER_KG: f64 = 7700.0;

/// Calories stored in one pound of body fat.
pub const KCAL_PER_LB: f64 = 3500.0;

/// Unit system used for every weight in a user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    #[serde(rename = "kg")]
    Kilograms,
    /// Pounds
    #[serde(rename = "lb")]
    Pounds,
}

impl WeightUnit {
    /// Calories per unit of body-mass change (energy-balance constant).
    pub const fn calories_per_unit(&self) -> f64 {
        match self {
            WeightUnit::Kilograms => KCAL_PER_KG,
            WeightUnit::Pounds => KCAL_PER_LB,
        }
    }

    /// How far from target a maintenance goal may drift and still count as on target.
    pub const fn maintenance_tolerance(&self) -> f64 {
        match self {
            WeightUnit::Kilograms => 0.5,
            WeightUnit::Pounds => 1.0,
        }
    }

    /// Short label.
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kg",
            WeightUnit::Pounds => "lb",
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Error returned when a unit label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weight unit: {0} (expected kg or lb)")]
pub struct ParseUnitError(pub String);

impl std::str::FromStr for WeightUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Pounds),
            other => Err(ParseUnitError(other.to_string())),
        }
    }
}
