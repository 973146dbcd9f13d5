//! User profile settings that apply to every record.

use serde::{Deserialize, Serialize};
use crate::unit::WeightUnit;

/// Per-user settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unit system for all weights
    #[serde(default)]
    pub unit: WeightUnit,

    /// Daily calorie budget, if the user set one
    #[serde(default)]
    pub daily_calorie_budget: Option<u32>,
}

impl Profile {
    /// Calories left in today's budget. Negative when over budget.
    pub fn remaining_budget(&self, eaten: u32) -> Option<i64> {
        self.daily_calorie_budget
            .map(|budget| i64::from(budget) - i64::from(eaten))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_budget() {
        let profile = Profile {
            unit: WeightUnit::Pounds,
            daily_calorie_budget: Some(2000),
        };
        assert_eq!(profile.remaining_budget(1500), Some(500));
        assert_eq!(profile.remaining_budget(2300), Some(-300));
        assert_eq!(Profile::default().remaining_budget(100), None);
    }

    #[test]
    fn test_profile_missing_fields_use_defaults() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, Profile::default());
        assert_eq!(profile.unit, WeightUnit::Kilograms);
    }
}
