//! Food log entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::id::FoodEntryId;
use crate::Time;

/// A logged food item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Unique identifier
    pub id: FoodEntryId,

    /// Day the food counts towards
    pub date: NaiveDate,

    /// What was eaten
    pub name: String,

    /// Energy in kcal
    pub calories: u32,

    /// When the entry was written
    pub logged_at: Time,
}

impl FoodEntry {
    /// Create a new food entry for `date`.
    pub fn new(date: NaiveDate, name: impl Into<String>, calories: u32) -> Self {
        Self {
            id: FoodEntryId::new(),
            date,
            name: name.into(),
            calories,
            logged_at: chrono::Utc::now(),
        }
    }
}

/// Total calories logged on `date`.
pub fn daily_calories<'a>(entries: impl IntoIterator<Item = &'a FoodEntry>, date: NaiveDate) -> u32 {
    entries
        .into_iter()
        .filter(|e| e.date == date)
        .fold(0u32, |acc, e| acc.saturating_add(e.calories))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_calories_only_counts_that_day() {
        let monday = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let tuesday = monday.succ_opt().unwrap();
        let entries = vec![
            FoodEntry::new(monday, "Oats", 350),
            FoodEntry::new(monday, "Chicken salad", 520),
            FoodEntry::new(tuesday, "Pasta", 700),
        ];

        assert_eq!(daily_calories(&entries, monday), 870);
        assert_eq!(daily_calories(&entries, tuesday), 700);
        assert_eq!(daily_calories(Vec::<FoodEntry>::new().iter(), monday), 0);
    }
}
