//! One place that turns a goal and a weight history into everything the
//! dashboard, goals page and goal editor display.

use serde::{Deserialize, Serialize};
use weightwise_core::{Goal, GoalId, GoalMode, WeightEntry, WeightHistory, WeightUnit};
use crate::estimator::{GoalProjectionEstimator, ProjectionInput, ProjectionResult};
use crate::maintenance::{compute_band, MaintenanceBand};
use crate::progress::{compute_progress, GoalProgress};

/// Derived state of a goal for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSummary {
    /// Goal this summary describes
    pub goal_id: GoalId,
    /// Goal direction
    pub mode: GoalMode,
    /// Unit of every weight in the summary
    pub unit: WeightUnit,
    /// Start weight of the goal
    pub start_weight: f64,
    /// Target weight of the goal
    pub target_weight: f64,
    /// Latest weigh-in used
    pub current: Option<WeightEntry>,
    /// Completion for lose/gain goals. None for maintenance or without a weigh-in.
    pub progress: Option<GoalProgress>,
    /// Band status for maintenance goals
    pub maintenance: Option<MaintenanceBand>,
    /// Projected completion
    pub projection: ProjectionResult,
}

/// Summarize a goal against the user's weigh-ins.
pub fn summarize(goal: &Goal, history: &WeightHistory, unit: WeightUnit) -> GoalSummary {
    let current = history.latest().copied();
    let mode = goal.mode();

    let (progress, maintenance) = match mode {
        GoalMode::Maintain => (
            None,
            Some(compute_band(current.map(|c| c.weight), goal.target_weight, unit)),
        ),
        GoalMode::Lose | GoalMode::Gain => (
            current.map(|c| compute_progress(goal.start_weight, goal.target_weight, c.weight)),
            None,
        ),
    };

    let projection = GoalProjectionEstimator.project(&ProjectionInput::for_goal(goal, current, unit));

    GoalSummary {
        goal_id: goal.id,
        mode,
        unit,
        start_weight: goal.start_weight,
        target_weight: goal.target_weight,
        current,
        progress,
        maintenance,
        projection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use weightwise_core::GoalDraft;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn goal(start: f64, target: f64, delta: i32) -> Goal {
        GoalDraft { start_weight: start, target_weight: target, daily_calorie_delta: delta }
            .into_goal(day(1, 1))
            .unwrap()
    }

    #[test]
    fn test_loss_goal_summary() {
        let goal = goal(200.0, 150.0, 500);
        let history = WeightHistory::from_entries([
            WeightEntry::new(day(1, 10), 190.0),
            WeightEntry::new(day(2, 1), 180.0),
        ]);

        let summary = summarize(&goal, &history, WeightUnit::Pounds);
        assert_eq!(summary.mode, GoalMode::Lose);
        assert_eq!(summary.current.unwrap().date, day(2, 1));
        assert!((summary.progress.unwrap().percent - 40.0).abs() < 1e-9);
        assert!(summary.maintenance.is_none());
        // 30 lb * 3500 / 500 = 210 days from Feb 1
        assert_eq!(summary.projection.days_to_target, Some(210));
    }

    #[test]
    fn test_loss_goal_without_weigh_ins() {
        let summary = summarize(&goal(90.0, 80.0, 700), &WeightHistory::default(), WeightUnit::Kilograms);
        assert!(summary.current.is_none());
        assert!(summary.progress.is_none());
        assert_eq!(summary.projection.days_to_target, Some(110));
    }

    #[test]
    fn test_maintenance_goal_summary() {
        let goal = goal(70.0, 70.0, 0);
        let history = WeightHistory::from_entries([WeightEntry::new(day(3, 3), 70.4)]);

        let summary = summarize(&goal, &history, WeightUnit::Kilograms);
        assert!(summary.progress.is_none());
        assert!(summary.maintenance.unwrap().is_on_target);
        assert!(summary.projection.is_unavailable);
    }

    #[test]
    fn test_summary_matches_individual_components() {
        let goal = goal(60.0, 66.0, -400);
        let history = WeightHistory::from_entries([WeightEntry::new(day(2, 14), 62.5)]);
        let summary = summarize(&goal, &history, WeightUnit::Kilograms);

        let latest = history.latest().copied();
        assert_eq!(summary.progress, Some(compute_progress(60.0, 66.0, 62.5)));
        assert_eq!(
            summary.projection,
            GoalProjectionEstimator.project(&ProjectionInput::for_goal(&goal, latest, WeightUnit::Kilograms))
        );
    }
}
