//! Goal editor: validates drafts, previews them and replaces the current goal.

use chrono::NaiveDate;
use tracing::info;
use weightwise_core::{Goal, GoalDraft};
use weightwise_storage::Storage;
use crate::error::Result;
use crate::estimator::{GoalProjectionEstimator, ProjectionInput, ProjectionResult};

/// Edits the user's goal.
pub struct GoalEditor<S: Storage> {
    storage: S,
}

impl<S: Storage> GoalEditor<S> {
    /// Create an editor over `storage`.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Give the storage back.
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Projection shown next to the form before the draft is submitted.
    pub async fn preview(&self, draft: &GoalDraft, today: NaiveDate) -> Result<ProjectionResult> {
        draft.validate()?;

        let profile = self.storage.load_profile().await?;
        let weights = self.storage.list_weights().await?;

        let input = ProjectionInput {
            mode: draft.mode(),
            unit: profile.unit,
            start_weight: draft.start_weight,
            target_weight: draft.target_weight,
            daily_calorie_delta: draft.daily_calorie_delta,
            goal_created_on: today,
            latest: weights.latest().copied(),
        };
        Ok(GoalProjectionEstimator.project(&input))
    }

    /// Validate the draft and save it as the new current goal.
    ///
    /// The previous goal is kept in the history.
    pub async fn replace_goal(&mut self, draft: GoalDraft, today: NaiveDate) -> Result<Goal> {
        let goal = draft.into_goal(today)?;
        self.storage.save_goal(&goal).await?;
        info!(goal_id = %goal.id, mode = %goal.mode(), target = goal.target_weight, "goal replaced");
        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProgressError;
    use weightwise_core::{GoalValidationError, Profile, WeightEntry, WeightUnit};
    use weightwise_storage::JsonStorage;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[tokio::test]
    async fn test_replace_goal_appends_to_history() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();
        let mut editor = GoalEditor::new(storage);

        let first = editor
            .replace_goal(GoalDraft { start_weight: 90.0, target_weight: 80.0, daily_calorie_delta: 500 }, day(1))
            .await
            .unwrap();
        let second = editor
            .replace_goal(GoalDraft { start_weight: 88.0, target_weight: 82.0, daily_calorie_delta: 300 }, day(10))
            .await
            .unwrap();

        let storage = editor.into_inner();
        let goals = storage.list_goals().await.unwrap();
        assert_eq!(goals.len(), 2);
        assert!(goals.iter().any(|g| g.id == first.id));
        assert!(goals.iter().any(|g| g.id == second.id));
    }

    #[tokio::test]
    async fn test_replace_goal_rejects_invalid_draft() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();
        let mut editor = GoalEditor::new(storage);

        let err = editor
            .replace_goal(GoalDraft { start_weight: 80.0, target_weight: 85.0, daily_calorie_delta: 500 }, day(1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ProgressError::InvalidGoal(GoalValidationError::LossTargetNotBelowStart { .. })
        ));

        let storage = editor.into_inner();
        assert!(storage.list_goals().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_preview_uses_profile_unit_and_latest_weigh_in() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();
        storage
            .save_profile(&Profile { unit: WeightUnit::Pounds, daily_calorie_budget: None })
            .await
            .unwrap();
        storage.save_weight(&WeightEntry::new(day(5), 190.0)).await.unwrap();

        let editor = GoalEditor::new(storage);
        let draft = GoalDraft { start_weight: 195.0, target_weight: 180.0, daily_calorie_delta: 500 };
        let preview = editor.preview(&draft, day(6)).await.unwrap();

        // 10 lb from the Jan 5 weigh-in at 500 kcal/day
        assert_eq!(preview.days_to_target, Some(70));
        assert_eq!(preview.projected_date, Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
    }
}
