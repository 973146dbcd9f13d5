//! Progress tracking service.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use weightwise_core::{daily_calories, FoodEntry, Goal, Profile};
use weightwise_storage::Storage;
use crate::error::Result;
use crate::summary::{summarize, GoalSummary};

/// Progress tracking service.
#[async_trait]
pub trait ProgressTracker: Send + Sync {
    /// Summary of the current goal, or None if no goal is set.
    async fn current_summary(&self) -> Result<Option<GoalSummary>>;

    /// Every goal ever set, oldest first.
    async fn goal_history(&self) -> Result<Vec<Goal>>;

    /// Calories eaten on `date` against the profile's budget.
    async fn daily_intake(&self, date: NaiveDate) -> Result<DailyIntake>;
}

/// Food intake for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyIntake {
    /// Day
    pub date: NaiveDate,

    /// Entries logged that day
    pub entries: Vec<FoodEntry>,

    /// Total kcal eaten
    pub eaten: u32,

    /// Budget from the profile
    pub budget: Option<u32>,

    /// Budget minus eaten; negative when over
    pub remaining: Option<i64>,
}

/// Basic progress tracker implementation.
pub struct BasicProgressTracker<S: Storage> {
    storage: Arc<S>,
}

impl<S: Storage> BasicProgressTracker<S> {
    /// Create a new progress tracker.
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    async fn profile(&self) -> Result<Profile> {
        Ok(self.storage.load_profile().await?)
    }
}

#[async_trait]
impl<S: Storage + 'static> ProgressTracker for BasicProgressTracker<S> {
    async fn current_summary(&self) -> Result<Option<GoalSummary>> {
        let Some(goal) = self.storage.current_goal().await? else {
            debug!("no goal set");
            return Ok(None);
        };

        let profile = self.profile().await?;
        let history = self.storage.list_weights().await?;
        debug!(goal_id = %goal.id, weigh_ins = history.len(), "summarizing goal");

        Ok(Some(summarize(&goal, &history, profile.unit)))
    }

    async fn goal_history(&self) -> Result<Vec<Goal>> {
        Ok(self.storage.list_goals().await?)
    }

    async fn daily_intake(&self, date: NaiveDate) -> Result<DailyIntake> {
        let profile = self.profile().await?;
        let entries = self.storage.list_food(date).await?;
        let eaten = daily_calories(&entries, date);

        Ok(DailyIntake {
            date,
            eaten,
            budget: profile.daily_calorie_budget,
            remaining: profile.remaining_budget(eaten),
            entries,
        })
    }
}
