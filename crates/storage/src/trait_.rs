//! Storage trait abstraction.

use async_trait::async_trait;
use chrono::NaiveDate;
use weightwise_core::{FoodEntry, FoodEntryId, Goal, GoalId, Profile, WeightEntry, WeightHistory};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record already exists and may not be overwritten
    #[error("Already exists: {0}")]
    AlreadyExists(String),
}

/// Storage abstraction for Weightwise data.
///
/// Goals are append-only: saving a goal adds a record and the newest one
/// is the current goal. Weigh-ins are keyed by date, so saving a second
/// entry for the same day replaces the first.
#[async_trait]
pub trait Storage: Send + Sync {
    // === Goal operations ===

    /// Save a new goal. Fails if a goal with the same ID exists.
    async fn save_goal(&mut self, goal: &Goal) -> Result<()>;

    /// Load a goal by ID.
    async fn load_goal(&self, id: GoalId) -> Result<Option<Goal>>;

    /// List all goals, oldest first. Fails if any goal record is unreadable.
    async fn list_goals(&self) -> Result<Vec<Goal>>;

    /// The goal currently in effect (the newest one).
    ///
    /// An unreadable goal record is an error, never skipped, so an older
    /// goal cannot silently take its place.
    async fn current_goal(&self) -> Result<Option<Goal>> {
        Ok(self.list_goals().await?.pop())
    }

    // === Weight operations ===

    /// Save a weigh-in, replacing any entry for the same date.
    async fn save_weight(&mut self, entry: &WeightEntry) -> Result<()>;

    /// Delete the weigh-in for `date`. Returns whether one existed.
    async fn delete_weight(&mut self, date: NaiveDate) -> Result<bool>;

    /// Load every weigh-in, newest first.
    async fn list_weights(&self) -> Result<WeightHistory>;

    // === Food operations ===

    /// Save a food entry.
    async fn save_food(&mut self, entry: &FoodEntry) -> Result<()>;

    /// List food entries for a day, in the order they were logged.
    async fn list_food(&self, date: NaiveDate) -> Result<Vec<FoodEntry>>;

    /// Delete a food entry. Returns whether one existed.
    async fn delete_food(&mut self, id: FoodEntryId) -> Result<bool>;

    // === Profile ===

    /// Load the profile, or the default profile if none was saved.
    async fn load_profile(&self) -> Result<Profile>;

    /// Save the profile.
    async fn save_profile(&mut self, profile: &Profile) -> Result<()>;
}
