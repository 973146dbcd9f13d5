//! JSON file storage implementation.
//!
//! Stores each record as a pretty-printed JSON file under a root directory:
//!
//! ```text
//! goals/<id>.json
//! weights/<YYYY-MM-DD>.json
//! food/<id>.json
//! profile.json
//! ```
//!
//! Weigh-ins are named by date, so writing a second entry for the same day
//! overwrites the file.

use std::path::{Path, PathBuf};
use chrono::NaiveDate;
use tokio::fs;
use tracing::debug;
use weightwise_core::{FoodEntry, FoodEntryId, Goal, GoalId, Profile, WeightEntry, WeightHistory};
use super::{Storage, StorageError, Result};

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage, creating the record directories if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(root.join("goals")).await?;
        fs::create_dir_all(root.join("weights")).await?;
        fs::create_dir_all(root.join("food")).await?;

        Ok(Self { root })
    }

    /// Root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn goal_path(&self, id: GoalId) -> PathBuf {
        self.root.join("goals").join(format!("{}.json", id))
    }
    fn weight_path(&self, date: NaiveDate) -> PathBuf {
        self.root.join("weights").join(format!("{}.json", date.format("%Y-%m-%d")))
    }
    fn food_path(&self, id: FoodEntryId) -> PathBuf {
        self.root.join("food").join(format!("{}.json", id))
    }
    fn profile_path(&self) -> PathBuf {
        self.root.join("profile.json")
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn save_goal(&mut self, goal: &Goal) -> Result<()> {
        let path = self.goal_path(goal.id);
        if fs::try_exists(&path).await? {
            return Err(StorageError::AlreadyExists(format!("goal {}", goal.id)));
        }
        write_json(&path, goal).await?;
        debug!(goal_id = %goal.id, mode = %goal.mode(), "saved goal");
        Ok(())
    }

    async fn load_goal(&self, id: GoalId) -> Result<Option<Goal>> {
        read_json(&self.goal_path(id)).await
    }

    async fn list_goals(&self) -> Result<Vec<Goal>> {
        let mut goals: Vec<Goal> = list_dir(&self.root.join("goals"), OnUnreadable::Fail).await?;
        goals.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(goals)
    }

    async fn save_weight(&mut self, entry: &WeightEntry) -> Result<()> {
        write_json(&self.weight_path(entry.date), entry).await?;
        debug!(date = %entry.date, weight = entry.weight, "saved weigh-in");
        Ok(())
    }

    async fn delete_weight(&mut self, date: NaiveDate) -> Result<bool> {
        remove_if_exists(&self.weight_path(date)).await
    }

    async fn list_weights(&self) -> Result<WeightHistory> {
        let entries: Vec<WeightEntry> = list_dir(&self.root.join("weights"), OnUnreadable::Skip).await?;
        Ok(WeightHistory::from_entries(entries))
    }

    async fn save_food(&mut self, entry: &FoodEntry) -> Result<()> {
        write_json(&self.food_path(entry.id), entry).await?;
        debug!(date = %entry.date, calories = entry.calories, "saved food entry");
        Ok(())
    }

    async fn list_food(&self, date: NaiveDate) -> Result<Vec<FoodEntry>> {
        let all: Vec<FoodEntry> = list_dir(&self.root.join("food"), OnUnreadable::Skip).await?;
        let mut entries: Vec<FoodEntry> = all.into_iter().filter(|e| e.date == date).collect();
        entries.sort_by(|a, b| a.logged_at.cmp(&b.logged_at));
        Ok(entries)
    }

    async fn delete_food(&mut self, id: FoodEntryId) -> Result<bool> {
        remove_if_exists(&self.food_path(id)).await
    }

    async fn load_profile(&self) -> Result<Profile> {
        Ok(read_json(&self.profile_path()).await?.unwrap_or_default())
    }

    async fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        write_json(&self.profile_path(), profile).await?;
        debug!(unit = %profile.unit, "saved profile");
        Ok(())
    }
}

async fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json.as_bytes()).await?;
    Ok(())
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn remove_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// What `list_dir` does with a record it cannot parse.
#[derive(Clone, Copy, PartialEq, Eq)]
enum OnUnreadable {
    /// Log a warning and leave it out
    Skip,
    /// Return the error
    Fail,
}

async fn list_dir<T: serde::de::DeserializeOwned>(dir: &Path, on_unreadable: OnUnreadable) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut rd = fs::read_dir(dir).await?;
    while let Some(entry) = rd.next_entry().await? {
        if entry.path().extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        match read_json(&entry.path()).await {
            Ok(Some(item)) => items.push(item),
            Ok(None) => {}
            Err(e) if on_unreadable == OnUnreadable::Fail => return Err(e),
            Err(e) => tracing::warn!(path = %entry.path().display(), error = %e, "skipping unreadable record"),
        }
    }
    Ok(items)
}
