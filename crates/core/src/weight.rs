//! Weigh-ins and the per-day weight history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single weigh-in. There is at most one per calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Local calendar day of the weigh-in
    pub date: NaiveDate,

    /// Measured weight, in the profile's unit
    pub weight: f64,
}

impl WeightEntry {
    /// Create a weigh-in.
    pub fn new(date: NaiveDate, weight: f64) -> Self {
        Self { date, weight }
    }
}

/// Weigh-ins ordered newest first, keyed by date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightHistory {
    entries: Vec<WeightEntry>,
}

impl WeightHistory {
    /// Build a history from entries in any order.
    ///
    /// When two entries share a date the later one in the input wins.
    pub fn from_entries(entries: impl IntoIterator<Item = WeightEntry>) -> Self {
        let mut history = Self::default();
        for entry in entries {
            history.upsert(entry);
        }
        history
    }

    /// Insert a weigh-in, replacing any entry for the same date.
    pub fn upsert(&mut self, entry: WeightEntry) {
        match self
            .entries
            .binary_search_by(|other| entry.date.cmp(&other.date))
        {
            Ok(idx) => self.entries[idx] = entry,
            Err(idx) => self.entries.insert(idx, entry),
        }
    }

    /// Remove the weigh-in for `date`, returning it if present.
    pub fn remove(&mut self, date: NaiveDate) -> Option<WeightEntry> {
        let idx = self
            .entries
            .binary_search_by(|other| date.cmp(&other.date))
            .ok()?;
        Some(self.entries.remove(idx))
    }

    /// Most recent weigh-in.
    pub fn latest(&self) -> Option<&WeightEntry> {
        self.entries.first()
    }

    /// Weigh-in for a specific day.
    pub fn on(&self, date: NaiveDate) -> Option<&WeightEntry> {
        self.entries
            .binary_search_by(|other| date.cmp(&other.date))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &WeightEntry> {
        self.entries.iter()
    }

    /// Number of weigh-ins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
