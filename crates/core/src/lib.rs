//! Weightwise core data models.
//!
//! This crate defines the records the tracker works with: goals,
//! weigh-ins, food entries and the user profile.

#![warn(missing_docs)]

// Core identities
mod id;

// Goals and measurements
mod goal;
mod weight;
mod food;

// Settings
mod unit;
mod profile;

// Re-exports
pub use id::*;

pub use goal::{Goal, GoalMode, GoalDraft, GoalValidationError};
pub use weight::{WeightEntry, WeightHistory};
pub use food::{FoodEntry, daily_calories};
pub use unit::{WeightUnit, ParseUnitError, KCAL_PER_KG, KCAL_PER_LB};
pub use profile::Profile;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
