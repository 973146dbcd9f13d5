//! Goal progress and projection.
//!
//! The pure engine lives in [`progress`], [`estimator`] and [`maintenance`];
//! [`summary`] combines them for a goal. The editor and tracker add
//! storage on top.

#![warn(missing_docs)]

pub mod progress;
pub mod estimator;
pub mod maintenance;
pub mod summary;
pub mod editor;
pub mod tracker;
mod error;

pub use progress::{compute_progress, GoalProgress, ZERO_DELTA_TOLERANCE};
pub use estimator::{
    Baseline, BaselineSource, GoalProjectionEstimator, ProjectionInput, ProjectionResult,
    UnavailableReason,
};
pub use maintenance::{compute_band, BandVisualization, MaintenanceBand};
pub use summary::{summarize, GoalSummary};
pub use editor::GoalEditor;
pub use tracker::{BasicProgressTracker, DailyIntake, ProgressTracker};
pub use error::{ProgressError, Result};
