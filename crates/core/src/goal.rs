//! Goal model - a weight target reached through a daily calorie delta.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::id::GoalId;
use crate::Time;

/// A weight goal.
///
/// Goals are immutable once saved. Changing a goal means saving a new
/// record, so earlier goals stay in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Weight when the goal was set
    pub start_weight: f64,

    /// Weight the user is aiming for (or holding, for maintenance)
    pub target_weight: f64,

    /// Signed daily calorie delta: positive is a deficit, negative a surplus
    pub daily_calorie_delta: i32,

    /// Calendar day the goal starts from
    pub created_on: NaiveDate,

    /// When the record was written
    pub created_at: Time,
}

impl Goal {
    /// Direction of the goal, derived from the calorie delta.
    pub fn mode(&self) -> GoalMode {
        GoalMode::from_delta(self.daily_calorie_delta)
    }
}

/// Direction a goal moves the user's weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalMode {
    /// Calorie deficit, weight goes down
    Lose,
    /// No delta, weight held within a band
    Maintain,
    /// Calorie surplus, weight goes up
    Gain,
}

impl GoalMode {
    /// Derive the mode from a signed calorie delta.
    pub const fn from_delta(daily_calorie_delta: i32) -> Self {
        if daily_calorie_delta == 0 {
            GoalMode::Maintain
        } else if daily_calorie_delta > 0 {
            GoalMode::Lose
        } else {
            GoalMode::Gain
        }
    }

    /// Turn an unsigned daily rate into the signed delta for this mode.
    pub fn signed_delta(&self, daily_rate: u32) -> i32 {
        let rate = i32::try_from(daily_rate).unwrap_or(i32::MAX);
        match self {
            GoalMode::Lose => rate,
            GoalMode::Maintain => 0,
            GoalMode::Gain => -rate,
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalMode::Lose => "lose",
            GoalMode::Maintain => "maintain",
            GoalMode::Gain => "gain",
        }
    }
}

impl std::fmt::Display for GoalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Goal parameters as entered in the editor, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalDraft {
    /// Starting weight
    pub start_weight: f64,
    /// Target weight
    pub target_weight: f64,
    /// Signed daily calorie delta
    pub daily_calorie_delta: i32,
}

/// Reasons the editor refuses a draft.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GoalValidationError {
    /// Weight is zero, negative or not a number
    #[error("{field} must be a positive number, got {value}")]
    InvalidWeight {
        /// Which weight was rejected
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Losing weight needs a target below the start
    #[error("a weight-loss goal needs a target below the start weight ({target} >= {start})")]
    LossTargetNotBelowStart {
        /// Start weight
        start: f64,
        /// Target weight
        target: f64,
    },

    /// Gaining weight needs a target above the start
    #[error("a weight-gain goal needs a target above the start weight ({target} <= {start})")]
    GainTargetNotAboveStart {
        /// Start weight
        start: f64,
        /// Target weight
        target: f64,
    },
}

impl GoalDraft {
    /// Direction of the draft.
    pub fn mode(&self) -> GoalMode {
        GoalMode::from_delta(self.daily_calorie_delta)
    }

    /// Check the draft before it is submitted.
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        check_weight("start_weight", self.start_weight)?;
        check_weight("target_weight", self.target_weight)?;

        match self.mode() {
            GoalMode::Lose if self.target_weight >= self.start_weight => {
                Err(GoalValidationError::LossTargetNotBelowStart {
                    start: self.start_weight,
                    target: self.target_weight,
                })
            }
            GoalMode::Gain if self.target_weight <= self.start_weight => {
                Err(GoalValidationError::GainTargetNotAboveStart {
                    start: self.start_weight,
                    target: self.target_weight,
                })
            }
            _ => Ok(()),
        }
    }

    /// Validate and build a new goal starting on `created_on`.
    pub fn into_goal(self, created_on: NaiveDate) -> Result<Goal, GoalValidationError> {
        self.validate()?;
        Ok(Goal {
            id: GoalId::new(),
            start_weight: self.start_weight,
            target_weight: self.target_weight,
            daily_calorie_delta: self.daily_calorie_delta,
            created_on,
            created_at: chrono::Utc::now(),
        })
    }
}

fn check_weight(field: &'static str, value: f64) -> Result<(), GoalValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GoalValidationError::InvalidWeight { field, value })
    }
}
