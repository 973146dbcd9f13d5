//! Completion date projection.
//!
//! Uses a constant energy-balance model: every unit of body weight is worth
//! a fixed number of calories (see [`WeightUnit::calories_per_unit`]), and
//! the goal's daily calorie delta is assumed to hold until the target is
//! reached. There is no trend fitting or smoothing.
//!
//! The projection starts from the most recent weigh-in. Without one it
//! falls back to the goal's start weight on the day the goal was created,
//! which assumes the weight has not moved since then.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;
use weightwise_core::{Goal, GoalMode, WeightEntry, WeightUnit};
use crate::progress::EPSILON;

/// Everything needed to project a goal's completion date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionInput {
    /// Goal direction
    pub mode: GoalMode,
    /// Unit the weights are expressed in
    pub unit: WeightUnit,
    /// Goal start weight
    pub start_weight: f64,
    /// Goal target weight
    pub target_weight: f64,
    /// Signed daily calorie delta (positive is a deficit)
    pub daily_calorie_delta: i32,
    /// Day the goal was created
    pub goal_created_on: NaiveDate,
    /// Most recent weigh-in, if any
    pub latest: Option<WeightEntry>,
}

impl ProjectionInput {
    /// Build the input for a stored goal.
    pub fn for_goal(goal: &Goal, latest: Option<WeightEntry>, unit: WeightUnit) -> Self {
        Self {
            mode: goal.mode(),
            unit,
            start_weight: goal.start_weight,
            target_weight: goal.target_weight,
            daily_calorie_delta: goal.daily_calorie_delta,
            goal_created_on: goal.created_on,
            latest,
        }
    }
}

/// Where a projection's baseline came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaselineSource {
    /// The most recent weigh-in
    LatestWeighIn,
    /// The goal's start weight on its creation day
    GoalStart,
}

/// Weight and date a projection is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    /// Baseline weight
    pub weight: f64,
    /// Baseline day
    pub date: NaiveDate,
    /// Source of the baseline
    pub source: BaselineSource,
}

/// Why no projected date could be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnavailableReason {
    /// Maintenance goals have no target date
    Maintenance,
    /// Calorie sign and target direction disagree
    DirectionMismatch,
    /// The date falls outside the supported calendar
    OutOfRange,
}

/// Outcome of a projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Projected completion day
    pub projected_date: Option<NaiveDate>,
    /// Human-readable explanation of how the date was derived
    pub detail: Option<String>,
    /// True when no date could be projected
    pub is_unavailable: bool,
    /// Why the projection is unavailable
    pub reason: Option<UnavailableReason>,
    /// Baseline the projection started from
    pub baseline: Option<Baseline>,
    /// Whole days from baseline to target
    pub days_to_target: Option<u64>,
}

impl ProjectionResult {
    fn unavailable(reason: UnavailableReason, detail: String) -> Self {
        debug!(?reason, %detail, "projection unavailable");
        Self {
            projected_date: None,
            detail: Some(detail),
            is_unavailable: true,
            reason: Some(reason),
            baseline: None,
            days_to_target: None,
        }
    }
}

/// Projects goal completion dates.
pub struct GoalProjectionEstimator;

impl GoalProjectionEstimator {
    /// Project when the goal will be reached.
    pub fn project(&self, input: &ProjectionInput) -> ProjectionResult {
        let delta = input.daily_calorie_delta;

        if input.mode == GoalMode::Maintain || delta == 0 {
            return ProjectionResult::unavailable(
                UnavailableReason::Maintenance,
                "No target date projection for maintenance goals.".to_string(),
            );
        }

        if let Some(detail) = direction_conflict(input) {
            return ProjectionResult::unavailable(UnavailableReason::DirectionMismatch, detail);
        }

        let baseline = select_baseline(input);
        let losing = delta > 0;
        let remaining = if losing {
            (baseline.weight - input.target_weight).max(0.0)
        } else {
            (input.target_weight - baseline.weight).max(0.0)
        };

        let calories_per_day = f64::from(delta.unsigned_abs());
        let raw_days = remaining * input.unit.calories_per_unit() / calories_per_day;
        let days = whole_days(raw_days);

        let projected = if days.is_finite() {
            baseline.date.checked_add_days(Days::new(days as u64))
        } else {
            None
        };
        let Some(projected_date) = projected else {
            return ProjectionResult::unavailable(
                UnavailableReason::OutOfRange,
                format!(
                    "At {} kcal/day the target is too far away to project a date.",
                    signed_rate(delta)
                ),
            );
        };

        ProjectionResult {
            projected_date: Some(projected_date),
            detail: Some(describe(delta, &baseline)),
            is_unavailable: false,
            reason: None,
            baseline: Some(baseline),
            days_to_target: Some(days as u64),
        }
    }
}

/// Round a day count up, except that a value within relative float noise of
/// a whole number snaps to it. Any real remainder still costs a full day.
fn whole_days(raw_days: f64) -> f64 {
    let nearest = raw_days.round();
    let days = if (raw_days - nearest).abs() <= raw_days.abs() * EPSILON {
        nearest
    } else {
        raw_days.ceil()
    };
    days.max(0.0)
}

impl Default for GoalProjectionEstimator {
    fn default() -> Self {
        Self
    }
}

fn direction_conflict(input: &ProjectionInput) -> Option<String> {
    let delta = input.daily_calorie_delta;
    let unit = input.unit;
    let (start, target) = (input.start_weight, input.target_weight);
    let implied = GoalMode::from_delta(delta);

    if input.mode != implied {
        return Some(format!(
            "Contradictory goal: marked as {} but the calorie delta of {} kcal/day implies {}.",
            input.mode,
            signed_rate(delta),
            implied
        ));
    }

    if delta > 0 && target >= start {
        return Some(format!(
            "Contradictory goal: a {} kcal/day deficit means losing weight, but the target ({} {}) is not below the start ({} {}).",
            delta, target, unit, start, unit
        ));
    }

    if delta < 0 && target <= start {
        return Some(format!(
            "Contradictory goal: a {} kcal/day surplus means gaining weight, but the target ({} {}) is not above the start ({} {}).",
            delta.unsigned_abs(),
            target,
            unit,
            start,
            unit
        ));
    }

    None
}

fn select_baseline(input: &ProjectionInput) -> Baseline {
    match input.latest {
        Some(entry) => Baseline {
            weight: entry.weight,
            date: entry.date,
            source: BaselineSource::LatestWeighIn,
        },
        None => Baseline {
            weight: input.start_weight,
            date: input.goal_created_on,
            source: BaselineSource::GoalStart,
        },
    }
}

/// Intake relative to maintenance: a deficit reads as negative.
fn signed_rate(daily_calorie_delta: i32) -> String {
    format!("{:+}", -i64::from(daily_calorie_delta))
}

fn describe(daily_calorie_delta: i32, baseline: &Baseline) -> String {
    let from = match baseline.source {
        BaselineSource::LatestWeighIn => "your latest weigh-in",
        BaselineSource::GoalStart => "your starting weight",
    };
    format!(
        "Based on {} kcal/day from {} ({})",
        signed_rate(daily_calorie_delta),
        from,
        baseline.date.format("%b %-d")
    )
}
