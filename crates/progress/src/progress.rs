//! Goal completion percentage.

use serde::{Deserialize, Serialize};

/// How close a weigh-in must be to the target to complete a goal whose
/// start and target weights are equal.
pub const ZERO_DELTA_TOLERANCE: f64 = 0.1;

/// Absorbs floating-point noise in threshold comparisons.
pub(crate) const EPSILON: f64 = 1e-9;

/// Completion state of a lose or gain goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Percentage of the planned change achieved, clamped to 0-100
    pub percent: f64,

    /// Whether the target has been reached
    pub is_complete: bool,
}

/// Compute progress from the start weight toward the target.
///
/// Overshooting the target reads as 100% rather than more, and moving the
/// wrong way reads as 0%. When start and target are equal the result is
/// binary: complete (100%) within [`ZERO_DELTA_TOLERANCE`] of the target,
/// otherwise 0%.
pub fn compute_progress(start_weight: f64, target_weight: f64, current_weight: f64) -> GoalProgress {
    let total_delta = target_weight - start_weight;

    if total_delta == 0.0 {
        let is_complete = (current_weight - target_weight).abs() <= ZERO_DELTA_TOLERANCE + EPSILON;
        return GoalProgress {
            percent: if is_complete { 100.0 } else { 0.0 },
            is_complete,
        };
    }

    let achieved_delta = current_weight - start_weight;
    let raw = achieved_delta / total_delta * 100.0;
    // NaN only comes from non-finite input; report no progress
    let percent = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 100.0) };

    let is_complete = if total_delta < 0.0 {
        current_weight <= target_weight
    } else {
        current_weight >= target_weight
    };

    GoalProgress { percent, is_complete }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_delta_within_tolerance_is_complete() {
        let progress = compute_progress(100.0, 100.0, 100.05);
        assert!(progress.is_complete);
        assert_eq!(progress.percent, 100.0);

        let edge = compute_progress(100.0, 100.0, 99.9);
        assert!(edge.is_complete);
    }

    #[test]
    fn test_zero_delta_outside_tolerance() {
        let progress = compute_progress(100.0, 100.0, 101.0);
        assert!(!progress.is_complete);
        assert_eq!(progress.percent, 0.0);
    }

    #[test]
    fn test_loss_goal_overshoot_is_clamped() {
        let progress = compute_progress(200.0, 150.0, 140.0);
        assert_eq!(progress.percent, 100.0);
        assert!(progress.is_complete);
    }

    #[test]
    fn test_loss_goal_partway() {
        let progress = compute_progress(200.0, 150.0, 180.0);
        assert!((progress.percent - 40.0).abs() < 1e-9);
        assert!(!progress.is_complete);
    }

    #[test]
    fn test_gain_goal() {
        let halfway = compute_progress(60.0, 70.0, 65.0);
        assert!((halfway.percent - 50.0).abs() < 1e-9);
        assert!(!halfway.is_complete);

        let reached = compute_progress(60.0, 70.0, 70.0);
        assert_eq!(reached.percent, 100.0);
        assert!(reached.is_complete);
    }

    #[test]
    fn test_wrong_direction_reads_zero() {
        let progress = compute_progress(200.0, 150.0, 210.0);
        assert_eq!(progress.percent, 0.0);
        assert!(!progress.is_complete);

        let gain = compute_progress(60.0, 70.0, 55.0);
        assert_eq!(gain.percent, 0.0);
    }

    #[test]
    fn test_percent_always_in_range() {
        let cases = [
            (200.0, 150.0),
            (60.0, 70.0),
            (80.5, 80.4),
            (1.0, 500.0),
        ];
        for (start, target) in cases {
            for current in [-50.0, 0.0, 1.0, 80.45, 149.99, 150.0, 175.0, 1000.0] {
                let p = compute_progress(start, target, current);
                assert!(
                    (0.0..=100.0).contains(&p.percent),
                    "start={start} target={target} current={current} percent={}",
                    p.percent
                );
            }
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let a = compute_progress(91.3, 84.7, 88.1);
        let b = compute_progress(91.3, 84.7, 88.1);
        assert_eq!(a.percent.to_bits(), b.percent.to_bits());
        assert_eq!(a, b);
    }
}
