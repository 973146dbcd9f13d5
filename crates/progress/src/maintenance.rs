//! Maintenance band: how far the current weight is from a held target.

use serde::{Deserialize, Serialize};
use weightwise_core::WeightUnit;
use crate::progress::EPSILON;

/// Smallest half-range of the gauge, so the scale never collapses to zero.
const MIN_RANGE: f64 = 0.1;

/// Gauge geometry for the proximity visualization.
///
/// The gauge runs from `-range` (0%) to `+range` (100%) around the target,
/// which sits at 50%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandVisualization {
    /// Half-width of the gauge in weight units
    pub range: f64,
    /// Position of the current weight, 0-100. None without a weigh-in.
    pub marker_percent: Option<f64>,
    /// Width of the tolerance band as a share of the gauge
    pub tolerance_width_percent: f64,
    /// Left edge of the tolerance band
    pub band_start_percent: f64,
    /// Right edge of the tolerance band
    pub band_end_percent: f64,
}

/// Maintenance status against a target weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceBand {
    /// Allowed drift either side of the target
    pub tolerance: f64,
    /// Current minus target; positive means above target
    pub delta: Option<f64>,
    /// Whether the current weight is inside the tolerance
    pub is_on_target: bool,
    /// Gauge geometry
    pub visualization: BandVisualization,
}

/// Compare the current weight with a maintenance target.
pub fn compute_band(current_weight: Option<f64>, target_weight: f64, unit: WeightUnit) -> MaintenanceBand {
    let tolerance = unit.maintenance_tolerance();
    let delta = current_weight.map(|current| current - target_weight);

    let is_on_target = delta.is_some_and(|d| d.abs() <= tolerance + EPSILON);

    let spread = delta.map_or(0.0, |d| 2.0 * d.abs());
    let range = (4.0 * tolerance).max(spread).max(MIN_RANGE);

    let marker_percent = delta.map(|d| (d.clamp(-range, range) + range) / (2.0 * range) * 100.0);
    let tolerance_width_percent = tolerance / range * 100.0;

    MaintenanceBand {
        tolerance,
        delta,
        is_on_target,
        visualization: BandVisualization {
            range,
            marker_percent,
            tolerance_width_percent,
            band_start_percent: 50.0 - tolerance_width_percent / 2.0,
            band_end_percent: 50.0 + tolerance_width_percent / 2.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_within_tolerance() {
        let band = compute_band(Some(70.4), 70.0, WeightUnit::Kilograms);
        assert_eq!(band.tolerance, 0.5);
        assert!(band.is_on_target);
        assert!(approx(band.delta.unwrap(), 0.4));
    }

    #[test]
    fn test_outside_tolerance() {
        let band = compute_band(Some(71.2), 70.0, WeightUnit::Kilograms);
        assert!(!band.is_on_target);
        assert!(approx(band.delta.unwrap(), 1.2));

        let band = compute_band(Some(70.8), 70.0, WeightUnit::Kilograms);
        assert!(!band.is_on_target);
        assert!(approx(band.delta.unwrap(), 0.8));
    }

    #[test]
    fn test_delta_is_signed_current_minus_target() {
        assert!(approx(compute_band(Some(68.9), 70.0, WeightUnit::Kilograms).delta.unwrap(), -1.1));
        assert!(approx(compute_band(Some(153.0), 150.0, WeightUnit::Pounds).delta.unwrap(), 3.0));
    }

    #[test]
    fn test_tolerance_edge_counts_as_on_target() {
        assert!(compute_band(Some(69.5), 70.0, WeightUnit::Kilograms).is_on_target);
        assert!(compute_band(Some(151.0), 150.0, WeightUnit::Pounds).is_on_target);
        assert!(!compute_band(Some(151.2), 150.0, WeightUnit::Pounds).is_on_target);
    }

    #[test]
    fn test_gauge_for_small_delta() {
        // range = max(4 * 0.5, 0.8, 0.1) = 2
        let band = compute_band(Some(70.4), 70.0, WeightUnit::Kilograms);
        let viz = band.visualization;
        assert!(approx(viz.range, 2.0));
        assert!(approx(viz.marker_percent.unwrap(), 60.0));
        assert!(approx(viz.tolerance_width_percent, 25.0));
        assert!(approx(viz.band_start_percent, 37.5));
        assert!(approx(viz.band_end_percent, 62.5));
    }

    #[test]
    fn test_gauge_widens_to_keep_marker_visible() {
        // 20 lb over: range = 40, marker at 75%
        let band = compute_band(Some(170.0), 150.0, WeightUnit::Pounds);
        let viz = band.visualization;
        assert!(approx(viz.range, 40.0));
        assert!(approx(viz.marker_percent.unwrap(), 75.0));
        assert!(approx(viz.tolerance_width_percent, 2.5));

        let below = compute_band(Some(130.0), 150.0, WeightUnit::Pounds);
        assert!(approx(below.visualization.marker_percent.unwrap(), 25.0));
    }

    #[test]
    fn test_marker_stays_on_gauge() {
        for current in [0.0, 50.0, 69.9, 70.0, 70.1, 90.0, 400.0] {
            let marker = compute_band(Some(current), 70.0, WeightUnit::Kilograms)
                .visualization
                .marker_percent
                .unwrap();
            assert!((0.0..=100.0).contains(&marker), "current={current} marker={marker}");
        }
    }

    #[test]
    fn test_no_history() {
        let band = compute_band(None, 70.0, WeightUnit::Kilograms);
        assert!(band.delta.is_none());
        assert!(!band.is_on_target);
        assert!(band.visualization.marker_percent.is_none());
        assert!(approx(band.visualization.range, 2.0));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let a = compute_band(Some(70.37), 70.0, WeightUnit::Kilograms);
        let b = compute_band(Some(70.37), 70.0, WeightUnit::Kilograms);
        assert_eq!(a, b);
    }
}
