//! Text rendering for the terminal dashboard.

use weightwise_core::WeightUnit;
use weightwise_progress::{GoalProgress, MaintenanceBand, ProjectionResult};

const BAR_WIDTH: usize = 20;
const GAUGE_WIDTH: usize = 41;
const MISSING: &str = "—";

/// `[########------------]  40%`, or an em-dash without a weigh-in.
pub fn progress_bar(progress: Option<&GoalProgress>) -> String {
    let Some(progress) = progress else {
        return MISSING.to_string();
    };
    let filled = ((progress.percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let mut bar = format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.percent
    );
    if progress.is_complete {
        bar.push_str(" complete");
    }
    bar
}

/// Gauge with the tolerance band in `=` and the current weight as `*`.
pub fn band_gauge(band: &MaintenanceBand) -> String {
    let viz = &band.visualization;
    let slot = |percent: f64| -> usize {
        let idx = (percent / 100.0 * (GAUGE_WIDTH - 1) as f64).round() as usize;
        idx.min(GAUGE_WIDTH - 1)
    };

    let band_start = slot(viz.band_start_percent);
    let band_end = slot(viz.band_end_percent);
    let marker = viz.marker_percent.map(slot);

    let cells: String = (0..GAUGE_WIDTH)
        .map(|i| {
            if Some(i) == marker {
                '*'
            } else if i == GAUGE_WIDTH / 2 {
                '|'
            } else if (band_start..=band_end).contains(&i) {
                '='
            } else {
                '-'
            }
        })
        .collect();
    format!("[{}]", cells)
}

/// Signed distance from target, or an em-dash without a weigh-in.
pub fn band_delta(band: &MaintenanceBand, unit: WeightUnit) -> String {
    match band.delta {
        Some(delta) => {
            let status = if band.is_on_target { "on target" } else { "off target" };
            format!("{:+.1} {} ({}, ±{} {})", delta, unit, status, band.tolerance, unit)
        }
        None => MISSING.to_string(),
    }
}

/// Projected date with its provenance.
pub fn projection(result: &ProjectionResult) -> String {
    let detail = result.detail.as_deref().unwrap_or_default();
    match result.projected_date {
        Some(date) => format!("{} ({})", date.format("%Y-%m-%d"), detail),
        None => format!("{} {}", MISSING, detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weightwise_progress::{compute_band, compute_progress};

    #[test]
    fn test_progress_bar() {
        let bar = progress_bar(Some(&compute_progress(200.0, 150.0, 180.0)));
        assert_eq!(bar, "[########------------]  40%");

        let done = progress_bar(Some(&compute_progress(200.0, 150.0, 140.0)));
        assert!(done.ends_with("100% complete"));

        assert_eq!(progress_bar(None), "—");
    }

    #[test]
    fn test_band_gauge_marks_center_and_marker() {
        let band = compute_band(Some(70.4), 70.0, WeightUnit::Kilograms);
        let gauge = band_gauge(&band);

        assert_eq!(gauge.chars().count(), GAUGE_WIDTH + 2);
        assert!(gauge.contains('*'));
        assert!(gauge.contains('|'));
        // marker at 60% of the gauge
        assert_eq!(gauge.chars().position(|c| c == '*'), Some(1 + 24));
    }

    #[test]
    fn test_band_delta_without_history() {
        let band = compute_band(None, 70.0, WeightUnit::Kilograms);
        assert_eq!(band_delta(&band, WeightUnit::Kilograms), "—");
        assert!(!band_gauge(&band).contains('*'));
    }

    #[test]
    fn test_band_delta_text() {
        let band = compute_band(Some(71.2), 70.0, WeightUnit::Kilograms);
        assert_eq!(band_delta(&band, WeightUnit::Kilograms), "+1.2 kg (off target, ±0.5 kg)");
    }
}
