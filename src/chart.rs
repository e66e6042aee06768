//! Line Chart Geometry
//!
//! Maps the month-by-month series onto SVG coordinates.

use crate::models::MonthlyEarning;

/// Selectable chart windows, in months
pub const PERIODS: [usize; 4] = [3, 6, 9, 12];

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: f64,
}

/// The last `months` points of the series
pub fn window(series: &[MonthlyEarning], months: usize) -> &[MonthlyEarning] {
    &series[series.len().saturating_sub(months)..]
}

/// Evenly spaced x, y scaled to the series maximum; an all-zero series lies on the baseline
pub fn plot(series: &[MonthlyEarning], width: f64, height: f64, padding: f64) -> Vec<ChartPoint> {
    let inner_w = (width - 2.0 * padding).max(0.0);
    let inner_h = (height - 2.0 * padding).max(0.0);
    let max = series
        .iter()
        .map(|p| p.earnings)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let step = if series.len() > 1 {
        inner_w / (series.len() - 1) as f64
    } else {
        0.0
    };

    series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = if series.len() > 1 { padding + step * i as f64 } else { width / 2.0 };
            let ratio = if max > 0.0 { (point.earnings.max(0.0) / max).min(1.0) } else { 0.0 };
            ChartPoint {
                x,
                y: padding + inner_h * (1.0 - ratio),
                label: point.month.clone(),
                value: point.earnings,
            }
        })
        .collect()
}

/// Sum of earnings over `series`
pub fn total(series: &[MonthlyEarning]) -> f64 {
    series.iter().map(|p| p.earnings).sum()
}

/// SVG `points` attribute for a polyline
pub fn polyline(points: &[ChartPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<MonthlyEarning> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| MonthlyEarning { month: format!("M{}", i + 1), earnings: *v })
            .collect()
    }

    #[test]
    fn test_window_takes_latest_months() {
        let data = series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let last = window(&data, 3);
        assert_eq!(last.len(), 3);
        assert_eq!(last[0].month, "M3");
        assert_eq!(window(&data, 12).len(), 5);
        assert_eq!(total(window(&data, 3)), 12.0);
    }

    #[test]
    fn test_plot_scales_to_max() {
        let points = plot(&series(&[0.0, 50.0, 100.0]), 220.0, 120.0, 10.0);
        assert_eq!(points.len(), 3);
        assert_eq!((points[0].x, points[0].y), (10.0, 110.0));
        assert_eq!((points[1].x, points[1].y), (110.0, 60.0));
        assert_eq!((points[2].x, points[2].y), (210.0, 10.0));
        assert_eq!(polyline(&points), "10.0,110.0 110.0,60.0 210.0,10.0");
    }

    #[test]
    fn test_plot_zero_series_sits_on_baseline() {
        let points = plot(&series(&[0.0, 0.0]), 100.0, 100.0, 0.0);
        assert!(points.iter().all(|p| p.y == 100.0));
    }

    #[test]
    fn test_plot_single_point_is_centred() {
        let points = plot(&series(&[5.0]), 100.0, 100.0, 10.0);
        assert_eq!(points[0].x, 50.0);
        assert_eq!(points[0].y, 10.0);
        assert!(plot(&[], 100.0, 100.0, 10.0).is_empty());
    }
}
