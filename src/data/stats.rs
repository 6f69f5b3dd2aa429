//! Summary statistics for sample sets.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

/// Arithmetic mean. `NaN` for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation (divides by `n`).
pub fn std_dev(samples: &[f64]) -> f64 {
    let mu = mean(samples);
    let variance =
        samples.iter().map(|x| (x - mu) * (x - mu)).sum::<f64>() / samples.len() as f64;
    variance.sqrt()
}

/// Evaluate the normal CDF fitted to `samples` at every sample.
///
/// Points keep the input order. With zero spread the fitted distribution
/// collapses onto the mean and the CDF becomes a step at the mean.
pub fn normal_cdf_points(samples: &[f64]) -> Vec<(f64, f64)> {
    let mu = mean(samples);
    let sigma = std_dev(samples);

    match Normal::new(mu, sigma) {
        Ok(dist) if sigma > 0.0 => samples.iter().map(|&x| (x, dist.cdf(x))).collect(),
        _ => samples
            .iter()
            .map(|&x| (x, if x >= mu { 1.0 } else { 0.0 }))
            .collect(),
    }
}

/// Percentile of sorted data with linear interpolation between ranks.
///
/// `p` is in `0.0..=1.0`.
fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

fn sorted_copy(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Geometry of one box in a boxplot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxStats {
    /// Lowest sample within 1.5 IQR below the first quartile.
    pub whisker_low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Highest sample within 1.5 IQR above the third quartile.
    pub whisker_high: f64,
    pub mean: f64,
}

impl BoxStats {
    /// Whisker reach as a multiple of the interquartile range.
    pub const WHISKER_IQR: f64 = 1.5;

    /// Compute box geometry. Returns `None` for an empty slice.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let sorted = sorted_copy(samples);

        let q1 = percentile_sorted(&sorted, 0.25);
        let median = percentile_sorted(&sorted, 0.5);
        let q3 = percentile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - Self::WHISKER_IQR * iqr;
        let high_fence = q3 + Self::WHISKER_IQR * iqr;

        // Whiskers never reach inside the box
        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&x| x >= low_fence)
            .unwrap_or(q1)
            .min(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&x| x <= high_fence)
            .unwrap_or(q3)
            .max(q3);

        Some(Self {
            whisker_low,
            q1,
            median,
            q3,
            whisker_high,
            mean: mean(samples),
        })
    }
}

/// Descriptive statistics recorded in sweep reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

impl SeriesSummary {
    /// Summarize a series. Returns `None` for an empty slice.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let sorted = sorted_copy(samples);
        Some(Self {
            count: samples.len(),
            mean: mean(samples),
            std_dev: std_dev(samples),
            min: sorted[0],
            median: percentile_sorted(&sorted, 0.5),
            max: sorted[sorted.len() - 1],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mean_and_population_std_dev() {
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(close(mean(&samples), 5.0));
        assert!(close(std_dev(&samples), 2.0));
    }

    #[test]
    fn test_normal_cdf_points_keep_order() {
        let samples = [3.0, 1.0, 2.0];
        let points = normal_cdf_points(&samples);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].0, 3.0);
        assert_eq!(points[1].0, 1.0);
        // The mean sits at the median of a normal distribution
        assert!(close(points[2].1, 0.5));
        assert!(points[0].1 > 0.5 && points[0].1 < 1.0);
        assert!(points[1].1 < 0.5 && points[1].1 > 0.0);
        assert!(close(points[0].1 + points[1].1, 1.0));
    }

    #[test]
    fn test_normal_cdf_points_degenerate() {
        let points = normal_cdf_points(&[4.0, 4.0, 4.0]);
        assert!(points.iter().all(|&(x, p)| x == 4.0 && p == 1.0));
    }

    #[test]
    fn test_box_stats_interpolated_quartiles() {
        let stats = BoxStats::from_samples(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(close(stats.q1, 1.75));
        assert!(close(stats.median, 2.5));
        assert!(close(stats.q3, 3.25));
        assert!(close(stats.whisker_low, 1.0));
        assert!(close(stats.whisker_high, 4.0));
        assert!(close(stats.mean, 2.5));
    }

    #[test]
    fn test_box_stats_whiskers_exclude_outliers() {
        let samples = [10.0, 11.0, 12.0, 13.0, 14.0, 100.0];
        let stats = BoxStats::from_samples(&samples).unwrap();
        // q1 = 11.25, q3 = 13.75, fence = 17.5
        assert!(close(stats.whisker_high, 14.0));
        assert!(close(stats.whisker_low, 10.0));
        // The mean still includes the outlier
        assert!(close(stats.mean, 160.0 / 6.0));
    }

    #[test]
    fn test_box_stats_single_sample() {
        let stats = BoxStats::from_samples(&[7.0]).unwrap();
        assert_eq!(stats.whisker_low, 7.0);
        assert_eq!(stats.whisker_high, 7.0);
        assert_eq!(stats.median, 7.0);
        assert!(BoxStats::from_samples(&[]).is_none());
    }

    #[test]
    fn test_series_summary() {
        let summary = SeriesSummary::from_samples(&[5.0, 1.0, 3.0]).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.median, 3.0);
        assert!(close(summary.mean, 3.0));
        assert!(SeriesSummary::from_samples(&[]).is_none());
    }
}
