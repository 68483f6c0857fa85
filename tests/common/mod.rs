//! Common utilities for integration tests

use nalgebra::DVector;

/// Maximum absolute componentwise difference between two profiles.
pub fn max_abs_diff(a: &DVector<f64>, b: &DVector<f64>) -> f64 {
    assert_eq!(a.len(), b.len(), "profile length mismatch");
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Relative error: |actual - expected| / |expected|, falling back to the
/// absolute error near zero.
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Assert that consecutive error measurements shrink by a ratio inside
/// `[low, high]` when the discretization is refined.
pub fn assert_convergence_ratios(errors: &[f64], low: f64, high: f64, label: &str) {
    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        println!("{} convergence ratio {}->{}: {}", label, i, i + 1, ratio);
        assert!(
            ratio > low && ratio < high,
            "{}: ratio {} outside [{}, {}]",
            label,
            ratio,
            low,
            high
        );
    }
}
