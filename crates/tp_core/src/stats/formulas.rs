//! Numeric primitives
//!
//! Empty input never errors: `mean` and `std_dev` return 0.0 so that a
//! session with missing series still aggregates to something displayable.

use once_cell::sync::Lazy;

use crate::models::StdDevMode;

/// Number of radar axes (one per canonical stroke).
pub const RADAR_AXES: usize = 6;

/// Radii of the perfect session, one 10 per axis.
pub const IDEAL_RADAR_VALUES: [f64; RADAR_AXES] = [10.0; RADAR_AXES];

/// Area of the ideal radar polygon, `150√3 ≈ 259.807`. Computed once and
/// treated as a constant ceiling for [`percent_of_ideal`].
pub static IDEAL_AREA: Lazy<f64> = Lazy::new(|| radar_area(&IDEAL_RADAR_VALUES));

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard deviation; 0.0 for fewer than two values.
///
/// Divisor is n−1 for [`StdDevMode::Sample`], n for
/// [`StdDevMode::Population`].
pub fn std_dev(values: &[f64], mode: StdDevMode) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    let divisor = match mode {
        StdDevMode::Sample => values.len() - 1,
        StdDevMode::Population => values.len(),
    };
    (sum_sq / divisor as f64).sqrt()
}

/// Area of the radar polygon with vertices at the given radii on equally
/// spaced axes:
///
/// `A = 0.5 × Σ r_i × r_{i+1 mod n} × sin(2π/n)`
///
/// The axis order is significant — it must match the fixed stroke order
/// serve, forehand, combined, return, backhand, volley. Because the area is
/// quadratic in the radii, halving every value quarters the area.
pub fn radar_area(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    let angle = (2.0 * std::f64::consts::PI) / n as f64;
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += values[i] * values[j] * angle.sin();
    }
    0.5 * area
}

/// Radar area expressed as a percentage of the ideal all-10 polygon.
pub fn percent_of_ideal(values: &[f64]) -> f64 {
    let ideal = *IDEAL_AREA;
    if ideal == 0.0 {
        return 0.0;
    }
    radar_area(values) / ideal * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[7.0]), 7.0);
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
        assert!(close(mean(&[0.0, 10.0, 5.0]), 5.0, 1e-12));
    }

    #[test]
    fn std_dev_degenerate_inputs_are_zero() {
        assert_eq!(std_dev(&[], StdDevMode::Sample), 0.0);
        assert_eq!(std_dev(&[5.0], StdDevMode::Sample), 0.0);
        assert_eq!(std_dev(&[5.0], StdDevMode::Population), 0.0);
    }

    #[test]
    fn std_dev_sample_vs_population() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(close(std_dev(&values, StdDevMode::Sample), 2.138, 1e-3));
        assert!(close(std_dev(&values, StdDevMode::Population), 2.0, 1e-9));
    }

    #[test]
    fn std_dev_of_identical_values_is_zero() {
        let values = [5.0, 5.0, 5.0, 5.0];
        assert_eq!(std_dev(&values, StdDevMode::Sample), 0.0);
        assert_eq!(std_dev(&values, StdDevMode::Population), 0.0);
    }

    #[test]
    fn radar_area_of_zeros_is_zero() {
        assert_eq!(radar_area(&[0.0; 6]), 0.0);
    }

    #[test]
    fn ideal_area_is_150_root_3() {
        let expected = 150.0 * 3.0_f64.sqrt();
        assert!(close(radar_area(&[10.0; 6]), expected, 1e-9));
        assert!(close(*IDEAL_AREA, expected, 1e-9));
    }

    #[test]
    fn area_scales_quadratically() {
        let full = radar_area(&[8.0; 6]);
        let half = radar_area(&[4.0; 6]);
        assert!(close(half, full / 4.0, 1e-9));
    }

    #[test]
    fn percent_of_ideal_boundaries() {
        assert!(close(percent_of_ideal(&[10.0; 6]), 100.0, 1e-9));
        assert_eq!(percent_of_ideal(&[0.0; 6]), 0.0);
        // Quadratic, not linear: an all-5 session is a quarter of ideal.
        assert!(close(percent_of_ideal(&[5.0; 6]), 25.0, 1e-9));
    }

    proptest! {
        #[test]
        fn mean_is_bounded_by_min_and_max(values in proptest::collection::vec(0.0..=10.0f64, 1..30)) {
            let m = mean(&values);
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(m >= min - 1e-9 && m <= max + 1e-9);
        }

        #[test]
        fn std_dev_is_non_negative(values in proptest::collection::vec(0.0..=10.0f64, 0..30)) {
            prop_assert!(std_dev(&values, StdDevMode::Sample) >= 0.0);
            prop_assert!(std_dev(&values, StdDevMode::Population) >= 0.0);
        }

        #[test]
        fn scaling_all_radii_scales_area_by_square(
            values in proptest::collection::vec(0.0..=10.0f64, 6),
            factor in 0.1..=2.0f64,
        ) {
            let scaled: Vec<f64> = values.iter().map(|v| v * factor).collect();
            let lhs = radar_area(&scaled);
            let rhs = radar_area(&values) * factor * factor;
            prop_assert!((lhs - rhs).abs() < 1e-6);
        }

        #[test]
        fn percent_of_ideal_stays_in_range(values in proptest::collection::vec(0.0..=10.0f64, 6)) {
            let pct = percent_of_ideal(&values);
            prop_assert!((0.0..=100.0 + 1e-9).contains(&pct));
        }
    }
}
