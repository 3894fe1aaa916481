//! Missing-aware statistics for cross-sectional standardization.
//!
//! All functions take `Option<f64>` cells. Missing cells are skipped when
//! computing aggregates and stay missing in element-wise output. Standard
//! deviations use the population convention (N denominator) throughout, so
//! realised volatility and z-scores agree.

/// Minimum threshold for standard deviation to avoid division by zero.
/// Values at or below this threshold are treated as zero variance.
pub const MIN_STD_THRESHOLD: f64 = 1e-10;

/// Maps non-finite floats (NaN, ±inf) to `None`.
#[must_use]
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Number of present cells.
#[must_use]
pub fn count_present(values: &[Option<f64>]) -> usize {
    values.iter().filter(|v| v.is_some()).count()
}

/// Mean of the present cells, `None` if there are none.
#[must_use]
pub fn mean(values: &[Option<f64>]) -> Option<f64> {
    let (sum, n) = values
        .iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Population standard deviation of the present cells.
///
/// Returns `None` if there are no present cells; a single present cell has a
/// standard deviation of zero.
#[must_use]
pub fn population_std(values: &[Option<f64>]) -> Option<f64> {
    let mean = mean(values)?;
    let (ss, n) = values
        .iter()
        .flatten()
        .fold((0.0, 0usize), |(ss, n), v| (ss + (v - mean).powi(2), n + 1));
    Some((ss / n as f64).sqrt())
}

/// Z-score standardization result containing computed statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardizeResult {
    /// Mean of the present input cells.
    pub mean: Option<f64>,
    /// Population standard deviation of the present input cells.
    pub std: Option<f64>,
    /// Whether standardization was applied (false for empty or zero-variance input).
    pub applied: bool,
}

/// Standardize cells to z-scores: `(x - mean) / population_std`.
///
/// # Edge Cases
///
/// - Missing cells stay missing and do not contribute to mean or std.
/// - No present cells, or a standard deviation at or below
///   [`MIN_STD_THRESHOLD`] (a single present cell, constant values): every
///   output cell is missing and `applied` is false.
///
/// # Examples
///
/// ```
/// use ronda_traits::stats::standardize;
///
/// let (z, result) = standardize(&[Some(1.0), None, Some(3.0)]);
/// assert!(result.applied);
/// assert_eq!(z, vec![Some(-1.0), None, Some(1.0)]);
/// ```
#[must_use]
pub fn standardize(values: &[Option<f64>]) -> (Vec<Option<f64>>, StandardizeResult) {
    let mean = mean(values);
    let std = population_std(values);

    match (mean, std) {
        (Some(m), Some(s)) if s > MIN_STD_THRESHOLD => {
            let z = values.iter().map(|v| v.map(|x| (x - m) / s)).collect();
            (
                z,
                StandardizeResult {
                    mean,
                    std,
                    applied: true,
                },
            )
        }
        _ => (
            vec![None; values.len()],
            StandardizeResult {
                mean,
                std,
                applied: false,
            },
        ),
    }
}
