//! Core trait definition for factor combiners.

use ndarray::Array1;
use ronda_traits::{Factor, FactorTable, Result};

/// Standardized scores of a single factor for combination.
///
/// Scores are aligned with the rows of the factor table they came from. A
/// missing z-score is carried as `0.0`, so it adds nothing to a weighted sum.
#[derive(Debug, Clone)]
pub struct FactorScore {
    /// Factor the scores belong to
    pub factor: Factor,

    /// Z-scores for each ticker in table order
    pub scores: Array1<f64>,
}

impl FactorScore {
    /// Extracts the z-scores of `factor` from `table`.
    #[must_use]
    pub fn from_table(table: &FactorTable, factor: Factor) -> Self {
        Self {
            factor,
            scores: table
                .z_column(factor)
                .into_iter()
                .map(|z| z.unwrap_or(0.0))
                .collect(),
        }
    }

    /// Extracts the z-scores of every factor from `table`.
    #[must_use]
    pub fn all_from_table(table: &FactorTable) -> Vec<Self> {
        Factor::ALL
            .into_iter()
            .map(|factor| Self::from_table(table, factor))
            .collect()
    }
}

/// Combines factor scores into a composite score.
///
/// Implementors define different strategies for weighting and combining
/// factors. All implementations must be thread-safe (Send + Sync).
///
/// # Examples
///
/// ```rust,no_run
/// use ronda_combine::{Combiner, FactorScore};
/// use ndarray::Array1;
///
/// struct MomentumOnly;
///
/// impl Combiner for MomentumOnly {
///     fn combine(&self, scores: &[FactorScore]) -> ronda_traits::Result<Array1<f64>> {
///         let n = scores.first().map_or(0, |s| s.scores.len());
///         Ok(scores
///             .iter()
///             .find(|s| s.factor == ronda_traits::Factor::Momentum6m)
///             .map_or_else(|| Array1::zeros(n), |s| s.scores.clone()))
///     }
///
///     fn name(&self) -> &str {
///         "momentum_only"
///     }
/// }
/// ```
pub trait Combiner: Send + Sync {
    /// Combine factor scores into a composite vector.
    ///
    /// # Arguments
    ///
    /// * `scores` - Per-factor scores to combine. All vectors must have the same length.
    ///
    /// # Returns
    ///
    /// A composite score vector with the same length as the inputs. An empty
    /// slice combines to an empty vector.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Score vectors have mismatched lengths
    /// - Combination produces invalid values (NaN, Inf)
    fn combine(&self, scores: &[FactorScore]) -> Result<Array1<f64>>;

    /// Name of this combination strategy.
    fn name(&self) -> &str;
}

/// Length shared by all score vectors.
pub(crate) fn common_len(scores: &[FactorScore]) -> Result<usize> {
    let Some(first) = scores.first() else {
        return Ok(0);
    };
    let n = first.scores.len();
    for score in scores {
        if score.scores.len() != n {
            return Err(format!(
                "Factor '{}' has {} tickers, expected {}",
                score.factor,
                score.scores.len(),
                n
            )
            .into());
        }
    }
    Ok(n)
}

/// Fails if the composite holds NaN or infinite values.
pub(crate) fn ensure_finite(composite: Array1<f64>) -> Result<Array1<f64>> {
    if composite.iter().any(|x| !x.is_finite()) {
        return Err("Combination produced non-finite values".into());
    }
    Ok(composite)
}
