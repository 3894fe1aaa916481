//! Equal-weighted factor combination strategy.

use ndarray::Array1;
use ronda_traits::Result;

use crate::combiner::{Combiner, FactorScore, common_len, ensure_finite};

/// Equal-weighted combiner that sums all factor scores.
///
/// Every factor gets weight 1.0, so the composite is the plain sum of the
/// z-scores. This is the default when no weights are given.
///
/// # Examples
///
/// ```rust,no_run
/// use ronda_combine::{EqualWeightCombiner, Combiner, FactorScore};
/// use ronda_traits::Factor;
/// use ndarray::Array1;
///
/// let combiner = EqualWeightCombiner;
///
/// let scores = vec![
///     FactorScore {
///         factor: Factor::Momentum6m,
///         scores: Array1::from_vec(vec![0.5, -0.2, 1.0]),
///     },
///     FactorScore {
///         factor: Factor::ValuePb,
///         scores: Array1::from_vec(vec![-0.3, 0.8, 0.1]),
///     },
/// ];
///
/// let composite = combiner.combine(&scores).unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualWeightCombiner;

impl Combiner for EqualWeightCombiner {
    fn combine(&self, scores: &[FactorScore]) -> Result<Array1<f64>> {
        let n = common_len(scores)?;

        let mut composite = Array1::zeros(n);
        for score in scores {
            composite += &score.scores;
        }

        ensure_finite(composite)
    }

    fn name(&self) -> &str {
        "equal_weight"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ronda_traits::Factor;

    #[test]
    fn test_equal_weight_sums() {
        let scores = vec![
            FactorScore {
                factor: Factor::Momentum6m,
                scores: Array1::from_vec(vec![2.0, 4.0, 6.0]),
            },
            FactorScore {
                factor: Factor::Vol3m,
                scores: Array1::from_vec(vec![0.0, 2.0, -4.0]),
            },
        ];

        let result = EqualWeightCombiner.combine(&scores).unwrap();
        assert_eq!(result.to_vec(), vec![2.0, 6.0, 2.0]);
    }

    #[test]
    fn test_equal_weight_mismatched_lengths() {
        let scores = vec![
            FactorScore {
                factor: Factor::Momentum6m,
                scores: Array1::from_vec(vec![1.0, 2.0]),
            },
            FactorScore {
                factor: Factor::Vol3m,
                scores: Array1::from_vec(vec![1.0, 2.0, 3.0]),
            },
        ];

        assert!(EqualWeightCombiner.combine(&scores).is_err());
    }

    #[test]
    fn test_equal_weight_empty() {
        let result = EqualWeightCombiner.combine(&[]).unwrap();
        assert!(result.is_empty());
        assert_eq!(EqualWeightCombiner.name(), "equal_weight");
    }
}
