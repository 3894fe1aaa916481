//! Explicitly weighted factor combination strategy.

use ndarray::Array1;
use ronda_traits::Result;

use crate::combiner::{Combiner, FactorScore, common_len, ensure_finite};
use crate::weights::FactorWeights;

/// Combiner that sums each factor's scores times its weight.
///
/// Factors without a weight contribute nothing; they are not given an
/// implicit equal weight.
#[derive(Debug, Clone, Default)]
pub struct WeightedCombiner {
    weights: FactorWeights,
}

impl WeightedCombiner {
    /// Create a combiner with the given weights.
    #[must_use]
    pub const fn new(weights: FactorWeights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    #[must_use]
    pub const fn weights(&self) -> &FactorWeights {
        &self.weights
    }
}

impl Combiner for WeightedCombiner {
    fn combine(&self, scores: &[FactorScore]) -> Result<Array1<f64>> {
        let n = common_len(scores)?;

        let mut composite = Array1::zeros(n);
        for score in scores {
            if self.weights.contains(score.factor) {
                composite.scaled_add(self.weights.get(score.factor), &score.scores);
            }
        }

        ensure_finite(composite)
    }

    fn name(&self) -> &str {
        "weighted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ronda_traits::Factor;

    fn scores() -> Vec<FactorScore> {
        vec![
            FactorScore {
                factor: Factor::Momentum6m,
                scores: Array1::from_vec(vec![1.0, -1.0]),
            },
            FactorScore {
                factor: Factor::Vol3m,
                scores: Array1::from_vec(vec![-1.0, 1.0]),
            },
            FactorScore {
                factor: Factor::Size,
                scores: Array1::from_vec(vec![5.0, 5.0]),
            },
        ]
    }

    #[test]
    fn test_weighted_sum() {
        let weights: FactorWeights = [(Factor::Momentum6m, 0.5), (Factor::Vol3m, -0.25)]
            .into_iter()
            .collect();
        let result = WeightedCombiner::new(weights).combine(&scores()).unwrap();
        assert_relative_eq!(result[0], 0.75);
        assert_relative_eq!(result[1], -0.75);
    }

    #[test]
    fn test_unweighted_factors_contribute_zero() {
        let result = WeightedCombiner::default().combine(&scores()).unwrap();
        assert_eq!(result.to_vec(), vec![0.0, 0.0]);
    }
}
