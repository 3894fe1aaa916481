//! Ranking a factor table by composite score.

use ronda_traits::{FactorTable, RankedRow, RankedTable, Result};
use tracing::debug;

use crate::combiner::{Combiner, FactorScore};
use crate::equal_weight::EqualWeightCombiner;
use crate::weighted::WeightedCombiner;
use crate::weights::FactorWeights;

/// Ranks tickers by the weighted sum of their z-scores.
///
/// With `weights` absent every standardized factor has weight 1.0. With
/// `weights` present only the factors it names contribute. A missing z-score
/// contributes zero to its term, so a partially scored ticker is still
/// ranked. The result is sorted by composite score, highest first, with ties
/// kept in factor table order. The input table is not modified.
///
/// # Errors
///
/// Returns an error if a weight is so large that a composite score
/// overflows to a non-finite value.
pub fn rank_stocks(factors: &FactorTable, weights: Option<&FactorWeights>) -> Result<RankedTable> {
    match weights {
        Some(weights) => rank_with(factors, &WeightedCombiner::new(weights.clone())),
        None => rank_with(factors, &EqualWeightCombiner),
    }
}

/// Ranks tickers by the composite produced by `combiner`.
///
/// # Errors
///
/// Propagates any error from the combiner.
pub fn rank_with(factors: &FactorTable, combiner: &dyn Combiner) -> Result<RankedTable> {
    let scores = FactorScore::all_from_table(factors);
    let composite = combiner.combine(&scores)?;

    debug!(
        combiner = combiner.name(),
        tickers = factors.len(),
        "Computed composite scores"
    );

    let rows = factors
        .rows()
        .iter()
        .zip(composite.iter())
        .map(|(row, &score)| RankedRow::new(row, score))
        .collect();

    Ok(RankedTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ronda_traits::{Factor, FactorValues};

    /// Three tickers scored on momentum and value only.
    ///
    /// momentum_6m: 0.1, 0.0, -0.1 -> z = sqrt(1.5), 0, -sqrt(1.5)
    /// value_pe: -20, -30, -10 -> z = 0, -sqrt(1.5), sqrt(1.5)
    fn fixture() -> FactorTable {
        let row = |symbol: &str, momentum: f64, pe: f64| {
            (
                symbol.to_string(),
                FactorValues::from_fn(|f| match f {
                    Factor::Momentum6m => Some(momentum),
                    Factor::ValuePe => Some(pe),
                    _ => None,
                }),
            )
        };
        FactorTable::from_raw(vec![
            row("AAA", 0.1, -20.0),
            row("BBB", 0.0, -30.0),
            row("CCC", -0.1, -10.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_equal_weight_default_is_sum_of_z() {
        let factors = fixture();
        let ranked = rank_stocks(&factors, None).unwrap();
        let k = 1.5_f64.sqrt();

        let symbols: Vec<_> = ranked.symbols().map(String::as_str).collect();
        assert_eq!(symbols, vec!["AAA", "CCC", "BBB"]);
        assert_relative_eq!(ranked.rows()[0].composite_score, k, epsilon = 1e-12);
        assert_relative_eq!(ranked.rows()[1].composite_score, 0.0, epsilon = 1e-12);
        assert_relative_eq!(ranked.rows()[2].composite_score, -k, epsilon = 1e-12);

        for row in ranked.rows() {
            let z_sum: f64 = row.z.iter().filter_map(|(_, z)| z).sum();
            assert_relative_eq!(row.composite_score, z_sum, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ties_keep_table_order() {
        // A zero weight scores every ticker 0.0.
        let factors = fixture();
        let ranked = rank_stocks(&factors, None).unwrap();
        let weights: FactorWeights = [(Factor::Momentum6m, 0.0)].into_iter().collect();
        let flat = rank_stocks(&factors, Some(&weights)).unwrap();

        let symbols: Vec<_> = flat.symbols().map(String::as_str).collect();
        assert_eq!(symbols, vec!["AAA", "BBB", "CCC"]);
        assert_ne!(ranked, flat);
    }

    #[test]
    fn test_unknown_weight_key_is_ignored() {
        let factors = fixture();
        let with_bogus =
            FactorWeights::from_names([("momentum_6m_z", 1.0), ("bogus_z", 1.0)]).weights;
        let without = FactorWeights::from_names([("momentum_6m_z", 1.0)]).weights;

        assert_eq!(
            rank_stocks(&factors, Some(&with_bogus)).unwrap(),
            rank_stocks(&factors, Some(&without)).unwrap()
        );
    }

    #[test]
    fn test_unweighted_columns_contribute_zero() {
        let factors = fixture();
        let weights: FactorWeights = [(Factor::ValuePe, 2.0)].into_iter().collect();
        let ranked = rank_stocks(&factors, Some(&weights)).unwrap();

        let symbols: Vec<_> = ranked.symbols().map(String::as_str).collect();
        assert_eq!(symbols, vec!["CCC", "AAA", "BBB"]);
        assert_relative_eq!(
            ranked.rows()[0].composite_score,
            2.0 * 1.5_f64.sqrt(),
            epsilon = 1e-12
        );
        assert_relative_eq!(ranked.rows()[1].composite_score, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_variance_column_does_not_fail() {
        let factors = FactorTable::from_raw(
            ["AAA", "BBB", "CCC"]
                .iter()
                .zip([1.0, 2.0, 3.0])
                .map(|(s, m)| {
                    (
                        s.to_string(),
                        FactorValues::from_fn(|f| match f {
                            Factor::Momentum6m => Some(m),
                            Factor::Size => Some(20.0),
                            _ => Some(-5.0),
                        }),
                    )
                })
                .collect(),
        )
        .unwrap();
        assert!(factors.z_column(Factor::Size).iter().all(Option::is_none));

        let ranked = rank_stocks(&factors, None).unwrap();
        let symbols: Vec<_> = ranked.symbols().map(String::as_str).collect();
        assert_eq!(symbols, vec!["CCC", "BBB", "AAA"]);
    }

    #[test]
    fn test_output_is_sorted_and_input_untouched() {
        let factors = fixture();
        let before = factors.clone();
        let weights = FactorWeights::tilted();
        let ranked = rank_stocks(&factors, Some(&weights)).unwrap();

        assert_eq!(factors, before);
        assert_eq!(ranked.len(), factors.len());
        for pair in ranked.rows().windows(2) {
            assert!(pair[0].composite_score >= pair[1].composite_score);
        }
    }

    #[test]
    fn test_empty_table() {
        let ranked = rank_stocks(&FactorTable::default(), None).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_non_finite_composite_is_an_error() {
        let weights: FactorWeights = [(Factor::Momentum6m, f64::MAX), (Factor::ValuePe, f64::MAX)]
            .into_iter()
            .collect();
        let factors = FactorTable::from_raw(vec![
            ("AAA".to_string(), FactorValues::from_fn(|_| Some(1.0e6))),
            ("BBB".to_string(), FactorValues::from_fn(|_| Some(-1.0e6))),
        ])
        .unwrap();
        assert!(rank_stocks(&factors, Some(&weights)).is_err());
    }
}
