//! Factor table construction.

use crate::config::FactorConfig;
use crate::momentum::momentum;
use crate::returns::compute_returns;
use crate::size::size;
use crate::value::{value_pb, value_pe};
use crate::volatility::volatility;
use ronda_traits::{
    Factor, FactorTable, FactorValues, FundamentalsTable, PriceTable, Result, RondaError,
};
use tracing::debug;

/// Builds the factor table with the default [`FactorConfig`].
///
/// # Errors
///
/// Returns [`RondaError::InsufficientHistory`] if `prices` has fewer than
/// 131 rows.
pub fn compute_factor_table(
    prices: &PriceTable,
    fundamentals: &FundamentalsTable,
) -> Result<FactorTable> {
    compute_factor_table_with(prices, fundamentals, &FactorConfig::default())
}

/// Builds the factor table from prices and fundamentals.
///
/// The ticker universe is the set of price columns, in column order.
/// Fundamentals are realigned to it, so tickers without fundamentals get
/// missing value and size factors. Tickers with fewer than
/// `config.min_factors` present raw factors are dropped before the
/// cross-sectional standardization.
///
/// # Errors
///
/// Returns [`RondaError::InsufficientHistory`] if `prices` has fewer than
/// [`FactorConfig::required_rows`] rows.
pub fn compute_factor_table_with(
    prices: &PriceTable,
    fundamentals: &FundamentalsTable,
    config: &FactorConfig,
) -> Result<FactorTable> {
    let required = config.required_rows();
    if prices.height() < required {
        return Err(RondaError::InsufficientHistory {
            required,
            available: prices.height(),
        });
    }

    let fundamentals = fundamentals.reindex(prices.symbols());
    let returns = compute_returns(prices);

    let momentum = momentum(prices, config.momentum_window);
    let volatility = volatility(&returns, config.volatility_window);

    let mut rows = Vec::with_capacity(prices.width());
    for (i, (symbol, f)) in fundamentals.iter().enumerate() {
        let raw = FactorValues::from_fn(|factor| match factor {
            Factor::Momentum6m => momentum[i],
            Factor::Vol3m => volatility[i],
            Factor::ValuePe => value_pe(f),
            Factor::ValuePb => value_pb(f),
            Factor::Size => size(f),
        });

        let present = raw.count_present();
        if present < config.min_factors {
            debug!(
                symbol = %symbol,
                present,
                required = config.min_factors,
                "Dropping ticker with too few factors"
            );
            continue;
        }
        rows.push((symbol.clone(), raw));
    }

    debug!(
        tickers = prices.width(),
        kept = rows.len(),
        "Computed raw factors"
    );

    FactorTable::from_raw(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ronda_traits::stats::{mean, population_std};
    use ronda_traits::{Date, Fundamentals};

    /// Geometric price path with a fixed daily growth rate.
    fn path(start: f64, growth: f64, len: usize) -> Vec<Option<f64>> {
        (0..len)
            .map(|i| Some(start * (1.0 + growth).powi(i as i32)))
            .collect()
    }

    fn prices(columns: Vec<(&str, Vec<Option<f64>>)>) -> PriceTable {
        let height = columns[0].1.len();
        let dates = Date::from_ymd_opt(2023, 1, 2)
            .unwrap()
            .iter_days()
            .take(height)
            .collect();
        let (symbols, columns) = columns
            .into_iter()
            .map(|(s, c)| (s.to_string(), c))
            .unzip();
        PriceTable::new(dates, symbols, columns).unwrap()
    }

    fn fundamentals(rows: Vec<(&str, Fundamentals)>) -> FundamentalsTable {
        FundamentalsTable::new(rows.into_iter().map(|(s, f)| (s.to_string(), f))).unwrap()
    }

    #[test]
    fn test_insufficient_history() {
        let prices = prices(vec![("AAA", path(10.0, 0.001, 130))]);
        let result = compute_factor_table(&prices, &FundamentalsTable::default());
        assert!(matches!(
            result,
            Err(RondaError::InsufficientHistory {
                required: 131,
                available: 130
            })
        ));
    }

    #[test]
    fn test_raw_factors() {
        let prices = prices(vec![
            ("AAA", path(100.0, 0.001, 140)),
            ("BBB", path(50.0, -0.002, 140)),
            ("CCC", path(20.0, 0.0, 140)),
        ]);
        let fundamentals = fundamentals(vec![
            ("AAA", Fundamentals::new(Some(20.0), Some(4.0), Some(1e9))),
            ("BBB", Fundamentals::new(Some(10.0), Some(2.0), Some(1e10))),
            ("CCC", Fundamentals::new(Some(15.0), None, Some(-1.0))),
        ]);

        let table = compute_factor_table(&prices, &fundamentals).unwrap();
        assert_eq!(table.len(), 3);

        let a = table.get("AAA").unwrap();
        assert_relative_eq!(
            a.raw.get(Factor::Momentum6m).unwrap(),
            1.001_f64.powi(126) - 1.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(a.raw.get(Factor::Vol3m).unwrap(), 0.0, epsilon = 1e-12);
        assert_eq!(a.raw.get(Factor::ValuePe), Some(-20.0));
        assert_eq!(a.raw.get(Factor::ValuePb), Some(-4.0));
        assert_relative_eq!(a.raw.get(Factor::Size).unwrap(), 1e9_f64.ln());

        let c = table.get("CCC").unwrap();
        assert_eq!(c.raw.get(Factor::ValuePb), None);
        assert_eq!(c.raw.get(Factor::Size), None);
        assert_eq!(c.z.get(Factor::Size), None);
    }

    #[test]
    fn test_sparse_tickers_are_dropped() {
        let prices = prices(vec![
            ("AAA", path(100.0, 0.001, 135)),
            ("BBB", path(50.0, 0.002, 135)),
            ("CCC", path(30.0, 0.003, 135)),
        ]);
        // CCC has no fundamentals: only momentum and volatility remain.
        let fundamentals = fundamentals(vec![
            ("AAA", Fundamentals::new(Some(20.0), None, None)),
            ("BBB", Fundamentals::new(None, Some(2.0), None)),
            ("ZZZ", Fundamentals::new(Some(1.0), Some(1.0), Some(1.0))),
        ]);

        let table = compute_factor_table(&prices, &fundamentals).unwrap();
        let symbols: Vec<_> = table.symbols().cloned().collect();
        assert_eq!(symbols, vec!["AAA".to_string(), "BBB".to_string()]);
        for row in table.rows() {
            assert!(row.raw.count_present() >= 3);
        }
    }

    #[test]
    fn test_standardized_columns_have_unit_variance() {
        let prices = prices(vec![
            ("AAA", path(100.0, 0.001, 135)),
            ("BBB", path(50.0, -0.001, 135)),
            ("CCC", path(30.0, 0.002, 135)),
            ("DDD", path(10.0, 0.0005, 135)),
        ]);
        let fundamentals = fundamentals(vec![
            ("AAA", Fundamentals::new(Some(20.0), Some(4.0), Some(1e9))),
            ("BBB", Fundamentals::new(Some(10.0), Some(2.0), Some(2e9))),
            ("CCC", Fundamentals::new(Some(30.0), Some(1.0), Some(5e10))),
            ("DDD", Fundamentals::new(Some(12.0), Some(6.0), Some(3e8))),
        ]);

        let table = compute_factor_table(&prices, &fundamentals).unwrap();
        for factor in [Factor::Momentum6m, Factor::ValuePe, Factor::ValuePb, Factor::Size] {
            let z = table.z_column(factor);
            assert_relative_eq!(mean(&z).unwrap(), 0.0, epsilon = 1e-9);
            assert_relative_eq!(population_std(&z).unwrap(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_single_survivor_has_no_z_scores() {
        let prices = prices(vec![("AAA", path(100.0, 0.001, 131))]);
        let fundamentals = fundamentals(vec![(
            "AAA",
            Fundamentals::new(Some(20.0), Some(4.0), Some(1e9)),
        )]);

        let table = compute_factor_table(&prices, &fundamentals).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].z.count_present(), 0);
    }

    #[test]
    fn test_deterministic_order() {
        let build = || {
            let prices = prices(vec![
                ("CCC", path(30.0, 0.003, 135)),
                ("AAA", path(100.0, 0.001, 135)),
                ("BBB", path(50.0, 0.002, 135)),
            ]);
            let fundamentals = fundamentals(vec![
                ("AAA", Fundamentals::new(Some(20.0), None, None)),
                ("BBB", Fundamentals::new(Some(21.0), None, None)),
                ("CCC", Fundamentals::new(Some(22.0), None, None)),
            ]);
            compute_factor_table(&prices, &fundamentals).unwrap()
        };
        let first = build();
        assert_eq!(first, build());
        let symbols: Vec<_> = first.symbols().map(String::as_str).collect();
        assert_eq!(symbols, vec!["CCC", "AAA", "BBB"]);
    }

    #[test]
    fn test_custom_config() {
        let prices = prices(vec![
            ("AAA", path(100.0, 0.01, 30)),
            ("BBB", path(100.0, 0.02, 30)),
        ]);
        let config = FactorConfig {
            momentum_window: 20,
            volatility_window: 10,
            history_margin: 5,
            min_factors: 1,
        };
        let table = compute_factor_table_with(&prices, &FundamentalsTable::default(), &config)
            .unwrap();
        assert_eq!(table.len(), 2);
        let a = table.get("AAA").unwrap();
        assert_relative_eq!(
            a.raw.get(Factor::Momentum6m).unwrap(),
            1.01_f64.powi(20) - 1.0,
            epsilon = 1e-9
        );
    }
}
