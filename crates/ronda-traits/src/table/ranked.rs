//! Factor rows ordered by composite score.

use crate::{FactorValues, Result, Symbol};
use polars::prelude::*;
use std::cmp::Ordering;

use super::{FactorRow, factor_columns};

/// Name of the composite score column.
pub const COMPOSITE_SCORE: &str = "composite_score";

/// A factor row with its composite score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    /// Ticker.
    pub symbol: Symbol,
    /// Raw factor values.
    pub raw: FactorValues,
    /// Cross-sectional z-scores.
    pub z: FactorValues,
    /// Weighted sum of z-scores.
    pub composite_score: f64,
}

impl RankedRow {
    /// Attaches a composite score to a factor row.
    #[must_use]
    pub fn new(row: &FactorRow, composite_score: f64) -> Self {
        Self {
            symbol: row.symbol.clone(),
            raw: row.raw,
            z: row.z,
            composite_score,
        }
    }
}

/// Rows sorted by composite score, highest first.
///
/// Sorting is stable: rows with equal scores keep the order in which they
/// were given.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankedTable {
    rows: Vec<RankedRow>,
}

impl RankedTable {
    /// Sorts `rows` descending by composite score.
    #[must_use]
    pub fn new(mut rows: Vec<RankedRow>) -> Self {
        rows.sort_by(|a, b| {
            b.composite_score
                .partial_cmp(&a.composite_score)
                .unwrap_or(Ordering::Equal)
        });
        Self { rows }
    }

    /// Rows in rank order.
    pub fn rows(&self) -> &[RankedRow] {
        &self.rows
    }

    /// Number of ranked tickers.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The best `k` rows (fewer if the table is shorter).
    pub fn top(&self, k: usize) -> &[RankedRow] {
        &self.rows[..k.min(self.rows.len())]
    }

    /// Tickers in rank order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.rows.iter().map(|r| &r.symbol)
    }

    /// Row for `symbol`.
    pub fn get(&self, symbol: &str) -> Option<&RankedRow> {
        self.rows.iter().find(|r| r.symbol == symbol)
    }

    /// Zero-based rank of `symbol`.
    pub fn position(&self, symbol: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.symbol == symbol)
    }

    /// Composite scores in rank order.
    pub fn composite_scores(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.composite_score).collect()
    }

    /// Converts to a polars frame: `symbol`, factor columns, then
    /// [`COMPOSITE_SCORE`].
    ///
    /// # Errors
    ///
    /// Returns an error if polars rejects the frame.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns = factor_columns(self.rows.iter().map(|r| (&r.symbol, &r.raw, &r.z)));
        columns.push(Series::new(COMPOSITE_SCORE.into(), self.composite_scores()).into());
        Ok(DataFrame::new(columns)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(symbol: &str, score: f64) -> RankedRow {
        RankedRow {
            symbol: symbol.to_string(),
            raw: FactorValues::MISSING,
            z: FactorValues::MISSING,
            composite_score: score,
        }
    }

    #[test]
    fn test_sorted_descending() {
        let table = RankedTable::new(vec![row("A", 0.5), row("B", 2.0), row("C", -1.0)]);
        let symbols: Vec<&str> = table.symbols().map(String::as_str).collect();
        assert_eq!(symbols, vec!["B", "A", "C"]);
        assert!(table.composite_scores().windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(table.position("C"), Some(2));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let table = RankedTable::new(vec![
            row("X", 1.0),
            row("Y", 3.0),
            row("Z", 1.0),
            row("W", 1.0),
        ]);
        let symbols: Vec<&str> = table.symbols().map(String::as_str).collect();
        assert_eq!(symbols, vec!["Y", "X", "Z", "W"]);
    }

    #[test]
    fn test_top() {
        let table = RankedTable::new(vec![row("A", 1.0), row("B", 2.0)]);
        assert_eq!(table.top(1)[0].symbol, "B");
        assert_eq!(table.top(10).len(), 2);
        assert!(RankedTable::default().top(3).is_empty());
    }

    #[test]
    fn test_to_dataframe() {
        let table = RankedTable::new(vec![row("A", 1.0), row("B", 2.0)]);
        let df = table.to_dataframe().unwrap();
        assert_eq!(df.width(), 12);
        let scores = df
            .column(COMPOSITE_SCORE)
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap();
        assert_eq!(scores.get(0), Some(2.0));
    }
}
