//! Per-ticker fundamental metrics.

use crate::stats::finite;
use crate::{Result, RondaError, Symbol};
use serde::{Deserialize, Serialize};

use super::ensure_unique;

/// Raw fundamentals for one ticker. Any field may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Fundamentals {
    /// Trailing price-to-earnings ratio.
    pub trailing_pe: Option<f64>,
    /// Price-to-book ratio.
    pub price_to_book: Option<f64>,
    /// Market capitalization.
    pub market_cap: Option<f64>,
}

impl Fundamentals {
    /// All fields missing.
    pub const MISSING: Self = Self {
        trailing_pe: None,
        price_to_book: None,
        market_cap: None,
    };

    /// Creates a row; non-finite inputs are stored as missing.
    #[must_use]
    pub fn new(
        trailing_pe: Option<f64>,
        price_to_book: Option<f64>,
        market_cap: Option<f64>,
    ) -> Self {
        Self {
            trailing_pe: trailing_pe.and_then(finite),
            price_to_book: price_to_book.and_then(finite),
            market_cap: market_cap.and_then(finite),
        }
    }
}

/// Fundamentals indexed by ticker.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FundamentalsTable {
    symbols: Vec<Symbol>,
    rows: Vec<Fundamentals>,
}

impl FundamentalsTable {
    /// Builds a table from `(ticker, fundamentals)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidData`] if a ticker repeats.
    pub fn new(rows: impl IntoIterator<Item = (Symbol, Fundamentals)>) -> Result<Self> {
        let (symbols, rows): (Vec<Symbol>, Vec<Fundamentals>) = rows
            .into_iter()
            .map(|(s, f)| (s, Fundamentals::new(f.trailing_pe, f.price_to_book, f.market_cap)))
            .unzip();
        ensure_unique(&symbols)?;
        Ok(Self { symbols, rows })
    }

    /// Ticker labels in row order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for `symbol`.
    pub fn get(&self, symbol: &str) -> Option<&Fundamentals> {
        self.symbols
            .iter()
            .position(|s| s == symbol)
            .map(|i| &self.rows[i])
    }

    /// Iterates `(ticker, row)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Fundamentals)> {
        self.symbols.iter().zip(&self.rows)
    }

    /// A new table with exactly `symbols`, in that order.
    ///
    /// Tickers absent from this table get an all-missing row; tickers not in
    /// `symbols` are dropped.
    #[must_use]
    pub fn reindex(&self, symbols: &[Symbol]) -> Self {
        Self {
            symbols: symbols.to_vec(),
            rows: symbols
                .iter()
                .map(|s| self.get(s).copied().unwrap_or(Fundamentals::MISSING))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FundamentalsTable {
        FundamentalsTable::new(vec![
            ("AAA".to_string(), Fundamentals::new(Some(15.0), Some(2.0), Some(1e9))),
            ("BBB".to_string(), Fundamentals::new(None, Some(f64::NAN), Some(5e8))),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let table = table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("AAA").unwrap().trailing_pe, Some(15.0));
        assert_eq!(table.get("BBB").unwrap().price_to_book, None);
        assert!(table.get("CCC").is_none());
    }

    #[test]
    fn test_reindex_fills_missing_rows() {
        let symbols = vec!["CCC".to_string(), "AAA".to_string()];
        let reindexed = table().reindex(&symbols);
        assert_eq!(reindexed.symbols(), symbols.as_slice());
        assert_eq!(*reindexed.get("CCC").unwrap(), Fundamentals::MISSING);
        assert_eq!(reindexed.get("AAA").unwrap().market_cap, Some(1e9));
        assert!(reindexed.get("BBB").is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = FundamentalsTable::new(vec![
            ("AAA".to_string(), Fundamentals::MISSING),
            ("AAA".to_string(), Fundamentals::MISSING),
        ]);
        assert!(matches!(result, Err(RondaError::InvalidData(_))));
    }
}
