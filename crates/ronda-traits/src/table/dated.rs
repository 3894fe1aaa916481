//! Date-indexed tables: one row per trading date, one column per ticker.

use crate::stats::finite;
use crate::{Date, Result, RondaError, Symbol};
use derive_more::Deref;
use polars::prelude::*;
use std::collections::HashMap;

use super::ensure_unique;

/// Columns expected in a long-format price frame.
pub const LONG_FRAME_COLUMNS: [&str; 3] = ["symbol", "date", "adj_close"];

/// A date-by-ticker grid of optional values.
///
/// Dates are strictly increasing and ticker labels are unique. Every column
/// holds exactly one cell per date.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedTable {
    dates: Vec<Date>,
    symbols: Vec<Symbol>,
    columns: Vec<Vec<Option<f64>>>,
}

impl DatedTable {
    /// Creates a table, validating its shape.
    ///
    /// Non-finite cells (NaN, ±inf) are stored as missing.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidData`] if dates are not strictly
    /// increasing, tickers repeat, or a column length differs from the number
    /// of dates.
    pub fn new(
        dates: Vec<Date>,
        symbols: Vec<Symbol>,
        columns: Vec<Vec<Option<f64>>>,
    ) -> Result<Self> {
        if symbols.len() != columns.len() {
            return Err(RondaError::InvalidData(format!(
                "{} ticker labels for {} columns",
                symbols.len(),
                columns.len()
            )));
        }

        if let Some(w) = dates.windows(2).find(|w| w[0] >= w[1]) {
            return Err(RondaError::InvalidData(format!(
                "dates must be strictly increasing: {} is followed by {}",
                w[0], w[1]
            )));
        }

        ensure_unique(&symbols)?;

        for (symbol, column) in symbols.iter().zip(&columns) {
            if column.len() != dates.len() {
                return Err(RondaError::InvalidData(format!(
                    "column {symbol} has {} cells, expected {}",
                    column.len(),
                    dates.len()
                )));
            }
        }

        let columns = columns
            .into_iter()
            .map(|c| c.into_iter().map(|v| v.and_then(finite)).collect())
            .collect();

        Ok(Self {
            dates,
            symbols,
            columns,
        })
    }

    /// Row labels.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Column labels.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.dates.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the table has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() || self.symbols.is_empty()
    }

    /// Column for `symbol`.
    pub fn column(&self, symbol: &str) -> Option<&[Option<f64>]> {
        self.symbols
            .iter()
            .position(|s| s == symbol)
            .map(|i| self.columns[i].as_slice())
    }

    /// Iterates `(ticker, column)` pairs in column order.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&Symbol, &[Option<f64>])> {
        self.symbols
            .iter()
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    /// Cell at (`row`, `col`); `None` if missing or out of range.
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.columns.get(col)?.get(row).copied().flatten()
    }

    /// Whether every cell in `row` is missing.
    pub fn row_is_empty(&self, row: usize) -> bool {
        self.columns.iter().all(|c| c[row].is_none())
    }

    /// Number of non-missing cells in column `col`.
    pub fn observation_count(&self, col: usize) -> usize {
        self.columns[col].iter().filter(|v| v.is_some()).count()
    }

    /// A new table with only the rows for which `keep(row)` is true.
    #[must_use]
    pub fn filter_rows(&self, keep: impl Fn(usize) -> bool) -> Self {
        let rows: Vec<usize> = (0..self.height()).filter(|&r| keep(r)).collect();
        Self {
            dates: rows.iter().map(|&r| self.dates[r]).collect(),
            symbols: self.symbols.clone(),
            columns: self
                .columns
                .iter()
                .map(|c| rows.iter().map(|&r| c[r]).collect())
                .collect(),
        }
    }

    /// A new table with the last `n` rows (all rows if `n` exceeds the height).
    #[must_use]
    pub fn tail(&self, n: usize) -> Self {
        let start = self.height().saturating_sub(n);
        self.filter_rows(|r| r >= start)
    }

    /// A new table combining each row with the one before it.
    ///
    /// The result has one row per date after the first, labelled with the
    /// later date; each cell is `f(previous, current)`. A table with fewer
    /// than two rows yields a table with the same columns and no rows.
    #[must_use]
    pub fn pairwise(&self, f: impl Fn(Option<f64>, Option<f64>) -> Option<f64>) -> Self {
        Self {
            dates: self.dates.iter().skip(1).copied().collect(),
            symbols: self.symbols.clone(),
            columns: self
                .columns
                .iter()
                .map(|c| {
                    c.windows(2)
                        .map(|w| f(w[0], w[1]).and_then(finite))
                        .collect()
                })
                .collect(),
        }
    }

    /// A new table with the same columns and no rows.
    #[must_use]
    pub fn with_no_rows(&self) -> Self {
        self.filter_rows(|_| false)
    }

    /// A new table with only the columns for which `keep` is true.
    #[must_use]
    pub fn retain_columns(&self, keep: impl Fn(&Symbol, &[Option<f64>]) -> bool) -> Self {
        let (symbols, columns) = self
            .symbols
            .iter()
            .zip(&self.columns)
            .filter(|&(s, c)| keep(s, c.as_slice()))
            .map(|(s, c)| (s.clone(), c.clone()))
            .unzip();
        Self {
            dates: self.dates.clone(),
            symbols,
            columns,
        }
    }
}

/// Adjusted closing prices: trading dates by ticker.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct PriceTable(DatedTable);

impl PriceTable {
    /// Creates a price table; see [`DatedTable::new`] for validation rules.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidData`] on a malformed shape.
    pub fn new(
        dates: Vec<Date>,
        symbols: Vec<Symbol>,
        columns: Vec<Vec<Option<f64>>>,
    ) -> Result<Self> {
        DatedTable::new(dates, symbols, columns).map(Self)
    }

    /// Pivots a long-format frame into a price table.
    ///
    /// The frame must hold [`LONG_FRAME_COLUMNS`]: a `symbol` string column, a
    /// `date` string column in `YYYY-MM-DD` form, and a numeric `adj_close`
    /// column. Rows are the union of all dates in ascending order; tickers
    /// keep their first-seen order; a ticker with no observation on a date
    /// gets a missing cell. Rows with a null symbol or date are skipped, and
    /// when a (symbol, date) pair repeats the last row wins.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::MissingColumn`] if a column is absent,
    /// [`RondaError::InvalidData`] on an unparsable date, and
    /// [`RondaError::NoDataAvailable`] if the frame has no usable rows.
    pub fn from_long_frame(frame: &DataFrame) -> Result<Self> {
        let names = frame.get_column_names();
        for name in LONG_FRAME_COLUMNS {
            if !names.iter().any(|c| c.as_str() == name) {
                return Err(RondaError::MissingColumn(name.to_string()));
            }
        }

        let parsed = frame
            .clone()
            .lazy()
            .select([
                col("symbol"),
                col("date").alias("raw_date"),
                col("date").str().to_date(StrptimeOptions {
                    format: Some("%Y-%m-%d".into()),
                    strict: false,
                    ..Default::default()
                }),
                col("adj_close").cast(DataType::Float64),
            ])
            .drop_nulls(Some(vec![col("symbol"), col("raw_date")]))
            .collect()?;

        if parsed.height() == 0 {
            return Err(RondaError::NoDataAvailable(
                "price frame contains no rows".to_string(),
            ));
        }

        if parsed.column("date")?.null_count() > 0 {
            let bad = parsed
                .clone()
                .lazy()
                .filter(col("date").is_null())
                .select([col("symbol"), col("raw_date")])
                .first()
                .collect()?;
            let symbol = bad.column("symbol")?.as_materialized_series().str()?.get(0);
            let date = bad.column("raw_date")?.as_materialized_series().str()?.get(0);
            return Err(RondaError::InvalidData(format!(
                "invalid date '{}' for {}",
                date.unwrap_or_default(),
                symbol.unwrap_or_default()
            )));
        }

        let order: Vec<Symbol> = parsed
            .column("symbol")?
            .unique_stable()?
            .as_materialized_series()
            .str()?
            .into_no_null_iter()
            .map(str::to_string)
            .collect();

        let long = parsed
            .lazy()
            .select([col("symbol"), col("date"), col("adj_close")])
            .unique_stable(
                Some(vec!["symbol".into(), "date".into()]),
                UniqueKeepStrategy::Last,
            )
            .sort(
                ["date"],
                SortMultipleOptions::default().with_maintain_order(true),
            )
            .collect()?;

        let dates: Vec<Date> = long
            .column("date")?
            .unique_stable()?
            .as_materialized_series()
            .date()?
            .as_date_iter()
            .flatten()
            .collect();

        let row_of: HashMap<Date, usize> =
            dates.iter().enumerate().map(|(i, d)| (*d, i)).collect();
        let column_of: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, s)| (s.as_str(), i))
            .collect();

        let mut columns = vec![vec![None; dates.len()]; order.len()];
        let symbols = long.column("symbol")?.as_materialized_series().str()?;
        let days = long.column("date")?.as_materialized_series().date()?;
        let prices = long.column("adj_close")?.as_materialized_series().f64()?;

        for ((symbol, date), price) in symbols.into_iter().zip(days.as_date_iter()).zip(prices) {
            if let (Some(j), Some(i)) = (
                symbol.and_then(|s| column_of.get(s)),
                date.and_then(|d| row_of.get(&d)),
            ) {
                columns[*j][*i] = price.and_then(finite);
            }
        }

        Self::new(dates, order, columns)
    }

    /// A new table without tickers that have fewer than `min_observations`
    /// non-missing prices.
    #[must_use]
    pub fn drop_sparse(&self, min_observations: usize) -> Self {
        Self(self.0.retain_columns(|_, column| {
            column.iter().filter(|v| v.is_some()).count() >= min_observations
        }))
    }

    /// Consumes self and returns the underlying grid.
    pub fn into_inner(self) -> DatedTable {
        self.0
    }
}

/// Period-over-period simple returns: trading dates by ticker.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct ReturnTable(DatedTable);

impl ReturnTable {
    /// Creates a return table; see [`DatedTable::new`] for validation rules.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidData`] on a malformed shape.
    pub fn new(
        dates: Vec<Date>,
        symbols: Vec<Symbol>,
        columns: Vec<Vec<Option<f64>>>,
    ) -> Result<Self> {
        DatedTable::new(dates, symbols, columns).map(Self)
    }

    /// Consumes self and returns the underlying grid.
    pub fn into_inner(self) -> DatedTable {
        self.0
    }
}

impl From<DatedTable> for ReturnTable {
    fn from(table: DatedTable) -> Self {
        Self(table)
    }
}

impl From<DatedTable> for PriceTable {
    fn from(table: DatedTable) -> Self {
        Self(table)
    }
}
