//! Raw and standardized factor values per ticker.

use crate::stats::standardize;
use crate::{Factor, FactorValues, Result, Symbol};
use polars::prelude::*;

use super::{ensure_unique, factor_columns};

/// Factor values for one ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorRow {
    /// Ticker.
    pub symbol: Symbol,
    /// Raw factor values.
    pub raw: FactorValues,
    /// Cross-sectional z-scores of the raw values.
    pub z: FactorValues,
}

/// Cross-sectional factor table.
///
/// The z-scored values are always derived from the raw values of exactly the
/// rows in the table: `(x - mean) / population_std` per factor, with missing
/// raw values left out of the statistics and missing in the output. A factor
/// whose standard deviation is zero has no z-scores at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FactorTable {
    rows: Vec<FactorRow>,
}

impl FactorTable {
    /// Builds a table from raw values, standardizing every factor across the
    /// given rows. Row order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RondaError::InvalidData`] if a ticker repeats.
    pub fn from_raw(rows: Vec<(Symbol, FactorValues)>) -> Result<Self> {
        ensure_unique(rows.iter().map(|(s, _)| s))?;

        let mut rows: Vec<FactorRow> = rows
            .into_iter()
            .map(|(symbol, raw)| FactorRow {
                symbol,
                raw,
                z: FactorValues::MISSING,
            })
            .collect();

        for factor in Factor::ALL {
            let column: Vec<Option<f64>> = rows.iter().map(|r| r.raw.get(factor)).collect();
            let (z, _) = standardize(&column);
            for (row, value) in rows.iter_mut().zip(z) {
                row.z.set(factor, value);
            }
        }

        Ok(Self { rows })
    }

    /// Rows in table order.
    pub fn rows(&self) -> &[FactorRow] {
        &self.rows
    }

    /// Number of tickers.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no tickers.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Tickers in table order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.rows.iter().map(|r| &r.symbol)
    }

    /// Row for `symbol`.
    pub fn get(&self, symbol: &str) -> Option<&FactorRow> {
        self.rows.iter().find(|r| r.symbol == symbol)
    }

    /// Raw values of `factor` in row order.
    pub fn raw_column(&self, factor: Factor) -> Vec<Option<f64>> {
        self.rows.iter().map(|r| r.raw.get(factor)).collect()
    }

    /// Z-scores of `factor` in row order.
    pub fn z_column(&self, factor: Factor) -> Vec<Option<f64>> {
        self.rows.iter().map(|r| r.z.get(factor)).collect()
    }

    /// Column by name: a raw factor name or a z-scored name.
    pub fn column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        Factor::from_name(name)
            .map(|f| self.raw_column(f))
            .or_else(|| Factor::from_z_name(name).map(|f| self.z_column(f)))
    }

    /// The ten column names: raw factors, then their z-scored counterparts.
    pub fn column_names() -> Vec<&'static str> {
        Factor::ALL
            .iter()
            .map(|f| f.name())
            .chain(Self::z_column_names())
            .collect()
    }

    /// The five z-scored column names.
    pub fn z_column_names() -> Vec<&'static str> {
        Factor::ALL.iter().map(|f| f.z_name()).collect()
    }

    /// Converts to a polars frame: `symbol`, then [`FactorTable::column_names`].
    ///
    /// # Errors
    ///
    /// Returns an error if polars rejects the frame.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let columns = factor_columns(self.rows.iter().map(|r| (&r.symbol, &r.raw, &r.z)));
        Ok(DataFrame::new(columns)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn values(momentum: Option<f64>, vol: Option<f64>, size: Option<f64>) -> FactorValues {
        let mut v = FactorValues::MISSING;
        v.set(Factor::Momentum6m, momentum);
        v.set(Factor::Vol3m, vol);
        v.set(Factor::Size, size);
        v
    }

    fn table() -> FactorTable {
        FactorTable::from_raw(vec![
            ("A".to_string(), values(Some(0.1), Some(0.01), Some(10.0))),
            ("B".to_string(), values(Some(0.0), Some(0.02), Some(10.0))),
            ("C".to_string(), values(Some(-0.1), None, Some(10.0))),
        ])
        .unwrap()
    }

    #[test]
    fn test_standardizes_each_column() {
        let table = table();
        let z = table.z_column(Factor::Momentum6m);
        let sqrt_3_2 = (1.5f64).sqrt();
        assert_relative_eq!(z[0].unwrap(), sqrt_3_2, epsilon = 1e-12);
        assert_relative_eq!(z[1].unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(z[2].unwrap(), -sqrt_3_2, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_raw_stays_missing() {
        let table = table();
        let z = table.z_column(Factor::Vol3m);
        assert_relative_eq!(z[0].unwrap(), -1.0, epsilon = 1e-12);
        assert_relative_eq!(z[1].unwrap(), 1.0, epsilon = 1e-12);
        assert_eq!(z[2], None);
    }

    #[test]
    fn test_constant_and_absent_columns_have_no_z() {
        let table = table();
        assert!(table.z_column(Factor::Size).iter().all(Option::is_none));
        assert!(table.z_column(Factor::ValuePe).iter().all(Option::is_none));
    }

    #[test]
    fn test_column_lookup_by_name() {
        let table = table();
        assert_eq!(table.column("size").unwrap(), vec![Some(10.0); 3]);
        assert_eq!(table.column("vol_3m_z").unwrap()[2], None);
        assert!(table.column("bogus_z").is_none());
        assert_eq!(FactorTable::column_names().len(), 10);
        assert_eq!(FactorTable::z_column_names()[0], "momentum_6m_z");
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = FactorTable::from_raw(vec![
            ("A".to_string(), FactorValues::MISSING),
            ("A".to_string(), FactorValues::MISSING),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_to_dataframe() {
        let df = table().to_dataframe().unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 11);
        let momentum = df.column("momentum_6m").unwrap().as_materialized_series().f64().unwrap();
        assert_eq!(momentum.get(2), Some(-0.1));
        let vol_z = df.column("vol_3m_z").unwrap().as_materialized_series().f64().unwrap();
        assert_eq!(vol_z.get(2), None);
    }
}
