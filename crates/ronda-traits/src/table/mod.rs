//! Typed tables passed between pipeline stages.
//!
//! Each table is an immutable value: a stage builds a new table and hands it to
//! the next stage, it never edits one it received. Cells are `Option<f64>`,
//! with `None` meaning "no data".
//!
//! - [`PriceTable`] / [`ReturnTable`]: date rows by ticker columns
//! - [`FundamentalsTable`]: one [`Fundamentals`] row per ticker
//! - [`FactorTable`]: raw and z-scored factor values per ticker
//! - [`RankedTable`]: factor rows plus a composite score, sorted descending

mod dated;
mod factors;
mod fundamentals;
mod ranked;

pub use dated::{DatedTable, LONG_FRAME_COLUMNS, PriceTable, ReturnTable};
pub use factors::{FactorRow, FactorTable};
pub use fundamentals::{Fundamentals, FundamentalsTable};
pub use ranked::{COMPOSITE_SCORE, RankedRow, RankedTable};

use crate::{Factor, FactorValues, Result, RondaError, Symbol};
use polars::prelude::*;
use std::collections::HashSet;

/// Fails if `symbols` contains a duplicate.
pub(crate) fn ensure_unique<'a>(symbols: impl IntoIterator<Item = &'a Symbol>) -> Result<()> {
    let mut seen = HashSet::new();
    for symbol in symbols {
        if !seen.insert(symbol.as_str()) {
            return Err(RondaError::InvalidData(format!(
                "duplicate ticker symbol: {symbol}"
            )));
        }
    }
    Ok(())
}

/// Polars columns for a factor-shaped table: `symbol`, raw factors, z-scores.
pub(crate) fn factor_columns<'a, I>(rows: I) -> Vec<Column>
where
    I: Iterator<Item = (&'a Symbol, &'a FactorValues, &'a FactorValues)> + Clone,
{
    let symbols: Vec<&str> = rows.clone().map(|(s, _, _)| s.as_str()).collect();
    let mut columns: Vec<Column> = vec![Series::new("symbol".into(), symbols).into()];

    for factor in Factor::ALL {
        let values: Vec<Option<f64>> = rows.clone().map(|(_, raw, _)| raw.get(factor)).collect();
        columns.push(Series::new(factor.name().into(), values).into());
    }
    for factor in Factor::ALL {
        let values: Vec<Option<f64>> = rows.clone().map(|(_, _, z)| z.get(factor)).collect();
        columns.push(Series::new(factor.z_name().into(), values).into());
    }

    columns
}
