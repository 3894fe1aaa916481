//! Realised volatility of daily returns.

use ronda_traits::ReturnTable;
use ronda_traits::stats::{count_present, population_std};

/// Volatility of every ticker in `returns`, in column order.
///
/// Takes the last `window` rows of the return table and computes the
/// population standard deviation of each ticker's present returns. Fewer
/// than two present returns in the window yield a missing value.
#[must_use]
pub fn volatility(returns: &ReturnTable, window: usize) -> Vec<Option<f64>> {
    let recent = returns.tail(window);
    recent
        .iter_columns()
        .map(|(_, column)| {
            if count_present(column) < 2 {
                return None;
            }
            population_std(column)
        })
        .collect()
}
