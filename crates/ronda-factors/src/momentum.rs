//! Price momentum over a fixed number of trading-day rows.

use ronda_traits::PriceTable;
use ronda_traits::stats::finite;

/// Momentum of every ticker in `prices`, in column order.
///
/// For each ticker the value is `p_last / p_base - 1`, where `p_last` is the
/// price in the last row and `p_base` the price `window` rows before it. The
/// window counts rows, not calendar days. A ticker is missing if either price
/// is missing, if the base price is zero, or if the table has no row at
/// `last - window`.
#[must_use]
pub fn momentum(prices: &PriceTable, window: usize) -> Vec<Option<f64>> {
    let base_row = prices
        .height()
        .checked_sub(1)
        .and_then(|last| last.checked_sub(window));

    (0..prices.width())
        .map(|col| {
            let base = prices.value(base_row?, col)?;
            let last = prices.value(prices.height() - 1, col)?;
            finite(last / base - 1.0)
        })
        .collect()
}
