//! Simple period-over-period returns.

use ronda_traits::{PriceTable, ReturnTable};

/// Computes daily simple returns, `price_t / price_{t-1} - 1`, per ticker.
///
/// A return is missing when either price is missing. After computing, rows in
/// which every ticker's return is missing are dropped; rows where only some
/// returns are missing are kept. Fewer than two price rows yield a table with
/// the same tickers and no rows.
#[must_use]
pub fn compute_returns(prices: &PriceTable) -> ReturnTable {
    let changes = prices.pairwise(|prev, cur| Some(cur? / prev? - 1.0));
    ReturnTable::from(changes.filter_rows(|row| !changes.row_is_empty(row)))
}
