//! Data provider traits.
//!
//! Providers sit outside the ranking core. They fetch prices and
//! fundamentals however they like (HTTP, files, fixtures) and hand back
//! complete tables, or signal a retrieval failure. The core never retries.

use crate::{FundamentalsTable, PriceTable, Result, Universe};
use std::future::Future;

/// Source of adjusted closing price history.
///
/// # Contract
///
/// - Rows are trading dates in strictly increasing order, columns are
///   tickers from the universe.
/// - Tickers with too few observations are dropped before returning.
/// - If no ticker survives, the provider fails with
///   [`crate::RondaError::NoDataAvailable`].
///
/// # Example
///
/// ```no_run
/// use ronda_traits::{PriceProvider, PriceTable, Result, Universe};
///
/// struct Fixed(PriceTable);
///
/// impl PriceProvider for Fixed {
///     async fn get_price_history(
///         &self,
///         _universe: &Universe,
///         _lookback_years: f64,
///     ) -> Result<PriceTable> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait PriceProvider: Send + Sync {
    /// Fetches roughly `lookback_years` of daily prices for `universe`.
    fn get_price_history(
        &self,
        universe: &Universe,
        lookback_years: f64,
    ) -> impl Future<Output = Result<PriceTable>> + Send;
}

/// Source of per-ticker fundamentals.
///
/// # Contract
///
/// Any field may be missing for any ticker, and a ticker may be absent from
/// the result altogether. Missing data is business as usual and must not
/// cause the call to fail.
pub trait FundamentalsProvider: Send + Sync {
    /// Fetches fundamentals for `universe`.
    fn get_fundamentals(
        &self,
        universe: &Universe,
    ) -> impl Future<Output = Result<FundamentalsTable>> + Send;
}
