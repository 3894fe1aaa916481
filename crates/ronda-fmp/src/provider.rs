//! Price and fundamentals providers backed by the FMP API.

use crate::client::FmpClient;
use crate::types::{FinancialRatios, HistoricalPrice, Quote};
use chrono::{NaiveDate, TimeDelta, Utc};
use polars::prelude::*;
use ronda_traits::{
    Fundamentals, FundamentalsProvider, FundamentalsTable, PriceProvider, PriceTable, Result,
    RondaError, Symbol, Universe,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Settings for price history retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceHistoryConfig {
    /// Tickers with fewer non-missing prices are dropped (default: 50).
    pub min_observations: usize,

    /// Pause between per-ticker requests in milliseconds (default: 0).
    pub rate_limit_delay_ms: u64,
}

impl Default for PriceHistoryConfig {
    fn default() -> Self {
        Self {
            min_observations: 50,
            rate_limit_delay_ms: 0,
        }
    }
}

/// Pivots per-ticker FMP price histories into a [`PriceTable`].
///
/// Each bar contributes its adjusted close, or its raw close when the
/// adjusted close is absent. Tickers with fewer than `min_observations`
/// prices are dropped.
///
/// # Errors
///
/// Returns [`RondaError::NoDataAvailable`] if there are no bars at all or if
/// every ticker is dropped, and [`RondaError::InvalidData`] on a malformed
/// date.
pub fn price_table_from_history(
    history: &[(Symbol, Vec<HistoricalPrice>)],
    min_observations: usize,
) -> Result<PriceTable> {
    let bars = history.iter().map(|(_, bars)| bars.len()).sum();
    let mut symbols: Vec<&str> = Vec::with_capacity(bars);
    let mut dates: Vec<&str> = Vec::with_capacity(bars);
    let mut closes: Vec<Option<f64>> = Vec::with_capacity(bars);

    for (symbol, bars) in history {
        for bar in bars {
            symbols.push(symbol);
            dates.push(&bar.date);
            closes.push(bar.adjusted_close());
        }
    }

    let frame = DataFrame::new(vec![
        Series::new("symbol".into(), symbols).into(),
        Series::new("date".into(), dates).into(),
        Series::new("adj_close".into(), closes).into(),
    ])?;

    let prices = PriceTable::from_long_frame(&frame)?;
    let fetched = prices.width();
    let prices = prices.drop_sparse(min_observations);

    if prices.width() == 0 {
        return Err(RondaError::NoDataAvailable(format!(
            "none of {fetched} tickers has at least {min_observations} prices"
        )));
    }

    debug!(
        fetched,
        kept = prices.width(),
        rows = prices.height(),
        "Assembled price table"
    );

    Ok(prices)
}

/// First calendar day of a `lookback_years` window ending at `end`.
///
/// The window spans `round(365 * lookback_years)` days.
///
/// # Errors
///
/// Returns [`RondaError::InvalidData`] if the lookback is not a positive
/// finite number or reaches past the earliest representable date.
pub fn lookback_start(end: NaiveDate, lookback_years: f64) -> Result<NaiveDate> {
    if !lookback_years.is_finite() || lookback_years <= 0.0 {
        return Err(RondaError::InvalidData(format!(
            "lookback must be a positive number of years, got {lookback_years}"
        )));
    }

    let days = (365.0 * lookback_years).round();
    TimeDelta::try_days(days as i64)
        .and_then(|span| end.checked_sub_signed(span))
        .ok_or_else(|| {
            RondaError::InvalidData(format!(
                "lookback of {lookback_years} years reaches past the earliest supported date"
            ))
        })
}

/// Price provider that downloads daily history from FMP one ticker at a time.
#[derive(Debug, Clone)]
pub struct FmpPriceProvider {
    client: FmpClient,
    config: PriceHistoryConfig,
}

impl FmpPriceProvider {
    /// Create a provider with the default [`PriceHistoryConfig`].
    #[must_use]
    pub fn new(client: FmpClient) -> Self {
        Self::with_config(client, PriceHistoryConfig::default())
    }

    /// Create a provider with explicit settings.
    #[must_use]
    pub const fn with_config(client: FmpClient, config: PriceHistoryConfig) -> Self {
        Self { client, config }
    }
}

impl PriceProvider for FmpPriceProvider {
    async fn get_price_history(
        &self,
        universe: &Universe,
        lookback_years: f64,
    ) -> Result<PriceTable> {
        let end = Utc::now().date_naive();
        let start = lookback_start(end, lookback_years)?;
        info!(tickers = universe.len(), %start, %end, "Downloading prices");

        let mut history = Vec::with_capacity(universe.len());
        for (i, symbol) in universe.iter().enumerate() {
            if i > 0 && self.config.rate_limit_delay_ms > 0 {
                tokio::time::sleep(std::time::Duration::from_millis(
                    self.config.rate_limit_delay_ms,
                ))
                .await;
            }

            match self
                .client
                .historical_prices(symbol, Some(start), Some(end))
                .await
            {
                Ok(bars) => history.push((symbol.clone(), bars)),
                Err(e) => warn!(%symbol, error = %e, "Failed to fetch prices"),
            }
        }

        if history.iter().all(|(_, bars)| bars.is_empty()) {
            return Err(RondaError::NoDataAvailable(
                "no price history downloaded".to_string(),
            ));
        }

        price_table_from_history(&history, self.config.min_observations)
    }
}

/// Merges an FMP quote and ratio history into ranking fundamentals.
///
/// Trailing P/E comes from the quote, falling back to the latest ratio
/// record; price-to-book comes from the latest ratio record; market cap
/// comes from the quote.
#[must_use]
pub fn fundamentals_from(quote: Option<&Quote>, ratios: &[FinancialRatios]) -> Fundamentals {
    let latest = ratios.first();
    Fundamentals::new(
        quote
            .and_then(|q| q.pe)
            .or_else(|| latest.and_then(|r| r.price_earnings_ratio)),
        latest.and_then(|r| r.price_to_book_ratio),
        quote.and_then(|q| q.market_cap),
    )
}

/// Fundamentals provider that reads quotes and ratios from FMP.
///
/// A ticker whose requests fail gets missing fields; the call itself does not
/// fail on per-ticker errors.
#[derive(Debug, Clone)]
pub struct FmpFundamentalsProvider {
    client: FmpClient,
    rate_limit_delay_ms: u64,
}

impl FmpFundamentalsProvider {
    /// Create a provider with no pause between tickers.
    #[must_use]
    pub const fn new(client: FmpClient) -> Self {
        Self {
            client,
            rate_limit_delay_ms: 0,
        }
    }

    /// Pause `ms` milliseconds between tickers.
    #[must_use]
    pub const fn with_rate_limit_delay(mut self, ms: u64) -> Self {
        self.rate_limit_delay_ms = ms;
        self
    }
}

impl FundamentalsProvider for FmpFundamentalsProvider {
    async fn get_fundamentals(&self, universe: &Universe) -> Result<FundamentalsTable> {
        info!(tickers = universe.len(), "Fetching fundamentals");

        let mut rows = Vec::with_capacity(universe.len());
        for (i, symbol) in universe.iter().enumerate() {
            if i > 0 && self.rate_limit_delay_ms > 0 {
                tokio::time::sleep(std::time::Duration::from_millis(self.rate_limit_delay_ms))
                    .await;
            }

            let (quote, ratios) = tokio::join!(
                self.client.quote(symbol),
                self.client.ratios(symbol, Some(1)),
            );

            let quote = quote
                .inspect_err(|e| warn!(%symbol, error = %e, "Failed to fetch quote"))
                .ok();
            let ratios = ratios
                .inspect_err(|e| warn!(%symbol, error = %e, "Failed to fetch ratios"))
                .unwrap_or_default();

            rows.push((symbol.clone(), fundamentals_from(quote.as_ref(), &ratios)));
        }

        FundamentalsTable::new(rows)
    }
}
