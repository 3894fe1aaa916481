//! Data types for FMP API responses.

use serde::{Deserialize, Serialize};

/// Valuation ratios from FMP.
///
/// Only the fields used for ranking are kept; absent or null values
/// deserialize to `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatios {
    /// Filing date.
    pub date: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Price to earnings ratio.
    #[serde(default)]
    pub price_earnings_ratio: Option<f64>,
    /// Price to book ratio.
    #[serde(default)]
    pub price_to_book_ratio: Option<f64>,
}

/// Real-time quote data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol.
    pub symbol: String,
    /// Market cap.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Trailing P/E ratio.
    #[serde(default)]
    pub pe: Option<f64>,
}

/// Historical price data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalPrice {
    /// Date.
    pub date: String,
    /// Close price.
    #[serde(default)]
    pub close: Option<f64>,
    /// Adjusted close.
    #[serde(rename = "adjClose", default)]
    pub adj_close: Option<f64>,
}

impl HistoricalPrice {
    /// Adjusted close, falling back to the raw close when absent.
    #[must_use]
    pub fn adjusted_close(&self) -> Option<f64> {
        self.adj_close.or(self.close)
    }
}
