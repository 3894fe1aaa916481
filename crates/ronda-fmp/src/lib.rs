//! Financial Modeling Prep (FMP) data providers for Ronda.
//!
//! This crate provides a client for the
//! [Financial Modeling Prep](https://financialmodelingprep.com/) API and the
//! two Ronda data providers built on it:
//!
//! - [`FmpPriceProvider`]: daily adjusted closes for a universe
//! - [`FmpFundamentalsProvider`]: trailing P/E, price-to-book and market cap
//!
//! # Usage
//!
//! ```rust,ignore
//! use ronda_fmp::{FmpClient, FmpPriceProvider, FmpFundamentalsProvider};
//! use ronda_traits::{PriceProvider, FundamentalsProvider, Universe};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!     let universe = Universe::new(["AAPL", "MSFT"])?;
//!
//!     let prices = FmpPriceProvider::new(client.clone())
//!         .get_price_history(&universe, 2.0)
//!         .await?;
//!     let fundamentals = FmpFundamentalsProvider::new(client)
//!         .get_fundamentals(&universe)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod provider;
mod types;

pub use client::FmpClient;
pub use error::FmpError;
pub use provider::{
    FmpFundamentalsProvider, FmpPriceProvider, PriceHistoryConfig, fundamentals_from, lookback_start,
    price_table_from_history,
};
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
