//! Factor computations for the Ronda ranking engine.
//!
//! This crate turns a [`PriceTable`](ronda_traits::PriceTable) and a
//! [`FundamentalsTable`](ronda_traits::FundamentalsTable) into a
//! [`FactorTable`](ronda_traits::FactorTable):
//!
//! - [`returns`]: daily simple returns from prices
//! - [`momentum`]: 6-month price momentum over a fixed trading-day window
//! - [`volatility`]: 3-month realised volatility of daily returns
//! - [`value`]: negated P/E and P/B, so that cheaper scores higher
//! - [`size`]: log market capitalization
//! - [`builder`]: assembles, filters and standardizes the five factors
//!
//! # Example
//!
//! ```ignore
//! use ronda_factors::compute_factor_table;
//!
//! let factors = compute_factor_table(&prices, &fundamentals)?;
//! for row in factors.rows() {
//!     println!("{} {:?}", row.symbol, row.z);
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod builder;
pub mod config;
pub mod momentum;
pub mod registry;
pub mod returns;
pub mod size;
pub mod value;
pub mod volatility;

// Re-export key types
pub use builder::{compute_factor_table, compute_factor_table_with};
pub use config::FactorConfig;
pub use registry::{FactorCategory, FactorInfo};
pub use returns::compute_returns;
