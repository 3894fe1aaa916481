#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The version of the ronda-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod factor;
pub mod provider;
pub mod stats;
pub mod table;
pub mod types;

// Re-exports
pub use error::{Result, RondaError};
pub use factor::{Factor, FactorValues, Z_SUFFIX};
pub use provider::{FundamentalsProvider, PriceProvider};
pub use table::{
    COMPOSITE_SCORE, DatedTable, FactorRow, FactorTable, Fundamentals, FundamentalsTable,
    PriceTable, RankedRow, RankedTable, ReturnTable,
};
pub use types::{Date, Symbol, Universe};
