#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Version information for the ronda crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod pipeline;

// ============================================================================
// Core Types
// ============================================================================

/// Core types, tables and provider traits.
///
/// - [`Factor`] - The five ranking factors
/// - [`PriceProvider`] / [`FundamentalsProvider`] - Data sources
/// - [`FactorTable`] / [`RankedTable`] - Pipeline outputs
pub mod traits {
    pub use ronda_traits::*;
}

// Re-export core types at top level for convenience
pub use ronda_traits::{
    Factor, FactorTable, FundamentalsProvider, FundamentalsTable, PriceProvider, PriceTable,
    RankedTable, ReturnTable,
};

// Re-export error types
pub use ronda_traits::{Result, RondaError};

// Re-export common types
pub use ronda_traits::types::{Date, Symbol, Universe};

// ============================================================================
// Factor Computation
// ============================================================================

/// Return calculation and factor table construction.
///
/// # Example
///
/// ```ignore
/// use ronda::factors::{compute_factor_table, compute_returns};
///
/// let returns = compute_returns(&prices);
/// let table = compute_factor_table(&prices, &fundamentals)?;
/// ```
pub mod factors {
    pub use ronda_factors::*;
}

// ============================================================================
// Ranking
// ============================================================================

/// Weights, combiners and ranking.
///
/// ## Available Combiners
///
/// - **EqualWeightCombiner**: Sum of all z-scores
/// - **WeightedCombiner**: Sum of z-scores times explicit weights
///
/// # Example
///
/// ```ignore
/// use ronda::combine::{FactorWeights, rank_stocks};
///
/// let ranked = rank_stocks(&factor_table, Some(&FactorWeights::tilted()))?;
/// ```
pub mod combine {
    pub use ronda_combine::*;
}

// ============================================================================
// Data Providers
// ============================================================================

/// Financial Modeling Prep (FMP) providers.
///
/// ## Setup
///
/// 1. Get a free API key at <https://financialmodelingprep.com/>
/// 2. Set the `FMP_API_KEY` environment variable or add to `.env` file
pub mod fmp {
    pub use ronda_fmp::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use ronda::prelude::*;
/// ```
pub mod prelude {
    pub use crate::pipeline::{rank_universe, rank_universe_with};
    pub use crate::{
        Factor, FactorTable, FundamentalsProvider, FundamentalsTable, PriceProvider, PriceTable,
        RankedTable, Result, RondaError, Universe,
    };
    pub use ronda_combine::{FactorWeights, rank_stocks};
    pub use ronda_factors::{FactorConfig, compute_factor_table, compute_returns};
}
