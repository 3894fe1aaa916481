//! Composite scoring and ranking for Ronda factor tables.
//!
//! This crate combines the standardized columns of a
//! [`FactorTable`](ronda_traits::FactorTable) into one composite score per
//! ticker and sorts the tickers by it. Weights are a typed mapping from
//! [`Factor`](ronda_traits::Factor) to a signed float; names that do not
//! match a standardized column are dropped when the mapping is built.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ronda_combine::{Combiner, FactorScore, WeightedCombiner, FactorWeights};
//! use ronda_traits::Factor;
//! use ndarray::Array1;
//!
//! let combiner = WeightedCombiner::new(FactorWeights::tilted());
//! let scores = vec![
//!     FactorScore {
//!         factor: Factor::Momentum6m,
//!         scores: Array1::from_vec(vec![0.5, -0.2, 1.0]),
//!     },
//!     FactorScore {
//!         factor: Factor::ValuePe,
//!         scores: Array1::from_vec(vec![-0.3, 0.8, 0.1]),
//!     },
//! ];
//!
//! let composite = combiner.combine(&scores).unwrap();
//! ```

mod combiner;
mod equal_weight;
mod rank;
mod weighted;
mod weights;

// Re-export main types
pub use combiner::{Combiner, FactorScore};
pub use equal_weight::EqualWeightCombiner;
pub use rank::{rank_stocks, rank_with};
pub use weighted::WeightedCombiner;
pub use weights::{FactorWeights, ParsedWeights, WeightPreset};
