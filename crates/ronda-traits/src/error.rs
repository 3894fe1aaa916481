//! Error types for the Ronda framework.
//!
//! Structural problems (too little history, nothing to rank) fail fast with a
//! [`RondaError`]. Sparse per-ticker data is never an error: it is carried as
//! `None` cells and handled by filtering or propagation.

use thiserror::Error;

/// The main error type for Ronda operations.
#[derive(Debug, Error)]
pub enum RondaError {
    /// The price table is shorter than the momentum window requires.
    #[error("Insufficient price history: need at least {required} rows, got {available}")]
    InsufficientHistory {
        /// Minimum number of rows required.
        required: usize,
        /// Number of rows actually available.
        available: usize,
    },

    /// A provider produced no usable data at all.
    #[error("No data available: {0}")]
    NoDataAvailable(String),

    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when a required column is missing from the data.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Error fetching data from external sources.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for RondaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for RondaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Ronda operations.
pub type Result<T> = std::result::Result<T, RondaError>;
