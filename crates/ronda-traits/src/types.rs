//! Common types used throughout the Ronda framework.

use crate::{RondaError, Result};
use derive_more::Deref;
use serde::{Deserialize, Serialize};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier, e.g. `"AAPL"`.
pub type Symbol = String;

/// An ordered set of distinct ticker symbols.
///
/// Symbols are trimmed and upper-cased on construction. Duplicates are
/// removed keeping the first occurrence, so iteration order is the order in
/// which the caller listed the tickers.
///
/// # Example
///
/// ```
/// use ronda_traits::Universe;
///
/// let universe = Universe::new(["aapl", "MSFT", " AAPL "]).unwrap();
/// assert_eq!(universe.symbols(), ["AAPL", "MSFT"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deref, Serialize, Deserialize)]
pub struct Universe {
    symbols: Vec<Symbol>,
}

impl Universe {
    /// Builds a universe from raw ticker strings.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidData`] if a symbol is blank or if no
    /// symbols are given.
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<Symbol> = Vec::new();
        for raw in symbols {
            let symbol = raw.as_ref().trim().to_uppercase();
            if symbol.is_empty() {
                return Err(RondaError::InvalidData("blank ticker symbol".to_string()));
            }
            if !out.contains(&symbol) {
                out.push(symbol);
            }
        }

        if out.is_empty() {
            return Err(RondaError::InvalidData(
                "universe must contain at least one ticker".to_string(),
            ));
        }

        Ok(Self { symbols: out })
    }

    /// The symbols in caller order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl<'a> IntoIterator for &'a Universe {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
