//! Window lengths and filtering thresholds for factor construction.

use serde::{Deserialize, Serialize};

/// Trading days in the momentum window (about six months).
pub const MOMENTUM_WINDOW: usize = 126;

/// Trading days in the volatility window (about three months).
pub const VOLATILITY_WINDOW: usize = 63;

/// Extra rows required beyond the momentum window.
pub const HISTORY_MARGIN: usize = 5;

/// Minimum number of present raw factors for a ticker to be kept.
pub const MIN_FACTORS: usize = 3;

/// Configuration for factor table construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorConfig {
    /// Momentum look-back in price rows (default: 126).
    pub momentum_window: usize,

    /// Volatility window in return rows (default: 63).
    pub volatility_window: usize,

    /// Rows required on top of the momentum window (default: 5).
    pub history_margin: usize,

    /// Minimum present raw factors per ticker (default: 3).
    pub min_factors: usize,
}

impl FactorConfig {
    /// Minimum number of price rows needed to build a factor table.
    #[must_use]
    pub const fn required_rows(&self) -> usize {
        self.momentum_window + self.history_margin
    }
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            momentum_window: MOMENTUM_WINDOW,
            volatility_window: VOLATILITY_WINDOW,
            history_margin: HISTORY_MARGIN,
            min_factors: MIN_FACTORS,
        }
    }
}
