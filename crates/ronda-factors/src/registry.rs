//! Factor registry for discovering and describing the ranking factors.

use crate::config::{MOMENTUM_WINDOW, VOLATILITY_WINDOW};
use ronda_traits::Factor;
use serde::{Deserialize, Serialize};

/// Factor category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FactorCategory {
    /// Price momentum factors
    Momentum,
    /// Risk factors
    Volatility,
    /// Valuation factors
    Value,
    /// Company size factors
    Size,
}

impl FactorCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Momentum => "Price momentum and trend-following factors",
            Self::Volatility => "Realised volatility of daily returns",
            Self::Value => "Valuation metrics comparing fundamentals to price",
            Self::Size => "Market capitalization",
        }
    }
}

/// Metadata about a factor.
#[derive(Debug, Clone, Serialize)]
pub struct FactorInfo {
    /// The factor
    pub factor: Factor,

    /// Raw column name
    pub name: &'static str,

    /// Standardized column name
    pub z_name: &'static str,

    /// Category classification
    pub category: FactorCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Lookback in trading-day rows (zero for fundamentals)
    pub lookback: usize,

    /// Whether the factor requires fundamental data
    pub requires_fundamentals: bool,

    /// Whether a higher raw value is considered better
    pub higher_is_better: bool,
}

impl FactorInfo {
    const fn new(
        factor: Factor,
        category: FactorCategory,
        description: &'static str,
        lookback: usize,
        higher_is_better: bool,
    ) -> Self {
        Self {
            factor,
            name: factor.name(),
            z_name: factor.z_name(),
            category,
            description,
            lookback,
            requires_fundamentals: lookback == 0,
            higher_is_better,
        }
    }
}

/// Get information about all available factors, in column order.
#[must_use]
pub fn available_factors() -> Vec<FactorInfo> {
    Factor::ALL
        .into_iter()
        .map(|factor| match factor {
            Factor::Momentum6m => FactorInfo::new(
                factor,
                FactorCategory::Momentum,
                "6-month price return over a fixed trading-day window",
                MOMENTUM_WINDOW,
                true,
            ),
            Factor::Vol3m => FactorInfo::new(
                factor,
                FactorCategory::Volatility,
                "3-month population standard deviation of daily returns",
                VOLATILITY_WINDOW,
                false,
            ),
            Factor::ValuePe => FactorInfo::new(
                factor,
                FactorCategory::Value,
                "Negated trailing price-to-earnings ratio",
                0,
                true,
            ),
            Factor::ValuePb => FactorInfo::new(
                factor,
                FactorCategory::Value,
                "Negated price-to-book ratio",
                0,
                true,
            ),
            Factor::Size => FactorInfo::new(
                factor,
                FactorCategory::Size,
                "Natural log of market capitalization",
                0,
                true,
            ),
        })
        .collect()
}

/// Get all factors in a specific category.
#[must_use]
pub fn factors_by_category(category: &FactorCategory) -> Vec<FactorInfo> {
    available_factors()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a factor by its raw or standardized name.
#[must_use]
pub fn get_factor_info(name: &str) -> Option<FactorInfo> {
    available_factors()
        .into_iter()
        .find(|info| info.name == name || info.z_name == name)
}

/// Get all factor categories, in declaration order.
#[must_use]
pub fn available_categories() -> Vec<FactorCategory> {
    let mut categories: Vec<_> = available_factors()
        .into_iter()
        .map(|info| info.category)
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_factors() {
        let factors = available_factors();
        assert_eq!(factors.len(), Factor::COUNT);
        assert_eq!(factors[0].name, "momentum_6m");
        assert_eq!(factors[4].z_name, "size_z");
    }

    #[test]
    fn test_factors_by_category() {
        assert_eq!(factors_by_category(&FactorCategory::Momentum).len(), 1);
        assert_eq!(factors_by_category(&FactorCategory::Value).len(), 2);
        assert_eq!(factors_by_category(&FactorCategory::Size).len(), 1);
    }

    #[test]
    fn test_get_factor_info() {
        let info = get_factor_info("vol_3m").unwrap();
        assert_eq!(info.factor, Factor::Vol3m);
        assert_eq!(info.lookback, 63);
        assert!(!info.requires_fundamentals);
        assert!(!info.higher_is_better);

        let by_z = get_factor_info("value_pb_z").unwrap();
        assert_eq!(by_z.factor, Factor::ValuePb);
        assert!(by_z.requires_fundamentals);
        assert!(by_z.higher_is_better);

        assert!(get_factor_info("bogus_z").is_none());
    }

    #[test]
    fn test_available_categories() {
        assert_eq!(
            available_categories(),
            vec![
                FactorCategory::Momentum,
                FactorCategory::Volatility,
                FactorCategory::Value,
                FactorCategory::Size,
            ]
        );
        assert!(!FactorCategory::Size.description().is_empty());
    }
}
