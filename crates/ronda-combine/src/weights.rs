//! Factor weights keyed by standardized column.

use ronda_traits::Factor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Built-in weight sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightPreset {
    /// Weight 1.0 on every standardized factor
    Equal,
    /// Momentum and value tilt with a penalty on volatility
    Tilted,
}

impl WeightPreset {
    /// The weights for this preset.
    #[must_use]
    pub fn weights(self) -> FactorWeights {
        match self {
            Self::Equal => FactorWeights::equal(),
            Self::Tilted => FactorWeights::tilted(),
        }
    }
}

/// Signed weights on standardized factors.
///
/// A factor without an entry contributes nothing to a composite score. In
/// serialized form the keys are standardized column names such as
/// `"momentum_6m_z"`; unknown names are dropped on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct FactorWeights {
    weights: BTreeMap<Factor, f64>,
}

/// Result of building weights from column names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedWeights {
    /// Weights on recognised standardized columns
    pub weights: FactorWeights,
    /// Names that did not match a standardized column, or whose weight was not finite
    pub ignored: Vec<String>,
}

impl FactorWeights {
    /// Empty weights: every composite is zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight 1.0 on every factor.
    #[must_use]
    pub fn equal() -> Self {
        Factor::ALL.into_iter().map(|f| (f, 1.0)).collect()
    }

    /// Momentum and value tilted weights.
    ///
    /// | factor | weight |
    /// |---|---|
    /// | `momentum_6m_z` | 0.35 |
    /// | `vol_3m_z` | -0.15 |
    /// | `value_pe_z` | 0.25 |
    /// | `value_pb_z` | 0.15 |
    /// | `size_z` | 0.10 |
    #[must_use]
    pub fn tilted() -> Self {
        [
            (Factor::Momentum6m, 0.35),
            (Factor::Vol3m, -0.15),
            (Factor::ValuePe, 0.25),
            (Factor::ValuePb, 0.15),
            (Factor::Size, 0.10),
        ]
        .into_iter()
        .collect()
    }

    /// Builds weights from standardized column names.
    ///
    /// Names that are not standardized columns of the factor table, and
    /// non-finite weights, are left out and reported in
    /// [`ParsedWeights::ignored`]. A later entry for the same column replaces
    /// an earlier one.
    pub fn from_names<I, S>(entries: I) -> ParsedWeights
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut parsed = ParsedWeights::default();
        for (name, weight) in entries {
            let name = name.as_ref();
            match Factor::from_z_name(name) {
                Some(factor) if weight.is_finite() => parsed.weights.set(factor, weight),
                _ => parsed.ignored.push(name.to_string()),
            }
        }
        parsed
    }

    /// Sets the weight of `factor`.
    pub fn set(&mut self, factor: Factor, weight: f64) {
        self.weights.insert(factor, weight);
    }

    /// Weight of `factor`, or 0.0 if it has none.
    #[must_use]
    pub fn get(&self, factor: Factor) -> f64 {
        self.weights.get(&factor).copied().unwrap_or(0.0)
    }

    /// Whether `factor` has an explicit weight.
    #[must_use]
    pub fn contains(&self, factor: Factor) -> bool {
        self.weights.contains_key(&factor)
    }

    /// Number of weighted factors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether no factor is weighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates `(factor, weight)` pairs in factor order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        self.weights.iter().map(|(&f, &w)| (f, w))
    }
}

impl FromIterator<(Factor, f64)> for FactorWeights {
    fn from_iter<T: IntoIterator<Item = (Factor, f64)>>(iter: T) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, f64>> for FactorWeights {
    fn from(map: BTreeMap<String, f64>) -> Self {
        let parsed = Self::from_names(map);
        for name in &parsed.ignored {
            warn!(key = %name, "Ignoring weight that does not name a standardized factor");
        }
        parsed.weights
    }
}

impl From<FactorWeights> for BTreeMap<String, f64> {
    fn from(weights: FactorWeights) -> Self {
        weights
            .iter()
            .map(|(f, w)| (f.z_name().to_string(), w))
            .collect()
    }
}
