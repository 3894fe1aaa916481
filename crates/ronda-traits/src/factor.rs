//! The closed set of ranking factors.
//!
//! Every factor is oriented so that a higher raw value is "better": value
//! ratios are negated, and volatility is left as-is so that callers choose its
//! sign through the composite weights.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Suffix that marks a cross-sectionally standardized column.
pub const Z_SUFFIX: &str = "_z";

/// Identifier of one of the five ranking factors.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Factor {
    /// Six-month price momentum.
    #[display("momentum_6m")]
    #[serde(rename = "momentum_6m")]
    Momentum6m,
    /// Three-month realised volatility of daily returns.
    #[display("vol_3m")]
    #[serde(rename = "vol_3m")]
    Vol3m,
    /// Negated trailing price-to-earnings ratio.
    #[display("value_pe")]
    #[serde(rename = "value_pe")]
    ValuePe,
    /// Negated price-to-book ratio.
    #[display("value_pb")]
    #[serde(rename = "value_pb")]
    ValuePb,
    /// Natural log of market capitalization.
    #[display("size")]
    #[serde(rename = "size")]
    Size,
}

impl Factor {
    /// Number of factors.
    pub const COUNT: usize = 5;

    /// All factors in canonical column order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Momentum6m,
        Self::Vol3m,
        Self::ValuePe,
        Self::ValuePb,
        Self::Size,
    ];

    /// Position of this factor in [`Factor::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Momentum6m => 0,
            Self::Vol3m => 1,
            Self::ValuePe => 2,
            Self::ValuePb => 3,
            Self::Size => 4,
        }
    }

    /// Raw column name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Momentum6m => "momentum_6m",
            Self::Vol3m => "vol_3m",
            Self::ValuePe => "value_pe",
            Self::ValuePb => "value_pb",
            Self::Size => "size",
        }
    }

    /// Standardized column name (raw name plus [`Z_SUFFIX`]).
    #[must_use]
    pub const fn z_name(self) -> &'static str {
        match self {
            Self::Momentum6m => "momentum_6m_z",
            Self::Vol3m => "vol_3m_z",
            Self::ValuePe => "value_pe_z",
            Self::ValuePb => "value_pb_z",
            Self::Size => "size_z",
        }
    }

    /// Looks up a factor by its raw column name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Looks up a factor by its standardized column name.
    #[must_use]
    pub fn from_z_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.z_name() == name)
    }
}

/// One value per factor for a single ticker, each possibly missing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FactorValues([Option<f64>; Factor::COUNT]);

impl FactorValues {
    /// All values missing.
    pub const MISSING: Self = Self([None; Factor::COUNT]);

    /// Builds values by evaluating `f` for every factor.
    pub fn from_fn(mut f: impl FnMut(Factor) -> Option<f64>) -> Self {
        let mut values = [None; Factor::COUNT];
        for factor in Factor::ALL {
            values[factor.index()] = f(factor).filter(|v| v.is_finite());
        }
        Self(values)
    }

    /// Value for `factor`.
    #[must_use]
    pub const fn get(&self, factor: Factor) -> Option<f64> {
        self.0[factor.index()]
    }

    /// Sets the value for `factor`; non-finite values are stored as missing.
    pub fn set(&mut self, factor: Factor, value: Option<f64>) {
        self.0[factor.index()] = value.filter(|v| v.is_finite());
    }

    /// Number of non-missing values.
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|v| v.is_some()).count()
    }

    /// Iterates `(factor, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, Option<f64>)> + '_ {
        Factor::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}
