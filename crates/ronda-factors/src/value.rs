//! Valuation factors from fundamentals.
//!
//! Both factors are sign-flipped ratios: a cheaper stock has a lower P/E or
//! P/B and therefore a higher factor value.

use ronda_traits::Fundamentals;

/// Negated trailing price-to-earnings ratio.
#[must_use]
pub fn value_pe(fundamentals: &Fundamentals) -> Option<f64> {
    fundamentals.trailing_pe.map(|pe| -pe)
}

/// Negated price-to-book ratio.
#[must_use]
pub fn value_pb(fundamentals: &Fundamentals) -> Option<f64> {
    fundamentals.price_to_book.map(|pb| -pb)
}
