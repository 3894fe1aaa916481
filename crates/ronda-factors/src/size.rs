//! Size factor.

use ronda_traits::Fundamentals;
use ronda_traits::stats::finite;

/// Natural log of market capitalization.
///
/// A missing, zero or negative market cap yields a missing value.
#[must_use]
pub fn size(fundamentals: &Fundamentals) -> Option<f64> {
    fundamentals
        .market_cap
        .filter(|cap| *cap > 0.0)
        .and_then(|cap| finite(cap.ln()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_market_cap() {
        let f = Fundamentals::new(None, None, Some(1e9));
        assert_relative_eq!(size(&f).unwrap(), 1e9_f64.ln());
    }

    #[test]
    fn test_non_positive_market_cap_is_missing() {
        assert_eq!(size(&Fundamentals::new(None, None, Some(0.0))), None);
        assert_eq!(size(&Fundamentals::new(None, None, Some(-5.0))), None);
        assert_eq!(size(&Fundamentals::MISSING), None);
    }
}
