//! Price facet: closed interval, inclusive on both ends.

use crate::state::PriceRange;

/// Whether the course's price falls within the price facet's range.
///
/// A range with `min > max` contains no price, so a contradictory facet
/// rejects every course rather than erroring.
pub fn price_allows(price: f32, range: Option<PriceRange>) -> bool {
    match range {
        None => true,
        Some(range) => range.contains(price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_range_allows_everything() {
        assert!(price_allows(0.0, None));
        assert!(price_allows(9999.0, None));
    }

    #[test]
    fn test_range_is_inclusive_on_both_ends() {
        let range = Some(PriceRange::new(100.0, 500.0));
        assert!(price_allows(100.0, range));
        assert!(price_allows(500.0, range));
        assert!(!price_allows(99.0, range));
        assert!(!price_allows(501.0, range));
    }

    #[test]
    fn test_inverted_range_rejects_everything() {
        let range = Some(PriceRange::new(500.0, 100.0));
        assert!(!price_allows(100.0, range));
        assert!(!price_allows(300.0, range));
        assert!(!price_allows(500.0, range));
    }
}
