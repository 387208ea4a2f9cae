//! Predicates shared by the city and restaurant list filters.
//!
//! Every filter field is independently optional. An unset field accepts every
//! record; set fields are ANDed by the callers.

use std::cmp::Ordering;

/// Exact-match predicate. `None` accepts anything.
pub fn matches_exact<T: PartialEq + ?Sized>(expected: Option<&T>, actual: &T) -> bool {
    expected.map_or(true, |expected| expected == actual)
}

/// Inclusive range predicate over an optional record value.
///
/// With no bounds set every record passes. With any bound set, a record whose
/// value is missing never passes. A bound that does not order against the
/// value (`NaN`) rejects the record.
pub fn matches_range<T: PartialOrd + Copy>(min: Option<T>, max: Option<T>, value: Option<T>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }

    let Some(value) = value else {
        return false;
    };

    if let Some(min) = min {
        if !matches!(value.partial_cmp(&min), Some(Ordering::Greater | Ordering::Equal)) {
            return false;
        }
    }

    if let Some(max) = max {
        if !matches!(value.partial_cmp(&max), Some(Ordering::Less | Ordering::Equal)) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_exact() {
        assert!(matches_exact(None, "Paris"));
        assert!(matches_exact(Some("Paris"), "Paris"));
        assert!(!matches_exact(Some("paris"), "Paris"));
    }

    #[test]
    fn test_matches_range_bounds_are_inclusive() {
        assert!(matches_range(Some(10), Some(20), Some(10)));
        assert!(matches_range(Some(10), Some(20), Some(20)));
        assert!(!matches_range(Some(10), Some(20), Some(9)));
        assert!(!matches_range(Some(10), Some(20), Some(21)));
    }

    #[test]
    fn test_matches_range_missing_value() {
        assert!(matches_range::<u64>(None, None, None));
        assert!(!matches_range(Some(0u64), None, None));
        assert!(!matches_range(None, Some(5.0), None));
    }

    #[test]
    fn test_matches_range_nan_bound_rejects_everything() {
        assert!(!matches_range(Some(f64::NAN), None, Some(1.0)));
        assert!(!matches_range(None, Some(f64::NAN), Some(1.0)));
        assert!(!matches_range(Some(0.0), Some(5.0), Some(f64::NAN)));
    }

    #[test]
    fn test_matches_range_zero_is_a_value() {
        assert!(matches_range(Some(0u64), Some(0), Some(0)));
        assert!(matches_range(None, Some(1.0), Some(0.0)));
    }
}
