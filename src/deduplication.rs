// 🔍 Deduplication - Drop repeated values, keep first-seen order
// Input is never mutated; every call returns a fresh Vec

use std::collections::HashSet;
use std::hash::Hash;

// ============================================================================
// NUMBER KEYS
// ============================================================================

/// Hashable identity for an `f64`.
///
/// Mirrors "same value zero" equality: `0.0` and `-0.0` are one value,
/// and every NaN is the same value as every other NaN.
fn number_key(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

// ============================================================================
// DEDUPLICATION
// ============================================================================

/// Remove repeated numbers, keeping each value at its first occurrence.
///
/// Idempotent: `dedupe(&dedupe(x)) == dedupe(x)`.
pub fn dedupe(values: &[f64]) -> Vec<f64> {
    dedupe_by_key(values, |value| number_key(*value))
}

/// Remove repeated values of any hashable type, keeping first-seen order.
pub fn dedupe_values<T>(values: &[T]) -> Vec<T>
where
    T: Hash + Eq + Clone,
{
    let mut seen = HashSet::with_capacity(values.len());
    values
        .iter()
        .filter(|value| seen.insert(*value))
        .cloned()
        .collect()
}

/// Remove values whose derived key was already seen.
pub fn dedupe_by_key<T, K, F>(values: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(values.len());
    values
        .iter()
        .filter(|value| seen.insert(key(*value)))
        .cloned()
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_preserves_first_seen_order() {
        let values = vec![1.0, 2.0, 2.0, 3.0, 4.0, 4.0, 5.0];
        assert_eq!(dedupe(&values), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_dedupe_long_tail_of_repeats() {
        let values = vec![
            1.0, 2.0, 2.0, 3.0, 4.0, 4.0, 5.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0,
            3.0, 2.0,
        ];
        assert_eq!(dedupe(&values), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_dedupe_order_follows_first_occurrence() {
        let values = vec![3.0, 1.0, 3.0, 2.0, 1.0];
        assert_eq!(dedupe(&values), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let values = vec![5.0, 5.0, 1.5, 2.0, 1.5];
        let once = dedupe(&values);
        let twice = dedupe(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dedupe_does_not_mutate_input() {
        let values = vec![1.0, 1.0, 2.0];
        let _ = dedupe(&values);
        assert_eq!(values, vec![1.0, 1.0, 2.0]);
    }

    #[test]
    fn test_dedupe_empty() {
        assert!(dedupe(&[]).is_empty());
    }

    #[test]
    fn test_dedupe_signed_zero_and_nan() {
        let values = vec![0.0, -0.0, f64::NAN, f64::NAN, 1.0];
        let unique = dedupe(&values);

        assert_eq!(unique.len(), 3);
        assert_eq!(unique[0], 0.0);
        assert!(unique[1].is_nan());
        assert_eq!(unique[2], 1.0);
    }

    #[test]
    fn test_dedupe_values_generic() {
        let words = vec!["a", "b", "a", "c", "b"];
        assert_eq!(dedupe_values(&words), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dedupe_by_key_case_insensitive() {
        let merchants = vec!["STARBUCKS", "Amazon", "starbucks"];
        let unique = dedupe_by_key(&merchants, |m| m.to_lowercase());
        assert_eq!(unique, vec!["STARBUCKS", "Amazon"]);
    }
}
