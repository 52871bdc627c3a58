// ➕ Numeric Aggregator - Left-to-right sums
// Plain floating-point semantics, no overflow or precision handling

/// Sum a sequence of numbers, accumulating left to right from 0.
///
/// An empty slice sums to `0.0`.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |total, value| total + value)
}

/// Integer variant of [`sum`]. Overflow wraps, so the function never panics.
pub fn sum_integers(values: &[i64]) -> i64 {
    values.iter().fold(0i64, |total, value| total.wrapping_add(*value))
}

// ============================================================================
// TESTS
// ============================================================================
