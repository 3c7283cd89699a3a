//! Trailing fixed-window accumulation.
//!
//! `out[i]` sums `values[max(0, i - window + 1) ..= i]`: partial windows at
//! the start of the series use every available point rather than padding
//! with zero. A window longer than the series degrades to a running sum.

/// Rolling sum over integral amounts. Integer accumulation keeps the result
/// exact; no floating error can creep into the window totals.
pub fn rolling_sum(values: &[i64], window: usize) -> Vec<i64> {
    debug_assert!(window >= 1, "window must be at least 1");

    let mut out = Vec::with_capacity(values.len());
    let mut acc: i64 = 0;
    for (i, value) in values.iter().enumerate() {
        acc += value;
        if i >= window {
            acc -= values[i - window];
        }
        out.push(acc);
    }
    out
}
