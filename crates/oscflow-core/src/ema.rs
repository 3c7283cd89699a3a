//! Non-adjusted (recursive) exponential moving average.
//!
//! The non-adjusted form seeds with the first observation and then applies
//! `ema[i] = alpha * values[i] + (1 - alpha) * ema[i-1]`. It diverges from
//! the "adjusted" weighted-average form for every finite series; the two
//! must not be confused. `oscflow-validate` proves this form agrees with a
//! library exponentially weighted mean in its non-adjusted mode.

use crate::config::alpha;

/// EMA over `values` with smoothing factor `2 / (period + 1)`.
///
/// The seed is `values[0]` exactly; there is no warm-up averaging phase.
/// An empty input yields an empty output.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    debug_assert!(period >= 1, "period must be at least 1");

    let Some(&seed) = values.first() else {
        return Vec::new();
    };

    let alpha = alpha(period);
    let mut out = Vec::with_capacity(values.len());
    let mut prev = seed;
    out.push(prev);
    for &value in &values[1..] {
        prev = alpha * value + (1.0 - alpha) * prev;
        out.push(prev);
    }
    out
}
