//! Library-form exponentially weighted mean.
//!
//! This is the normalized weighted-average formulation used by dataframe
//! libraries, with explicit old/new weight bookkeeping. In non-adjusted
//! mode it must agree with the recursive [`oscflow_core::ema`] to well
//! under 1e-15 per point; in adjusted mode it is a different estimator and
//! diverges for every finite series. The mode is a correctness decision,
//! not a tuning knob.

/// Exponentially weighted mean of `values` with smoothing factor `alpha`.
///
/// `adjust = false` reproduces the seed-then-recur EMA. `adjust = true`
/// computes the weighted average over the full history instead.
pub fn ewm_mean(values: &[f64], alpha: f64, adjust: bool) -> Vec<f64> {
    debug_assert!(alpha > 0.0 && alpha <= 1.0, "alpha must be in (0, 1]");

    let Some(&first) = values.first() else {
        return Vec::new();
    };

    let old_wt_factor = 1.0 - alpha;
    let new_wt = if adjust { 1.0 } else { alpha };

    let mut out = Vec::with_capacity(values.len());
    let mut weighted_avg = first;
    let mut old_wt = 1.0;
    out.push(weighted_avg);

    for &cur in &values[1..] {
        old_wt *= old_wt_factor;
        weighted_avg = (old_wt * weighted_avg + new_wt * cur) / (old_wt + new_wt);
        if adjust {
            old_wt += new_wt;
        } else {
            old_wt = 1.0;
        }
        out.push(weighted_avg);
    }

    out
}
