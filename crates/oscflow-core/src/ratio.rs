//! Normalization of accumulated flow against market capitalization.

/// Supply ratio per point: `(foreign + institutional) / market_cap`.
///
/// A zero market cap marks unusable upstream data for that day; the ratio
/// saturates to `0.0` instead of producing NaN/Inf or failing.
pub fn supply_ratio(foreign_acc: &[i64], inst_acc: &[i64], market_cap: &[i64]) -> Vec<f64> {
    debug_assert_eq!(foreign_acc.len(), inst_acc.len());
    debug_assert_eq!(foreign_acc.len(), market_cap.len());

    foreign_acc
        .iter()
        .zip(inst_acc)
        .zip(market_cap)
        .map(|((foreign, inst), cap)| {
            if *cap == 0 {
                0.0
            } else {
                (foreign + inst) as f64 / *cap as f64
            }
        })
        .collect()
}
