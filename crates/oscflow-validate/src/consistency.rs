//! Self-consistency check: recursive EMA vs library ewm.
//!
//! The same supply-ratio series is pushed through the EMA/MACD/signal/
//! oscillator chain twice, once with the recursive form already baked into
//! the rows and once with [`crate::ewm::ewm_mean`] in non-adjusted mode.
//! Any drift above tolerance means one of the two implementations slipped
//! into the adjusted form.

use serde::Serialize;

use oscflow_core::{OscillatorConfig, OscillatorRow};

use crate::ewm::ewm_mean;

/// Maximum acceptable per-point difference between the two formulations.
pub const SELF_CONSISTENCY_TOLERANCE: f64 = 1e-15;

/// Largest absolute disagreement observed for one derived metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricDrift {
    pub metric: &'static str,
    pub max_abs_diff: f64,
}

/// Outcome of a self-consistency run. Always complete; never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyReport {
    pub tolerance: f64,
    pub drifts: Vec<MetricDrift>,
    pub max_abs_diff: f64,
    pub passed: bool,
}

impl ConsistencyReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Recompute the EMA chain from the rows' supply ratios via the library
/// formulation and diff it against the rows point by point.
pub fn check(rows: &[OscillatorRow], config: &OscillatorConfig) -> ConsistencyReport {
    let ratios: Vec<f64> = rows.iter().map(|r| r.supply_ratio).collect();

    let ema_fast = ewm_mean(&ratios, config.alpha_fast(), false);
    let ema_slow = ewm_mean(&ratios, config.alpha_slow(), false);
    let macd: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(fast, slow)| fast - slow)
        .collect();
    let signal = ewm_mean(&macd, config.alpha_signal(), false);
    let oscillator: Vec<f64> = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();

    let drifts = vec![
        drift("ema12", rows, &ema_fast, |r| r.ema12),
        drift("ema26", rows, &ema_slow, |r| r.ema26),
        drift("macd", rows, &macd, |r| r.macd),
        drift("signal", rows, &signal, |r| r.signal),
        drift("oscillator", rows, &oscillator, |r| r.oscillator),
    ];

    let max_abs_diff = drifts
        .iter()
        .map(|d| d.max_abs_diff)
        .fold(0.0_f64, f64::max);

    ConsistencyReport {
        tolerance: SELF_CONSISTENCY_TOLERANCE,
        max_abs_diff,
        passed: max_abs_diff < SELF_CONSISTENCY_TOLERANCE,
        drifts,
    }
}

fn drift(
    metric: &'static str,
    rows: &[OscillatorRow],
    recomputed: &[f64],
    actual: impl Fn(&OscillatorRow) -> f64,
) -> MetricDrift {
    let max_abs_diff = rows
        .iter()
        .zip(recomputed)
        .map(|(row, value)| (actual(row) - value).abs())
        .fold(0.0_f64, f64::max);

    MetricDrift {
        metric,
        max_abs_diff,
    }
}
