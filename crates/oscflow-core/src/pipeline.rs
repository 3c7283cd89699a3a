//! End-to-end oscillator derivation.
//!
//! Mirrors the source spreadsheet sheet by sheet:
//!
//! 1. rolling net-buy accumulation per investor class (window days)
//! 2. supply ratio = (foreign + institutional) / market cap
//! 3. fast/slow EMAs of the supply ratio
//! 4. MACD = fast EMA - slow EMA
//! 5. signal = EMA(MACD, signal period)
//! 6. oscillator = MACD - signal
//! 7. market cap rescaled to trillions
//!
//! The pipeline is a pure function of the input series and its
//! configuration: no hidden state, re-entrant, bit-identical on repeat runs.

use crate::ema::ema;
use crate::ratio::supply_ratio;
use crate::rolling::rolling_sum;
use crate::{FlowSeries, OscillatorConfig, OscillatorRow, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorPipeline {
    config: OscillatorConfig,
}

impl OscillatorPipeline {
    pub const fn new(config: OscillatorConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &OscillatorConfig {
        &self.config
    }

    /// Derive one row per input flow. An empty series yields an empty vec.
    pub fn compute(&self, series: &FlowSeries) -> Vec<OscillatorRow> {
        self.derive(series, 0)
    }

    /// Derive rows from `warmup` onward.
    ///
    /// The rolling accumulation still runs over the full history, so early
    /// windows in the displayed range stay exact, but the EMA chain restarts
    /// at index `warmup`. `warmup == 0` is equivalent to [`Self::compute`].
    pub fn compute_with_warmup(
        &self,
        series: &FlowSeries,
        warmup: usize,
    ) -> Result<Vec<OscillatorRow>, ValidationError> {
        if !series.is_empty() && warmup >= series.len() {
            return Err(ValidationError::WarmupOutOfRange {
                warmup,
                len: series.len(),
            });
        }

        Ok(self.derive(series, warmup))
    }

    fn derive(&self, series: &FlowSeries, warmup: usize) -> Vec<OscillatorRow> {
        let points = series.points();
        if points.is_empty() {
            return Vec::new();
        }

        let foreign: Vec<i64> = points.iter().map(|p| p.foreign_net).collect();
        let inst: Vec<i64> = points.iter().map(|p| p.inst_net).collect();
        let caps: Vec<i64> = points.iter().map(|p| p.market_cap).collect();

        let foreign_acc = rolling_sum(&foreign, self.config.window);
        let inst_acc = rolling_sum(&inst, self.config.window);
        let ratios = supply_ratio(&foreign_acc, &inst_acc, &caps);

        let display = &ratios[warmup..];
        let ema_fast = ema(display, self.config.fast);
        let ema_slow = ema(display, self.config.slow);
        let macd: Vec<f64> = ema_fast
            .iter()
            .zip(&ema_slow)
            .map(|(fast, slow)| fast - slow)
            .collect();
        let signal = ema(&macd, self.config.signal_period);

        (0..display.len())
            .map(|i| {
                let idx = warmup + i;
                OscillatorRow {
                    date: points[idx].date,
                    foreign_5d: foreign_acc[idx],
                    inst_5d: inst_acc[idx],
                    supply_ratio: display[i],
                    ema12: ema_fast[i],
                    ema26: ema_slow[i],
                    macd: macd[i],
                    signal: signal[i],
                    oscillator: macd[i] - signal[i],
                    mcap_trillion: points[idx].market_cap as f64 / self.config.cap_divisor,
                }
            })
            .collect()
    }
}

impl Default for OscillatorPipeline {
    fn default() -> Self {
        Self::new(OscillatorConfig::default())
    }
}
