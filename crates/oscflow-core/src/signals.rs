//! Zero-cross and trend classification over computed oscillator rows.

use serde::{Deserialize, Serialize};

use crate::{OscillatorRow, TradingDate};

/// Broad market posture inferred from oscillator and MACD signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

/// Oscillator zero-cross events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossSignal {
    /// Oscillator turned from non-positive to positive: MACD broke above
    /// its signal line.
    GoldenCross,
    /// Oscillator turned from non-negative to negative: MACD broke below
    /// its signal line.
    DeadCross,
}

/// Per-date trade signal derived from one oscillator row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalAnalysis {
    pub date: TradingDate,
    pub mcap_trillion: f64,
    pub oscillator: f64,
    pub macd: f64,
    pub signal: f64,
    pub trend: Trend,
    pub cross_signal: Option<CrossSignal>,
}

/// Classify every row. The first row can never cross; crosses compare each
/// oscillator value against its predecessor only.
pub fn analyze(rows: &[OscillatorRow]) -> Vec<SignalAnalysis> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let cross_signal = if i > 0 {
                let prev = rows[i - 1].oscillator;
                if prev <= 0.0 && row.oscillator > 0.0 {
                    Some(CrossSignal::GoldenCross)
                } else if prev >= 0.0 && row.oscillator < 0.0 {
                    Some(CrossSignal::DeadCross)
                } else {
                    None
                }
            } else {
                None
            };

            let trend = if row.oscillator > 0.0 && row.macd > 0.0 {
                Trend::Bullish
            } else if row.oscillator < 0.0 && row.macd < 0.0 {
                Trend::Bearish
            } else {
                Trend::Neutral
            };

            SignalAnalysis {
                date: row.date,
                mcap_trillion: row.mcap_trillion,
                oscillator: row.oscillator,
                macd: row.macd,
                signal: row.signal,
                trend,
                cross_signal,
            }
        })
        .collect()
}
