//! Comparison against externally supplied expected values.
//!
//! The reference table maps trading dates to the two externally visible
//! metrics: market cap in trillions and the oscillator as a percentage.
//! Comparison is keyed strictly by date; rows without a table entry are
//! skipped, and mismatches are recorded in the report rather than raised.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use oscflow_core::{OscillatorRow, TradingDate};

/// Expected values for one date, as published by the reference source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectedRow {
    pub mcap_trillion: f64,
    pub oscillator_percent: f64,
}

/// Read-only reference table supplied by the caller.
pub type ExpectedValueTable = BTreeMap<TradingDate, ExpectedRow>;

/// Absolute tolerances for the reference comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// Trillion-KRW units.
    pub mcap_trillion: f64,
    /// Percentage points of `oscillator * 100`.
    pub oscillator_percent: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            mcap_trillion: 0.01,
            oscillator_percent: 0.001,
        }
    }
}

/// Expected/actual pair for one metric on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricComparison {
    pub expected: f64,
    pub actual: f64,
    pub diff: f64,
    pub matched: bool,
}

impl MetricComparison {
    fn new(expected: f64, actual: f64, tolerance: f64) -> Self {
        let diff = (actual - expected).abs();
        Self {
            expected,
            actual,
            diff,
            matched: diff < tolerance,
        }
    }
}

/// Verdict for one compared date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DateComparison {
    pub date: TradingDate,
    pub mcap_trillion: MetricComparison,
    pub oscillator_percent: MetricComparison,
    pub passed: bool,
}

/// Aggregate counts over every compared date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceSummary {
    pub total_compared: usize,
    pub mcap_matches: usize,
    pub osc_matches: usize,
    pub all_matched: bool,
}

/// Full comparison report. Always complete; mismatches never abort the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceReport {
    pub tolerances: Tolerances,
    pub comparisons: Vec<DateComparison>,
    pub summary: ReferenceSummary,
}

impl ReferenceReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Compare computed rows against the reference table.
///
/// Only dates present in both the rows and the table participate; every
/// other date is skipped, not failed.
pub fn compare(
    rows: &[OscillatorRow],
    expected: &ExpectedValueTable,
    tolerances: Tolerances,
) -> ReferenceReport {
    let mut comparisons = Vec::new();
    let mut mcap_matches = 0;
    let mut osc_matches = 0;

    for row in rows {
        let Some(reference) = expected.get(&row.date) else {
            continue;
        };

        let mcap = MetricComparison::new(
            reference.mcap_trillion,
            row.mcap_trillion,
            tolerances.mcap_trillion,
        );
        let osc = MetricComparison::new(
            reference.oscillator_percent,
            row.oscillator * 100.0,
            tolerances.oscillator_percent,
        );

        if mcap.matched {
            mcap_matches += 1;
        }
        if osc.matched {
            osc_matches += 1;
        }

        comparisons.push(DateComparison {
            date: row.date,
            mcap_trillion: mcap,
            oscillator_percent: osc,
            passed: mcap.matched && osc.matched,
        });
    }

    let total_compared = comparisons.len();
    let summary = ReferenceSummary {
        total_compared,
        mcap_matches,
        osc_matches,
        all_matched: comparisons.iter().all(|c| c.passed),
    };

    ReferenceReport {
        tolerances,
        comparisons,
        summary,
    }
}
