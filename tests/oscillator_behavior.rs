//! Behavior tests for the oscillator pipeline.
//!
//! These verify the published laws of the derivation: rolling window
//! semantics, EMA seeding and recurrence, the MACD/oscillator identities,
//! the zero-cap saturation policy, and idempotence.

use oscflow_core::signals::{analyze, CrossSignal};
use oscflow_core::{DailyFlow, FlowSeries, OscillatorConfig, OscillatorPipeline};
use oscflow_tests::{date, fixed_ten_day_series, sine_series, FOREIGN_BUYS, INST_BUYS};

// =============================================================================
// Fixture sanity
// =============================================================================

#[test]
fn fixed_scenario_spans_ten_valid_trading_days() {
    // Ten consecutive calendar days, each a parseable compact date; the
    // two-digit day matters for day ten.
    let series = fixed_ten_day_series();

    assert_eq!(series.len(), 10);
    let points = series.points();
    assert_eq!(points[0].date, date("20240101"));
    assert_eq!(points[8].date, date("20240109"));
    assert_eq!(points[9].date, date("20240110"));
}

// =============================================================================
// Rolling window law
// =============================================================================

#[test]
fn rolling_sums_use_partial_windows_before_the_fifth_day() {
    // Given: the fixed ten-day series
    let rows = OscillatorPipeline::default().compute(&fixed_ten_day_series());

    // Then: before the window fills, all available points are summed
    for i in 0..4 {
        let expected: i64 = FOREIGN_BUYS[..=i].iter().sum();
        assert_eq!(rows[i].foreign_5d, expected, "foreign_5d[{i}]");
    }
    assert_eq!(rows[0].foreign_5d, 5_000_000_000);

    // And: from day five on, exactly five trailing points are summed
    for i in 4..10 {
        let expected: i64 = FOREIGN_BUYS[i - 4..=i].iter().sum();
        assert_eq!(rows[i].foreign_5d, expected, "foreign_5d[{i}]");
        let expected_inst: i64 = INST_BUYS[i - 4..=i].iter().sum();
        assert_eq!(rows[i].inst_5d, expected_inst, "inst_5d[{i}]");
    }
    assert_eq!(rows[4].foreign_5d, 13_000_000_000);
}

// =============================================================================
// Supply ratio and EMA seeding
// =============================================================================

#[test]
fn first_day_ratio_seeds_every_ema_stage() {
    let rows = OscillatorPipeline::default().compute(&fixed_ten_day_series());

    // (5e9 + 2e9) / 1e14
    assert_eq!(rows[0].supply_ratio, 7e-5);
    assert_eq!(rows[0].ema12, 7e-5);
    assert_eq!(rows[0].ema26, 7e-5);
    // MACD seeds the signal line, so the first oscillator value is zero.
    assert_eq!(rows[0].macd, 0.0);
    assert_eq!(rows[0].oscillator, 0.0);
}

#[test]
fn ema_recurrence_law_holds_for_every_row() {
    let config = OscillatorConfig::default();
    let rows = OscillatorPipeline::new(config).compute(&fixed_ten_day_series());

    let alpha_fast = config.alpha_fast();
    let alpha_slow = config.alpha_slow();

    let mut fast = rows[0].supply_ratio;
    let mut slow = rows[0].supply_ratio;
    for (i, row) in rows.iter().enumerate().skip(1) {
        fast = alpha_fast * row.supply_ratio + (1.0 - alpha_fast) * fast;
        slow = alpha_slow * row.supply_ratio + (1.0 - alpha_slow) * slow;
        assert!((row.ema12 - fast).abs() < 1e-15, "ema12[{i}]");
        assert!((row.ema26 - slow).abs() < 1e-15, "ema26[{i}]");
    }
}

#[test]
fn signal_line_is_the_ema_of_macd() {
    let config = OscillatorConfig::default();
    let rows = OscillatorPipeline::new(config).compute(&sine_series(30));

    let macd: Vec<f64> = rows.iter().map(|r| r.macd).collect();
    let expected = oscflow_core::ema::ema(&macd, config.signal_period);

    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.signal, expected[i], "signal[{i}]");
    }
}

// =============================================================================
// Derivation identities
// =============================================================================

#[test]
fn macd_and_oscillator_identities_hold_exactly() {
    let rows = OscillatorPipeline::default().compute(&sine_series(50));

    for row in &rows {
        assert_eq!(row.macd, row.ema12 - row.ema26, "macd at {}", row.date);
        assert_eq!(
            row.oscillator,
            row.macd - row.signal,
            "oscillator at {}",
            row.date
        );
    }
}

// =============================================================================
// Edge cases and policies
// =============================================================================

#[test]
fn zero_market_cap_saturates_the_ratio_to_zero() {
    let series = FlowSeries::new(vec![
        DailyFlow::new(date("20240101"), 0, 100, 50).expect("valid flow")
    ])
    .expect("valid series");

    let rows = OscillatorPipeline::default().compute(&series);

    assert_eq!(rows[0].supply_ratio, 0.0);
    assert!(rows[0].supply_ratio.is_finite());
}

#[test]
fn empty_series_yields_empty_rows() {
    let rows = OscillatorPipeline::default().compute(&FlowSeries::empty());
    assert!(rows.is_empty());
}

#[test]
fn repeat_runs_are_bit_identical() {
    let pipeline = OscillatorPipeline::default();
    let series = sine_series(60);

    let first = pipeline.compute(&series);
    let second = pipeline.compute(&series);

    assert_eq!(first, second);
}

#[test]
fn output_aligns_one_to_one_with_input_dates() {
    let series = fixed_ten_day_series();
    let rows = OscillatorPipeline::default().compute(&series);

    assert_eq!(rows.len(), series.len());
    for (point, row) in series.iter().zip(&rows) {
        assert_eq!(point.date, row.date);
    }
}

// =============================================================================
// Signal analysis
// =============================================================================

#[test]
fn zero_crosses_are_classified_against_the_previous_row() {
    let rows = OscillatorPipeline::default().compute(&sine_series(50));
    let signals = analyze(&rows);

    assert_eq!(signals[0].cross_signal, None);
    for i in 1..rows.len() {
        let prev = rows[i - 1].oscillator;
        let curr = rows[i].oscillator;

        let expected = if prev <= 0.0 && curr > 0.0 {
            Some(CrossSignal::GoldenCross)
        } else if prev >= 0.0 && curr < 0.0 {
            Some(CrossSignal::DeadCross)
        } else {
            None
        };
        assert_eq!(signals[i].cross_signal, expected, "cross at index {i}");
    }

    // The sine fixture oscillates, so both cross kinds must occur.
    assert!(signals
        .iter()
        .any(|s| s.cross_signal == Some(CrossSignal::GoldenCross)));
    assert!(signals
        .iter()
        .any(|s| s.cross_signal == Some(CrossSignal::DeadCross)));
}
