use serde::{Deserialize, Serialize};

use crate::{TradingDate, ValidationError};

/// One trading day of raw supply-demand input: market capitalization plus
/// net buying by investor class, all in KRW. Amounts stay integral so the
/// rolling accumulation is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFlow {
    pub date: TradingDate,
    pub market_cap: i64,
    pub foreign_net: i64,
    pub inst_net: i64,
}

impl DailyFlow {
    pub fn new(
        date: TradingDate,
        market_cap: i64,
        foreign_net: i64,
        inst_net: i64,
    ) -> Result<Self, ValidationError> {
        if market_cap < 0 {
            return Err(ValidationError::NegativeMarketCap { value: market_cap });
        }

        Ok(Self {
            date,
            market_cap,
            foreign_net,
            inst_net,
        })
    }
}

/// Chronologically ordered series of daily flows. Only actual trading days
/// appear; the series never assumes a dense calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DailyFlow>", into = "Vec<DailyFlow>")]
pub struct FlowSeries(Vec<DailyFlow>);

impl FlowSeries {
    /// Wrap a vector of daily flows, enforcing strictly increasing dates.
    pub fn new(points: Vec<DailyFlow>) -> Result<Self, ValidationError> {
        for pair in points.windows(2) {
            if pair[1].date == pair[0].date {
                return Err(ValidationError::DuplicateDate { date: pair[1].date });
            }
            if pair[1].date < pair[0].date {
                return Err(ValidationError::OutOfOrderDate {
                    prev: pair[0].date,
                    next: pair[1].date,
                });
            }
        }

        Ok(Self(points))
    }

    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn points(&self) -> &[DailyFlow] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyFlow> {
        self.0.iter()
    }
}

impl TryFrom<Vec<DailyFlow>> for FlowSeries {
    type Error = ValidationError;

    fn try_from(value: Vec<DailyFlow>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FlowSeries> for Vec<DailyFlow> {
    fn from(value: FlowSeries) -> Self {
        value.0
    }
}

impl<'a> IntoIterator for &'a FlowSeries {
    type Item = &'a DailyFlow;
    type IntoIter = std::slice::Iter<'a, DailyFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Per-date pipeline output. One row per input flow, same date alignment.
///
/// The `ema12`/`ema26` names follow the source spreadsheet sheets; the actual
/// periods come from [`crate::OscillatorConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorRow {
    pub date: TradingDate,
    pub foreign_5d: i64,
    pub inst_5d: i64,
    pub supply_ratio: f64,
    pub ema12: f64,
    pub ema26: f64,
    pub macd: f64,
    pub signal: f64,
    pub oscillator: f64,
    pub mcap_trillion: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> TradingDate {
        TradingDate::parse(value).expect("must parse")
    }

    fn flow(day: &str) -> DailyFlow {
        DailyFlow::new(date(day), 1_000_000_000_000, 100, 50).expect("valid flow")
    }

    #[test]
    fn accepts_increasing_dates() {
        let series = FlowSeries::new(vec![flow("20240101"), flow("20240102"), flow("20240105")])
            .expect("must build");
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn rejects_duplicate_date() {
        let err = FlowSeries::new(vec![flow("20240101"), flow("20240101")]).expect_err("must fail");
        assert!(matches!(err, ValidationError::DuplicateDate { .. }));
    }

    #[test]
    fn rejects_out_of_order_dates() {
        let err = FlowSeries::new(vec![flow("20240105"), flow("20240102")]).expect_err("must fail");
        assert!(matches!(err, ValidationError::OutOfOrderDate { .. }));
    }

    #[test]
    fn rejects_negative_market_cap() {
        let err =
            DailyFlow::new(date("20240101"), -1_000_000_000_000, 100, 50).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::NegativeMarketCap {
                value: -1_000_000_000_000
            }
        ));
    }

    #[test]
    fn series_round_trips_through_json() {
        let series =
            FlowSeries::new(vec![flow("20240101"), flow("20240102")]).expect("must build");
        let json = serde_json::to_string(&series).expect("must serialize");
        let parsed: FlowSeries = serde_json::from_str(&json).expect("must deserialize");
        assert_eq!(parsed, series);
    }

    #[test]
    fn unordered_series_fails_deserialization() {
        let json = r#"[
            {"date":"20240105","market_cap":1,"foreign_net":0,"inst_net":0},
            {"date":"20240102","market_cap":1,"foreign_net":0,"inst_net":0}
        ]"#;
        let result: Result<FlowSeries, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
