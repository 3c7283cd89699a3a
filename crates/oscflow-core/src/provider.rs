//! Market data provider contract and series assembly.
//!
//! The core never performs I/O itself: a [`MarketDataProvider`] hands over
//! already-materialized daily records, and [`assemble_flow_series`] joins
//! them into the validated [`FlowSeries`] the pipeline consumes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DailyFlow, FlowSeries, Ticker, TradingDate, ValidationError};

/// Daily closing price in KRW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyClose {
    pub date: TradingDate,
    pub close: i64,
}

/// Daily net buying by investor class, in KRW. Positive means net buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestorNetBuy {
    pub date: TradingDate,
    pub foreign_net: i64,
    pub inst_net: i64,
}

/// Failures surfaced by a market data provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Reference data missing for the requested ticker/date. Fatal to the
    /// computation; the core never retries it.
    #[error("no record for ticker '{ticker}' as of {date}")]
    NotFound { ticker: Ticker, date: TradingDate },

    /// Transient provider failure. Retrying is the provider's concern, not
    /// the core's.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// The merged feed violated a series invariant.
    #[error(transparent)]
    Series(#[from] ValidationError),
}

impl ProviderError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Provider contract for daily market data.
///
/// Feeds may omit non-trading days; callers must not assume a dense
/// calendar. Shares outstanding are looked up as of a single reference date
/// and fail with [`ProviderError::NotFound`] when no record exists.
pub trait MarketDataProvider {
    fn shares_outstanding(
        &self,
        ticker: &Ticker,
        reference: TradingDate,
    ) -> Result<i64, ProviderError>;

    fn daily_closes(
        &self,
        ticker: &Ticker,
        start: TradingDate,
        end: TradingDate,
    ) -> Result<Vec<DailyClose>, ProviderError>;

    fn investor_net_buys(
        &self,
        ticker: &Ticker,
        start: TradingDate,
        end: TradingDate,
    ) -> Result<Vec<InvestorNetBuy>, ProviderError>;
}

/// Fetch and merge provider feeds into a [`FlowSeries`].
///
/// Shares outstanding are taken as of `end`. Close prices and net buys are
/// inner-joined on date: a date present in only one feed is dropped, not
/// zeroed and not an error. Market cap is `close * shares_outstanding`.
pub fn assemble_flow_series(
    provider: &dyn MarketDataProvider,
    ticker: &Ticker,
    start: TradingDate,
    end: TradingDate,
) -> Result<FlowSeries, ProviderError> {
    let shares = provider.shares_outstanding(ticker, end)?;
    let closes = provider.daily_closes(ticker, start, end)?;
    let net_buys = provider.investor_net_buys(ticker, start, end)?;

    let close_by_date: BTreeMap<TradingDate, i64> =
        closes.iter().map(|c| (c.date, c.close)).collect();

    let mut points = Vec::with_capacity(net_buys.len());
    for net_buy in &net_buys {
        let Some(close) = close_by_date.get(&net_buy.date) else {
            continue;
        };
        points.push(DailyFlow::new(
            net_buy.date,
            close * shares,
            net_buy.foreign_net,
            net_buy.inst_net,
        )?);
    }

    points.sort_by_key(|p| p.date);
    Ok(FlowSeries::new(points)?)
}
