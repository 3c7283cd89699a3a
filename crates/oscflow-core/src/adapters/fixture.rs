use std::collections::{BTreeMap, HashMap};

use crate::provider::{DailyClose, InvestorNetBuy, MarketDataProvider, ProviderError};
use crate::{Ticker, TradingDate};

#[derive(Debug, Default, Clone)]
struct TickerFixture {
    shares_by_date: BTreeMap<TradingDate, i64>,
    closes: BTreeMap<TradingDate, i64>,
    net_buys: BTreeMap<TradingDate, (i64, i64)>,
}

/// Deterministic in-memory provider.
///
/// Backs the self-check scenario and the provider contract tests: the same
/// pipeline runs against fixture data here and against a live feed in a
/// real deployment, with no change to the math.
#[derive(Debug, Default, Clone)]
pub struct FixtureProvider {
    tickers: HashMap<Ticker, TickerFixture>,
}

impl FixtureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shares(mut self, ticker: &Ticker, date: TradingDate, shares: i64) -> Self {
        self.entry(ticker).shares_by_date.insert(date, shares);
        self
    }

    pub fn with_close(mut self, ticker: &Ticker, date: TradingDate, close: i64) -> Self {
        self.entry(ticker).closes.insert(date, close);
        self
    }

    pub fn with_net_buy(
        mut self,
        ticker: &Ticker,
        date: TradingDate,
        foreign_net: i64,
        inst_net: i64,
    ) -> Self {
        self.entry(ticker)
            .net_buys
            .insert(date, (foreign_net, inst_net));
        self
    }

    fn entry(&mut self, ticker: &Ticker) -> &mut TickerFixture {
        self.tickers.entry(ticker.clone()).or_default()
    }

    fn fixture(&self, ticker: &Ticker) -> Option<&TickerFixture> {
        self.tickers.get(ticker)
    }
}

impl MarketDataProvider for FixtureProvider {
    fn shares_outstanding(
        &self,
        ticker: &Ticker,
        reference: TradingDate,
    ) -> Result<i64, ProviderError> {
        self.fixture(ticker)
            .and_then(|f| f.shares_by_date.get(&reference).copied())
            .ok_or_else(|| ProviderError::NotFound {
                ticker: ticker.clone(),
                date: reference,
            })
    }

    fn daily_closes(
        &self,
        ticker: &Ticker,
        start: TradingDate,
        end: TradingDate,
    ) -> Result<Vec<DailyClose>, ProviderError> {
        let Some(fixture) = self.fixture(ticker) else {
            return Ok(Vec::new());
        };

        Ok(fixture
            .closes
            .range(start..=end)
            .map(|(&date, &close)| DailyClose { date, close })
            .collect())
    }

    fn investor_net_buys(
        &self,
        ticker: &Ticker,
        start: TradingDate,
        end: TradingDate,
    ) -> Result<Vec<InvestorNetBuy>, ProviderError> {
        let Some(fixture) = self.fixture(ticker) else {
            return Ok(Vec::new());
        };

        Ok(fixture
            .net_buys
            .range(start..=end)
            .map(|(&date, &(foreign_net, inst_net))| InvestorNetBuy {
                date,
                foreign_net,
                inst_net,
            })
            .collect())
    }
}
