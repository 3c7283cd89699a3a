//! Core contracts for oscflow.
//!
//! This crate contains:
//! - Canonical domain models and validation (ticker, trading date, flows)
//! - The supply-demand oscillator pipeline and its indicator math
//! - Zero-cross signal classification
//! - The market data provider contract, series assembly, and a fixture
//!   adapter

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ema;
pub mod error;
pub mod pipeline;
pub mod provider;
pub mod ratio;
pub mod rolling;
pub mod signals;

pub use adapters::FixtureProvider;
pub use config::OscillatorConfig;
pub use domain::{DailyFlow, FlowSeries, OscillatorRow, Ticker, TradingDate};
pub use error::ValidationError;
pub use pipeline::OscillatorPipeline;
pub use provider::{
    assemble_flow_series, DailyClose, InvestorNetBuy, MarketDataProvider, ProviderError,
};
pub use signals::{analyze, CrossSignal, SignalAnalysis, Trend};
