mod date;
mod models;
mod ticker;

pub use date::TradingDate;
pub use models::{DailyFlow, FlowSeries, OscillatorRow};
pub use ticker::Ticker;
