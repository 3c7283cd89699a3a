use thiserror::Error;

use crate::domain::TradingDate;

/// Validation and contract errors exposed by `oscflow-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker must be exactly {expected} digits, got {len}")]
    TickerLength { len: usize, expected: usize },
    #[error("ticker contains non-digit character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },

    #[error("date must be compact yyyymmdd: '{value}'")]
    InvalidDate { value: String },

    #[error("series dates must be strictly increasing: {prev} then {next}")]
    OutOfOrderDate { prev: TradingDate, next: TradingDate },
    #[error("duplicate trading date {date}")]
    DuplicateDate { date: TradingDate },

    #[error("market cap must be non-negative, got {value}")]
    NegativeMarketCap { value: i64 },

    #[error("'{field}' must be at least 1")]
    InvalidPeriod { field: &'static str },
    #[error("cap divisor must be positive and finite")]
    InvalidCapDivisor,

    #[error("warmup count {warmup} out of range for series of length {len}")]
    WarmupOutOfRange { warmup: usize, len: usize },
}
