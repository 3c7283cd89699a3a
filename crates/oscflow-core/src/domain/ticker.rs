use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const TICKER_LEN: usize = 6;

/// Validated KRX issue code, e.g. "005930".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Parse a six-digit issue code, trimming surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }

        let len = trimmed.chars().count();
        if len != TICKER_LEN {
            return Err(ValidationError::TickerLength {
                len,
                expected: TICKER_LEN,
            });
        }

        for (index, ch) in trimmed.chars().enumerate() {
            if !ch.is_ascii_digit() {
                return Err(ValidationError::TickerInvalidChar { ch, index });
            }
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Ticker {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Ticker {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Ticker> for String {
    fn from(value: Ticker) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_issue_code() {
        let ticker = Ticker::parse(" 005930 ").expect("must parse");
        assert_eq!(ticker.as_str(), "005930");
    }

    #[test]
    fn rejects_empty_ticker() {
        let err = Ticker::parse("   ").expect_err("must fail");
        assert_eq!(err, ValidationError::EmptyTicker);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = Ticker::parse("5930").expect_err("must fail");
        assert!(matches!(err, ValidationError::TickerLength { len: 4, .. }));
    }

    #[test]
    fn rejects_non_digit() {
        let err = Ticker::parse("00593A").expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::TickerInvalidChar { ch: 'A', index: 5 }
        ));
    }
}
