use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Immutable parameter bundle for the oscillator pipeline.
///
/// The defaults reproduce the source spreadsheet: a 5-trading-day rolling
/// window, 12/26-day EMAs, a 9-day signal EMA, and KRW-to-trillion scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorConfig {
    pub window: usize,
    pub fast: usize,
    pub slow: usize,
    pub signal_period: usize,
    pub cap_divisor: f64,
}

impl OscillatorConfig {
    pub const DEFAULT_WINDOW: usize = 5;
    pub const DEFAULT_FAST: usize = 12;
    pub const DEFAULT_SLOW: usize = 26;
    pub const DEFAULT_SIGNAL_PERIOD: usize = 9;
    pub const DEFAULT_CAP_DIVISOR: f64 = 1e12;

    pub fn new(
        window: usize,
        fast: usize,
        slow: usize,
        signal_period: usize,
        cap_divisor: f64,
    ) -> Result<Self, ValidationError> {
        if window == 0 {
            return Err(ValidationError::InvalidPeriod { field: "window" });
        }
        if fast == 0 {
            return Err(ValidationError::InvalidPeriod { field: "fast" });
        }
        if slow == 0 {
            return Err(ValidationError::InvalidPeriod { field: "slow" });
        }
        if signal_period == 0 {
            return Err(ValidationError::InvalidPeriod {
                field: "signal_period",
            });
        }
        if !(cap_divisor.is_finite() && cap_divisor > 0.0) {
            return Err(ValidationError::InvalidCapDivisor);
        }

        Ok(Self {
            window,
            fast,
            slow,
            signal_period,
            cap_divisor,
        })
    }

    /// Smoothing factor of the fast EMA, `2 / (fast + 1)`.
    pub fn alpha_fast(&self) -> f64 {
        alpha(self.fast)
    }

    /// Smoothing factor of the slow EMA, `2 / (slow + 1)`.
    pub fn alpha_slow(&self) -> f64 {
        alpha(self.slow)
    }

    /// Smoothing factor of the signal EMA, `2 / (signal_period + 1)`.
    pub fn alpha_signal(&self) -> f64 {
        alpha(self.signal_period)
    }
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            window: Self::DEFAULT_WINDOW,
            fast: Self::DEFAULT_FAST,
            slow: Self::DEFAULT_SLOW,
            signal_period: Self::DEFAULT_SIGNAL_PERIOD,
            cap_divisor: Self::DEFAULT_CAP_DIVISOR,
        }
    }
}

pub(crate) fn alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}
