use core_types::Signal;

/// Volatility floor used when none is configured.
pub const DEFAULT_MIN_VOLATILITY: f64 = 1.0;

/// Produces a single signal from the most recent indicator readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalDetector {
    min_volatility: f64,
}

impl Default for SignalDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_VOLATILITY)
    }
}

impl SignalDetector {
    pub fn new(min_volatility: f64) -> Self {
        Self { min_volatility }
    }

    pub fn min_volatility(&self) -> f64 {
        self.min_volatility
    }

    /// See [`signal`].
    pub fn assess(&self, short_ma: &[f64], long_ma: &[f64], latest_volatility: f64) -> Signal {
        signal(short_ma, long_ma, latest_volatility, self.min_volatility)
    }
}

/// Compares the latest short and long moving averages, gated on volatility.
///
/// The gate is a single reading: only `latest_volatility` is checked against
/// `min_volatility`, not a window of past readings.
pub fn signal(
    short_ma: &[f64],
    long_ma: &[f64],
    latest_volatility: f64,
    min_volatility: f64,
) -> Signal {
    let (Some(short), Some(long)) = (short_ma.last(), long_ma.last()) else {
        return Signal::InsufficientData;
    };

    if latest_volatility < min_volatility {
        tracing::debug!(latest_volatility, min_volatility, "Volatility below floor, ignoring signal.");
        return Signal::LowVolatilityIgnore;
    }

    if short > long {
        Signal::Buy
    } else if short < long {
        Signal::Sell
    } else {
        Signal::Hold
    }
}
