// In crates/core-types/src/types.rs

use std::fmt;
use std::ops::Deref;

use crate::Alignment;

/// Daily prices, indexed by calendar day starting at 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries(Vec<f64>);

impl PriceSeries {
    pub fn new(prices: Vec<f64>) -> Self {
        Self(prices)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for PriceSeries {
    fn from(prices: Vec<f64>) -> Self {
        Self(prices)
    }
}

impl Deref for PriceSeries {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

/// The output of a rolling-window aggregation. It remembers the window it was
/// computed with so its values can always be placed on the calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedSeries {
    window: usize,
    values: Vec<f64>,
}

/// Rolling means, one per full window.
pub type MovingAverageSeries = WindowedSeries;
/// Rolling sample standard deviations, one per full window.
pub type VolatilitySeries = WindowedSeries;

impl WindowedSeries {
    pub fn new(window: usize, values: Vec<f64>) -> Self {
        Self { window, values }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn alignment(&self) -> Alignment {
        Alignment::new(self.window)
    }

    /// The value describing calendar day `day`, if the series covers it.
    pub fn value_on(&self, day: usize) -> Option<f64> {
        self.alignment()
            .index(day)
            .and_then(|index| self.values.get(index).copied())
    }

    /// Iterates `(calendar day, value)` pairs.
    pub fn by_day(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        let alignment = self.alignment();
        self.values
            .iter()
            .enumerate()
            .map(move |(index, value)| (alignment.day(index), *value))
    }
}

/// Direction of a moving average over its last two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendClassification {
    Upward,
    Downward,
    Sideways,
    InsufficientData,
}

impl fmt::Display for TrendClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Upward => "Upward Trend",
            Self::Downward => "Downward Trend",
            Self::Sideways => "Sideways",
            Self::InsufficientData => "Not enough data to determine trend",
        };
        f.write_str(label)
    }
}

/// Size of the last percentage move of a moving average, bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendStrength {
    Weak,
    Moderate,
    Strong,
    InsufficientData,
}

impl fmt::Display for TrendStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Weak => "Weak Trend",
            Self::Moderate => "Moderate Trend",
            Self::Strong => "Strong Trend",
            Self::InsufficientData => "Not enough data to determine trend strength",
        };
        f.write_str(label)
    }
}

/// An instantaneous trading signal derived from the latest indicator readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
    LowVolatilityIgnore,
    InsufficientData,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Buy => "BUY Signal",
            Self::Sell => "SELL Signal",
            Self::Hold => "HOLD",
            Self::LowVolatilityIgnore => "Low Volatility - Signal Ignore",
            Self::InsufficientData => "Not enough data for signal",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossoverKind {
    /// The short average crossed above the long one.
    Buy,
    /// The short average crossed below the long one.
    Sell,
}

/// A single crossover, located both in short-MA index space and on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossoverEvent {
    pub index: usize,
    pub day: usize,
    pub kind: CrossoverKind,
}
