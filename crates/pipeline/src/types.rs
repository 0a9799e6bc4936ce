// In crates/pipeline/src/types.rs

use core_types::{
    Error, MovingAverageSeries, PriceSeries, Result, Signal, TrendClassification, TrendStrength,
    VolatilitySeries,
};
use serde::{Deserialize, Serialize};
use strategies::Crossovers;
use strategies::signal::DEFAULT_MIN_VOLATILITY;

/// Parameters for one analysis run.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PipelineSettings {
    #[serde(default = "default_short_window")]
    pub short_window: usize,
    #[serde(default = "default_long_window")]
    pub long_window: usize,
    #[serde(default = "default_volatility_window")]
    pub volatility_window: usize,
    /// Signals are ignored while the latest volatility is below this floor.
    #[serde(default = "default_min_volatility")]
    pub min_volatility: f64,
}

fn default_short_window() -> usize { 5 }
fn default_long_window() -> usize { 10 }
fn default_volatility_window() -> usize { 5 }
fn default_min_volatility() -> f64 { DEFAULT_MIN_VOLATILITY }

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            short_window: default_short_window(),
            long_window: default_long_window(),
            volatility_window: default_volatility_window(),
            min_volatility: default_min_volatility(),
        }
    }
}

impl PipelineSettings {
    /// Checks the settings independently of any price series.
    pub fn validate(&self) -> Result<()> {
        if self.short_window == 0 {
            return Err(Error::InvalidWindow { window: 0, len: 0, min: 1 });
        }
        if self.short_window >= self.long_window {
            return Err(Error::WindowOrder {
                short: self.short_window,
                long: self.long_window,
            });
        }
        if self.volatility_window < 2 {
            return Err(Error::InvalidWindow {
                window: self.volatility_window,
                len: 0,
                min: 2,
            });
        }
        if !self.min_volatility.is_finite() || self.min_volatility < 0.0 {
            return Err(Error::InvalidParameters(format!(
                "min_volatility must be a non-negative number, got {}",
                self.min_volatility
            )));
        }
        Ok(())
    }

    /// Fewest prices for which every window fits.
    pub fn min_series_len(&self) -> usize {
        self.long_window.max(self.volatility_window)
    }
}

/// One line of the exported table. Moving-average cells are empty on days before
/// the window first fills.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableRow {
    #[serde(rename = "Day")]
    pub day: usize,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Short_MA")]
    pub short_ma: Option<f64>,
    #[serde(rename = "Long_MA")]
    pub long_ma: Option<f64>,
}

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub settings: PipelineSettings,
    pub prices: PriceSeries,
    pub short_ma: MovingAverageSeries,
    pub long_ma: MovingAverageSeries,
    pub volatility: VolatilitySeries,
    /// Direction of the short moving average.
    pub trend: TrendClassification,
    /// Strength of the last move of the short moving average.
    pub strength: TrendStrength,
    pub latest_volatility: Option<f64>,
    pub signal: Signal,
    pub crossovers: Crossovers,
}

impl AnalysisReport {
    /// Lays the price and both moving averages out by calendar day.
    pub fn rows(&self) -> Vec<TableRow> {
        self.prices
            .iter()
            .enumerate()
            .map(|(day, &price)| TableRow {
                day,
                price,
                short_ma: self.short_ma.value_on(day),
                long_ma: self.long_ma.value_on(day),
            })
            .collect()
    }
}
