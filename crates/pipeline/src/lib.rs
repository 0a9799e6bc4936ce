// In crates/pipeline/src/lib.rs

pub mod types;

use analytics::{detect_trend, moving_average, trend_strength, volatility};
use core_types::{Error, PriceSeries, Result, Signal};
use strategies::{MACrossover, SignalDetector};
use tracing::{debug, info, warn};

pub use types::{AnalysisReport, PipelineSettings, TableRow};

/// Runs the whole indicator pipeline over an in-memory price series.
///
/// Prices flow one way: rolling aggregates first, then the trend, signal and
/// crossover readers over those aggregates. Any failure aborts the run.
#[derive(Debug, Clone)]
pub struct Pipeline {
    settings: PipelineSettings,
    detector: SignalDetector,
    crossover: MACrossover,
}

impl Pipeline {
    /// Validates `settings` and builds the readers they describe.
    pub fn new(settings: PipelineSettings) -> Result<Self> {
        settings.validate()?;

        Ok(Self {
            settings,
            detector: SignalDetector::new(settings.min_volatility),
            crossover: MACrossover::new(settings.short_window, settings.long_window)?,
        })
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    pub fn run(&self, prices: &PriceSeries) -> Result<AnalysisReport> {
        let settings = &self.settings;
        info!(
            days = prices.len(),
            short_window = settings.short_window,
            long_window = settings.long_window,
            volatility_window = settings.volatility_window,
            "Running trend analysis."
        );

        if prices.len() < settings.min_series_len() {
            return Err(Error::InvalidWindow {
                window: settings.min_series_len(),
                len: prices.len(),
                min: 1,
            });
        }

        // --- 1. Rolling aggregates ---
        let short_ma = moving_average(prices, settings.short_window)?;
        let long_ma = moving_average(prices, settings.long_window)?;
        let volatility = volatility(prices, settings.volatility_window)?;
        debug!(
            short_ma = short_ma.len(),
            long_ma = long_ma.len(),
            volatility = volatility.len(),
            "Rolling aggregates computed."
        );

        // --- 2. Trend of the short average ---
        let trend = detect_trend(short_ma.values());
        let strength = trend_strength(short_ma.values())?;

        // --- 3. Instantaneous signal, gated on the latest volatility reading ---
        let latest_volatility = volatility.last();
        let signal = match latest_volatility {
            Some(reading) => self.detector.assess(short_ma.values(), long_ma.values(), reading),
            None => Signal::InsufficientData,
        };
        if signal == Signal::LowVolatilityIgnore {
            warn!(
                ?latest_volatility,
                min_volatility = self.detector.min_volatility(),
                "Signal ignored due to low volatility."
            );
        }

        // --- 4. Crossover history ---
        let crossovers = self.crossover.scan(short_ma.values(), long_ma.values());

        info!(
            %trend,
            %strength,
            %signal,
            buys = crossovers.buys.len(),
            sells = crossovers.sells.len(),
            "Trend analysis complete."
        );

        Ok(AnalysisReport {
            settings: *settings,
            prices: prices.clone(),
            short_ma,
            long_ma,
            volatility,
            trend,
            strength,
            latest_volatility,
            signal,
            crossovers,
        })
    }
}
