// In crates/strategies/src/ma_crossover.rs

use crate::types::Crossovers;
use core_types::{Alignment, Error, Result};

/// Scans a short and a long simple moving average for crossovers.
///
/// Both series are laid out in their own index space (index `i` of a window-`w`
/// series is calendar day `i + w - 1`), so every comparison is made on a shared
/// calendar day via [`Alignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MACrossover {
    short: Alignment,
    long: Alignment,
}

impl MACrossover {
    /// Creates a scanner for the given window pair.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidWindow` if either window is zero.
    /// * `Error::WindowOrder` unless `short_window < long_window`; an equal or
    ///   inverted pair has no meaningful crossover.
    pub fn new(short_window: usize, long_window: usize) -> Result<Self> {
        for window in [short_window, long_window] {
            if window == 0 {
                return Err(Error::InvalidWindow { window, len: 0, min: 1 });
            }
        }
        if short_window >= long_window {
            return Err(Error::WindowOrder {
                short: short_window,
                long: long_window,
            });
        }

        Ok(Self {
            short: Alignment::new(short_window),
            long: Alignment::new(long_window),
        })
    }

    pub fn short_window(&self) -> usize {
        self.short.window()
    }

    pub fn long_window(&self) -> usize {
        self.long.window()
    }

    /// First short-series index examined by the scan.
    pub fn scan_start(&self) -> usize {
        self.short.window().max(self.long.window()) - 1
    }

    /// Records a buy where the short average goes from at-or-below the long one to
    /// strictly above it, and a sell for the mirror case.
    ///
    /// Positions where the long series has no value for the current or previous
    /// day are skipped.
    pub fn scan(&self, short_ma: &[f64], long_ma: &[f64]) -> Crossovers {
        let mut crossovers = Crossovers::new(self.short);
        let long_on = |day: usize| self.long.index(day).and_then(|j| long_ma.get(j).copied());

        // The scan start is at least 1 because the long window is at least 2.
        for i in self.scan_start()..short_ma.len() {
            let day = self.short.day(i);
            let (Some(prev_long), Some(curr_long)) = (long_on(day - 1), long_on(day)) else {
                continue;
            };
            let prev_short = short_ma[i - 1];
            let curr_short = short_ma[i];

            if prev_short <= prev_long && curr_short > curr_long {
                crossovers.buys.push(i);
            } else if prev_short >= prev_long && curr_short < curr_long {
                crossovers.sells.push(i);
            }
        }

        tracing::debug!(
            short_window = self.short.window(),
            long_window = self.long.window(),
            buys = crossovers.buys.len(),
            sells = crossovers.sells.len(),
            "Crossover scan complete."
        );

        crossovers
    }
}

/// Finds crossover indices (in short-series index space) between two moving averages.
///
/// Shorthand for `MACrossover::new(short_window, long_window)?.scan(short_ma, long_ma)`.
pub fn buy_sell(
    short_ma: &[f64],
    long_ma: &[f64],
    short_window: usize,
    long_window: usize,
) -> Result<Crossovers> {
    Ok(MACrossover::new(short_window, long_window)?.scan(short_ma, long_ma))
}
