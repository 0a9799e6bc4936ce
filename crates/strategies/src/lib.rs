// In crates/strategies/src/lib.rs (REPLACE ENTIRE FILE)

//! Signal generation on top of moving-average series.
//!
//! Two readers live here: the [`SignalDetector`](signal::SignalDetector), which turns the
//! latest short/long averages and a volatility reading into one instantaneous `Signal`,
//! and the [`MACrossover`](ma_crossover::MACrossover) scanner, which walks the whole
//! history and reports every crossing of the short average over the long one.

pub mod ma_crossover;
pub mod signal;
pub mod types;

pub use ma_crossover::{MACrossover, buy_sell};
pub use signal::{SignalDetector, signal};
pub use types::Crossovers;
