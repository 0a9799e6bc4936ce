// In crates/core-types/src/lib.rs

pub mod alignment;
pub mod error;
pub mod types;

// Re-export the most important types for easy access from other crates.
pub use alignment::Alignment;
pub use error::{Error, Result};
pub use types::{
    CrossoverEvent, CrossoverKind, MovingAverageSeries, PriceSeries, Signal, TrendClassification,
    TrendStrength, VolatilitySeries, WindowedSeries,
};
