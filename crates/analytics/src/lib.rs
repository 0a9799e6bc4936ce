// In crates/analytics/src/lib.rs

//! Indicator math over a price series: rolling aggregates and trend reading.

pub mod rolling;
pub mod trend;

pub use rolling::{moving_average, volatility};
pub use trend::{detect_trend, trend_strength};
