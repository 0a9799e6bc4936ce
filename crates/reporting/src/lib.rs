// In crates/reporting/src/lib.rs

//! File-facing collaborators of the analysis: price loading, table export and
//! chart rendering.

pub mod chart;
pub mod error;
pub mod export;
pub mod loader;

pub use chart::{render_chart, render_chart_svg};
pub use error::{Error, Result};
pub use export::{export_table, write_table};
pub use loader::{load_prices, read_prices};
