// In crates/core-types/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid window {window} for a series of length {len} (minimum window is {min})")]
    InvalidWindow { window: usize, len: usize, min: usize },

    #[error("Short window ({short}) must be smaller than long window ({long})")]
    WindowOrder { short: usize, long: usize },

    #[error("Division by zero: previous moving average value is 0")]
    DivisionByZero,

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

pub type Result<T> = std::result::Result<T, Error>;
