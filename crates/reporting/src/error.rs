// In crates/reporting/src/error.rs

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed input on line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },

    #[error("Failed to access file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to render chart: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, Error>;
