// In crates/reporting/src/loader.rs

use std::fs::File;
use std::io::Read;
use std::path::Path;

use core_types::PriceSeries;
use csv::{ReaderBuilder, Trim};

use crate::{Error, Result};

/// Zero-based column holding the price; column 0 is the date.
const PRICE_COLUMN: usize = 1;

/// Loads a price series from a CSV file with a header row.
pub fn load_prices<P: AsRef<Path>>(path: P) -> Result<PriceSeries> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let prices = read_prices(file)?;
    tracing::info!(path = %path.display(), days = prices.len(), "Loaded price series.");
    Ok(prices)
}

/// Reads prices from CSV data. The header row is skipped and every other row must
/// carry a finite number in the price column; the first bad row fails the load.
pub fn read_prices<R: Read>(reader: R) -> Result<PriceSeries> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut prices = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // Header is line 1.
        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or(row as u64 + 2);

        let field = record.get(PRICE_COLUMN).ok_or_else(|| Error::MalformedInput {
            line,
            reason: format!("expected a price in column {PRICE_COLUMN}"),
        })?;
        let price: f64 = field.parse().map_err(|err| Error::MalformedInput {
            line,
            reason: format!("invalid price {field:?}: {err}"),
        })?;
        if !price.is_finite() {
            return Err(Error::MalformedInput {
                line,
                reason: format!("price {field:?} is not a finite number"),
            });
        }

        prices.push(price);
    }

    Ok(PriceSeries::from(prices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_second_column_and_skips_header() {
        let data = "Date,Close,Volume\n2024-01-02,10.5,100\n2024-01-03, 11.25 ,200\n2024-01-04,9,300\n";
        let prices = read_prices(data.as_bytes()).unwrap();
        assert_eq!(prices.as_slice(), &[10.5, 11.25, 9.0]);
    }

    #[test]
    fn header_only_yields_empty_series() {
        let prices = read_prices("Date,Close\n".as_bytes()).unwrap();
        assert!(prices.is_empty());
    }

    #[test]
    fn unparseable_price_fails_with_line_number() {
        let data = "Date,Close\n2024-01-02,10.5\n2024-01-03,abc\n2024-01-04,9\n";
        let err = read_prices(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 3, .. }), "got {err:?}");
    }

    #[test]
    fn missing_price_column_fails() {
        let data = "Date,Close\n2024-01-02,10.5\n2024-01-03\n";
        let err = read_prices(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 3, .. }), "got {err:?}");
    }

    #[test]
    fn non_finite_price_fails() {
        let data = "Date,Close\n2024-01-02,NaN\n";
        let err = read_prices(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 2, .. }), "got {err:?}");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_prices("does/not/exist.csv").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.csv"));
    }
}
