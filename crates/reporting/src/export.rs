use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use pipeline::{AnalysisReport, TableRow};

use crate::{Error, Result};

const TABLE_HEADER: [&str; 4] = ["Day", "Price", "Short_MA", "Long_MA"];

/// Writes the per-day table of `report` to `path`, replacing any existing file.
pub fn export_table<P: AsRef<Path>>(path: P, report: &AnalysisReport) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = report.rows();
    write_table(file, &rows)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Exported analysis table.");
    Ok(())
}

/// Writes the header and one record per row. Missing averages become empty cells.
pub fn write_table<W: Write>(writer: W, rows: &[TableRow]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    writer.write_record(TABLE_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
