use crate::row::Row;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Writes the rows of one split to a headerless CSV file.
///
/// One line per row, fields in input order: the label tag first, then every
/// pixel intensity as a decimal integer. Any existing file at the
/// destination is overwritten. An empty row slice produces an empty file.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    /// Creates a sink for the given destination path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Serializes all rows and flushes the file.
    pub fn write_rows(&self, rows: &[Row]) -> Result<usize> {
        let mut writer = csv::Writer::from_path(&self.path)
            .with_context(|| format!("Failed to create output file: {}", self.path.display()))?;

        for row in rows {
            writer.write_field(row.label.as_str())?;
            for pixel in &row.pixels {
                writer.write_field(pixel.to_string())?;
            }
            // Empty iterator terminates the record started by write_field.
            writer.write_record(None::<&[u8]>)?;
        }

        writer
            .flush()
            .with_context(|| format!("Failed to write output file: {}", self.path.display()))?;
        Ok(rows.len())
    }
}
