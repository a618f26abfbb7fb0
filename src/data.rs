use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

use crate::error::Error;

pub type Row = StringRecord;

/// Column holding the class label. Negative values count from the end, so
/// `-1` is the last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetColumn(pub isize);

impl TargetColumn {
    pub fn resolve(self, width: usize) -> crate::error::Result<usize> {
        let index = if self.0 < 0 {
            width as isize + self.0
        } else {
            self.0
        };

        if index < 0 || index as usize >= width {
            return Err(Error::TargetOutOfRange {
                target: self.0,
                width,
            });
        }

        Ok(index as usize)
    }
}

/// Rows loaded once per run. Every row has the same number of fields.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<Row>,
    width: usize,
}

impl Dataset {
    pub fn from_rows(rows: Vec<Row>) -> crate::error::Result<Self> {
        let width = rows.first().ok_or(Error::EmptyDataset)?.len();

        if let Some((row, found)) = rows
            .iter()
            .map(StringRecord::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(Error::RaggedRow {
                row: row + 1,
                expected: width,
                found,
            });
        }

        Ok(Dataset { rows, width })
    }

    /// Reads a comma delimited file. A malformed record aborts the load with the
    /// file name and record number attached.
    pub fn from_path<P: AsRef<Path>>(path: P, has_headers: bool) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = ReaderBuilder::new()
            .has_headers(has_headers)
            .from_path(path)
            .with_context(|| format!("failed to open dataset {}", path.display()))?;

        // Positions count the header as record 1 when there is one:
        let first = if has_headers { 2 } else { 1 };
        let mut rows = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record
                .with_context(|| format!("file {}, record {}", path.display(), i + first))?;
            rows.push(record);
        }

        let dataset = Self::from_rows(rows)
            .with_context(|| format!("invalid dataset {}", path.display()))?;
        log::info!(
            "loaded {} rows of width {} from {}",
            dataset.len(),
            dataset.width(),
            path.display()
        );

        Ok(dataset)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
pub(crate) fn rows(lines: &[&[&str]]) -> Vec<Row> {
    lines.iter().map(|fields| StringRecord::from(fields.to_vec())).collect()
}
