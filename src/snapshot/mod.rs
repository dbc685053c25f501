//! Append-or-create writer for the daily snapshot CSV.

use std::fs::{self, OpenOptions};
use std::path::Path;

use crate::domain::release::ReleaseRecord;

pub mod error;

use error::SnapshotError;

#[derive(Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Nothing to write; the file was left untouched.
    Empty,
    /// A fresh file was created, header row included.
    Created(usize),
    /// Rows were appended to an existing file, no header re-emitted.
    Appended(usize),
}

/// Persists `records` at `path`, creating the file (with a header row derived
/// from the record's field names) on first write and appending headerless rows
/// afterwards. Prior rows are never rewritten.
///
/// No locking or atomic replace: concurrent runs can interleave writes.
pub fn append_records(
    path: &Path,
    records: &[ReleaseRecord],
) -> Result<WriteOutcome, SnapshotError> {
    if records.is_empty() {
        return Ok(WriteOutcome::Empty);
    }

    if path.exists() {
        let file = OpenOptions::new().append(true).open(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(WriteOutcome::Appended(records.len()))
    } else {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = csv::Writer::from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(WriteOutcome::Created(records.len()))
    }
}
