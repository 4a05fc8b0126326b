//! CSV ingestion: turns a header-based CSV file into raw rows.
//!
//! Every cell is read as text. Invalid UTF-8 (the public 2023 dataset has a
//! few Latin-1 track names) is replaced rather than rejected, and malformed
//! records are skipped with a warning. Only a missing file, a broken header
//! or an I/O failure aborts the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::error::LoadError;
use crate::models::{RawRow, RawValue, Track};
use crate::normalize::normalize_rows;

/// Read all records from `reader`, keyed by the header row.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .byte_headers()
        .map_err(LoadError::Header)?
        .iter()
        .map(|h| {
            String::from_utf8_lossy(h)
                .trim_start_matches('\u{feff}')
                .to_string()
        })
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::MissingHeader);
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.byte_records() {
        match result {
            Ok(record) => {
                let row: RawRow = headers
                    .iter()
                    .zip(record.iter())
                    .map(|(h, field)| {
                        let value = String::from_utf8_lossy(field).into_owned();
                        (h.clone(), RawValue::Text(value))
                    })
                    .collect();
                rows.push(row);
            }
            Err(e) if e.is_io_error() => return Err(LoadError::Read(e)),
            Err(e) => {
                skipped += 1;
                warn!(error = %e, "skipping malformed CSV record");
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, "some CSV records could not be parsed");
    }
    Ok(rows)
}

/// Read raw rows from a CSV file on disk.
pub fn read_csv(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows(file)
}

/// Read and normalize a CSV file in one step.
pub fn load_tracks(path: &Path) -> Result<Vec<Track>, LoadError> {
    let rows = read_csv(path)?;
    let tracks = normalize_rows(&rows);
    info!(
        path = %path.display(),
        rows = rows.len(),
        tracks = tracks.len(),
        "loaded streaming dataset"
    );
    Ok(tracks)
}
