//! Data export
//!
//! Builds the overview export payloads and hands them to a `FileSaver`,
//! which performs the actual write. The payload builders are pure so the
//! wire formats can be checked without touching the filesystem.

pub mod csv_export;
pub mod json_export;

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::domain::model::{AgeStat, ExportFormat, LocationStat, MetricSnapshot};

/// Failure while handing a payload to the save collaborator
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write {filename}: {source}")]
    Io {
        filename: String,
        #[source]
        source: io::Error,
    },
}

/// Boundary collaborator that persists an export payload.
/// The exporter has no knowledge of where the bytes end up.
pub trait FileSaver {
    fn save(&mut self, filename: &str, mime_type: &str, payload: &[u8]) -> Result<(), SaveError>;
}

/// Saver that writes payloads into a target directory
#[derive(Debug)]
pub struct DiskSaver {
    dir: PathBuf,
}

impl DiskSaver {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl FileSaver for DiskSaver {
    fn save(&mut self, filename: &str, _mime_type: &str, payload: &[u8]) -> Result<(), SaveError> {
        let path = self.dir.join(filename);
        fs::write(&path, payload).map_err(|source| SaveError::Io {
            filename: filename.to_string(),
            source,
        })
    }
}

/// Build the overview payload in the requested format
pub fn overview_payload(
    format: ExportFormat,
    snapshot: &MetricSnapshot,
    locations: &[LocationStat],
    age_groups: &[AgeStat],
    exported_at: DateTime<Local>,
) -> String {
    match format {
        ExportFormat::Json => {
            json_export::overview_json(snapshot, locations, age_groups, exported_at)
        }
        ExportFormat::Csv => csv_export::overview_csv(snapshot, locations, age_groups),
    }
}

/// Filename for an overview export, dated with the export day
pub fn overview_filename(format: ExportFormat, exported_at: DateTime<Local>) -> String {
    format!(
        "overview-data-{}.{}",
        exported_at.format("%Y-%m-%d"),
        format.extension()
    )
}
