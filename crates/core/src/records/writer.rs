use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::LookupResult;

#[derive(Debug, Error)]
#[error("Failed to append to {path}: {source}")]
pub struct WriteError {
    pub path: String,
    #[source]
    pub source: std::io::Error,
}

/// Appends pipe-delimited result records to the output file.
///
/// The file is opened, appended to, and closed for every record, so an
/// interrupted run leaves every completed record on disk.
#[derive(Debug, Clone)]
pub struct ResultWriter {
    path: PathBuf,
    terminate_records: bool,
}

impl ResultWriter {
    pub fn new(path: impl Into<PathBuf>, terminate_records: bool) -> Self {
        Self {
            path: path.into(),
            terminate_records,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record.
    pub fn append(&self, result: &LookupResult) -> Result<(), WriteError> {
        let mut row = result.to_record();
        if self.terminate_records {
            row.push('\n');
        }

        let map_err = |source| WriteError {
            path: self.path.display().to_string(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(map_err)?;
        file.write_all(row.as_bytes()).map_err(map_err)?;

        debug!(identifier = %result.identifier, "Appended result record");
        Ok(())
    }
}
