//! File-backed implementation of `AuditWriter`.
//!
//! Writes the sealed record as pretty JSON and the Markdown report to two
//! separate paths. Both artifacts are rendered and staged as temporary files
//! before either is moved into place, so a failure leaves no partial output
//! behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use ethgate_contracts::{
    error::{EthgateError, EthgateResult},
    record::DecisionRecord,
};
use ethgate_core::traits::AuditWriter;

use crate::{digest::seal, report::render_report};

/// Writes each decision to a JSON record file and a Markdown report file.
///
/// Existing files at either path are overwritten.
#[derive(Debug, Clone)]
pub struct FileAuditWriter {
    record_path: PathBuf,
    report_path: PathBuf,
}

impl FileAuditWriter {
    pub fn new(record_path: impl Into<PathBuf>, report_path: impl Into<PathBuf>) -> Self {
        Self {
            record_path: record_path.into(),
            report_path: report_path.into(),
        }
    }

    pub fn record_path(&self) -> &Path {
        &self.record_path
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }
}

impl AuditWriter for FileAuditWriter {
    fn write(&self, record: DecisionRecord) -> EthgateResult<DecisionRecord> {
        let record = seal(record)?;

        let record_json =
            serde_json::to_string_pretty(&record).map_err(|e| EthgateError::Serialization {
                reason: format!("failed to encode decision record: {}", e),
            })?;
        let report = render_report(&record);

        let staged_record = stage(&self.record_path, &record_json)?;
        let staged_report = stage(&self.report_path, &report)?;

        place(staged_record, &self.record_path)?;
        if let Err(e) = place(staged_report, &self.report_path) {
            let _ = std::fs::remove_file(&self.record_path);
            return Err(e);
        }

        info!(
            evaluation_id = %record.evaluation_id.0,
            decision = %record.decision,
            record = %self.record_path.display(),
            report = %self.report_path.display(),
            "decision recorded"
        );

        Ok(record)
    }
}

/// Write `contents` to a temporary file next to `path`, creating parent
/// directories as needed. The file is removed if it is dropped unplaced.
fn stage(path: &Path, contents: &str) -> EthgateResult<NamedTempFile> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            std::fs::create_dir_all(parent).map_err(|e| EthgateError::AuditWriteFailed {
                reason: format!("failed to create directory '{}': {}", parent.display(), e),
            })?;
            parent
        }
        None => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| EthgateError::AuditWriteFailed {
        reason: format!("failed to stage '{}': {}", path.display(), e),
    })?;
    file.write_all(contents.as_bytes())
        .map_err(|e| EthgateError::AuditWriteFailed {
            reason: format!("failed to write '{}': {}", path.display(), e),
        })?;
    Ok(file)
}

/// Move a staged file to its final path, replacing any existing file.
fn place(staged: NamedTempFile, path: &Path) -> EthgateResult<()> {
    staged
        .persist(path)
        .map(|_| ())
        .map_err(|e| EthgateError::AuditWriteFailed {
            reason: format!("failed to write '{}': {}", path.display(), e.error),
        })
}
