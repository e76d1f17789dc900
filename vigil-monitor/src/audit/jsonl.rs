//! Append-only JSONL audit log on disk.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use vigil_core::errors::AuditError;
use vigil_core::models::AuditEntry;
use vigil_core::traits::IAuditSink;

/// Audit sink writing one JSON document per line to a file opened in
/// append mode.
///
/// Appends go through a mutex so concurrent writers never interleave
/// partial lines. Nothing is ever rewritten; reopening the same path
/// continues after the existing content.
#[derive(Debug)]
pub struct JsonlAuditSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonlAuditSink {
    /// Open the log for appending, creating the file and any missing
    /// parent directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let path = path.as_ref().to_path_buf();
        ensure_parent_dir(&path)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| io_err(&path, e.to_string()))?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IAuditSink for JsonlAuditSink {
    fn append(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        let line = serde_json::to_string(entry).map_err(|e| AuditError::Serialize {
            reason: e.to_string(),
        })?;
        let mut file = self
            .file
            .lock()
            .map_err(|e| io_err(&self.path, format!("audit writer lock poisoned: {e}")))?;
        file.write_all(line.as_bytes())
            .and_then(|()| file.write_all(b"\n"))
            .map_err(|e| io_err(&self.path, e.to_string()))
    }
}

fn io_err(path: &Path, reason: String) -> AuditError {
    AuditError::Io {
        path: path.display().to_string(),
        reason,
    }
}

fn ensure_parent_dir(path: &Path) -> Result<(), AuditError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e.to_string()))?;
    }
    Ok(())
}
