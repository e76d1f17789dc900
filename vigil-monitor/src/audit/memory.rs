//! In-memory audit sink for tests and embedded use.

use std::sync::{Mutex, PoisonError};

use vigil_core::errors::AuditError;
use vigil_core::models::AuditEntry;
use vigil_core::traits::IAuditSink;

/// Audit sink that keeps every entry in memory, in append order.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far, oldest first.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IAuditSink for MemoryAuditSink {
    fn append(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
        Ok(())
    }
}
