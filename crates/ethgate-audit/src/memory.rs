//! In-memory implementation of `AuditWriter`.
//!
//! Keeps sealed records in a `Vec` behind a `Mutex`. Used for dry runs, where
//! nothing may be written to disk, and in tests.

use std::sync::{Arc, Mutex};

use tracing::debug;

use ethgate_contracts::{
    error::{EthgateError, EthgateResult},
    record::DecisionRecord,
};
use ethgate_core::traits::AuditWriter;

use crate::digest::{seal, verify_record};

/// An append-only, in-memory audit writer.
///
/// Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditWriter {
    pub(crate) records: Arc<Mutex<Vec<DecisionRecord>>>,
}

impl InMemoryAuditWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records written so far, in write order.
    pub fn records(&self) -> Vec<DecisionRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// True if every stored record still matches its digest.
    pub fn verify_integrity(&self) -> bool {
        match self.records.lock() {
            Ok(records) => records.iter().all(verify_record),
            Err(_) => false,
        }
    }
}

impl AuditWriter for InMemoryAuditWriter {
    fn write(&self, record: DecisionRecord) -> EthgateResult<DecisionRecord> {
        let record = seal(record)?;

        let mut records = self.records.lock().map_err(|e| EthgateError::AuditWriteFailed {
            reason: format!("audit state lock poisoned: {}", e),
        })?;
        records.push(record.clone());

        debug!(
            evaluation_id = %record.evaluation_id.0,
            stored = records.len(),
            "decision recorded in memory"
        );

        Ok(record)
    }
}
