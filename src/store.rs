//! In-memory result accumulation for the active run.

use crate::model::BusinessRecord;
use std::sync::{Arc, Mutex, MutexGuard};

/// Insertion-ordered, append-only collection of emitted records.
///
/// Cleared when a new run starts; otherwise records are never mutated or
/// removed once appended.
#[derive(Debug, Default)]
pub struct ResultStore {
    records: Vec<BusinessRecord>,
}

impl ResultStore {
    pub fn append(&mut self, record: BusinessRecord) {
        self.records.push(record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Owned copy of the accumulated records, in insertion order.
    pub fn snapshot(&self) -> Vec<BusinessRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Store handle shared between the controller and the emitter task.
///
/// Single-writer by construction: only the active emitter appends, and the
/// controller serializes emitter lifetimes.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<ResultStore>>,
}

impl SharedStore {
    pub fn lock(&self) -> MutexGuard<'_, ResultStore> {
        // A poisoned lock only means a tick panicked mid-append; the data is
        // still consistent, so recover the guard.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn snapshot(&self) -> Vec<BusinessRecord> {
        self.lock().snapshot()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }
}
