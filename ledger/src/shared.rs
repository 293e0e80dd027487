//! Single-writer wrapper around the ledger engine.
//!
//! The execution model requires every externally triggered operation to run
//! as one atomic, serialized step. In-process that is one global mutex:
//! callers take the write guard, run exactly one operation, and drop it.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::engine::LedgerEngine;

/// Cloneable shared handle to a ledger engine behind a single global lock.
#[derive(Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<LedgerEngine>>,
}

impl SharedLedger {
    pub fn new(engine: LedgerEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Exclusive access for one serialized operation.
    ///
    /// A poisoned mutex is recovered rather than propagated: engine
    /// operations are fail-atomic, so the state behind a panicked guard is
    /// still consistent.
    pub fn write(&self) -> MutexGuard<'_, LedgerEngine> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
