//! Ledger state snapshots.
//!
//! The whole [`LedgerState`] aggregate serializes to a single bincode blob;
//! restoring it and pairing it with the original [`PolicyParams`] rebuilds
//! an identical engine.

use crate::error::LedgerError;
use crate::state::LedgerState;

/// Serialize the full ledger state to bytes.
pub fn save(state: &LedgerState) -> Result<Vec<u8>, LedgerError> {
    bincode::serialize(state).map_err(|e| LedgerError::Snapshot(e.to_string()))
}

/// Restore ledger state from snapshot bytes.
pub fn restore(bytes: &[u8]) -> Result<LedgerState, LedgerError> {
    bincode::deserialize(bytes).map_err(|e| LedgerError::Snapshot(e.to_string()))
}
