//! Ledger engine errors.
//!
//! Every error is returned synchronously to the caller of the triggering
//! operation; nothing is retried internally, and no error leaves partial
//! state behind.

use crank_types::{Amount, Timestamp};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Amount, available: Amount },

    #[error("insufficient allowance: need {needed}, have {available}")]
    InsufficientAllowance { needed: Amount, available: Amount },

    #[error("active lock found: wait until {unlock_time} before locking again")]
    DuplicateLock { unlock_time: Timestamp },

    #[error("lock amount must be greater than zero")]
    InvalidAmount,

    #[error("no active lock found")]
    NoActiveLock,

    #[error("lock has not matured: unlocks at {unlock_time}, now is {now}")]
    LockNotMatured { unlock_time: Timestamp, now: Timestamp },

    #[error("zero rewards to claim")]
    NoRewardsToClaim,

    #[error("caller is not the reward admin")]
    Unauthorized,

    #[error("reward batch length mismatch: {addresses} addresses, {values} values")]
    LengthMismatch { addresses: usize, values: usize },

    /// The reserve cannot cover a payout it must fund. This is not a user
    /// error: it means lock or reward accounting diverged from the actual
    /// reserve balance.
    #[error("reserve shortfall: payout needs {needed}, reserve holds {available}")]
    ReserveShortfall { needed: Amount, available: Amount },

    #[error("arithmetic overflow")]
    ArithmeticOverflow,

    #[error("snapshot serialization failed: {0}")]
    Snapshot(String),
}
