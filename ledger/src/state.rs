//! The ledger's owned mutable state.

use std::collections::HashMap;

use crank_types::{AccountAddress, Amount};
use serde::{Deserialize, Serialize};

use crate::lock::Lock;

/// All mutable economic state of a Crank ledger, in one aggregate.
///
/// Owned exclusively by the [`LedgerEngine`](crate::LedgerEngine); callers
/// never get direct write access. Accounts are implicit: a missing map
/// entry reads as zero.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerState {
    /// Per-account balance.
    pub balances: HashMap<AccountAddress, Amount>,

    /// `allowances[owner][spender]` = amount approved for delegated transfer.
    pub allowances: HashMap<AccountAddress, HashMap<AccountAddress, Amount>>,

    /// At most one active lock per account.
    pub locks: HashMap<AccountAddress, Lock>,

    /// Claimable reward per account (post-withholding).
    pub rewards: HashMap<AccountAddress, Amount>,

    /// Circulating supply. Shrinks with every transfer burn, grows only
    /// through declared lock-gain and reward payouts.
    pub total_supply: Amount,

    /// Sum of gross amounts across active locks — a cached running total,
    /// not a live re-scan.
    pub total_locked: Amount,

    /// The only identity allowed to distribute rewards.
    pub admin: AccountAddress,

    /// The ledger's own account. Holds net lock deposits and the pooled
    /// reward funds, and pays out unlocks and claims.
    pub reserve: AccountAddress,
}

impl LedgerState {
    pub fn balance_of(&self, account: &AccountAddress) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    pub fn allowance(&self, owner: &AccountAddress, spender: &AccountAddress) -> Amount {
        self.allowances
            .get(owner)
            .and_then(|per_spender| per_spender.get(spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Conservation check: the sum of all balances equals `total_supply`.
    ///
    /// Holds after every committed operation. `false` also covers the
    /// (theoretical) case where the balance sum itself overflows.
    pub fn verify_conservation(&self) -> bool {
        let mut sum = Amount::ZERO;
        for balance in self.balances.values() {
            match sum.checked_add(*balance) {
                Some(next) => sum = next,
                None => return false,
            }
        }
        sum == self.total_supply
    }

    /// Aggregate check: `total_locked` equals the sum of gross amounts
    /// across active lock records.
    pub fn verify_locked_aggregate(&self) -> bool {
        let mut sum = Amount::ZERO;
        for lock in self.locks.values() {
            match sum.checked_add(lock.amount) {
                Some(next) => sum = next,
                None => return false,
            }
        }
        sum == self.total_locked
    }
}
