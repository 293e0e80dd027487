//! The staking lock record.

use crank_types::{AccountAddress, Amount, Timestamp};
use serde::{Deserialize, Serialize};

/// A single-slot staking lock.
///
/// `amount` is the gross value the owner asked to lock. The deposit into
/// the reserve went through the standard taxed transfer, so the reserve
/// only holds the post-burn net; gains at unlock are nonetheless computed
/// on the gross. `amount` is nonzero for as long as the record exists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lock {
    pub owner: AccountAddress,
    pub amount: Amount,
    pub unlock_time: Timestamp,
}

impl Lock {
    /// Whether the maturity gate has passed.
    pub fn is_matured(&self, now: Timestamp) -> bool {
        now >= self.unlock_time
    }
}
