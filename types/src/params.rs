//! Fiscal policy parameters — the fixed rates read by every ledger component.

use crate::amount::Amount;
use serde::{Deserialize, Serialize};

/// All policy parameters of a Crank ledger, fixed at genesis.
///
/// Rates are expressed in basis points (10 000 bps = 100%). The defaults
/// reproduce the reference deployment: 5% burn per transfer, 20% lock gain,
/// 10% reward withholding, and a 10 000 CKN genesis supply.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PolicyParams {
    /// Share of every public transfer permanently destroyed, in basis points.
    pub transfer_burn_bps: u32,

    /// Gain paid on the gross locked amount at unlock, in basis points.
    pub lock_gain_bps: u32,

    /// Share withheld from each distributed reward, in basis points.
    /// Withheld value accrues to the reserve instead of being destroyed.
    pub reward_withhold_bps: u32,

    /// Seconds a lock must age before unlock is allowed.
    pub lock_duration_secs: u64,

    /// Supply minted to the deployer at genesis. The supply never grows
    /// again except through declared lock-gain and reward payouts.
    pub genesis_supply: Amount,

    /// Token display name.
    pub token_name: String,

    /// Token ticker symbol.
    pub token_symbol: String,

    /// Fractional decimal digits of the token.
    pub decimals: u8,
}

impl PolicyParams {
    /// Crank defaults — the reference deployment configuration.
    pub fn crank_defaults() -> Self {
        Self {
            transfer_burn_bps: 500,    // 5%
            lock_gain_bps: 2_000,      // 20%
            reward_withhold_bps: 1_000, // 10%
            lock_duration_secs: 30 * 24 * 3600, // 30 days
            genesis_supply: Amount::from_whole(10_000),
            token_name: "CrankCoin".to_string(),
            token_symbol: "CKN".to_string(),
            decimals: 18,
        }
    }
}

/// Default is the reference deployment configuration.
impl Default for PolicyParams {
    fn default() -> Self {
        Self::crank_defaults()
    }
}
