//! Genesis configuration — the one-time mint that creates a ledger.
//!
//! The entire supply is minted at creation to the deployer, who also holds
//! the reward-admin role. There is no further minting except through the
//! declared lock-gain and reward payouts.

use crank_types::{AccountAddress, PolicyParams};

/// Configuration for creating a fresh ledger.
#[derive(Clone, Debug)]
pub struct GenesisConfig {
    /// Receives the full genesis supply and the reward-admin role.
    pub deployer: AccountAddress,
    /// Fiscal policy of the new ledger.
    pub params: PolicyParams,
}

impl GenesisConfig {
    /// Genesis with the reference deployment policy.
    pub fn new(deployer: AccountAddress) -> Self {
        Self {
            deployer,
            params: PolicyParams::crank_defaults(),
        }
    }
}
