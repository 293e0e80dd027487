//! Account address type with `ckn_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Crank account address, always prefixed with `ckn_`.
///
/// Accounts are implicit: holding a balance, a lock slot, or a reward
/// balance is all it takes to "exist". The ledger itself owns one special
/// account, the reserve, which backs lock deposits and reward payouts.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// The standard prefix for all Crank account addresses.
    pub const PREFIX: &'static str = "ckn_";

    /// Create a new account address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `ckn_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with ckn_");
        Self(s)
    }

    /// The ledger engine's own account. It plays the role a contract
    /// address plays on chain: net lock deposits and reward pools live here.
    pub fn reserve() -> Self {
        Self(format!("{}reserve", Self::PREFIX))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
