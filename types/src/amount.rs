//! Token amount type for CKN.
//!
//! Amounts are represented as fixed-point integers (u128) to avoid
//! floating-point errors. The smallest unit is 1 raw; one whole CKN is
//! `10^18` raw (18 fractional decimal digits).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Raw units per whole CKN.
pub const UNIT: u128 = 1_000_000_000_000_000_000;

/// Basis points in one whole (100%).
pub const BPS_DENOMINATOR: u128 = 10_000;

/// A CKN amount in raw units.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// An amount of whole CKN tokens.
    pub fn from_whole(tokens: u128) -> Self {
        Self(tokens * UNIT)
    }

    /// An amount of thousandths of a CKN (`47_500` milli = 47.5 CKN).
    pub fn from_milli(milli: u128) -> Self {
        Self(milli * (UNIT / 1_000))
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// `self * bps / 10_000`, rounded down.
    ///
    /// The single fee primitive: transfer burn, lock gains and reward
    /// withholding are all expressed as basis points of an amount.
    /// `None` on multiplication overflow.
    pub fn mul_bps(self, bps: u32) -> Option<Self> {
        self.0
            .checked_mul(bps as u128)
            .map(|scaled| Self(scaled / BPS_DENOMINATOR))
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} raw", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_and_milli_constructors_agree() {
        assert_eq!(Amount::from_whole(5), Amount::from_milli(5_000));
        assert_eq!(Amount::from_milli(47_500).raw(), 47_500 * UNIT / 1_000);
    }

    #[test]
    fn mul_bps_reference_fee_figures() {
        // 5% of 100 CKN is 5 CKN.
        assert_eq!(
            Amount::from_whole(100).mul_bps(500),
            Some(Amount::from_whole(5))
        );
        // 5% of 47.5 CKN is 2.375 CKN, so the net deposit is 45.125 CKN.
        let gross = Amount::from_milli(47_500);
        let burn = gross.mul_bps(500).unwrap();
        assert_eq!(gross.checked_sub(burn), Some(Amount::from_milli(45_125)));
        // 20% of 47.5 CKN is 9.5 CKN.
        assert_eq!(gross.mul_bps(2_000), Some(Amount::from_milli(9_500)));
        // 10% withheld from 2 CKN leaves 1.8 CKN.
        let nominal = Amount::from_whole(2);
        let withheld = nominal.mul_bps(1_000).unwrap();
        assert_eq!(
            nominal.checked_sub(withheld),
            Some(Amount::from_milli(1_800))
        );
    }

    #[test]
    fn mul_bps_overflows_to_none() {
        assert_eq!(Amount::new(u128::MAX).mul_bps(2), None);
    }

    #[test]
    fn checked_sub_underflows_to_none() {
        assert_eq!(Amount::new(1).checked_sub(Amount::new(2)), None);
    }
}
