//! Fundamental types for the Crank token ledger.
//!
//! This crate defines the types shared by every other crate in the workspace:
//! account addresses, fixed-point token amounts, timestamps, and the fiscal
//! policy parameters.

pub mod address;
pub mod amount;
pub mod params;
pub mod time;

pub use address::AccountAddress;
pub use amount::Amount;
pub use params::PolicyParams;
pub use time::Timestamp;
