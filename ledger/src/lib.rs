//! Crank ledger engine — a token ledger with built-in fiscal policy.
//!
//! Every public transfer destroys a fixed share of the moved value, a
//! single-slot staking lock pays a fixed gain at maturity, and an
//! admin-driven reward ledger credits claimable rewards net of a
//! withholding rate.
//!
//! All mutable economic state lives in one owned aggregate,
//! [`LedgerState`], mutated only through the operation surface of
//! [`LedgerEngine`]. Every operation either fully commits or returns an
//! error having touched nothing.

pub mod engine;
pub mod error;
pub mod event;
pub mod genesis;
pub mod lock;
pub mod shared;
pub mod snapshot;
pub mod state;

pub use engine::{LedgerEngine, UnlockReceipt};
pub use error::LedgerError;
pub use event::{EventBus, LedgerEvent};
pub use genesis::GenesisConfig;
pub use lock::Lock;
pub use shared::SharedLedger;
pub use state::LedgerState;
