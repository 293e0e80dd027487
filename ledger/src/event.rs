//! Events emitted by committed ledger operations.

use crank_types::{AccountAddress, Amount, Timestamp};

/// Observable ledger events.
///
/// Figures are the literal values of the triggering call:
/// `Transfer::value` is the gross amount, not the post-burn net, and
/// `Unlocked::initial_stake` is the gross stake, so observers can
/// reconcile gross vs net on their own.
#[derive(Clone, Debug)]
pub enum LedgerEvent {
    /// A taxed transfer was committed (direct, delegated, or lock deposit).
    Transfer {
        from: AccountAddress,
        to: AccountAddress,
        value: Amount,
    },
    /// An allowance was set.
    Approval {
        owner: AccountAddress,
        spender: AccountAddress,
        value: Amount,
    },
    /// A staking lock was created.
    LockCreated {
        user: AccountAddress,
        amount: Amount,
        unlock_time: Timestamp,
    },
    /// A matured lock was paid out and deleted.
    Unlocked {
        user: AccountAddress,
        initial_stake: Amount,
        rewards: Amount,
    },
    /// Pending rewards were claimed into the balance ledger.
    RewardClaimed {
        user: AccountAddress,
        amount: Amount,
    },
}

/// Synchronous fan-out event bus for ledger events.
///
/// Listeners are invoked inline on the emitting thread; keep handlers fast,
/// they run inside the serialized operation step.
pub struct EventBus {
    listeners: Vec<Box<dyn Fn(&LedgerEvent) + Send + Sync>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&LedgerEvent) + Send + Sync>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &LedgerEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn test_account(name: &str) -> AccountAddress {
        AccountAddress::new(format!("ckn_{name}"))
    }

    #[test]
    fn emit_calls_all_listeners() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut bus = EventBus::new();

        let c1 = Arc::clone(&counter);
        bus.subscribe(Box::new(move |_| {
            c1.fetch_add(1, Ordering::SeqCst);
        }));

        let c2 = Arc::clone(&counter);
        bus.subscribe(Box::new(move |_| {
            c2.fetch_add(10, Ordering::SeqCst);
        }));

        bus.emit(&LedgerEvent::Approval {
            owner: test_account("owner"),
            spender: test_account("spender"),
            value: Amount::from_whole(1),
        });

        assert_eq!(counter.load(Ordering::SeqCst), 11);
    }

    #[test]
    fn emit_with_no_listeners_is_noop() {
        let bus = EventBus::new();
        bus.emit(&LedgerEvent::RewardClaimed {
            user: test_account("claimer"),
            amount: Amount::from_whole(2),
        });
    }

    #[test]
    fn listener_sees_the_emitted_variant() {
        let saw_transfer = Arc::new(AtomicUsize::new(0));
        let saw_unlock = Arc::new(AtomicUsize::new(0));
        let mut bus = EventBus::new();

        let st = Arc::clone(&saw_transfer);
        let su = Arc::clone(&saw_unlock);
        bus.subscribe(Box::new(move |event| match event {
            LedgerEvent::Transfer { .. } => {
                st.fetch_add(1, Ordering::SeqCst);
            }
            LedgerEvent::Unlocked { .. } => {
                su.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        }));

        bus.emit(&LedgerEvent::Transfer {
            from: test_account("a"),
            to: test_account("b"),
            value: Amount::from_whole(3),
        });
        bus.emit(&LedgerEvent::Unlocked {
            user: test_account("a"),
            initial_stake: Amount::from_whole(5),
            rewards: Amount::from_whole(1),
        });

        assert_eq!(saw_transfer.load(Ordering::SeqCst), 1);
        assert_eq!(saw_unlock.load(Ordering::SeqCst), 1);
    }
}
