//! The ledger engine — balance bookkeeping with burn-on-transfer, the
//! staking lock lifecycle, and reward distribution/claims.
//!
//! Operations take caller identity (and, where the lock lifecycle needs
//! it, the current time) as explicit parameters. Every operation validates
//! completely before its first mutation, so an error never leaves partial
//! state behind.

use std::collections::HashMap;

use crank_types::{AccountAddress, Amount, PolicyParams, Timestamp};

use crate::error::LedgerError;
use crate::event::{EventBus, LedgerEvent};
use crate::genesis::GenesisConfig;
use crate::lock::Lock;
use crate::state::LedgerState;

/// Receipt returned by [`LedgerEngine::unlock`].
#[derive(Clone, Debug)]
pub struct UnlockReceipt {
    /// Gross amount originally locked.
    pub initial_stake: Amount,
    /// Net principal paid back out of the reserve.
    pub principal: Amount,
    /// Gains created on top of the principal (20% of the gross stake).
    pub gains: Amount,
}

impl UnlockReceipt {
    /// Total credited to the owner: principal plus gains.
    pub fn payout(&self) -> Amount {
        self.principal + self.gains
    }
}

/// Outcome of a committed taxed transfer (internal bookkeeping detail).
struct TransferBreakdown {
    burned: Amount,
    net: Amount,
}

/// The ledger engine — owns all mutable economic state.
///
/// Logically four responsibilities over one storage space: the balance
/// ledger (taxed transfers), the lock manager, the reward ledger, and the
/// fixed policy rates they all read.
pub struct LedgerEngine {
    params: PolicyParams,
    state: LedgerState,
    events: EventBus,
}

impl LedgerEngine {
    /// Create a ledger at genesis: the full supply is minted to the
    /// deployer, who becomes the reward admin.
    pub fn genesis(config: GenesisConfig) -> Self {
        let GenesisConfig { deployer, params } = config;
        let mut balances = HashMap::new();
        balances.insert(deployer.clone(), params.genesis_supply);
        let state = LedgerState {
            balances,
            allowances: HashMap::new(),
            locks: HashMap::new(),
            rewards: HashMap::new(),
            total_supply: params.genesis_supply,
            total_locked: Amount::ZERO,
            admin: deployer,
            reserve: AccountAddress::reserve(),
        };
        Self {
            params,
            state,
            events: EventBus::new(),
        }
    }

    /// Rebuild an engine from previously snapshotted state.
    pub fn from_state(params: PolicyParams, state: LedgerState) -> Self {
        Self {
            params,
            state,
            events: EventBus::new(),
        }
    }

    // ── Read surface ─────────────────────────────────────────────────────

    pub fn params(&self) -> &PolicyParams {
        &self.params
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Subscribe to committed-operation events.
    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    pub fn name(&self) -> &str {
        &self.params.token_name
    }

    pub fn symbol(&self) -> &str {
        &self.params.token_symbol
    }

    pub fn decimals(&self) -> u8 {
        self.params.decimals
    }

    pub fn total_supply(&self) -> Amount {
        self.state.total_supply
    }

    pub fn balance_of(&self, account: &AccountAddress) -> Amount {
        self.state.balance_of(account)
    }

    pub fn allowance(&self, owner: &AccountAddress, spender: &AccountAddress) -> Amount {
        self.state.allowance(owner, spender)
    }

    /// Sum of gross locked amounts across all active locks.
    pub fn total_locked(&self) -> Amount {
        self.state.total_locked
    }

    /// The reserve's own balance (balance-of-self).
    pub fn contract_balance(&self) -> Amount {
        self.state.balance_of(&self.state.reserve)
    }

    /// Pending claimable reward for an account (zero if none).
    pub fn check_rewards(&self, account: &AccountAddress) -> Amount {
        self.state
            .rewards
            .get(account)
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Pure quoting utility: the gain paid on a gross stake at unlock.
    pub fn calculate_lock_gains(&self, amount: Amount) -> Result<Amount, LedgerError> {
        amount
            .mul_bps(self.params.lock_gain_bps)
            .ok_or(LedgerError::ArithmeticOverflow)
    }

    // ── Balance ledger ───────────────────────────────────────────────────

    /// Move `amount` from `sender` to `recipient`, burning the policy share.
    ///
    /// The sender is debited the full gross amount, the recipient receives
    /// the net, and the supply shrinks by the burn. The emitted event
    /// carries the gross figure.
    pub fn transfer(
        &mut self,
        sender: &AccountAddress,
        recipient: &AccountAddress,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let breakdown = self.taxed_transfer(sender, recipient, amount)?;
        tracing::debug!(
            from = %sender,
            to = %recipient,
            gross = %amount,
            net = %breakdown.net,
            burned = %breakdown.burned,
            "transfer committed"
        );
        self.events.emit(&LedgerEvent::Transfer {
            from: sender.clone(),
            to: recipient.clone(),
            value: amount,
        });
        Ok(())
    }

    /// Set `spender`'s allowance over `owner`'s balance. Last write wins.
    pub fn approve(
        &mut self,
        owner: &AccountAddress,
        spender: &AccountAddress,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.state
            .allowances
            .entry(owner.clone())
            .or_default()
            .insert(spender.clone(), amount);
        self.events.emit(&LedgerEvent::Approval {
            owner: owner.clone(),
            spender: spender.clone(),
            value: amount,
        });
        Ok(())
    }

    /// Delegated transfer: `spender` moves `amount` from `owner` to
    /// `recipient` against a prior approval. Burn logic is identical to
    /// [`transfer`](Self::transfer); the allowance is reduced by the full
    /// gross amount.
    pub fn transfer_from(
        &mut self,
        spender: &AccountAddress,
        owner: &AccountAddress,
        recipient: &AccountAddress,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let approved = self.state.allowance(owner, spender);
        let remaining = approved
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientAllowance {
                needed: amount,
                available: approved,
            })?;
        let breakdown = self.taxed_transfer(owner, recipient, amount)?;
        self.state
            .allowances
            .entry(owner.clone())
            .or_default()
            .insert(spender.clone(), remaining);
        tracing::debug!(
            owner = %owner,
            spender = %spender,
            to = %recipient,
            gross = %amount,
            burned = %breakdown.burned,
            "delegated transfer committed"
        );
        self.events.emit(&LedgerEvent::Transfer {
            from: owner.clone(),
            to: recipient.clone(),
            value: amount,
        });
        Ok(())
    }

    // ── Lock manager ─────────────────────────────────────────────────────

    /// Create a staking lock for `account`.
    ///
    /// The deposit is a standard taxed transfer into the reserve, so the
    /// reserve receives only the net while the lock records the gross
    /// amount requested. Returns the maturity time.
    pub fn lock(
        &mut self,
        account: &AccountAddress,
        amount: Amount,
        now: Timestamp,
    ) -> Result<Timestamp, LedgerError> {
        if amount.is_zero() {
            return Err(LedgerError::InvalidAmount);
        }
        if let Some(existing) = self.state.locks.get(account) {
            return Err(LedgerError::DuplicateLock {
                unlock_time: existing.unlock_time,
            });
        }
        let total_locked = self
            .state
            .total_locked
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let unlock_time = now.add_secs(self.params.lock_duration_secs);

        let reserve = self.state.reserve.clone();
        let breakdown = self.taxed_transfer(account, &reserve, amount)?;
        self.state.locks.insert(
            account.clone(),
            Lock {
                owner: account.clone(),
                amount,
                unlock_time,
            },
        );
        self.state.total_locked = total_locked;

        tracing::debug!(
            account = %account,
            gross = %amount,
            deposited = %breakdown.net,
            unlock_time = %unlock_time,
            "lock created"
        );
        self.events.emit(&LedgerEvent::Transfer {
            from: account.clone(),
            to: reserve,
            value: amount,
        });
        self.events.emit(&LedgerEvent::LockCreated {
            user: account.clone(),
            amount,
            unlock_time,
        });
        Ok(unlock_time)
    }

    /// Pay out and delete `account`'s matured lock.
    ///
    /// The principal returned is the net deposit the reserve actually holds
    /// (gross minus the deposit burn, recomputed with the same formula);
    /// gains are computed on the gross stake and are newly created value,
    /// so the supply grows by them. The credit is tax-free.
    pub fn unlock(
        &mut self,
        account: &AccountAddress,
        now: Timestamp,
    ) -> Result<UnlockReceipt, LedgerError> {
        let lock = self
            .state
            .locks
            .get(account)
            .cloned()
            .ok_or(LedgerError::NoActiveLock)?;
        if !lock.is_matured(now) {
            return Err(LedgerError::LockNotMatured {
                unlock_time: lock.unlock_time,
                now,
            });
        }

        let deposit_burn = lock
            .amount
            .mul_bps(self.params.transfer_burn_bps)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let principal = lock
            .amount
            .checked_sub(deposit_burn)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let gains = self.calculate_lock_gains(lock.amount)?;
        let payout = principal
            .checked_add(gains)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        let reserve_balance = self.contract_balance();
        if reserve_balance < principal {
            tracing::error!(
                account = %account,
                principal = %principal,
                reserve = %reserve_balance,
                "unlock payout exceeds reserve, lock accounting diverged"
            );
            return Err(LedgerError::ReserveShortfall {
                needed: principal,
                available: reserve_balance,
            });
        }
        let reserve_after = reserve_balance
            .checked_sub(principal)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let account_before = if *account == self.state.reserve {
            reserve_after
        } else {
            self.state.balance_of(account)
        };
        let account_after = account_before
            .checked_add(payout)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let supply_after = self
            .state
            .total_supply
            .checked_add(gains)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let total_locked = self
            .state
            .total_locked
            .checked_sub(lock.amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        let reserve = self.state.reserve.clone();
        self.state.balances.insert(reserve, reserve_after);
        self.state.balances.insert(account.clone(), account_after);
        self.state.total_supply = supply_after;
        self.state.total_locked = total_locked;
        self.state.locks.remove(account);

        tracing::debug!(
            account = %account,
            initial_stake = %lock.amount,
            principal = %principal,
            gains = %gains,
            "lock paid out"
        );
        self.events.emit(&LedgerEvent::Unlocked {
            user: account.clone(),
            initial_stake: lock.amount,
            rewards: gains,
        });
        Ok(UnlockReceipt {
            initial_stake: lock.amount,
            principal,
            gains,
        })
    }

    // ── Reward ledger ────────────────────────────────────────────────────

    /// Admin-only batch reward distribution.
    ///
    /// For each `(address, value)` pair the withholding share stays in the
    /// reserve and the remainder becomes claimable. The batch is atomic:
    /// any malformed entry fails the whole call before state is touched.
    /// The gross values are newly created and pooled in the reserve, which
    /// later funds the claims. Returns the total claimable amount credited.
    pub fn share_reward(
        &mut self,
        caller: &AccountAddress,
        addresses: &[AccountAddress],
        values: &[Amount],
    ) -> Result<Amount, LedgerError> {
        if *caller != self.state.admin {
            return Err(LedgerError::Unauthorized);
        }
        if addresses.len() != values.len() {
            return Err(LedgerError::LengthMismatch {
                addresses: addresses.len(),
                values: values.len(),
            });
        }

        // Stage the full batch with checked arithmetic before committing.
        let mut staged: HashMap<AccountAddress, Amount> = HashMap::new();
        let mut reserve_after = self.contract_balance();
        let mut supply_after = self.state.total_supply;
        let mut total_credited = Amount::ZERO;
        for (address, value) in addresses.iter().zip(values) {
            let withheld = value
                .mul_bps(self.params.reward_withhold_bps)
                .ok_or(LedgerError::ArithmeticOverflow)?;
            let credited = value
                .checked_sub(withheld)
                .ok_or(LedgerError::ArithmeticOverflow)?;
            let current = staged
                .get(address)
                .copied()
                .unwrap_or_else(|| self.check_rewards(address));
            let next = current
                .checked_add(credited)
                .ok_or(LedgerError::ArithmeticOverflow)?;
            staged.insert(address.clone(), next);
            reserve_after = reserve_after
                .checked_add(*value)
                .ok_or(LedgerError::ArithmeticOverflow)?;
            supply_after = supply_after
                .checked_add(*value)
                .ok_or(LedgerError::ArithmeticOverflow)?;
            total_credited = total_credited
                .checked_add(credited)
                .ok_or(LedgerError::ArithmeticOverflow)?;
        }

        let recipients = staged.len();
        let reserve = self.state.reserve.clone();
        self.state.balances.insert(reserve, reserve_after);
        self.state.total_supply = supply_after;
        self.state.rewards.extend(staged);

        tracing::debug!(
            recipients,
            total_credited = %total_credited,
            "reward batch distributed"
        );
        Ok(total_credited)
    }

    /// Pay `account`'s pending reward out of the reserve and zero it.
    ///
    /// Exact tax-free pass-through of the credited amount. A reserve that
    /// cannot cover the claim means reward accounting diverged and the
    /// operation aborts rather than paying a truncated amount.
    pub fn claim_rewards(&mut self, account: &AccountAddress) -> Result<Amount, LedgerError> {
        let pending = self.check_rewards(account);
        if pending.is_zero() {
            return Err(LedgerError::NoRewardsToClaim);
        }

        let reserve_balance = self.contract_balance();
        if reserve_balance < pending {
            tracing::error!(
                account = %account,
                pending = %pending,
                reserve = %reserve_balance,
                "claim exceeds reserve, reward accounting diverged"
            );
            return Err(LedgerError::ReserveShortfall {
                needed: pending,
                available: reserve_balance,
            });
        }
        let reserve_after = reserve_balance
            .checked_sub(pending)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let account_before = if *account == self.state.reserve {
            reserve_after
        } else {
            self.state.balance_of(account)
        };
        let account_after = account_before
            .checked_add(pending)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        let reserve = self.state.reserve.clone();
        self.state.balances.insert(reserve, reserve_after);
        self.state.balances.insert(account.clone(), account_after);
        self.state.rewards.remove(account);

        tracing::debug!(account = %account, amount = %pending, "rewards claimed");
        self.events.emit(&LedgerEvent::RewardClaimed {
            user: account.clone(),
            amount: pending,
        });
        Ok(pending)
    }

    // ── Internals ────────────────────────────────────────────────────────

    /// The taxed value-movement primitive behind `transfer`, `transfer_from`
    /// and the lock deposit. Validates everything, then commits: debit the
    /// gross from `from`, credit the net to `to`, shrink the supply by the
    /// burn. Does not emit events.
    fn taxed_transfer(
        &mut self,
        from: &AccountAddress,
        to: &AccountAddress,
        amount: Amount,
    ) -> Result<TransferBreakdown, LedgerError> {
        let available = self.state.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        let burned = amount
            .mul_bps(self.params.transfer_burn_bps)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let net = amount
            .checked_sub(burned)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let from_after = available
            .checked_sub(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        // Self-transfer still burns: read the post-debit balance.
        let to_before = if to == from {
            from_after
        } else {
            self.state.balance_of(to)
        };
        let to_after = to_before
            .checked_add(net)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let supply_after = self
            .state
            .total_supply
            .checked_sub(burned)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        self.state.balances.insert(from.clone(), from_after);
        self.state.balances.insert(to.clone(), to_after);
        self.state.total_supply = supply_after;
        Ok(TransferBreakdown { burned, net })
    }
}
