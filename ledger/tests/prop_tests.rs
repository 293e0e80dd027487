use proptest::prelude::*;

use crank_ledger::{GenesisConfig, LedgerEngine};
use crank_types::{AccountAddress, Amount, Timestamp};

fn addr(name: &str) -> AccountAddress {
    AccountAddress::new(format!("ckn_{name}"))
}

proptest! {
    /// Transfer accounting is exact for arbitrary amounts within balance:
    /// the sender loses the gross, the recipient gains the net, and the
    /// supply shrinks by exactly the burn.
    #[test]
    fn transfer_accounting_is_exact(raw in 1u128..=10_000_000_000_000_000_000_000u128) {
        let deployer = addr("deployer");
        let user = addr("user1");
        let mut engine = LedgerEngine::genesis(GenesisConfig::new(deployer.clone()));

        let amount = Amount::new(raw);
        let supply_before = engine.total_supply();
        let sender_before = engine.balance_of(&deployer);
        engine.transfer(&deployer, &user, amount).unwrap();

        let burned = amount.mul_bps(engine.params().transfer_burn_bps).unwrap();
        let net = amount.checked_sub(burned).unwrap();
        prop_assert_eq!(engine.balance_of(&deployer), sender_before.checked_sub(amount).unwrap());
        prop_assert_eq!(engine.balance_of(&user), net);
        prop_assert_eq!(engine.total_supply(), supply_before.checked_sub(burned).unwrap());
        prop_assert!(engine.state().verify_conservation());
    }

    /// A lock/unlock round trip returns total_locked and the reserve to
    /// their pre-lock values and credits exactly net + gains.
    #[test]
    fn lock_roundtrip_restores_aggregates(raw in 1u128..=9_000_000_000_000_000_000_000u128) {
        let deployer = addr("deployer");
        let mut engine = LedgerEngine::genesis(GenesisConfig::new(deployer.clone()));

        let gross = Amount::new(raw);
        let locked_at = Timestamp::new(1);
        engine.lock(&deployer, gross, locked_at).unwrap();
        let receipt = engine
            .unlock(&deployer, locked_at.add_secs(engine.params().lock_duration_secs))
            .unwrap();

        let burn = gross.mul_bps(engine.params().transfer_burn_bps).unwrap();
        prop_assert_eq!(receipt.principal, gross.checked_sub(burn).unwrap());
        prop_assert_eq!(receipt.gains, gross.mul_bps(engine.params().lock_gain_bps).unwrap());
        prop_assert_eq!(engine.total_locked(), Amount::ZERO);
        prop_assert_eq!(engine.contract_balance(), Amount::ZERO);
        prop_assert!(engine.state().verify_conservation());
        prop_assert!(engine.state().verify_locked_aggregate());
    }

    /// Reward distribution is linear: crediting in one batch equals
    /// crediting the same values across separate calls.
    #[test]
    fn reward_distribution_is_linear(
        a in 0u128..=1_000_000_000_000_000_000_000u128,
        b in 0u128..=1_000_000_000_000_000_000_000u128,
    ) {
        let deployer = addr("deployer");
        let user = addr("user1");

        let mut batched = LedgerEngine::genesis(GenesisConfig::new(deployer.clone()));
        batched
            .share_reward(
                &deployer,
                &[user.clone(), user.clone()],
                &[Amount::new(a), Amount::new(b)],
            )
            .unwrap();

        let mut split = LedgerEngine::genesis(GenesisConfig::new(deployer.clone()));
        split.share_reward(&deployer, &[user.clone()], &[Amount::new(a)]).unwrap();
        split.share_reward(&deployer, &[user.clone()], &[Amount::new(b)]).unwrap();

        prop_assert_eq!(batched.check_rewards(&user), split.check_rewards(&user));
        prop_assert_eq!(batched.contract_balance(), split.contract_balance());
    }
}
