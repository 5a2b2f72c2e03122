#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based state machine tests for the staking ledger.
//!
//! Random sequences of stakes, unstakes, reward claims, round withdrawals and
//! clock advances are replayed against a fresh pool.
//!
//! Invariants tested after every step:
//! - `total_supply` equals the sum of user stakes and the escrow supply
//! - every user's escrow balance equals their stake
//! - `reward_per_token` never decreases
//! - the pool always holds enough principal for stakes and unclaimed rounds

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::Address;

use crate::fixture::{pool, Pool, DURATION, FEES, ONE};

const USERS: usize = 3;

#[derive(Clone, Debug, Arbitrary)]
enum Action {
    Stake {
        #[proptest(strategy = "0usize..USERS")]
        user: usize,
        #[proptest(strategy = "1i128..1_000")]
        amount: i128,
    },
    Unstake {
        #[proptest(strategy = "0usize..USERS")]
        user: usize,
        /// Share of the user's stake, in percent.
        #[proptest(strategy = "1i128..=100")]
        percent: i128,
        #[proptest(strategy = "0u64..(80 * 86_400)")]
        delay: u64,
    },
    GetReward {
        #[proptest(strategy = "0usize..USERS")]
        user: usize,
    },
    WithdrawRounds {
        #[proptest(strategy = "0usize..USERS")]
        user: usize,
    },
    Advance {
        #[proptest(strategy = "0u64..(DURATION / 10)")]
        seconds: u64,
    },
}

/// Sum of net amounts in rounds that are not yet claimed.
fn pending_rounds(pool: &Pool, users: &[Address]) -> i128 {
    let mut pending = 0;
    for user in users {
        for index in 0..pool.client.user_tokens_to_claim_counter(user) {
            let round = pool.client.user_tokens_to_claim(user, &index);
            if !round.claimed {
                pending += round.net_amount;
            }
        }
    }
    pending
}

/// Sum of penalties over every round ever opened.
fn penalties(pool: &Pool, users: &[Address]) -> i128 {
    let mut total = 0;
    for user in users {
        for index in 0..pool.client.user_tokens_to_claim_counter(user) {
            total += pool.client.user_tokens_to_claim(user, &index).penalty_amount;
        }
    }
    total
}

fn apply(pool: &Pool, users: &[Address], action: &Action) {
    match *action {
        Action::Stake { user, amount } => {
            pool.client.stake(&users[user], &(amount * ONE));
        }
        Action::Unstake {
            user,
            percent,
            delay,
        } => {
            let staked = pool.client.balance_of(&users[user]);
            let amount = staked * percent / 100;
            if amount > 0 {
                pool.escrow
                    .approve(&users[user], &pool.client.address, &amount);
                pool.client.unstake(&users[user], &amount, &delay, &FEES);
            }
        }
        Action::GetReward { user } => {
            pool.client.get_reward(&users[user], &FEES);
        }
        Action::WithdrawRounds { user } => {
            let now = pool.env.ledger().timestamp();
            for index in 0..pool.client.user_tokens_to_claim_counter(&users[user]) {
                let round = pool.client.user_tokens_to_claim(&users[user], &index);
                if !round.claimed && round.release_timestamp <= now {
                    pool.client
                        .withdraw_tokens_to_claim(&users[user], &index, &FEES);
                }
            }
        }
        Action::Advance { seconds } => pool.advance(seconds),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_ledger_stays_consistent(actions in prop::collection::vec(any::<Action>(), 1..25)) {
        let pool = pool();
        let users: Vec<Address> =
            (0..USERS).map(|_| pool.user(100_000 * ONE)).collect();

        let mut last_rpt = pool.client.reward_per_token();
        for action in &actions {
            apply(&pool, &users, action);

            let total = pool.client.total_supply();
            let sum: i128 = users.iter().map(|u| pool.client.balance_of(u)).sum();
            prop_assert_eq!(total, sum);
            prop_assert_eq!(pool.escrow.total_supply(), total);
            for user in &users {
                prop_assert_eq!(pool.escrow.balance(user), pool.client.balance_of(user));
            }

            let rpt = pool.client.reward_per_token();
            prop_assert!(rpt >= last_rpt);
            last_rpt = rpt;

            let held = pool.principal.balance(&pool.client.address);
            prop_assert!(held >= total + pending_rounds(&pool, &users));
        }
    }

    /// Once every reward is paid out the pool still covers all stakes and
    /// open rounds, and the treasury holds exactly the penalties.
    #[test]
    fn prop_rewards_bounded_by_budget(actions in prop::collection::vec(any::<Action>(), 1..25)) {
        let pool = pool();
        let users: Vec<Address> =
            (0..USERS).map(|_| pool.user(100_000 * ONE)).collect();

        for action in &actions {
            apply(&pool, &users, action);
        }
        pool.advance(DURATION);
        for user in &users {
            pool.client.get_reward(user, &FEES);
        }

        let held = pool.principal.balance(&pool.client.address);
        let obligations = pool.client.total_supply() + pending_rounds(&pool, &users);
        prop_assert!(held >= obligations);
        prop_assert!(pool.client.earned(&users[0]) == 0);
        prop_assert_eq!(pool.principal.balance(&pool.treasury), penalties(&pool, &users));
    }
}
