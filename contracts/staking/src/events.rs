#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the reward schedule is fixed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub reward_amount: i128,
    pub reward_rate: i128,
    pub start: u64,
    pub period_finish: u64,
    pub unlock_horizon: u64,
    pub timestamp: u64,
}

/// Fired when principal is staked. `funder` differs from `staker` only for
/// `stake_as`.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub funder: Address,
    pub staker: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a user opens a claim round.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub staker: Address,
    pub round_index: u32,
    pub amount: i128,
    pub penalty_amount: i128,
    pub net_amount: i128,
    pub release_timestamp: u64,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a released round is paid out.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensClaimedEvent {
    pub staker: Address,
    pub round_index: u32,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaidEvent {
    pub staker: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when collected flat fees are swept to the treasury.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesTransferredEvent {
    pub manager: Address,
    pub treasury: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    reward_amount: i128,
    reward_rate: i128,
    start: u64,
    period_finish: u64,
    unlock_horizon: u64,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            reward_amount,
            reward_rate,
            start,
            period_finish,
            unlock_horizon,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    funder: Address,
    staker: Address,
    amount: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            funder,
            staker,
            amount,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked(env: &Env, event: UnstakedEvent) {
    env.events()
        .publish((symbol_short!("UNSTAKED"), event.staker.clone()), event);
}

pub fn publish_tokens_claimed(env: &Env, staker: Address, round_index: u32, amount: i128) {
    env.events().publish(
        (symbol_short!("CLAIMED"), staker.clone()),
        TokensClaimedEvent {
            staker,
            round_index,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_paid(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("RWD_PAID"), staker.clone()),
        RewardPaidEvent {
            staker,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_fees_transferred(env: &Env, manager: Address, treasury: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("FEES_OUT"),),
        FeesTransferredEvent {
            manager,
            treasury,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
