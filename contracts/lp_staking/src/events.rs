#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub reward_amount: i128,
    pub reward_rate: i128,
    pub start: u64,
    pub period_finish: u64,
    pub unlock_horizon: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityEvent {
    pub staker: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired on every non-zero reward claim.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardSplitEvent {
    pub staker: Address,
    /// Paid straight to the staker.
    pub direct: i128,
    /// Staked into the base pool for the staker.
    pub restaked: i128,
    pub staking_pool: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesTransferredEvent {
    pub manager: Address,
    pub treasury: Address,
    pub amount: i128,
}

pub fn publish_initialized(env: &Env, event: InitializedEvent) {
    env.events().publish((symbol_short!("INIT"),), event);
}

pub fn publish_staked(env: &Env, staker: Address, amount: i128, new_total_staked: i128) {
    env.events().publish(
        (symbol_short!("LP_STAKE"), staker.clone()),
        LiquidityEvent {
            staker,
            amount,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, staker: Address, amount: i128, new_total_staked: i128) {
    env.events().publish(
        (symbol_short!("LP_WDRAW"), staker.clone()),
        LiquidityEvent {
            staker,
            amount,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_split(
    env: &Env,
    staker: Address,
    direct: i128,
    restaked: i128,
    staking_pool: Address,
) {
    env.events().publish(
        (symbol_short!("RWD_SPLIT"), staker.clone()),
        RewardSplitEvent {
            staker,
            direct,
            restaked,
            staking_pool,
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
        },
    );
}
