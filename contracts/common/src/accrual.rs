//! Reward-per-token ledger.
//!
//! A fixed reward stream (`reward_rate` units per second between the
//! schedule start and `period_finish`) is distributed pro rata over the
//! active stake without iterating users. The global index
//! `reward_per_token_stored` is scaled by [`PRECISION`] and only ever moves
//! forward through [`checkpoint`].
//!
//! All divisions truncate. The dust left behind by truncation stays in the
//! pool's custody and is never redistributed.

use soroban_sdk::{contracttype, panic_with_error, symbol_short, Address, Env, Symbol, U256};

use crate::{CommonError, TTL_EXTEND_TO, TTL_THRESHOLD};

/// Fixed-point scale of the reward index (1e18).
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

const REWARD_STATE: Symbol = symbol_short!("RWD_ST");
const USER_REWARD: Symbol = symbol_short!("USR_RWD");

// ── State ────────────────────────────────────────────────────────────────────

/// Pool-wide accrual state.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RewardState {
    /// Reward units emitted per second.
    pub reward_rate: i128,
    /// Accumulated reward per staked unit, scaled by [`PRECISION`].
    pub reward_per_token_stored: i128,
    pub last_update_time: u64,
    pub period_finish: u64,
    pub total_staked: i128,
}

/// Per-user accrual snapshot.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserRewardState {
    pub staked: i128,
    /// Value of the global index at the user's last checkpoint.
    pub reward_per_token_paid: i128,
    /// Rewards flushed at checkpoints and not yet paid out.
    pub rewards: i128,
}

fn user_key(user: &Address) -> (Symbol, Address) {
    (USER_REWARD, user.clone())
}

pub fn load(env: &Env) -> RewardState {
    env.storage()
        .instance()
        .get(&REWARD_STATE)
        .unwrap_or_default()
}

fn store(env: &Env, state: &RewardState) {
    env.storage().instance().set(&REWARD_STATE, state);
}

pub fn load_user(env: &Env, user: &Address) -> UserRewardState {
    env.storage()
        .persistent()
        .get(&user_key(user))
        .unwrap_or_default()
}

fn store_user(env: &Env, user: &Address, state: &UserRewardState) {
    let key = user_key(user);
    env.storage().persistent().set(&key, state);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Fixed-point math ─────────────────────────────────────────────────────────

/// `a × b / denominator`, truncated, with a 256-bit intermediate product.
///
/// Aborts the invocation on negative operands, a non-positive divisor, or a
/// quotient that does not fit in `i128`.
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> i128 {
    if a < 0 || b < 0 || denominator <= 0 {
        panic_with_error!(env, CommonError::InvalidOperand);
    }
    let product = U256::from_u128(env, a as u128).mul(&U256::from_u128(env, b as u128));
    let quotient = product.div(&U256::from_u128(env, denominator as u128));
    match quotient.to_u128() {
        Some(value) if value <= i128::MAX as u128 => value as i128,
        _ => panic_with_error!(env, CommonError::MathOverflow),
    }
}

fn checked_add(env: &Env, a: i128, b: i128) -> i128 {
    match a.checked_add(b) {
        Some(sum) => sum,
        None => panic_with_error!(env, CommonError::MathOverflow),
    }
}

// ── Reads ────────────────────────────────────────────────────────────────────

/// Rewards stop accruing at `period_finish`.
pub fn last_time_reward_applicable(state: &RewardState, now: u64) -> u64 {
    now.min(state.period_finish)
}

/// Current value of the global index, computed without writing it back.
///
/// Nothing accrues while nobody is staked or before `last_update_time`
/// (which is the schedule start until the first checkpoint after it).
pub fn reward_per_token(env: &Env, state: &RewardState, now: u64) -> i128 {
    let applicable = last_time_reward_applicable(state, now);
    if state.total_staked <= 0 || applicable <= state.last_update_time {
        return state.reward_per_token_stored;
    }
    let elapsed = (applicable - state.last_update_time) as i128;
    let emitted = mul_div(env, state.reward_rate, elapsed, 1);
    let increment = mul_div(env, emitted, PRECISION, state.total_staked);
    checked_add(env, state.reward_per_token_stored, increment)
}

fn earned_at(env: &Env, reward_per_token: i128, user: &UserRewardState) -> i128 {
    let delta = reward_per_token - user.reward_per_token_paid;
    let pending = mul_div(env, user.staked, delta, PRECISION);
    checked_add(env, pending, user.rewards)
}

/// Rewards `user` could claim right now.
pub fn earned(env: &Env, user: &Address) -> i128 {
    let state = load(env);
    let current = reward_per_token(env, &state, env.ledger().timestamp());
    earned_at(env, current, &load_user(env, user))
}

pub fn balance_of(env: &Env, user: &Address) -> i128 {
    load_user(env, user).staked
}

// ── Mutations ────────────────────────────────────────────────────────────────

/// Opens the reward period. Called exactly once, by the schedule gate's
/// owner, before any stake exists.
pub fn start_period(env: &Env, reward_rate: i128, start: u64, period_finish: u64) {
    let mut state = load(env);
    state.reward_rate = reward_rate;
    state.last_update_time = start;
    state.period_finish = period_finish;
    store(env, &state);
}

/// Moves the global index up to `min(now, period_finish)` and, when a
/// subject is given, flushes that user's pending rewards into their
/// snapshot.
///
/// Every mutating pool operation calls this before touching balances.
pub fn checkpoint(env: &Env, user: Option<&Address>) -> RewardState {
    let now = env.ledger().timestamp();
    let mut state = load(env);

    state.reward_per_token_stored = reward_per_token(env, &state, now);
    let applicable = last_time_reward_applicable(&state, now);
    if applicable > state.last_update_time {
        state.last_update_time = applicable;
    }
    store(env, &state);

    if let Some(user) = user {
        let mut snapshot = load_user(env, user);
        snapshot.rewards = earned_at(env, state.reward_per_token_stored, &snapshot);
        snapshot.reward_per_token_paid = state.reward_per_token_stored;
        store_user(env, user, &snapshot);
    }

    state
}

/// Credits `amount` of stake to `user`. Returns the new pool total.
///
/// The caller must have checkpointed `user` first.
pub fn increase_stake(env: &Env, user: &Address, amount: i128) -> i128 {
    let mut snapshot = load_user(env, user);
    snapshot.staked = checked_add(env, snapshot.staked, amount);
    store_user(env, user, &snapshot);

    let mut state = load(env);
    state.total_staked = checked_add(env, state.total_staked, amount);
    store(env, &state);
    state.total_staked
}

/// Debits `amount` of stake from `user`. Returns the new pool total, or
/// `None` (with nothing written) when the user's stake is short.
///
/// The caller must have checkpointed `user` first.
pub fn decrease_stake(env: &Env, user: &Address, amount: i128) -> Option<i128> {
    let mut snapshot = load_user(env, user);
    if amount < 0 || snapshot.staked < amount {
        return None;
    }
    snapshot.staked -= amount;
    store_user(env, user, &snapshot);

    let mut state = load(env);
    state.total_staked -= amount;
    store(env, &state);
    Some(state.total_staked)
}

/// Zeroes and returns the user's flushed rewards.
///
/// The caller must have checkpointed `user` first.
pub fn take_rewards(env: &Env, user: &Address) -> i128 {
    let mut snapshot = load_user(env, user);
    let amount = snapshot.rewards;
    if amount != 0 {
        snapshot.rewards = 0;
        store_user(env, user, &snapshot);
    }
    amount
}
