//! One-shot reward schedule gate.
//!
//! A pool starts `Uninitialized` and moves to `Active` exactly once, when its
//! administrator fixes the reward schedule. There is no way back.

use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

const PHASE: Symbol = symbol_short!("PHASE");
const SCHEDULE: Symbol = symbol_short!("SCHEDULE");

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Uninitialized,
    Active,
}

/// Parameters fixed by the single `initialize` call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schedule {
    pub reward_amount: i128,
    pub start: u64,
    pub duration: u64,
    /// Global upper bound on how long staked value can stay locked.
    pub unlock_horizon: u64,
}

pub fn phase(env: &Env) -> Phase {
    env.storage()
        .instance()
        .get(&PHASE)
        .unwrap_or(Phase::Uninitialized)
}

pub fn is_active(env: &Env) -> bool {
    phase(env) == Phase::Active
}

/// Performs the `Uninitialized → Active` transition.
///
/// Returns `false` and writes nothing if the gate is already `Active`.
pub fn activate(env: &Env, schedule: &Schedule) -> bool {
    if is_active(env) {
        return false;
    }
    env.storage().instance().set(&SCHEDULE, schedule);
    env.storage().instance().set(&PHASE, &Phase::Active);
    true
}

pub fn load(env: &Env) -> Option<Schedule> {
    env.storage().instance().get(&SCHEDULE)
}

/// `0` until the schedule is set.
pub fn unlock_horizon(env: &Env) -> u64 {
    load(env).map(|s| s.unlock_horizon).unwrap_or(0)
}
